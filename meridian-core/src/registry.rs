//! World clock instance numbering
//!
//! A watch may carry several world clock faces at once. Each one gets a
//! small index, in construction order, that namespaces its settings file.

use core::fmt::Write;

use meridian_hal::FileName;

/// Index of one world clock instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockIndex(u8);

impl ClockIndex {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Settings filename for this instance, e.g. `wclk_002.u32`
    pub fn filename(self) -> FileName {
        let mut name = FileName::new();
        // "wclk_" + three digits + ".u32" is exactly MAX_FILENAME_LEN
        let _ = write!(name, "wclk_{:03}.u32", self.0);
        name
    }
}

/// Hands out clock indices in construction order
///
/// Owned by whatever builds the face list; indices are never reused.
#[derive(Debug, Default)]
pub struct ClockIndexAllocator {
    next: u8,
}

impl ClockIndexAllocator {
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Take the next index
    pub fn allocate(&mut self) -> ClockIndex {
        let index = ClockIndex(self.next);
        self.next = self.next.saturating_add(1);
        index
    }

    /// Number of indices handed out so far
    pub const fn allocated(&self) -> u8 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_order() {
        let mut allocator = ClockIndexAllocator::new();
        assert_eq!(allocator.allocate(), ClockIndex::new(0));
        assert_eq!(allocator.allocate(), ClockIndex::new(1));
        assert_eq!(allocator.allocate(), ClockIndex::new(2));
        assert_eq!(allocator.allocated(), 3);
    }

    #[test]
    fn test_filename() {
        assert_eq!(ClockIndex::new(0).filename().as_str(), "wclk_000.u32");
        assert_eq!(ClockIndex::new(2).filename().as_str(), "wclk_002.u32");
        assert_eq!(ClockIndex::new(255).filename().as_str(), "wclk_255.u32");
    }
}
