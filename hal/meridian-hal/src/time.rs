//! Bit-packed date and time
//!
//! The host clock hands out the current time as a single `u32`. Fields are
//! packed LSB first, so shifting right by a field's offset drops every finer
//! field. Faces compare shifted values to find out which fields changed.
//!
//! | Field  | Bits  | Range                |
//! |--------|-------|----------------------|
//! | second | 0-5   | 0-59                 |
//! | minute | 6-11  | 0-59                 |
//! | hour   | 12-16 | 0-23                 |
//! | day    | 17-21 | 1-31                 |
//! | month  | 22-25 | 1-12                 |
//! | year   | 26-31 | 0-63 (offset 2020)   |

/// Bit offset of the minute field
pub const MINUTE_SHIFT: u32 = 6;
/// Bit offset of the hour field
pub const HOUR_SHIFT: u32 = 12;
/// Bit offset of the day field
pub const DAY_SHIFT: u32 = 17;
/// Bit offset of the month field
pub const MONTH_SHIFT: u32 = 22;
/// Bit offset of the year field
pub const YEAR_SHIFT: u32 = 26;

/// First year representable by the year field
pub const YEAR_BASE: u16 = 2020;

/// Packed calendar date and time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime(u32);

impl DateTime {
    /// All-ones value; no valid date packs to it
    pub const SENTINEL: DateTime = DateTime(u32::MAX);

    /// Wrap a raw register value
    pub const fn from_reg(reg: u32) -> Self {
        Self(reg)
    }

    /// Pack calendar fields
    ///
    /// Fields are masked to their bit width; `year` is the full year
    /// (e.g. 2024).
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let year = year.saturating_sub(YEAR_BASE) as u32 & 0x3F;
        Self(
            (second as u32 & 0x3F)
                | (minute as u32 & 0x3F) << MINUTE_SHIFT
                | (hour as u32 & 0x1F) << HOUR_SHIFT
                | (day as u32 & 0x1F) << DAY_SHIFT
                | (month as u32 & 0x0F) << MONTH_SHIFT
                | year << YEAR_SHIFT,
        )
    }

    /// Raw register value
    pub const fn reg(self) -> u32 {
        self.0
    }

    pub const fn second(self) -> u8 {
        (self.0 & 0x3F) as u8
    }

    pub const fn minute(self) -> u8 {
        ((self.0 >> MINUTE_SHIFT) & 0x3F) as u8
    }

    pub const fn hour(self) -> u8 {
        ((self.0 >> HOUR_SHIFT) & 0x1F) as u8
    }

    pub const fn day(self) -> u8 {
        ((self.0 >> DAY_SHIFT) & 0x1F) as u8
    }

    pub const fn month(self) -> u8 {
        ((self.0 >> MONTH_SHIFT) & 0x0F) as u8
    }

    pub const fn year(self) -> u16 {
        (self.0 >> YEAR_SHIFT) as u16 + YEAR_BASE
    }

    /// Check if everything coarser than seconds matches `other`
    pub const fn same_minute(self, other: DateTime) -> bool {
        self.0 >> MINUTE_SHIFT == other.0 >> MINUTE_SHIFT
    }

    /// Check if everything coarser than minutes matches `other`
    pub const fn same_hour(self, other: DateTime) -> bool {
        self.0 >> HOUR_SHIFT == other.0 >> HOUR_SHIFT
    }
}
