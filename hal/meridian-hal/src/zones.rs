//! Timezone resolver contract

/// Maps a zone index to a name and its current UTC offset
///
/// Indices are ordinals into a fixed table owned by the implementation
/// and are valid in `0..zone_count()`.
pub trait ZoneResolver {
    /// Number of zones in the table
    fn zone_count(&self) -> u8;

    /// Index of the UTC zone
    fn utc_zone(&self) -> u8;

    /// Current offset from UTC in seconds
    ///
    /// Out-of-range indices resolve to offset 0.
    fn offset_for_zone(&self, zone: u8) -> i32;

    /// Short human-readable name (at most 6 characters)
    ///
    /// Out-of-range indices resolve to an empty name.
    fn zone_name(&self, zone: u8) -> &str;
}
