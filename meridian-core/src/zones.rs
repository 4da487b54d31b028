//! Built-in zone table
//!
//! A fixed list of zones with their standard UTC offsets, for hosts that
//! do not bring their own resolver. Offsets ignore daylight saving time.

use meridian_hal::ZoneResolver;

/// A named zone with its standard offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    /// Display name, at most six characters
    pub name: &'static str,
    /// Standard offset from UTC in seconds
    pub offset_s: i32,
}

const fn zone(name: &'static str, offset_minutes: i32) -> Zone {
    Zone {
        name,
        offset_s: offset_minutes * 60,
    }
}

/// Index of UTC in [`ZONES`]
pub const UTC_ZONE: u8 = 0;

/// Zone table, ordered roughly east from UTC and then west
pub const ZONES: [Zone; 31] = [
    zone("UTC", 0),
    zone("London", 0),
    zone("Paris", 60),
    zone("Berlin", 60),
    zone("Cairo", 120),
    zone("Athens", 120),
    zone("Moscow", 180),
    zone("Dubai", 240),
    zone("Karach", 300),
    zone("Delhi", 330),
    zone("Kathmd", 345),
    zone("Dhaka", 360),
    zone("Bangkk", 420),
    zone("Shangh", 480),
    zone("Tokyo", 540),
    zone("Adelad", 570),
    zone("Sydney", 600),
    zone("Noumea", 660),
    zone("Auckld", 720),
    zone("Azores", -60),
    zone("Noronh", -120),
    zone("SaoPlo", -180),
    zone("StJohn", -210),
    zone("Halifx", -240),
    zone("NewYrk", -300),
    zone("Chicgo", -360),
    zone("Denver", -420),
    zone("LosAng", -480),
    zone("Anchrg", -540),
    zone("Honolu", -600),
    zone("PagoPg", -660),
];

/// Number of zones in [`ZONES`]
pub const NUM_ZONES: u8 = ZONES.len() as u8;

/// [`ZoneResolver`] over the built-in table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticZoneTable;

impl ZoneResolver for StaticZoneTable {
    fn zone_count(&self) -> u8 {
        NUM_ZONES
    }

    fn utc_zone(&self) -> u8 {
        UTC_ZONE
    }

    fn offset_for_zone(&self, zone: u8) -> i32 {
        ZONES.get(zone as usize).map_or(0, |z| z.offset_s)
    }

    fn zone_name(&self, zone: u8) -> &str {
        ZONES.get(zone as usize).map_or("", |z| z.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_fit_the_display() {
        for zone in ZONES {
            assert!(!zone.name.is_empty());
            assert!(zone.name.len() <= 6, "{} too long", zone.name);
            assert!(zone.name.is_ascii());
        }
    }

    #[test]
    fn test_utc() {
        let table = StaticZoneTable;
        assert_eq!(table.zone_name(table.utc_zone()), "UTC");
        assert_eq!(table.offset_for_zone(table.utc_zone()), 0);
    }

    #[test]
    fn test_offsets() {
        let table = StaticZoneTable;
        assert_eq!(table.offset_for_zone(9), 5 * 3600 + 1800);
        assert_eq!(table.offset_for_zone(24), -5 * 3600);
    }

    #[test]
    fn test_out_of_range() {
        let table = StaticZoneTable;
        assert_eq!(table.zone_name(NUM_ZONES), "");
        assert_eq!(table.offset_for_zone(NUM_ZONES), 0);
    }
}
