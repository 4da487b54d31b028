//! Face configuration
//!
//! Tunables for the world clock face. The defaults match the stock
//! firmware; a board can override them when building its face list.

use serde::{Deserialize, Serialize};

/// World clock face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    /// Tick rate in display mode (Hz)
    pub display_tick_hz: u8,
    /// Tick rate in settings mode, fast enough for the edit blink (Hz)
    pub settings_tick_hz: u8,
    /// Sleep animation and colon blink interval in low energy mode (ms)
    pub sleep_animation_ms: u16,
    /// Refresh the cached UTC offset on minutes divisible by this
    pub offset_refresh_minutes: u8,
    /// Face the host returns to on an idle timeout in settings
    pub timeout_face_index: u8,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            display_tick_hz: 1,
            settings_tick_hz: 4,
            sleep_animation_ms: 500,
            offset_refresh_minutes: 15,
            timeout_face_index: 0,
        }
    }
}

impl FaceConfig {
    /// Check if the offset should be refreshed at this minute
    pub fn is_offset_refresh_minute(&self, minute: u8) -> bool {
        self.offset_refresh_minutes != 0 && minute % self.offset_refresh_minutes == 0
    }
}
