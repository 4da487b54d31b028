//! Face mode state machine
//!
//! The face is either showing the time or editing one settings page.
//! Everything that depends on the fitted glass (how many pages there are,
//! which field a page edits) is decided here and nowhere else.

use meridian_display::LcdType;
use meridian_hal::EventKind;

/// Face modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceMode {
    /// Showing the time in the selected zone
    Display,
    /// Editing settings page `1..=last_page`
    Settings(u8),
}

/// Setting edited on a settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditField {
    /// Label character 0, 1 or 2
    LabelChar(u8),
    /// Zone selection
    Timezone,
}

/// Last settings page for the fitted glass
///
/// The classic LCD has no third label character, so it skips that page.
pub const fn last_page(lcd: LcdType) -> u8 {
    match lcd {
        LcdType::Classic => 3,
        LcdType::Custom => 4,
    }
}

impl EditField {
    /// Field edited on `page`, if `page` exists on this glass
    pub const fn for_page(page: u8, lcd: LcdType) -> Option<Self> {
        match (page, lcd) {
            (1, _) => Some(EditField::LabelChar(0)),
            (2, _) => Some(EditField::LabelChar(1)),
            (3, LcdType::Custom) => Some(EditField::LabelChar(2)),
            (3, LcdType::Classic) | (4, LcdType::Custom) => Some(EditField::Timezone),
            _ => None,
        }
    }
}

impl FaceMode {
    /// Mode for a raw screen number (0 = display)
    pub const fn from_screen(screen: u8) -> Self {
        match screen {
            0 => FaceMode::Display,
            page => FaceMode::Settings(page),
        }
    }

    /// Raw screen number (0 = display, pages from 1)
    pub const fn screen(self) -> u8 {
        match self {
            FaceMode::Display => 0,
            FaceMode::Settings(page) => page,
        }
    }

    pub const fn is_settings(self) -> bool {
        matches!(self, FaceMode::Settings(_))
    }

    /// Field edited in this mode
    pub const fn edit_field(self, lcd: LcdType) -> Option<EditField> {
        match self {
            FaceMode::Display => None,
            FaceMode::Settings(page) => EditField::for_page(page, lcd),
        }
    }

    /// Process an event and return the next mode
    ///
    /// Only the alarm long press (enter settings) and the light button
    /// (next page, rolling over to display) change the mode. Leaving via
    /// the mode button or a timeout switches faces instead; the next
    /// activation resets the mode.
    pub const fn transition(self, event: EventKind, lcd: LcdType) -> Self {
        match (self, event) {
            (FaceMode::Display, EventKind::AlarmLongPress) => FaceMode::Settings(1),
            (FaceMode::Settings(page), EventKind::LightButtonDown) => {
                if page >= last_page(lcd) {
                    FaceMode::Display
                } else {
                    FaceMode::Settings(page + 1)
                }
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_settings() {
        for lcd in [LcdType::Classic, LcdType::Custom] {
            assert_eq!(
                FaceMode::Display.transition(EventKind::AlarmLongPress, lcd),
                FaceMode::Settings(1)
            );
        }
    }

    #[test]
    fn test_classic_page_cycle() {
        let lcd = LcdType::Classic;
        let mut mode = FaceMode::Settings(1);
        let mut visited = [0u8; 4];
        for slot in visited.iter_mut() {
            *slot = mode.screen();
            mode = mode.transition(EventKind::LightButtonDown, lcd);
        }
        assert_eq!(visited, [1, 2, 3, 0]);
    }

    #[test]
    fn test_custom_page_cycle() {
        let lcd = LcdType::Custom;
        let mut mode = FaceMode::Settings(1);
        let mut visited = [0u8; 5];
        for slot in visited.iter_mut() {
            *slot = mode.screen();
            mode = mode.transition(EventKind::LightButtonDown, lcd);
        }
        assert_eq!(visited, [1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_other_events_keep_mode() {
        let lcd = LcdType::Custom;
        assert_eq!(
            FaceMode::Display.transition(EventKind::LightButtonDown, lcd),
            FaceMode::Display
        );
        assert_eq!(
            FaceMode::Settings(2).transition(EventKind::AlarmButtonDown, lcd),
            FaceMode::Settings(2)
        );
        assert_eq!(
            FaceMode::Settings(2).transition(EventKind::Timeout, lcd),
            FaceMode::Settings(2)
        );
        assert_eq!(
            FaceMode::Settings(2).transition(EventKind::AlarmLongPress, lcd),
            FaceMode::Settings(2)
        );
    }

    #[test]
    fn test_page_fields_classic() {
        let lcd = LcdType::Classic;
        assert_eq!(EditField::for_page(1, lcd), Some(EditField::LabelChar(0)));
        assert_eq!(EditField::for_page(2, lcd), Some(EditField::LabelChar(1)));
        assert_eq!(EditField::for_page(3, lcd), Some(EditField::Timezone));
        assert_eq!(EditField::for_page(4, lcd), None);
    }

    #[test]
    fn test_page_fields_custom() {
        let lcd = LcdType::Custom;
        assert_eq!(EditField::for_page(1, lcd), Some(EditField::LabelChar(0)));
        assert_eq!(EditField::for_page(2, lcd), Some(EditField::LabelChar(1)));
        assert_eq!(EditField::for_page(3, lcd), Some(EditField::LabelChar(2)));
        assert_eq!(EditField::for_page(4, lcd), Some(EditField::Timezone));
        assert_eq!(EditField::for_page(0, lcd), None);
    }

    #[test]
    fn test_screen_roundtrip() {
        for screen in 0..=4 {
            assert_eq!(FaceMode::from_screen(screen).screen(), screen);
        }
        assert!(!FaceMode::Display.is_settings());
        assert!(FaceMode::Settings(1).is_settings());
        assert_eq!(FaceMode::Display.edit_field(LcdType::Custom), None);
    }
}
