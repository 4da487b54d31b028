//! Segment display trait
//!
//! Defines the interface for the watch's segment LCD. Two glass variants
//! exist: the classic LCD, whose character positions have a limited
//! segment layout, and the custom LCD, which renders a wider glyph set
//! and has an extra character position.

/// Physical LCD variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdType {
    /// Original glass; only position 0 renders the full glyph set
    Classic,
    /// Custom glass; every position renders the full glyph set
    Custom,
}

impl LcdType {
    /// Check if every position can render the extended glyph set
    pub const fn is_rich(self) -> bool {
        matches!(self, LcdType::Custom)
    }

    /// Number of addressable character positions
    pub const fn positions(self) -> u8 {
        match self {
            LcdType::Classic => 10,
            LcdType::Custom => 11,
        }
    }
}

/// Named text regions on the display
///
/// Each region starts at a fixed character position. [`Position::Full`]
/// covers the whole display starting at position 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    /// Every position, starting at 0
    Full,
    /// Positions 0-1 (weekday / face label)
    TopLeft,
    /// Positions 2-3 (day of month)
    TopRight,
    /// Positions 4-5
    Hours,
    /// Positions 6-7
    Minutes,
    /// Positions 8-9
    Seconds,
}

impl Position {
    /// First character position of the region
    pub const fn start(self) -> u8 {
        match self {
            Position::Full | Position::TopLeft => 0,
            Position::TopRight => 2,
            Position::Hours => 4,
            Position::Minutes => 6,
            Position::Seconds => 8,
        }
    }

    /// Number of characters in the region
    pub const fn width(self) -> u8 {
        match self {
            Position::Full => 11,
            _ => 2,
        }
    }
}

/// Indicator segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Indicator {
    Signal = 0,
    Bell = 1,
    Pm = 2,
    H24 = 3,
    Lap = 4,
    /// Hours/minutes separator
    Colon = 5,
}

impl Indicator {
    /// Bit for this indicator in a packed indicator mask
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Segment display trait
///
/// Provides a hardware-agnostic interface for driving the watch LCD.
/// Writes are fire-and-forget; the LCD controller has no failure path
/// the face could act on.
pub trait SegmentDisplay {
    /// Which glass is fitted
    fn lcd_type(&self) -> LcdType;

    /// Draw one character at a position
    ///
    /// Positions the glass does not have are ignored.
    fn display_character(&mut self, character: u8, position: u8);

    /// Draw one seconds character using the low-power update path
    ///
    /// Only valid for the seconds positions (8 and 9).
    fn display_character_lp_seconds(&mut self, character: u8, position: u8);

    /// Draw text into a region, one character per position
    ///
    /// Text longer than the remaining positions is truncated.
    fn display_text(&mut self, position: Position, text: &str);

    /// Turn an indicator segment on
    fn set_indicator(&mut self, indicator: Indicator);

    /// Turn an indicator segment off
    fn clear_indicator(&mut self, indicator: Indicator);

    /// Check if the low-power sleep animation is running
    fn sleep_animation_is_running(&self) -> bool;

    /// Start the low-power sleep animation
    fn start_sleep_animation(&mut self, interval_ms: u16);

    /// Stop the low-power sleep animation
    fn stop_sleep_animation(&mut self);

    /// Blink an indicator if the glass supports blinking it
    fn start_indicator_blink_if_possible(&mut self, indicator: Indicator, interval_ms: u16);

    /// Stop any running blink
    fn stop_blink(&mut self);

    /// Turn the colon on
    fn set_colon(&mut self) {
        self.set_indicator(Indicator::Colon);
    }

    /// Turn the colon off
    fn clear_colon(&mut self) {
        self.clear_indicator(Indicator::Colon);
    }
}
