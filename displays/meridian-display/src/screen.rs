//! In-memory segment LCD
//!
//! Emulates the watch LCD on the host: keeps the glyph at every character
//! position, the indicator segments, and the animation/blink state, and
//! records every write call so tests can check exactly what a face drew.

use heapless::{String, Vec};

use crate::backend::{Indicator, LcdType, Position, SegmentDisplay};

/// Character positions tracked by the emulator (custom glass has 11)
pub const LCD_POSITIONS: usize = 11;

/// Write calls kept in the log before further calls are dropped
pub const WRITE_LOG_LEN: usize = 32;

/// One recorded write call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayWrite {
    /// `display_character`
    Character { position: u8, character: u8 },
    /// `display_character_lp_seconds`
    LpSeconds { position: u8, character: u8 },
    /// `display_text`
    Text {
        position: Position,
        text: String<LCD_POSITIONS>,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayWrite {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DisplayWrite::Character {
                position,
                character,
            } => defmt::write!(f, "Char({}, {=u8})", position, character),
            DisplayWrite::LpSeconds {
                position,
                character,
            } => defmt::write!(f, "LpSec({}, {=u8})", position, character),
            DisplayWrite::Text { position, text } => {
                defmt::write!(f, "Text({}, {})", position, text.as_str())
            }
        }
    }
}

/// Emulated segment LCD
#[derive(Clone)]
pub struct LcdScreen {
    lcd_type: LcdType,
    /// Glyph currently shown at each position
    glyphs: [u8; LCD_POSITIONS],
    /// Packed indicator mask (see [`Indicator::mask`])
    indicators: u8,
    /// Sleep animation interval, if running
    sleep_animation_ms: Option<u16>,
    /// Blinking indicator and interval, if any
    blink: Option<(Indicator, u16)>,
    /// Write calls since the log was last cleared
    log: Vec<DisplayWrite, WRITE_LOG_LEN>,
    /// Whether any write was dropped because the log was full
    log_overflowed: bool,
}

impl LcdScreen {
    /// Create a blank screen for the given glass
    pub fn new(lcd_type: LcdType) -> Self {
        Self {
            lcd_type,
            glyphs: [b' '; LCD_POSITIONS],
            indicators: 0,
            sleep_animation_ms: None,
            blink: None,
            log: Vec::new(),
            log_overflowed: false,
        }
    }

    /// Glyph at a position, if the glass has it
    pub fn glyph(&self, position: u8) -> Option<u8> {
        if position < self.lcd_type.positions() {
            self.glyphs.get(position as usize).copied()
        } else {
            None
        }
    }

    /// Everything on the glass as text
    ///
    /// Bytes outside printable ASCII show as `?`.
    pub fn text(&self) -> String<LCD_POSITIONS> {
        let mut text = String::new();
        for &glyph in &self.glyphs[..self.lcd_type.positions() as usize] {
            let c = if glyph.is_ascii_graphic() || glyph == b' ' {
                glyph as char
            } else {
                '?'
            };
            let _ = text.push(c);
        }
        text
    }

    /// Text shown in a region
    pub fn region(&self, position: Position) -> String<LCD_POSITIONS> {
        let text = self.text();
        let start = (position.start() as usize).min(text.len());
        let end = (start + position.width() as usize).min(text.len());
        let mut region = String::new();
        let _ = region.push_str(&text[start..end]);
        region
    }

    /// Check if an indicator segment is on
    pub fn indicator(&self, indicator: Indicator) -> bool {
        self.indicators & indicator.mask() != 0
    }

    /// Running sleep animation interval
    pub fn sleep_animation(&self) -> Option<u16> {
        self.sleep_animation_ms
    }

    /// Blinking indicator and interval
    pub fn blink(&self) -> Option<(Indicator, u16)> {
        self.blink
    }

    /// Write calls recorded since the last [`clear_writes`](Self::clear_writes)
    pub fn writes(&self) -> &[DisplayWrite] {
        &self.log
    }

    /// Check if writes were dropped from a full log
    pub fn writes_overflowed(&self) -> bool {
        self.log_overflowed
    }

    /// Forget recorded writes (the glyphs stay)
    pub fn clear_writes(&mut self) {
        self.log.clear();
        self.log_overflowed = false;
    }

    fn record(&mut self, write: DisplayWrite) {
        if self.log.push(write).is_err() {
            self.log_overflowed = true;
        }
    }

    fn put(&mut self, position: u8, character: u8) {
        if position < self.lcd_type.positions() {
            if let Some(slot) = self.glyphs.get_mut(position as usize) {
                *slot = character;
            }
        }
    }
}

impl SegmentDisplay for LcdScreen {
    fn lcd_type(&self) -> LcdType {
        self.lcd_type
    }

    fn display_character(&mut self, character: u8, position: u8) {
        self.put(position, character);
        self.record(DisplayWrite::Character {
            position,
            character,
        });
    }

    fn display_character_lp_seconds(&mut self, character: u8, position: u8) {
        if position == 8 || position == 9 {
            self.put(position, character);
        }
        self.record(DisplayWrite::LpSeconds {
            position,
            character,
        });
    }

    fn display_text(&mut self, position: Position, text: &str) {
        let start = position.start();
        let mut logged = String::new();
        for (offset, &byte) in text.as_bytes().iter().enumerate() {
            let Ok(offset) = u8::try_from(offset) else {
                break;
            };
            if offset >= position.width() {
                break;
            }
            self.put(start + offset, byte);
            let _ = logged.push(byte as char);
        }
        self.record(DisplayWrite::Text {
            position,
            text: logged,
        });
    }

    fn set_indicator(&mut self, indicator: Indicator) {
        self.indicators |= indicator.mask();
    }

    fn clear_indicator(&mut self, indicator: Indicator) {
        self.indicators &= !indicator.mask();
    }

    fn sleep_animation_is_running(&self) -> bool {
        self.sleep_animation_ms.is_some()
    }

    fn start_sleep_animation(&mut self, interval_ms: u16) {
        self.sleep_animation_ms = Some(interval_ms);
    }

    fn stop_sleep_animation(&mut self) {
        self.sleep_animation_ms = None;
    }

    fn start_indicator_blink_if_possible(&mut self, indicator: Indicator, interval_ms: u16) {
        // Classic glass can only blink the colon
        if self.lcd_type.is_rich() || indicator == Indicator::Colon {
            self.blink = Some((indicator, interval_ms));
        }
    }

    fn stop_blink(&mut self) {
        self.blink = None;
    }
}
