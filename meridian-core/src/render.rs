//! World clock rendering
//!
//! Display mode redraws as little as possible. The new time is compared
//! with the last one drawn, and only the fields that can have changed are
//! written:
//!
//! 1. Same minute: the two seconds glyphs, via the low-power path.
//! 2. Same hour: minutes and seconds.
//! 3. Anything else, or a low energy refresh: label, day, hour, minutes and
//!    seconds (blanked while the sleep animation runs).
//!
//! Settings mode always redraws the whole line.

use core::fmt::Write;

use heapless::String;
use meridian_display::{Indicator, Position, SegmentDisplay};
use meridian_hal::DateTime;

use crate::config::FaceConfig;
use crate::settings::WorldClockSettings;
use crate::state::EditField;

/// Display position of each label character
pub const LABEL_POSITIONS: [u8; 3] = [0, 1, 10];

/// Characters in a settings line
pub const SETTINGS_LINE_LEN: usize = 11;

/// First position of the zone name in a settings line
const ZONE_NAME_START: usize = 4;

/// Width of the zone name in a settings line
const ZONE_NAME_LEN: usize = 6;

/// How much of the display a time redraw touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderTier {
    /// Seconds glyphs only
    Seconds,
    /// Minutes and seconds
    MinutesSeconds,
    /// Label, day, hour, minutes and seconds
    Full,
}

/// Display position of label character `index` (0-2)
pub const fn label_position(index: u8) -> u8 {
    match index {
        0 => LABEL_POSITIONS[0],
        1 => LABEL_POSITIONS[1],
        _ => LABEL_POSITIONS[2],
    }
}

/// Draw the time, writing only what changed since `previous`
///
/// A low energy refresh always takes the full tier.
pub fn render_time<D: SegmentDisplay>(
    display: &mut D,
    settings: &WorldClockSettings,
    now: DateTime,
    previous: DateTime,
    low_energy: bool,
    config: &FaceConfig,
) -> RenderTier {
    if now.same_minute(previous) && !low_energy {
        let second = now.second();
        display.display_character_lp_seconds(b'0' + second / 10, 8);
        display.display_character_lp_seconds(b'0' + second % 10, 9);
        return RenderTier::Seconds;
    }

    if now.same_hour(previous) && !low_energy {
        let mut buf: String<4> = String::new();
        let _ = write!(buf, "{:02}{:02}", now.minute(), now.second());
        display.display_text(Position::Minutes, field(&buf, 0));
        display.display_text(Position::Seconds, field(&buf, 2));
        return RenderTier::MinutesSeconds;
    }

    let lcd = display.lcd_type();
    display.display_character(settings.char_0, label_position(0));
    display.display_character(settings.char_1, label_position(1));
    if lcd.is_rich() {
        display.display_character(settings.char_2, label_position(2));
    }

    let mut buf: String<8> = String::new();
    let _ = write!(
        buf,
        "{:2}{:2}{:02}{:02}",
        now.day(),
        now.hour(),
        now.minute(),
        now.second()
    );
    display.display_text(Position::TopRight, field(&buf, 0));
    display.display_text(Position::Hours, field(&buf, 2));
    display.display_text(Position::Minutes, field(&buf, 4));

    if low_energy {
        if !display.sleep_animation_is_running() {
            display.display_text(Position::Seconds, "  ");
            display.start_sleep_animation(config.sleep_animation_ms);
            display.start_indicator_blink_if_possible(Indicator::Colon, config.sleep_animation_ms);
        }
    } else {
        display.display_text(Position::Seconds, field(&buf, 6));
    }

    RenderTier::Full
}

/// Two-character field of a formatted time string
fn field(buf: &str, start: usize) -> &str {
    buf.get(start..start + 2).unwrap_or("  ")
}

/// Compose the settings line
///
/// Layout: label char 0, label char 1, two spaces, zone name padded to six
/// characters, label char 2. `blanked` is the field hidden for the blink
/// phase. Bytes outside ASCII show as `?`.
pub fn settings_line(
    settings: &WorldClockSettings,
    zone_name: &str,
    blanked: Option<EditField>,
) -> [u8; SETTINGS_LINE_LEN] {
    let mut line = [b' '; SETTINGS_LINE_LEN];
    for index in 0..3 {
        line[label_position(index) as usize] = ascii(settings.label_char(index));
    }
    for (slot, &byte) in line[ZONE_NAME_START..ZONE_NAME_START + ZONE_NAME_LEN]
        .iter_mut()
        .zip(zone_name.as_bytes())
    {
        *slot = ascii(byte);
    }

    match blanked {
        Some(EditField::LabelChar(index)) => {
            line[label_position(index) as usize] = b'_';
        }
        Some(EditField::Timezone) => {
            line[ZONE_NAME_START..ZONE_NAME_START + ZONE_NAME_LEN].fill(b' ');
        }
        None => {}
    }

    line
}

/// Draw a settings page
///
/// On the blink phase the field being edited is hidden.
pub fn render_settings<D: SegmentDisplay>(
    display: &mut D,
    settings: &WorldClockSettings,
    zone_name: &str,
    editing: Option<EditField>,
    blink_phase: bool,
) {
    display.clear_colon();
    let blanked = if blink_phase { editing } else { None };
    let line = settings_line(settings, zone_name, blanked);
    display.clear_indicator(Indicator::Pm);

    // Every byte is ASCII
    let text = core::str::from_utf8(&line).unwrap_or("");
    display.display_text(Position::Full, text);
}

fn ascii(byte: u8) -> u8 {
    if byte.is_ascii() {
        byte
    } else {
        b'?'
    }
}
