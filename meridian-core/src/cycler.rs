//! Label character cycling
//!
//! The alarm button steps a label character to the next glyph the LCD can
//! actually show at that position. Which glyphs are legal depends on the
//! glass: the custom LCD (and position 0 on every glass) renders a dense
//! ASCII subset, while the remaining classic LCD positions can only form a
//! handful of letters and digits.
//!
//! Cycling is total: every byte has a successor, and bytes outside the
//! intended rotation eventually land back on space.

use meridian_display::LcdType;

/// Failsafe byte: anything that escaped the rotation is sent back to space
pub const FAILSAFE: u8 = 0x7F;

/// Glyph table used for a character position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alphabet {
    /// Letters, digits and a few symbols
    Full,
    /// Glyphs the classic LCD can form outside position 0
    Restricted,
}

impl Alphabet {
    /// Table for a label position on the given glass
    pub const fn for_position(position: u8, lcd: LcdType) -> Self {
        if lcd.is_rich() || position == 0 {
            Alphabet::Full
        } else {
            Alphabet::Restricted
        }
    }

    /// Successor of `character` in this table
    pub const fn next(self, character: u8) -> u8 {
        match self {
            Alphabet::Full => next_full(character),
            Alphabet::Restricted => next_restricted(character),
        }
    }

    /// Number of glyphs in the rotation, space included
    pub const fn len(self) -> usize {
        match self {
            Alphabet::Full => 78,
            Alphabet::Restricted => 23,
        }
    }
}

/// Advance a label character at `position` to the next legal glyph
pub const fn advance(character: u8, position: u8, lcd: LcdType) -> u8 {
    Alphabet::for_position(position, lcd).next(character)
}

const fn next_full(character: u8) -> u8 {
    match character {
        b' ' => b'A',
        b'z' => b'0',
        // '{' stands in for a glyph with no ASCII equivalent
        b'9' => b'{',
        b'}' => b'*',
        b'.' => b'/',
        b'/' | FAILSAFE => b' ',
        _ => character.wrapping_add(1),
    }
}

const fn next_restricted(character: u8) -> u8 {
    match character {
        b' ' => b'A',
        b'F' | b'J' | b'L' | b'R' | b'1' => character + 2,
        // Classic segments draw 'I' the same as 'l'
        b'H' => b'l',
        b'l' => b'J',
        b'O' => b'R',
        b'U' => b'X',
        b'X' => b'0',
        b'3' => b'7',
        b'8' => b'{',
        b'{' | FAILSAFE => b' ',
        _ => character.wrapping_add(1),
    }
}
