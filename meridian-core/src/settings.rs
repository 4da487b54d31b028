//! World clock settings record and its persistence
//!
//! Each instance keeps a four-byte record in its own file. The byte layout
//! is the on-flash format and must not change:
//!
//! | Byte | Field            |
//! |------|------------------|
//! | 0    | `char_0`         |
//! | 1    | `char_1`         |
//! | 2    | `char_2`         |
//! | 3    | `timezone_index` |
//!
//! Read as a little-endian `u32` this is the settings register.
//!
//! Persistence is fail-silent. Loading always produces a usable record,
//! and a write is only issued when the stored bytes differ from the
//! record, so leaving settings without edits costs no flash wear.

use serde::{Deserialize, Serialize};

use meridian_hal::{FileName, FileStore, StorageError, ZoneResolver};

use crate::registry::ClockIndex;

/// Size of the persisted record in bytes
pub const RECORD_LEN: usize = 4;

/// Persisted world clock settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WorldClockSettings {
    /// First label character
    pub char_0: u8,
    /// Second label character
    pub char_1: u8,
    /// Third label character (custom LCD only)
    pub char_2: u8,
    /// Index into the zone table
    pub timezone_index: u8,
}

impl WorldClockSettings {
    /// All-ones record; what an absent or unreadable file compares as
    pub const SENTINEL: Self = Self {
        char_0: 0xFF,
        char_1: 0xFF,
        char_2: 0xFF,
        timezone_index: 0xFF,
    };

    /// Blank label in the given zone
    pub const fn blank(timezone_index: u8) -> Self {
        Self {
            char_0: b' ',
            char_1: b' ',
            char_2: b' ',
            timezone_index,
        }
    }

    /// Label character by position (0-2)
    pub const fn label_char(&self, position: u8) -> u8 {
        match position {
            0 => self.char_0,
            1 => self.char_1,
            _ => self.char_2,
        }
    }

    /// Mutable label character by position (0-2)
    pub fn label_char_mut(&mut self, position: u8) -> &mut u8 {
        match position {
            0 => &mut self.char_0,
            1 => &mut self.char_1,
            _ => &mut self.char_2,
        }
    }

    /// Serialize to the on-flash layout
    pub fn encode(&self) -> Result<[u8; RECORD_LEN], SettingsError> {
        let mut buffer = [0u8; RECORD_LEN];
        let len = postcard::to_slice(self, &mut buffer)
            .map_err(|_| SettingsError::Serialize)?
            .len();
        if len != RECORD_LEN {
            return Err(SettingsError::Serialize);
        }
        Ok(buffer)
    }

    /// Deserialize from the on-flash layout
    ///
    /// Only an exactly `RECORD_LEN`-byte blob is accepted.
    pub fn decode(bytes: &[u8]) -> Result<Self, SettingsError> {
        if bytes.len() != RECORD_LEN {
            return Err(SettingsError::Storage(StorageError::SizeMismatch));
        }
        postcard::from_bytes(bytes).map_err(|_| SettingsError::Deserialize)
    }

    /// Settings register (the record read as a little-endian `u32`)
    pub fn reg(&self) -> u32 {
        u32::from_le_bytes([self.char_0, self.char_1, self.char_2, self.timezone_index])
    }
}

/// Settings persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// File store operation failed
    Storage(StorageError),
    /// Serialization failed
    Serialize,
    /// Deserialization failed
    Deserialize,
}

impl From<StorageError> for SettingsError {
    fn from(e: StorageError) -> Self {
        SettingsError::Storage(e)
    }
}

/// Result of a write-on-change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistOutcome {
    /// Stored bytes already match; nothing written
    Unchanged,
    /// Record written
    Written,
    /// Write attempted and failed; retried on the next persist
    Failed(SettingsError),
}

/// One instance's settings file
#[derive(Debug, Clone)]
pub struct SettingsSlot {
    filename: FileName,
}

impl SettingsSlot {
    pub fn new(index: ClockIndex) -> Self {
        Self {
            filename: index.filename(),
        }
    }

    pub fn filename(&self) -> &str {
        self.filename.as_str()
    }

    /// Load this instance's settings
    ///
    /// Without a file, or if it cannot be read, returns a blank label in
    /// the UTC zone. A stored zone index outside the zone table is reset
    /// to UTC.
    pub fn load<F, Z>(&self, files: &mut F, zones: &Z) -> WorldClockSettings
    where
        F: FileStore,
        Z: ZoneResolver,
    {
        let defaults = WorldClockSettings::blank(zones.utc_zone());

        if !files.exists(self.filename()) {
            #[cfg(feature = "defmt")]
            defmt::debug!("{}: no settings file, using defaults", self.filename());
            return defaults;
        }

        let mut settings = match self.read_stored(files) {
            Ok(settings) => {
                #[cfg(feature = "defmt")]
                defmt::info!("{}: loaded settings {}", self.filename(), settings);
                settings
            }
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{}: unreadable ({}), using defaults", self.filename(), _e);
                return defaults;
            }
        };

        if settings.timezone_index >= zones.zone_count() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "{}: zone index {} out of range, resetting to UTC",
                self.filename(),
                settings.timezone_index
            );
            settings.timezone_index = zones.utc_zone();
        }

        settings
    }

    /// Write `settings` unless the file already holds the same bytes
    pub fn persist_if_changed<F: FileStore>(
        &self,
        files: &mut F,
        settings: &WorldClockSettings,
    ) -> PersistOutcome {
        match self.persist_inner(files, settings) {
            Ok(outcome) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("{}: persist {}", self.filename(), outcome);
                outcome
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{}: persist failed: {}", self.filename(), e);
                PersistOutcome::Failed(e)
            }
        }
    }

    /// Inner function that returns errors
    fn persist_inner<F: FileStore>(
        &self,
        files: &mut F,
        settings: &WorldClockSettings,
    ) -> Result<PersistOutcome, SettingsError> {
        let stored = self
            .read_stored(files)
            .unwrap_or(WorldClockSettings::SENTINEL);
        let bytes = settings.encode()?;

        if stored.encode()? == bytes {
            return Ok(PersistOutcome::Unchanged);
        }

        files.write(self.filename(), &bytes)?;
        Ok(PersistOutcome::Written)
    }

    fn read_stored<F: FileStore>(&self, files: &mut F) -> Result<WorldClockSettings, SettingsError> {
        let mut buffer = [0u8; RECORD_LEN];
        let len = files.read(self.filename(), &mut buffer)?;
        WorldClockSettings::decode(&buffer[..len.min(RECORD_LEN)])
    }
}
