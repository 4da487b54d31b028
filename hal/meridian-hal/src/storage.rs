//! Persistent file storage abstractions
//!
//! Provides a trait for exact-filename blob storage that the host
//! implements on top of its filesystem.

use heapless::String;

/// Longest filename the store accepts (8.3 style, e.g. `wclk_000.u32`)
pub const MAX_FILENAME_LEN: usize = 12;

/// Filename buffer
pub type FileName = String<MAX_FILENAME_LEN>;

/// Errors from file storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// File does not exist
    NotFound,
    /// Underlying filesystem operation failed
    Io,
    /// Stored size does not match the requested size
    SizeMismatch,
    /// Storage is full
    Full,
}

/// File storage trait
///
/// Blobs are addressed by exact filename. There is no partial read or
/// versioning support: a blob is either read whole or not at all.
///
/// Implementations are responsible for durability and wear leveling.
pub trait FileStore {
    /// Check if a file exists
    fn exists(&mut self, name: &str) -> bool;

    /// Read a file into the provided buffer
    ///
    /// The read is exact: it succeeds only if the stored blob is exactly
    /// `buffer.len()` bytes long.
    ///
    /// # Returns
    /// The number of bytes read, or an error.
    fn read(&mut self, name: &str, buffer: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a file, replacing any previous content
    fn write(&mut self, name: &str, data: &[u8]) -> Result<(), StorageError>;
}
