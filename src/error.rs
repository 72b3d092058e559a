//! Error types for `langdat`

use thiserror::Error;

/// The error type for `langdat` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== DAT Container Errors ====================
    /// The container is too short to hold the 4-byte header.
    #[error("invalid DAT file: truncated header")]
    TruncatedHeader,

    /// The offset table ends before the declared entry count.
    #[error("invalid DAT file: string table truncated at entry {index}")]
    TruncatedTable {
        /// Index of the entry that could not be read.
        index: usize,
    },

    /// The container declares zero strings; extraction has nothing to do.
    #[error("no strings found in DAT file")]
    EmptyContainer,
}

/// A specialized Result type for `langdat` operations.
pub type Result<T> = std::result::Result<T, Error>;
