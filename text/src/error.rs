//! Error types for host text handling.

use thiserror::Error;

/// Result type for text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a `Text` must be read as scalar values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A high surrogate is the last unit, its low half is missing.
    #[error("truncated surrogate pair: high surrogate at unit {position} has no low surrogate")]
    TruncatedSequence { position: usize },

    /// A surrogate unit that is not part of a high/low pair.
    #[error("unpaired surrogate 0x{unit:04X} at unit {position}")]
    UnpairedSurrogate { position: usize, unit: u16 },

    /// Conversion to a Rust `String` failed.
    #[error("text is not valid UTF-16")]
    InvalidUtf16,
}
