//! Error types for UTF-32 encoding and decoding.

use thiserror::Error;

/// Result type for UTF-32 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when encoding to or decoding from UTF-32.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The text to encode holds an unpaired or truncated surrogate.
    #[error("text: {0}")]
    Text(#[from] text::Error),

    /// A value above U+10FFFF or inside the surrogate band.
    #[error("value 0x{value:X} at index {position} is not a scalar value")]
    OutOfRange { position: usize, value: u32 },

    /// The byte length is not a multiple of four.
    #[error("truncated value at offset {position}: {remaining} trailing byte(s)")]
    TruncatedSequence { position: usize, remaining: usize },
}

impl Error {
    /// Map a framing failure of the parser over `input` to the value it
    /// stopped at.
    pub(crate) fn truncated(input: &[u8], err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        let remaining = match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.input.len(),
            nom::Err::Incomplete(_) => input.len() % 4,
        };
        Error::TruncatedSequence {
            position: input.len() - remaining,
            remaining,
        }
    }
}
