use thiserror::Error;

/// Result type for UTF-8 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when encoding to or decoding from UTF-8.
///
/// Byte positions are offsets into the decoded input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The text to encode holds an unpaired or truncated surrogate.
    #[error("text: {0}")]
    Text(#[from] text::Error),

    /// A byte that cannot start a sequence: a continuation byte or 0xF8..=0xFF.
    #[error("invalid lead byte 0x{byte:02X} at offset {position}")]
    InvalidLeadByte { position: usize, byte: u8 },

    /// A byte inside a sequence whose top bits are not `10`.
    #[error("invalid continuation byte 0x{byte:02X} at offset {position}")]
    InvalidContinuationByte { position: usize, byte: u8 },

    /// The input ends before the sequence started at `position` is complete.
    #[error(
        "truncated sequence at offset {position}: expected {expected} bytes, {available} available"
    )]
    TruncatedSequence {
        position: usize,
        expected: usize,
        available: usize,
    },

    /// The value fits in fewer bytes than the sequence uses.
    #[error("overlong encoding of U+{value:04X} in {len} bytes at offset {position}")]
    OverlongEncoding {
        position: usize,
        value: u32,
        len: usize,
    },

    /// The sequence encodes a value in the surrogate band.
    #[error("encoded surrogate 0x{value:04X} at offset {position}")]
    UnpairedSurrogate { position: usize, value: u32 },

    /// The sequence encodes a value above U+10FFFF.
    #[error("value 0x{value:X} at offset {position} is beyond U+10FFFF")]
    OutOfRange { position: usize, value: u32 },
}
