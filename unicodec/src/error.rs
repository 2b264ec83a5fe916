use thiserror::Error;

/// Result type for unicodec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the format facade.
///
/// Codec failures are wrapped unchanged, so the offending position stays
/// available through the inner error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The text holds an unpaired or truncated surrogate where scalar
    /// values were needed, e.g. when measuring its encoded length.
    #[error("text: {0}")]
    Text(#[from] text::Error),

    /// UTF-8 encoding or decoding failed.
    #[error("UTF-8: {0}")]
    Utf8(#[from] utf8::error::Error),

    /// The UTF-16 byte framing is incomplete.
    #[error("UTF-16: {0}")]
    Utf16(#[from] utf16::error::Error),

    /// UTF-32 encoding, decoding or byte framing failed.
    #[error("UTF-32: {0}")]
    Utf32(#[from] utf32::error::Error),

    /// A format label that is not one of `utf8`, `utf16`, `utf32`.
    #[error("unknown format {0:?}")]
    UnknownFormat(String),
}
