//! # unicodec
//!
//! Convert text between the host's UTF-16 code units and the three byte
//! serializations of Unicode.
//!
//! | format | unit    | units per scalar | byte order |
//! |--------|---------|------------------|------------|
//! | UTF-8  | 8 bits  | 1 to 4           | n/a        |
//! | UTF-16 | 16 bits | 1 or 2           | big-endian |
//! | UTF-32 | 32 bits | 1                | big-endian |
//!
//! UTF-8 is dominant: ASCII takes a single byte. UTF-32 indexes scalars
//! directly at four bytes each. UTF-16 is the host representation itself,
//! with codepoints above U+FFFF stored as surrogate pairs.
//!
//! ## Example
//!
//! ```
//! use unicodec::{Format, Text, bytes_to_text, text_to_bytes};
//!
//! let text = Text::from("😩");
//!
//! let bytes = text_to_bytes(&text, Format::Utf8).unwrap();
//! assert_eq!(bytes, vec![240, 159, 152, 169]);
//!
//! let bytes = text_to_bytes(&text, Format::Utf32).unwrap();
//! assert_eq!(bytes, vec![0x00, 0x01, 0xf6, 0x29]);
//!
//! let decoded = bytes_to_text(&bytes, Format::Utf32).unwrap();
//! assert_eq!(decoded, text);
//! ```
//!
//! Malformed input is rejected with an [`Error`] rather than passed
//! through. The UTF-16 codec is the exception: it copies units verbatim,
//! unpaired surrogates included.

#![forbid(unsafe_code)]

pub mod error;
mod format;
mod size;

pub use error::{Error, Result};
pub use format::Format;
pub use size::{Sizes, encoded_len};
pub use text::{Codepoints, Text};
pub use utf8::{Utf8, decode_utf8, encode_utf8};
pub use utf16::{Utf16, decode_utf16, encode_utf16};
pub use utf32::{Utf32, decode_utf32, encode_utf32};

/// Serialize `text` in `format`.
///
/// # Errors
///
/// UTF-8 and UTF-32 fail if the text holds an unpaired or truncated
/// surrogate. UTF-16 never fails.
pub fn text_to_bytes(text: &Text, format: Format) -> Result<Vec<u8>> {
    tracing::trace!(%format, units = text.len(), "encoding text");
    encode_as(text, format)
        .inspect_err(|err| tracing::debug!(%format, error = %err, "encoding rejected"))
}

/// Parse `bytes` in `format` back into host text.
///
/// # Errors
///
/// Fails on malformed UTF-8, on UTF-32 values that are not scalars, and
/// on a trailing partial unit for UTF-16 and UTF-32.
pub fn bytes_to_text(bytes: &[u8], format: Format) -> Result<Text> {
    tracing::trace!(%format, bytes = bytes.len(), "decoding bytes");
    decode_as(bytes, format)
        .inspect_err(|err| tracing::debug!(%format, error = %err, "decoding rejected"))
}

/// [`text_to_bytes`] with the default format, UTF-8.
pub fn encode(text: &Text) -> Result<Vec<u8>> {
    text_to_bytes(text, Format::default())
}

/// [`bytes_to_text`] with the default format, UTF-8.
pub fn decode(bytes: &[u8]) -> Result<Text> {
    bytes_to_text(bytes, Format::default())
}

fn encode_as(text: &Text, format: Format) -> Result<Vec<u8>> {
    let bytes = match format {
        Format::Utf8 => encode_utf8(text)?.into_bytes(),
        Format::Utf16 => encode_utf16(text).to_be_bytes(),
        Format::Utf32 => encode_utf32(text)?.to_be_bytes(),
    };
    Ok(bytes)
}

fn decode_as(bytes: &[u8], format: Format) -> Result<Text> {
    let text = match format {
        Format::Utf8 => decode_utf8(bytes)?,
        Format::Utf16 => decode_utf16(&Utf16::from_be_bytes(bytes)?),
        Format::Utf32 => decode_utf32(&Utf32::from_be_bytes(bytes)?)?,
    };
    Ok(text)
}
