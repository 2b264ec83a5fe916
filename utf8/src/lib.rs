//! UTF-8: each scalar value in one to four bytes, chosen by the number of
//! significant bits.
//!
//! ```text
//! U+0000..=U+007F     0xxxxxxx
//! U+0080..=U+07FF     110xxxxx 10xxxxxx
//! U+0800..=U+FFFF     1110xxxx 10xxxxxx 10xxxxxx
//! U+10000..=U+10FFFF  11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
//! ```
//!
//! Encoding always picks the shortest form. Decoding rejects overlong
//! forms, encoded surrogates and values above U+10FFFF, and re-splits
//! supplementary scalars into surrogate pairs for the host [`Text`].

#![forbid(unsafe_code)]

pub mod error;

use text::Text;
use text::decoder::{DecodableFrom, Decoder};
use text::encoder::{EncodableTo, Encoder};

use crate::error::{Error, Result};

/// Mask of the value bits of a continuation byte.
const CONT_MASK: u8 = 0b0011_1111;
/// Tag bits of a continuation byte.
const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO: u8 = 0b1100_0000;
const TAG_THREE: u8 = 0b1110_0000;
const TAG_FOUR: u8 = 0b1111_0000;

/// Largest value of each length bracket, indexed by `len - 1`.
const BRACKET_MAX: [u32; 3] = [0x7f, 0x7ff, 0xffff];

/// UTF-8 encoded bytes.
///
/// The container does not validate on construction; [`Decoder::decode`]
/// does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Utf8 {
    bytes: Vec<u8>,
}

impl Utf8 {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Utf8 { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Utf8 {
    fn from(bytes: Vec<u8>) -> Self {
        Utf8::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Utf8 {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DecodableFrom<Utf8> for Text {}

impl Decoder<Utf8, Text> for Utf8 {
    type Error = Error;

    fn decode(&self) -> Result<Text> {
        decode_utf8(&self.bytes)
    }
}

impl EncodableTo<Text> for Utf8 {}

impl Encoder<Text, Utf8> for Text {
    type Error = Error;

    fn encode(&self) -> Result<Utf8> {
        encode_utf8(self)
    }
}

/// Number of bytes a value needs, ignoring whether it is a scalar.
fn bracket(value: u32) -> usize {
    BRACKET_MAX
        .iter()
        .position(|&max| value <= max)
        .map_or(4, |i| i + 1)
}

/// Number of bytes `ch` takes in UTF-8.
pub fn scalar_len(ch: char) -> usize {
    bracket(u32::from(ch))
}

/// Append the UTF-8 form of `ch` to `out`.
pub fn encode_scalar(ch: char, out: &mut Vec<u8>) {
    let cp = u32::from(ch);
    let cont = |shift: u32| TAG_CONT | ((cp >> shift) as u8 & CONT_MASK);
    match scalar_len(ch) {
        1 => out.push(cp as u8),
        2 => out.extend_from_slice(&[TAG_TWO | (cp >> 6) as u8, cont(0)]),
        3 => out.extend_from_slice(&[TAG_THREE | (cp >> 12) as u8, cont(6), cont(0)]),
        _ => out.extend_from_slice(&[TAG_FOUR | (cp >> 18) as u8, cont(12), cont(6), cont(0)]),
    }
}

/// Encode host text as UTF-8.
///
/// Surrogate pairs are combined before packing, so a supplementary
/// character becomes one 4-byte sequence.
///
/// # Errors
///
/// Returns [`Error::Text`] if the text holds an unpaired surrogate or
/// ends in the middle of a pair. No bytes are returned in that case.
pub fn encode_utf8(text: &Text) -> Result<Utf8> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.codepoints() {
        encode_scalar(ch?, &mut bytes);
    }
    Ok(Utf8 { bytes })
}

/// Decode UTF-8 bytes into host text.
///
/// # Errors
///
/// Fails on the first malformed sequence; see [`Error`] for the kinds.
pub fn decode_utf8(bytes: &[u8]) -> Result<Text> {
    let mut text = Text::with_capacity(bytes.len());
    let mut position = 0;
    while position < bytes.len() {
        let (ch, len) = decode_scalar(bytes, position)?;
        text.push(ch);
        position += len;
    }
    Ok(text)
}

/// Decode the sequence starting at `position`, returning the scalar and
/// the number of bytes it used.
fn decode_scalar(bytes: &[u8], position: usize) -> Result<(char, usize)> {
    let input = &bytes[position..];
    let Some(&lead) = input.first() else {
        return Err(Error::TruncatedSequence {
            position,
            expected: 1,
            available: 0,
        });
    };

    let (len, init) = match lead {
        0x00..=0x7f => return Ok((char::from(lead), 1)),
        0xc0..=0xdf => (2, lead & 0b0001_1111),
        0xe0..=0xef => (3, lead & 0b0000_1111),
        0xf0..=0xf7 => (4, lead & 0b0000_0111),
        _ => return Err(Error::InvalidLeadByte { position, byte: lead }),
    };

    let mut value = u32::from(init);
    for offset in 1..len {
        let Some(&byte) = input.get(offset) else {
            return Err(Error::TruncatedSequence {
                position,
                expected: len,
                available: offset,
            });
        };
        if byte & !CONT_MASK != TAG_CONT {
            return Err(Error::InvalidContinuationByte {
                position: position + offset,
                byte,
            });
        }
        value = (value << 6) | u32::from(byte & CONT_MASK);
    }

    if bracket(value) < len {
        return Err(Error::OverlongEncoding {
            position,
            value,
            len,
        });
    }

    let ch = char::from_u32(value).ok_or(if value > char::MAX as u32 {
        Error::OutOfRange { position, value }
    } else {
        Error::UnpairedSurrogate { position, value }
    })?;
    Ok((ch, len))
}
