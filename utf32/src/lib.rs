//! UTF-32: one 32-bit value per scalar.
//!
//! Every value is exactly the scalar's number. The largest scalar,
//! U+10FFFF, needs 21 bits, so the top 11 bits of each value are always
//! zero. Direct indexing comes at four bytes per character, twice the
//! size of UTF-16 and four times UTF-8 for ASCII text.
//!
//! Encoding combines surrogate pairs of the host [`Text`] first, so the
//! number of values equals [`Text::scalar_count`] for well-formed text.
//! On the wire each value is written as four big-endian bytes.

#![forbid(unsafe_code)]

pub mod error;

use nom::combinator::all_consuming;
use nom::multi::many0;
use nom::number::complete::be_u32;
use nom::{IResult, Parser};
use text::Text;
use text::decoder::{DecodableFrom, Decoder};
use text::encoder::{EncodableTo, Encoder};

use crate::error::{Error, Result};

/// Serialized UTF-32 values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Utf32 {
    values: Vec<u32>,
}

impl Utf32 {
    pub fn from_values(values: Vec<u32>) -> Self {
        Utf32 { values }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn into_values(self) -> Vec<u32> {
        self.values
    }

    /// Number of 32-bit values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Each value as four big-endian bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.values
            .iter()
            .flat_map(|value| value.to_be_bytes())
            .collect()
    }

    /// Read big-endian 4-byte groups.
    ///
    /// Values are not checked here; [`decode_utf32`] does.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedSequence`] if the length is not a
    /// multiple of four.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        let (_, values) = parse_values(bytes).map_err(|err| Error::truncated(bytes, err))?;
        Ok(Utf32 { values })
    }
}

impl From<Vec<u32>> for Utf32 {
    fn from(values: Vec<u32>) -> Self {
        Utf32::from_values(values)
    }
}

impl DecodableFrom<Utf32> for Text {}

impl Decoder<Utf32, Text> for Utf32 {
    type Error = Error;

    fn decode(&self) -> Result<Text> {
        decode_utf32(self)
    }
}

impl EncodableTo<Text> for Utf32 {}

impl Encoder<Text, Utf32> for Text {
    type Error = Error;

    fn encode(&self) -> Result<Utf32> {
        encode_utf32(self)
    }
}

/// Encode host text as one value per scalar.
///
/// # Errors
///
/// Returns [`Error::Text`] if the text holds an unpaired surrogate or
/// ends in the middle of a pair.
pub fn encode_utf32(text: &Text) -> Result<Utf32> {
    let values = text
        .codepoints()
        .map(|ch| ch.map(u32::from))
        .collect::<text::Result<Vec<u32>>>()?;
    Ok(Utf32 { values })
}

/// Decode values into host text, re-splitting supplementary scalars into
/// surrogate pairs.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] for the first value that is above
/// U+10FFFF or a surrogate.
pub fn decode_utf32(utf32: &Utf32) -> Result<Text> {
    let mut text = Text::with_capacity(utf32.len());
    for (position, &value) in utf32.values.iter().enumerate() {
        let ch = char::from_u32(value).ok_or(Error::OutOfRange { position, value })?;
        text.push(ch);
    }
    Ok(text)
}

fn parse_values(input: &[u8]) -> IResult<&[u8], Vec<u32>> {
    all_consuming(many0(be_u32::<_, nom::error::Error<&[u8]>>)).parse(input)
}
