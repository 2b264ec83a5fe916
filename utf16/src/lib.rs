//! UTF-16: each code unit of the host text is one 16-bit value.
//!
//! The host already stores text as UTF-16, so this codec is a 1:1 copy of
//! units. It performs no surrogate pairing and no validation: an unpaired
//! surrogate is carried through untouched. Run the text through
//! [`Text::codepoints`] first if validated UTF-16 is needed.
//!
//! On the wire each unit is written as two big-endian bytes with no
//! byte-order mark.

#![forbid(unsafe_code)]

pub mod error;

use std::convert::Infallible;

use nom::combinator::all_consuming;
use nom::multi::many0;
use nom::number::complete::be_u16;
use nom::{IResult, Parser};
use text::Text;
use text::decoder::{DecodableFrom, Decoder};
use text::encoder::{EncodableTo, Encoder};

use crate::error::{Error, Result};

/// Serialized UTF-16 code units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Utf16 {
    units: Vec<u16>,
}

impl Utf16 {
    pub fn from_units(units: Vec<u16>) -> Self {
        Utf16 { units }
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Number of 16-bit units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Each unit as two big-endian bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.units.iter().flat_map(|unit| unit.to_be_bytes()).collect()
    }

    /// Read big-endian 2-byte groups.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedUnit`] if `bytes` has an odd length.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        let (_, units) = parse_units(bytes).map_err(|err| Error::truncated(bytes, err))?;
        Ok(Utf16 { units })
    }
}

impl From<Vec<u16>> for Utf16 {
    fn from(units: Vec<u16>) -> Self {
        Utf16::from_units(units)
    }
}

impl DecodableFrom<Utf16> for Text {}

impl Decoder<Utf16, Text> for Utf16 {
    type Error = Infallible;

    fn decode(&self) -> std::result::Result<Text, Self::Error> {
        Ok(decode_utf16(self))
    }
}

impl EncodableTo<Text> for Utf16 {}

impl Encoder<Text, Utf16> for Text {
    type Error = Infallible;

    fn encode(&self) -> std::result::Result<Utf16, Self::Error> {
        Ok(encode_utf16(self))
    }
}

/// Copy the units of `text`, surrogates included, verbatim.
pub fn encode_utf16(text: &Text) -> Utf16 {
    Utf16 {
        units: text.units().to_vec(),
    }
}

/// Copy serialized units back into host text.
pub fn decode_utf16(utf16: &Utf16) -> Text {
    Text::from_units(utf16.units.clone())
}

fn parse_units(input: &[u8]) -> IResult<&[u8], Vec<u16>> {
    all_consuming(many0(be_u16::<_, nom::error::Error<&[u8]>>)).parse(input)
}
