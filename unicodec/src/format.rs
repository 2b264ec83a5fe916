use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

const UTF8_LABEL: &str = "utf8";
const UTF16_LABEL: &str = "utf16";
const UTF32_LABEL: &str = "utf32";

/// Serialization selected for a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// One to four bytes per scalar.
    #[default]
    Utf8,
    /// Two bytes per host code unit, big-endian.
    Utf16,
    /// Four bytes per scalar, big-endian.
    Utf32,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Utf8, Format::Utf16, Format::Utf32];

    /// Size in bytes of one code unit of the format.
    pub fn unit_size(self) -> usize {
        match self {
            Format::Utf8 => 1,
            Format::Utf16 => 2,
            Format::Utf32 => 4,
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Utf8 => write!(f, "{}", UTF8_LABEL),
            Format::Utf16 => write!(f, "{}", UTF16_LABEL),
            Format::Utf32 => write!(f, "{}", UTF32_LABEL),
        }
    }
}

/// Accepts `utf8`, `utf16`, `utf32` and the hyphenated forms, in any case.
impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            UTF8_LABEL | "utf-8" => Ok(Format::Utf8),
            UTF16_LABEL | "utf-16" => Ok(Format::Utf16),
            UTF32_LABEL | "utf-32" => Ok(Format::Utf32),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}
