use std::fmt::{Display, Formatter};

use text::Text;

use crate::error::Result;
use crate::format::Format;

/// Byte length of `text` serialized in `format`, without encoding it.
///
/// # Errors
///
/// UTF-8 and UTF-32 fail on an unpaired or truncated surrogate, exactly
/// as [`text_to_bytes`](crate::text_to_bytes) would.
pub fn encoded_len(text: &Text, format: Format) -> Result<usize> {
    let len = match format {
        Format::Utf8 => text
            .codepoints()
            .map(|ch| ch.map(utf8::scalar_len))
            .sum::<text::Result<usize>>()?,
        Format::Utf16 => text.len() * format.unit_size(),
        Format::Utf32 => {
            let count = text
                .codepoints()
                .try_fold(0usize, |count, ch| ch.map(|_| count + 1))?;
            count * format.unit_size()
        }
    };
    Ok(len)
}

/// Byte length of one text in each format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizes {
    pub utf8: usize,
    pub utf16: usize,
    pub utf32: usize,
}

impl Sizes {
    pub fn of(text: &Text) -> Result<Self> {
        Ok(Sizes {
            utf8: encoded_len(text, Format::Utf8)?,
            utf16: encoded_len(text, Format::Utf16)?,
            utf32: encoded_len(text, Format::Utf32)?,
        })
    }

    pub fn get(&self, format: Format) -> usize {
        match format {
            Format::Utf8 => self.utf8,
            Format::Utf16 => self.utf16,
            Format::Utf32 => self.utf32,
        }
    }
}

impl Display for Sizes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UTF8: {} bytes; UTF16: {} bytes; UTF32: {} bytes",
            self.utf8, self.utf16, self.utf32
        )
    }
}
