use std::fmt::{self, Display, Formatter};

use crate::error::{Error, Result};
use crate::sequencer::Codepoints;
use crate::surrogate;

/// Text held as UTF-16 code units, the way the host stores strings.
///
/// A `Text` may contain any unit sequence, including unpaired surrogates.
/// Nothing is validated on construction; the codecs that need scalar
/// values report malformed units when they walk the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Text {
    units: Vec<u16>,
}

impl Text {
    pub fn new() -> Self {
        Text { units: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Text {
            units: Vec::with_capacity(capacity),
        }
    }

    pub fn from_units(units: Vec<u16>) -> Self {
        Text { units }
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Number of code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Append a scalar, as one unit or as a surrogate pair.
    pub fn push(&mut self, ch: char) {
        let (first, second) = surrogate::split(ch);
        self.units.push(first);
        if let Some(second) = second {
            self.units.push(second);
        }
    }

    /// Scalar values of the text, see [`Codepoints`].
    pub fn codepoints(&self) -> Codepoints<'_> {
        Codepoints::new(&self.units)
    }

    /// Number of characters, counting a surrogate pair once.
    ///
    /// An unpaired surrogate counts as one character, so this never fails.
    pub fn scalar_count(&self) -> usize {
        let pairs = self
            .units
            .windows(2)
            .scan(false, |skip, w| {
                // A low surrogate already consumed by a pair cannot open another.
                let paired = !*skip && surrogate::is_high(w[0]) && surrogate::is_low(w[1]);
                *skip = paired;
                Some(paired)
            })
            .filter(|&paired| paired)
            .count();
        self.units.len() - pairs
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text {
            units: value.encode_utf16().collect(),
        }
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::from(value.as_str())
    }
}

impl From<char> for Text {
    fn from(value: char) -> Self {
        let mut text = Text::with_capacity(2);
        text.push(value);
        text
    }
}

impl From<Vec<u16>> for Text {
    fn from(units: Vec<u16>) -> Self {
        Text::from_units(units)
    }
}

impl FromIterator<u16> for Text {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Text {
            units: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<char> for Text {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut text = Text::new();
        for ch in iter {
            text.push(ch);
        }
        text
    }
}

impl AsRef<[u16]> for Text {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl TryFrom<&Text> for String {
    type Error = Error;

    fn try_from(value: &Text) -> Result<Self> {
        String::from_utf16(&value.units).map_err(|_| Error::InvalidUtf16)
    }
}

impl TryFrom<Text> for String {
    type Error = Error;

    fn try_from(value: Text) -> Result<Self> {
        String::try_from(&value)
    }
}

/// Lossy display: unpaired surrogates are shown as U+FFFD.
impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for ch in char::decode_utf16(self.units.iter().copied()) {
            write!(f, "{}", ch.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}
