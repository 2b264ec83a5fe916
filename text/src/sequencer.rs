//! Walks UTF-16 code units and yields scalar values.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::surrogate;

/// Iterator over the scalar values of a unit slice.
///
/// A high surrogate directly followed by a low surrogate yields one
/// combined `char`; every other non-surrogate unit yields itself. A
/// surrogate that cannot be paired yields an error for that unit and the
/// walk continues with the next one, so collecting into
/// `Result<Vec<char>, _>` stops at the first bad unit.
///
/// A clone resumes from the same position. Call
/// [`Text::codepoints`](crate::Text::codepoints) again to walk from the
/// start.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    units: &'a [u16],
    position: usize,
}

impl<'a> Codepoints<'a> {
    pub fn new(units: &'a [u16]) -> Self {
        Codepoints { units, position: 0 }
    }

    /// Index of the next unit to be read.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Iterator for Codepoints<'_> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.position;
        let unit = *self.units.get(position)?;

        if !surrogate::is_surrogate(unit) {
            self.position += 1;
            // Every unit outside the surrogate band is a scalar value.
            return Some(
                char::from_u32(u32::from(unit)).ok_or(Error::UnpairedSurrogate { position, unit }),
            );
        }

        if surrogate::is_low(unit) {
            self.position += 1;
            return Some(Err(Error::UnpairedSurrogate { position, unit }));
        }

        match self.units.get(position + 1) {
            Some(&low) if surrogate::is_low(low) => {
                self.position += 2;
                let cp = surrogate::combine(unit, low);
                Some(char::from_u32(cp).ok_or(Error::UnpairedSurrogate { position, unit }))
            }
            Some(_) => {
                self.position += 1;
                Some(Err(Error::UnpairedSurrogate { position, unit }))
            }
            None => {
                self.position += 1;
                Some(Err(Error::TruncatedSequence { position }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.position;
        (remaining.div_ceil(2), Some(remaining))
    }
}

impl FusedIterator for Codepoints<'_> {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![0x24], vec!['$'])]
    #[case(vec![0x24, 0xa2, 0x939], vec!['$', '¢', 'ह'])]
    #[case(vec![0xd83d, 0xde29], vec!['😩'])]
    #[case(vec![0x61, 0xd800, 0xdf48, 0x62], vec!['a', '𐍈', 'b'])]
    #[case(vec![0xffff, 0xd800, 0xdc00], vec!['\u{ffff}', '\u{10000}'])]
    #[case(vec![0xe000], vec!['\u{e000}'])]
    fn test_codepoints_well_formed(#[case] units: Vec<u16>, #[case] expected: Vec<char>) {
        let actual = Codepoints::new(&units).collect::<Result<Vec<char>>>().unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case(vec![0xd83d], Error::TruncatedSequence { position: 0 })]
    #[case(vec![0x61, 0x62, 0xd83d], Error::TruncatedSequence { position: 2 })]
    #[case(vec![0xde29], Error::UnpairedSurrogate { position: 0, unit: 0xde29 })]
    #[case(vec![0xd83d, 0x61], Error::UnpairedSurrogate { position: 0, unit: 0xd83d })]
    #[case(vec![0xd83d, 0xd83d, 0xde29], Error::UnpairedSurrogate { position: 0, unit: 0xd83d })]
    #[case(vec![0x61, 0xde29, 0xd83d], Error::UnpairedSurrogate { position: 1, unit: 0xde29 })]
    #[case(vec![0xdc00, 0xd800], Error::UnpairedSurrogate { position: 0, unit: 0xdc00 })]
    #[case(vec![0x61, 0x62, 0xdfff], Error::UnpairedSurrogate { position: 2, unit: 0xdfff })]
    fn test_codepoints_malformed(#[case] units: Vec<u16>, #[case] expected: Error) {
        let actual = Codepoints::new(&units).collect::<Result<Vec<char>>>();
        assert_eq!(actual, Err(expected));
    }

    #[test]
    fn test_codepoints_continue_after_error() {
        // The high surrogate at 1 is followed by another high surrogate
        // that does pair with the low at 3.
        let units = [0x61, 0xd83d, 0xd83d, 0xde29];
        let items: Vec<Result<char>> = Codepoints::new(&units).collect();
        assert_eq!(
            items,
            vec![
                Ok('a'),
                Err(Error::UnpairedSurrogate { position: 1, unit: 0xd83d }),
                Ok('😩'),
            ]
        );
    }

    #[test]
    fn test_codepoints_lone_low_surrogates() {
        // A low surrogate never opens a pair, even when a high one follows.
        let units = [0xdc00, 0xdfff, 0xd83d, 0xde29, 0xdc00];
        let items: Vec<Result<char>> = Codepoints::new(&units).collect();
        assert_eq!(
            items,
            vec![
                Err(Error::UnpairedSurrogate { position: 0, unit: 0xdc00 }),
                Err(Error::UnpairedSurrogate { position: 1, unit: 0xdfff }),
                Ok('😩'),
                Err(Error::UnpairedSurrogate { position: 4, unit: 0xdc00 }),
            ]
        );
    }

    #[test]
    fn test_codepoints_restartable() {
        let units = [0x24, 0xd83d, 0xde29, 0xa2];
        let first: Vec<_> = Codepoints::new(&units).collect();
        let second: Vec<_> = Codepoints::new(&units).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_codepoints_position() {
        let units = [0xd83d, 0xde29, 0x24];
        let mut iter = Codepoints::new(&units);
        assert_eq!(iter.position(), 0);
        iter.next();
        assert_eq!(iter.position(), 2);
        iter.next();
        assert_eq!(iter.position(), 3);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
