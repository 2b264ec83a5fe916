use thiserror::Error;

/// Result type for UTF-16 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading serialized UTF-16 units.
///
/// The unit-level codec itself never fails; only the byte framing does.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The byte length is odd, the last unit is incomplete.
    #[error("truncated unit at offset {position}: {remaining} trailing byte(s)")]
    TruncatedUnit { position: usize, remaining: usize },
}

impl Error {
    /// Map a framing failure of the parser over `input` to the unit it
    /// stopped at.
    pub(crate) fn truncated(input: &[u8], err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        let remaining = match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.input.len(),
            nom::Err::Incomplete(_) => input.len() % 2,
        };
        Error::TruncatedUnit {
            position: input.len() - remaining,
            remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use nom::error::ErrorKind;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[0x00], &[0x00], 0, 1)]
    #[case(&[0x00, 0x24, 0xd8], &[0xd8], 2, 1)]
    fn test_truncated_from_parser_error(
        #[case] input: &[u8],
        #[case] rest: &[u8],
        #[case] position: usize,
        #[case] remaining: usize,
    ) {
        let err = nom::Err::Error(nom::error::Error::new(rest, ErrorKind::Eof));
        assert_eq!(
            Error::truncated(input, err),
            Error::TruncatedUnit { position, remaining }
        );
    }

    #[test]
    fn test_truncated_from_incomplete() {
        let err = nom::Err::Incomplete(nom::Needed::new(1));
        assert_eq!(
            Error::truncated(&[0x00, 0x24, 0xd8], err),
            Error::TruncatedUnit { position: 2, remaining: 1 }
        );
    }
}
