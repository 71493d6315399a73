//! Error types for parsing, decoding, and generation failures.

use thiserror::Error;

/// The reasons a UUID cannot be parsed, decoded, or generated.
///
/// All failures are local and recoverable; the fallible constructors come with
/// `Option`-returning twins ([`Uuid::parse_or_none`](crate::Uuid::parse_or_none),
/// [`Uuid::from_slice_or_none`](crate::Uuid::from_slice_or_none)) that apply the
/// same validation when the cause is of no interest.
#[derive(Error, Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// The input did not have the expected number of bytes or characters.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// The length the input needed to have.
        expected: usize,
        /// The length the input actually had.
        actual: usize,
    },

    /// A hyphen was missing from one of the four fixed positions, or appeared
    /// somewhere else.
    #[error("invalid hyphen placement at index {index}: hyphens belong at indices 8, 13, 18, and 23")]
    InvalidSeparator {
        /// The index at which the violation was found.
        index: usize,
    },

    /// A character other than `0-9`, `a-f`, or `A-F` occupied a digit position.
    #[error("invalid character `{character}` at index {index}: expected a hexadecimal digit")]
    InvalidDigit {
        /// The offending character.
        character: char,
        /// The index of the offending character.
        index: usize,
    },

    /// The requested UUID version has no generation algorithm in this crate.
    #[error("generation of UUID version {version} is not supported")]
    Unsupported {
        /// The requested version number.
        version: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::Error;

    /// Renders a descriptive message for each error kind
    #[test]
    fn renders_a_descriptive_message_for_each_error_kind() {
        let cases: [(Error, &str); 4] = [
            (
                Error::InvalidLength {
                    expected: 36,
                    actual: 32,
                },
                "invalid length: expected 36, got 32",
            ),
            (
                Error::InvalidSeparator { index: 12 },
                "invalid hyphen placement at index 12: hyphens belong at indices 8, 13, 18, and 23",
            ),
            (
                Error::InvalidDigit {
                    character: 'g',
                    index: 6,
                },
                "invalid character `g` at index 6: expected a hexadecimal digit",
            ),
            (
                Error::Unsupported { version: 7 },
                "generation of UUID version 7 is not supported",
            ),
        ];

        for (error, message) in cases {
            assert_eq!(error.to_string(), message);
        }
    }
}
