//! Error types for the transposition library.

use std::fmt;

/// Reasons a candidate key string is rejected.
///
/// Validation fails fast, so a [`KeyError`] always names the first rule the
/// key violated, in the order: length, numeric form, repetition, completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Key is 10 or more UTF-16 code units long.
    KeyTooLong {
        /// Length of the rejected key, in UTF-16 code units.
        len: usize,
    },
    /// Key is empty or contains something other than the ASCII digits `0`-`9`.
    NotNumeric,
    /// A digit occurs more than once.
    RepeatedDigit {
        /// The first digit (scanning left to right) found again later in the key.
        digit: u8,
    },
    /// A digit in `0..len` does not appear in the key.
    MissingDigit {
        /// The smallest absent digit.
        digit: u8,
    },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::KeyTooLong { len } => {
                write!(
                    f,
                    "Key is too long ({} characters). Only keys shorter than 10 are allowed",
                    len
                )
            }
            KeyError::NotNumeric => {
                write!(f, "Key must consist of decimal digits only")
            }
            KeyError::RepeatedDigit { digit } => {
                write!(f, "Cannot have recurring numbers (digit {} repeats)", digit)
            }
            KeyError::MissingDigit { digit } => {
                write!(
                    f,
                    "Each digit of key must be within the range from 0 to the length of the key (digit {} is missing)",
                    digit
                )
            }
        }
    }
}

impl std::error::Error for KeyError {}
