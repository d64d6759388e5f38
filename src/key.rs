//! Transposition key: a permutation of column indices written as digits.
//!
//! A key of length `n` must contain each digit `0..n` exactly once. The key
//! length fixes the number of grid columns and the digit order fixes the
//! order in which columns are read out during encryption.

use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// Exclusive upper bound on key length.
///
/// Keeping keys below 10 characters guarantees every column index is a
/// single decimal digit.
pub const MAX_KEY_LEN: usize = 10;

/// A validated column permutation.
///
/// A `Key` can only be obtained through [`Key::validate`] (or the `FromStr` /
/// `TryFrom` impls that delegate to it), so holding one proves the digits are
/// a bijection onto `0..num_columns()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    digits: Vec<u8>,
}

impl Key {
    /// Validates a raw key string.
    ///
    /// Rules are checked in order and the first violation is returned:
    /// 1. fewer than [`MAX_KEY_LEN`] UTF-16 code units,
    /// 2. non-empty and made only of ASCII digits,
    /// 3. no digit repeats,
    /// 4. every digit in `0..len` is present.
    ///
    /// # Errors
    /// Returns the [`KeyError`] variant for the first failed rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use transposition::{Key, KeyError};
    ///
    /// let key = Key::validate("3120").unwrap();
    /// assert_eq!(key.digits(), &[3, 1, 2, 0]);
    ///
    /// assert_eq!(Key::validate("1123"), Err(KeyError::RepeatedDigit { digit: 1 }));
    /// assert_eq!(Key::validate("abc"), Err(KeyError::NotNumeric));
    /// ```
    pub fn validate(raw: &str) -> Result<Self, KeyError> {
        // Length bound is measured in UTF-16 code units.
        let units = raw.encode_utf16().count();
        if units >= MAX_KEY_LEN {
            return Err(KeyError::KeyTooLong { len: units });
        }

        // Per-byte check also rejects signs and non-ASCII numerals.
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeyError::NotNumeric);
        }

        let digits: Vec<u8> = raw.bytes().map(|b| b - b'0').collect();
        let len = digits.len();

        for (i, &digit) in digits.iter().enumerate() {
            if digits[i + 1..].contains(&digit) {
                return Err(KeyError::RepeatedDigit { digit });
            }
        }

        // len < 10, so every required index is a single digit
        for required in 0..len as u8 {
            if !digits.contains(&required) {
                return Err(KeyError::MissingDigit { digit: required });
            }
        }

        Ok(Key { digits })
    }

    /// Column indices in read-out order.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of grid columns, equal to the key length.
    pub fn num_columns(&self) -> usize {
        self.digits.len()
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::validate(s)
    }
}

impl TryFrom<&str> for Key {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Key::validate(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_permutation() {
        let key = Key::validate("3120").unwrap();
        assert_eq!(key.digits(), &[3, 1, 2, 0]);
        assert_eq!(key.num_columns(), 4);
    }

    #[test]
    fn test_single_column_key() {
        let key = Key::validate("0").unwrap();
        assert_eq!(key.num_columns(), 1);
    }

    #[test]
    fn test_longest_allowed_key() {
        let key = Key::validate("804721653").unwrap();
        assert_eq!(key.num_columns(), 9);
    }

    #[test]
    fn test_too_long_checked_first() {
        assert_eq!(
            Key::validate("0123456789"),
            Err(KeyError::KeyTooLong { len: 10 })
        );
        // Length wins over every other rule.
        assert_eq!(
            Key::validate("aaaaaaaaaaaa"),
            Err(KeyError::KeyTooLong { len: 12 })
        );
    }

    #[test]
    fn test_too_long_counts_utf16_units() {
        // 5 chars outside the BMP take 10 UTF-16 units.
        assert_eq!(
            Key::validate("\u{1D7D8}\u{1D7D9}\u{1D7DA}\u{1D7DB}\u{1D7DC}"),
            Err(KeyError::KeyTooLong { len: 10 })
        );
        assert_eq!(
            Key::validate("\u{1D7D8}\u{1D7D9}\u{1D7DA}\u{1D7DB}"),
            Err(KeyError::NotNumeric)
        );
    }

    #[test]
    fn test_not_numeric() {
        assert_eq!(Key::validate("abc"), Err(KeyError::NotNumeric));
        assert_eq!(Key::validate(""), Err(KeyError::NotNumeric));
        assert_eq!(Key::validate("+10"), Err(KeyError::NotNumeric));
        assert_eq!(Key::validate("-10"), Err(KeyError::NotNumeric));
        assert_eq!(Key::validate(" 10"), Err(KeyError::NotNumeric));
        assert_eq!(Key::validate("1\u{0660}"), Err(KeyError::NotNumeric));
    }

    #[test]
    fn test_repeated_digit_reports_first_recurrence() {
        assert_eq!(
            Key::validate("1123"),
            Err(KeyError::RepeatedDigit { digit: 1 })
        );
        assert_eq!(
            Key::validate("0212"),
            Err(KeyError::RepeatedDigit { digit: 2 })
        );
    }

    #[test]
    fn test_repeated_checked_before_missing() {
        // "00" is both repeated and missing 1.
        assert_eq!(
            Key::validate("00"),
            Err(KeyError::RepeatedDigit { digit: 0 })
        );
    }

    #[test]
    fn test_missing_digit() {
        assert_eq!(
            Key::validate("312"),
            Err(KeyError::MissingDigit { digit: 0 })
        );
        assert_eq!(Key::validate("1"), Err(KeyError::MissingDigit { digit: 0 }));
        assert_eq!(
            Key::validate("0125"),
            Err(KeyError::MissingDigit { digit: 3 })
        );
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: Key = "10".parse().unwrap();
        let b = Key::try_from("10").unwrap();
        assert_eq!(a, b);
        assert!("11".parse::<Key>().is_err());
    }

    #[test]
    fn test_display_roundtrips_raw_string() {
        let key = Key::validate("40213").unwrap();
        assert_eq!(key.to_string(), "40213");
    }
}
