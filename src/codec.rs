//! TranspositionCodec: forward and inverse columnar grid permutation.
//!
//! Encryption writes the text row-major into a grid with one column per key
//! digit and reads it back column by column in key order. Decryption fills
//! the columns in key order and reads the grid row-major.
//!
//! The unit of transposition is the `char`. When the text length is not a
//! multiple of the key length the last row is padded with spaces, and those
//! pad spaces survive a decrypt: `decrypt(encrypt(x))` is `x` right-padded to
//! the next multiple of the key length.

use log::trace;

use crate::grid::Grid;
use crate::key::Key;

/// Direction of a codec pass, chosen at runtime by callers such as the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Row-major fill, column readout in key order.
    Encrypt,
    /// Column fill in key order, row-major readout.
    Decrypt,
}

/// Length of the codec output for a text of `text_len` characters and a key
/// of `cols` columns: `ceil(text_len / cols) * cols`.
///
/// # Examples
///
/// ```
/// use transposition::codec::padded_len;
///
/// assert_eq!(padded_len(25, 4), 28);
/// assert_eq!(padded_len(24, 4), 24);
/// assert_eq!(padded_len(0, 4), 0);
/// ```
pub fn padded_len(text_len: usize, cols: usize) -> usize {
    text_len.div_ceil(cols) * cols
}

/// Encrypts `text` with `key`.
///
/// The output always holds exactly `padded_len(text.chars().count(), key.num_columns())`
/// characters. Any text, including the empty string, is accepted.
///
/// # Examples
///
/// ```
/// use transposition::{codec, Key};
///
/// let key = Key::validate("10").unwrap();
/// assert_eq!(codec::encrypt("ABCD", &key), "BDAC");
/// ```
pub fn encrypt(text: &str, key: &Key) -> String {
    let cols = key.num_columns();
    let mut grid = Grid::new(text.chars().count(), cols);
    trace!("encrypt: grid {}x{}", grid.rows(), grid.cols());

    for (i, ch) in text.chars().enumerate() {
        grid.set(i / cols, i % cols, ch);
    }

    let mut output = String::with_capacity(grid.len());
    for &col in key.digits() {
        output.extend(grid.column(col as usize));
    }
    output
}

/// Decrypts `data` with `key`.
///
/// Columns are filled in key order, `rows` characters each. If `data` runs
/// out early the remaining cells keep their space pad. The grid is then read
/// row-major with every cell, pad spaces included, so the output always
/// holds `padded_len(data.chars().count(), key.num_columns())` characters.
///
/// # Examples
///
/// ```
/// use transposition::{codec, Key};
///
/// let key = Key::validate("10").unwrap();
/// assert_eq!(codec::decrypt("BDAC", &key), "ABCD");
/// ```
pub fn decrypt(data: &str, key: &Key) -> String {
    let mut grid = Grid::new(data.chars().count(), key.num_columns());
    let rows = grid.rows();
    trace!("decrypt: grid {}x{}", rows, grid.cols());

    let mut chars = data.chars();
    'fill: for &col in key.digits() {
        for row in 0..rows {
            match chars.next() {
                Some(ch) => grid.set(row, col as usize, ch),
                None => break 'fill,
            }
        }
    }

    grid.to_row_major()
}

/// A codec bound to one validated key.
///
/// # Examples
///
/// ```
/// use transposition::{Key, TranspositionCodec};
///
/// let codec = TranspositionCodec::new(Key::validate("3120").unwrap());
/// let cipher = codec.encrypt("WEAREDISCOVEREDFLEEATONCE");
/// assert_eq!(cipher, "RSEFAC EDOEEO AIVDEN WECRLTE");
/// assert_eq!(codec.decrypt(&cipher), "WEAREDISCOVEREDFLEEATONCE   ");
/// ```
#[derive(Debug, Clone)]
pub struct TranspositionCodec {
    key: Key,
}

impl TranspositionCodec {
    /// Creates a codec that encrypts and decrypts with `key`.
    pub fn new(key: Key) -> Self {
        TranspositionCodec { key }
    }

    /// Returns the key this codec was built with.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// See [`encrypt`].
    pub fn encrypt(&self, text: &str) -> String {
        encrypt(text, &self.key)
    }

    /// See [`decrypt`].
    pub fn decrypt(&self, data: &str) -> String {
        decrypt(data, &self.key)
    }

    /// Runs the pass selected by `mode`.
    pub fn apply(&self, mode: Mode, text: &str) -> String {
        match mode {
            Mode::Encrypt => self.encrypt(text),
            Mode::Decrypt => self.decrypt(text),
        }
    }
}
