//! Columnar transposition cipher.
//!
//! Plaintext is written row by row into a grid with one column per key digit
//! and read back column by column in the order the key lists them.
//! Decryption reverses the procedure. Characters are rearranged, never
//! altered.
//!
//! # Architecture
//!
//! ```text
//! Key::validate   (raw string → Key | KeyError, fail fast on first rule)
//!     ↓
//! codec           (encrypt / decrypt over a transient Grid)
//!     ↑
//! text_io         (file layer used by the `transposition` binary)
//! ```
//!
//! # Examples
//!
//! ```
//! use transposition::{Key, TranspositionCodec};
//!
//! let key = Key::validate("3120").unwrap();
//! let codec = TranspositionCodec::new(key);
//!
//! let cipher = codec.encrypt("WEAREDISCOVEREDFLEEATONCE");
//! assert_eq!(cipher, "RSEFAC EDOEEO AIVDEN WECRLTE");
//!
//! // Pad spaces added by encryption are kept on the way back.
//! assert_eq!(codec.decrypt(&cipher), "WEAREDISCOVEREDFLEEATONCE   ");
//! ```
//!
//! Invalid keys are rejected with the first rule they break:
//!
//! ```
//! use transposition::{Key, KeyError};
//!
//! assert_eq!(Key::validate("0123456789"), Err(KeyError::KeyTooLong { len: 10 }));
//! assert_eq!(Key::validate("312"), Err(KeyError::MissingDigit { digit: 0 }));
//! ```

#![deny(clippy::all)]

pub mod codec;
pub mod error;
pub mod key;
pub mod text_io;

pub(crate) mod grid;

pub use codec::{Mode, TranspositionCodec};
pub use error::KeyError;
pub use key::Key;
