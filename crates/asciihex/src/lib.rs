//! A reversible caret/tilde escaping codec between binary data and printable
//! ASCII.
//!
//! Printable ASCII passes through, control characters use caret notation
//! (`^J` is a line feed, `^?` is DEL), the introducers escape themselves
//! (`~~`, `~^`), and everything else is written as `~` plus two hex digits.
//!
//! ```rust
//! let text = asciihex::encode(b"tab\there \xE2\x9C\x93");
//! assert_eq!(text, "tab^Ihere ~E2~9C~93");
//! assert_eq!(asciihex::decode(&text).unwrap(), b"tab\there \xE2\x9C\x93");
//! ```
//!
//! Decoding is driven by a [`Scanner`], an iterator of [`Token`]s that can
//! also be consumed directly.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod encode;
mod error;
mod hex;
mod scanner;
mod token;


pub use decode::{decode, decode_into};
pub use encode::{Escaped, encode, encode_into, encoded_len};
pub use error::{DecodeError, SyntaxError};
pub use scanner::{Scanner, scan};
pub use token::{Token, TokenKind};
