//! The forward direction: bytes to printable ASCII.
//!
//! | Byte                | Output                      |
//! |---------------------|-----------------------------|
//! | `~`                 | `~~`                        |
//! | `^`                 | `~^`                        |
//! | other `0x20..=0x7E` | the byte itself             |
//! | `0x00..=0x1F`       | `^` then `byte + 0x40`      |
//! | `0x7F`              | `^?`                        |
//! | `0x80..=0xFF`       | `~` then two uppercase hex  |

use alloc::string::String;
use core::fmt;

use crate::hex::hex_digit;

/// Escape for one byte, at most three ASCII characters long.
#[derive(Debug, Clone, Copy)]
struct ByteEscape {
    buf: [u8; 3],
    len: u8,
}

impl ByteEscape {
    #[inline]
    fn new(b: u8) -> Self {
        let (buf, len) = match b {
            b'~' => ([b'~', b'~', 0], 2),
            b'^' => ([b'~', b'^', 0], 2),
            0x20..=0x7E => ([b, 0, 0], 1),
            0x00..=0x1F => ([b'^', b + 0x40, 0], 2),
            0x7F => ([b'^', b'?', 0], 2),
            0x80..=0xFF => ([b'~', hex_digit(b >> 4), hex_digit(b)], 3),
        };
        Self { buf, len }
    }

    #[inline]
    fn as_str(&self) -> &str {
        // Every table entry is ASCII.
        core::str::from_utf8(&self.buf[..usize::from(self.len)]).unwrap_or_default()
    }
}

/// Encodes arbitrary bytes as printable ASCII. Never fails.
///
/// ```rust
/// assert_eq!(asciihex::encode(b"Hi\n^~\xFF"), "Hi^J~^~~~FF");
/// ```
#[must_use]
pub fn encode(input: &[u8]) -> String {
    let mut out = String::new();
    encode_into(input, &mut out);
    out
}

/// Appends the encoding of `input` to `out`.
pub fn encode_into(input: &[u8], out: &mut String) {
    out.reserve(encoded_len(input));
    for &b in input {
        out.push_str(ByteEscape::new(b).as_str());
    }
}

/// Exact length in bytes of `encode(input)`.
#[must_use]
pub fn encoded_len(input: &[u8]) -> usize {
    input
        .iter()
        .map(|&b| usize::from(ByteEscape::new(b).len))
        .sum()
}

/// Writes the encoding of the wrapped bytes through [`fmt::Display`] without
/// allocating.
///
/// ```rust
/// use asciihex::Escaped;
///
/// assert_eq!(format!("[{}]", Escaped(b"\x1b[0m")), "[^[[0m]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Escaped<'a>(pub &'a [u8]);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|&b| f.write_str(ByteEscape::new(b).as_str()))
    }
}
