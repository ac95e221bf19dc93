//! Decoding of the two-digit hex pair that follows a `~` introducer.
//!
//! [`HexPairBuffer`] collects exactly two characters as they are scanned and
//! only judges them once both are present, so that `~XY` is reported as one
//! invalid sequence and `~X` followed by the end of input is reported as a
//! truncated escape. Digits are case-insensitive.

use crate::error::SyntaxError;

/// Convert a single ASCII hex digit into its 0..=15 value.
#[inline]
pub(crate) fn hex_val(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Uppercase hex digit for a nibble in 0..=15.
#[inline]
pub(crate) fn hex_digit(nibble: u8) -> u8 {
    b"0123456789ABCDEF"[usize::from(nibble & 0x0F)]
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Holds the first character of a pending hex pair.
pub(crate) struct HexPairBuffer {
    high: Option<char>,
}

impl HexPairBuffer {
    pub fn new() -> Self {
        Self { high: None }
    }

    /// Feeds one character of the pair.
    ///
    /// - Returns `None` after the first character.
    /// - Returns `Some(Ok(byte))` after the second character when both are hex
    ///   digits, `Some(Err(_))` otherwise. The buffer is empty again in both
    ///   cases.
    pub fn feed(&mut self, c: char) -> Option<Result<u8, SyntaxError>> {
        let Some(high) = self.high.take() else {
            self.high = Some(c);
            return None;
        };

        Some(match (hex_val(high), hex_val(c)) {
            (Some(h), Some(l)) => Ok((h << 4) | l),
            _ => Err(SyntaxError::InvalidHexSequence(high, c)),
        })
    }
}
