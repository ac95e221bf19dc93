use alloc::vec::Vec;

use crate::{error::DecodeError, scanner::Scanner, token::TokenKind};

/// Decodes escaped text back into the bytes it represents.
///
/// Decoding is all-or-nothing: the first malformed sequence stops the scan and
/// no partially decoded output is returned.
///
/// # Errors
///
/// Returns a [`DecodeError`] carrying the byte offset at which the input was
/// found to be malformed.
///
/// # Examples
///
/// ```rust
/// assert_eq!(asciihex::decode("Hey^Jyou~^~~").unwrap(), b"Hey\nyou^~");
///
/// let err = asciihex::decode("^!").unwrap_err();
/// assert_eq!(err.to_string(), "error at position 2: invalid control character '^!'");
/// ```
pub fn decode<I: AsRef<[u8]> + ?Sized>(input: &I) -> Result<Vec<u8>, DecodeError> {
    let input = input.as_ref();
    // Plain text decodes one byte per input byte; escapes only shrink it.
    let mut out = Vec::with_capacity(input.len());
    decode_into(input, &mut out)?;
    Ok(out)
}

/// Decodes `input` and appends the bytes to `out`, returning how many were
/// appended.
///
/// On failure `out` is truncated back to the length it had on entry.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_into<I: AsRef<[u8]> + ?Sized>(
    input: &I,
    out: &mut Vec<u8>,
) -> Result<usize, DecodeError> {
    let start = out.len();

    for token in Scanner::new(input) {
        match token.kind {
            TokenKind::Byte(b) => out.push(b),
            TokenKind::EndOfInput => break,
            TokenKind::Error(source) => {
                out.truncate(start);
                let err = DecodeError::new(source, token.pos);
                log::debug!("decode failed: {err}");
                return Err(err);
            }
        }
    }

    Ok(out.len() - start)
}
