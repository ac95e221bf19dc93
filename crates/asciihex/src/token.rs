use crate::error::{DecodeError, SyntaxError};

/// What the scanner produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// One decoded byte.
    Byte(u8),
    /// The input was exhausted outside of any escape. Closes the stream.
    EndOfInput,
    /// The input is malformed. Closes the stream.
    Error(SyntaxError),
}

/// One unit of scanner output, tagged with the byte offset of the cursor at
/// the moment it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The payload.
    pub kind: TokenKind,
    /// Byte offset into the input, after the characters that produced this
    /// token were consumed.
    pub pos: usize,
}

impl Token {
    /// Returns `true` if no token can follow this one.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput | TokenKind::Error(_))
    }

    /// Returns the decoded byte, if this is a [`TokenKind::Byte`].
    #[must_use]
    pub fn byte(&self) -> Option<u8> {
        match self.kind {
            TokenKind::Byte(b) => Some(b),
            _ => None,
        }
    }

    /// Converts an error token into a [`DecodeError`] positioned at this
    /// token.
    ///
    /// # Errors
    ///
    /// Returns the error carried by a [`TokenKind::Error`] token; any other
    /// token is passed through unchanged.
    pub fn into_result(self) -> Result<Self, DecodeError> {
        match self.kind {
            TokenKind::Error(source) => Err(DecodeError::new(source, self.pos)),
            _ => Ok(self),
        }
    }
}
