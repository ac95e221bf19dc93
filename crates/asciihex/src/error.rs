use thiserror::Error;

/// A failure to decode escaped text, anchored at the input offset where it was
/// detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("error at position {position}: {source}")]
pub struct DecodeError {
    pub(crate) source: SyntaxError,
    pub(crate) position: usize,
}

impl DecodeError {
    pub(crate) fn new(source: SyntaxError, position: usize) -> Self {
        Self { source, position }
    }

    /// Byte offset of the scanner cursor when the error was detected.
    ///
    /// The cursor has already consumed the offending characters, so for
    /// `"^!"` this is `2`, not the offset of the caret.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The cause of the failure.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }
}

/// Every way escaped text can be malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// An escape was opened but the input ended before it was complete.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A caret followed by a character outside `'?'..='_'`.
    #[error("invalid control character '^{0}'")]
    InvalidControlCharacter(char),
    /// A tilde followed by two characters that are not a hex pair.
    #[error("invalid hex sequence '~{0}{1}'")]
    InvalidHexSequence(char, char),
    /// A character outside printable ASCII that was not escaped.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
}
