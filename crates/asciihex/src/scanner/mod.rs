//! Scanner: the decoding state machine and the token stream it drives.
//!
//! What it does
//! - Walks a fully materialized input one code point at a time. Code points
//!   are decoded as UTF-8; each byte of an invalid sequence is read as its
//!   own `U+FFFD` so that it is rejected by whichever state sees it.
//! - Tracks which escape it is inside of with an explicit [`LexState`] and
//!   advances it by exactly one step per loop iteration.
//! - Hands out one [`Token`] per [`Iterator::next`] call. Nothing is scanned
//!   ahead of demand, so a consumer that stops pulling stops the scanner.
//!
//! Invariants
//! - Every emission of a byte returns the machine to [`LexState::Top`].
//! - After an `EndOfInput` or `Error` token the stream is closed for good.
//! - At most one undo step is pending; it is only valid directly after
//!   `next_char` and `peek` never moves the observable position.
//!
//! Example
//! ```
//! use asciihex::{Scanner, TokenKind};
//!
//! let kinds: Vec<_> = Scanner::new("a^J").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Byte(b'a'), TokenKind::Byte(b'\n'), TokenKind::EndOfInput]
//! );
//! ```

use core::iter::FusedIterator;

use crate::{
    error::SyntaxError,
    hex::HexPairBuffer,
    token::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A character read from the input, or the end of it.
enum ReadChar {
    Char(char),
    EndOfInput,
}

use ReadChar::{Char, EndOfInput};

/// Escape states, named by what they expect next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    /// A plain character or an introducer.
    Top,
    /// One control designator in `'?'..='_'`.
    AfterCaret,
    /// `~`, `^` or the first digit of a hex pair.
    AfterTilde,
    /// The remaining digits of a hex pair.
    TildeHex,
}

/// Pull-driven decoder over a borrowed input.
///
/// Created per decode; it borrows the input and owns nothing else, so any
/// number of scanners may run over the same input independently.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    input: &'src [u8],
    pos: usize,
    /// Position before the last `next_char`, consumed by `undo`.
    undo_pos: Option<usize>,

    lex_state: LexState,
    hex: HexPairBuffer,
    closed: bool,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `input`.
    #[must_use]
    pub fn new<I: AsRef<[u8]> + ?Sized>(input: &'src I) -> Self {
        Self {
            input: input.as_ref(),
            pos: 0,
            undo_pos: None,
            lex_state: LexState::Top,
            hex: HexPairBuffer::new(),
            closed: false,
        }
    }

    /// Byte offset of the cursor. Only moves while a token is being pulled.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` once a terminal token has been handed out.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    // --- Cursor ------------------------------------------------------------

    /// Reads one code point and remembers where it started so that it can be
    /// given back with [`Self::undo`].
    #[inline]
    fn next_char(&mut self) -> ReadChar {
        self.undo_pos = Some(self.pos);

        if self.pos >= self.input.len() {
            return EndOfInput;
        }

        let (ch, len) = bstr::decode_utf8(&self.input[self.pos..]);
        match ch {
            Some(ch) => {
                self.pos += len;
                Char(ch)
            }
            // An invalid sequence is skipped one byte at a time, however long
            // its valid-looking prefix is.
            None => {
                self.pos += 1;
                Char('\u{FFFD}')
            }
        }
    }

    /// Gives back the code point returned by the last `next_char`.
    #[inline]
    fn undo(&mut self) {
        let pos = self.undo_pos.take();
        if cfg!(any(debug_assertions, feature = "fuzzing")) {
            assert!(pos.is_some(), "undo without a preceding next_char");
        }
        if let Some(pos) = pos {
            self.pos = pos;
        }
    }

    #[inline]
    fn peek(&mut self) -> ReadChar {
        let ch = self.next_char();
        self.undo();
        ch
    }

    // --- State machine -----------------------------------------------------

    #[inline]
    fn enter(&mut self, state: LexState) {
        log::trace!("scanner {:?} -> {:?} at {}", self.lex_state, state, self.pos);
        self.lex_state = state;
    }

    /// Emits a decoded byte and returns to `Top`.
    #[inline]
    fn byte(&mut self, b: u8) -> Option<TokenKind> {
        self.enter(LexState::Top);
        Some(TokenKind::Byte(b))
    }

    #[inline]
    fn error(err: SyntaxError) -> Option<TokenKind> {
        Some(TokenKind::Error(err))
    }

    /// Advances the machine by one transition. Returns a token when the
    /// transition produced one.
    fn lex_state_step(&mut self) -> Option<TokenKind> {
        use LexState::{AfterCaret, AfterTilde, TildeHex, Top};

        match self.lex_state {
            Top => match self.next_char() {
                EndOfInput => Some(TokenKind::EndOfInput),
                Char('^') => {
                    self.enter(AfterCaret);
                    None
                }
                Char('~') => {
                    self.enter(AfterTilde);
                    None
                }
                Char(c @ ' '..='~') => self.byte(c as u8),
                Char(c) => Self::error(SyntaxError::UnexpectedCharacter(c)),
            },

            AfterCaret => match self.next_char() {
                EndOfInput => Self::error(SyntaxError::UnexpectedEndOfInput),
                // `^?` wraps around to DEL.
                Char(c @ '?'..='_') => self.byte((c as u8).wrapping_sub(b'@') & 0x7F),
                Char(c) => Self::error(SyntaxError::InvalidControlCharacter(c)),
            },

            AfterTilde => match self.peek() {
                EndOfInput => Self::error(SyntaxError::UnexpectedEndOfInput),
                Char(c @ ('~' | '^')) => {
                    let _ = self.next_char();
                    self.byte(c as u8)
                }
                Char(_) => {
                    self.enter(TildeHex);
                    None
                }
            },

            TildeHex => match self.next_char() {
                EndOfInput => Self::error(SyntaxError::UnexpectedEndOfInput),
                Char(c) => match self.hex.feed(c)? {
                    Ok(b) => self.byte(b),
                    Err(err) => Self::error(err),
                },
            },
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.closed {
            return None;
        }

        loop {
            if let Some(kind) = self.lex_state_step() {
                let token = Token {
                    kind,
                    pos: self.pos,
                };
                self.closed = token.is_terminal();
                log::trace!("scanner emitted {token:?}");
                return Some(token);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.closed {
            return (0, Some(0));
        }
        // Every input byte yields at most one token, plus the terminal one.
        (1, Some(self.input.len() - self.pos + 1))
    }
}

impl FusedIterator for Scanner<'_> {}

/// Returns the token stream for `input`.
///
/// ```
/// let bytes: Vec<u8> = asciihex::scan("~~~^").filter_map(|t| t.byte()).collect();
/// assert_eq!(bytes, b"~^");
/// ```
#[must_use]
pub fn scan<I: AsRef<[u8]> + ?Sized>(input: &I) -> Scanner<'_> {
    Scanner::new(input)
}
