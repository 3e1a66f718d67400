//! Character sources with one-slot pushback.
//!
//! The parser needs exactly one character of lookahead: after a bare `\r`
//! it must inspect the next character and, if it is not `\n`, hand it
//! back so the next record starts with it. A single `Option<char>` slot
//! covers that; nothing here requires a seekable stream.

use core::{convert::Infallible, str::Chars};

/// An ordered sequence of characters the parser can read from.
pub trait CharSource {
    /// Error produced while reading from the underlying input.
    type Error;

    /// Reads the next character, or `None` at end of input.
    fn next_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Returns `ch` to the source so the next read yields it again.
    ///
    /// The parser pushes back at most one character at a time, and only
    /// ever the character it just read.
    fn unread(&mut self, ch: char);

    /// Whether this source honors [`unread`](Self::unread).
    ///
    /// Checked once before parsing begins; `false` surfaces as
    /// [`ErrorSource::Unsupported`](crate::ErrorSource::Unsupported).
    fn supports_unread(&self) -> bool {
        true
    }
}

/// An infallible source over an in-memory string.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
    pushback: Option<char>,
}

impl<'a> StrSource<'a> {
    /// Creates a source reading `input` from the beginning.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            pushback: None,
        }
    }
}

impl CharSource for StrSource<'_> {
    type Error = Infallible;

    fn next_char(&mut self) -> Result<Option<char>, Infallible> {
        if let Some(ch) = self.pushback.take() {
            return Ok(Some(ch));
        }
        Ok(self.chars.next())
    }

    fn unread(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none(), "one-slot pushback occupied");
        self.pushback = Some(ch);
    }
}
