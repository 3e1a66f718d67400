use thiserror::Error;

/// A fatal parse failure. Parsing stops at the first error; there is no
/// partial-record recovery.
#[derive(Error, Debug, PartialEq)]
#[error("{source} at {line}:{column}")]
pub struct ParseError<E> {
    /// What went wrong.
    pub source: ErrorSource<E>,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character, or 0 if the failure
    /// happened before any character was read.
    pub column: usize,
}

impl<E> ParseError<E> {
    pub(crate) fn new(source: ErrorSource<E>, line: usize, column: usize) -> Self {
        Self {
            source,
            line,
            column,
        }
    }
}

/// The cause of a [`ParseError`].
#[derive(Error, Debug, PartialEq)]
pub enum ErrorSource<E> {
    /// The underlying source failed while reading; the error is surfaced
    /// unchanged rather than reinterpreted as a format error.
    #[error("source error: {0}")]
    Source(E),
    /// The source reported that it cannot honor one-character pushback.
    /// Checked once, before parsing begins.
    #[error("source does not support one-character pushback")]
    Unsupported,
    /// The input is not well-formed CSV.
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

/// Malformed-input conditions detected by the state machine.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A quoted cell was opened but the input ended before the closing
    /// quote.
    #[error("input ended before the closing quote of a quoted cell")]
    UnterminatedQuote,
    /// A closing quote must be followed by a quote, a cell delimiter, a
    /// record delimiter, or the end of input.
    #[error("quote must be followed by a quote, cell delimiter, or record delimiter (was '{0}')")]
    InvalidCharAfterQuote(char),
}
