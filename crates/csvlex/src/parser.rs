//! The tokenizer / record builder: a deterministic state machine over a
//! [`CharSource`].
//!
//! Each record is parsed by running the machine from [`ParseState::Start`]
//! until it reaches one of the two terminal states, `RecordComplete` or
//! `InputExhausted`. One handler per state consumes the character read at
//! the top of the loop and returns the next state; `CellBoundary` is the
//! only exception, a bookkeeping state that flushes the finished
//! cell into the record without consuming anything.
//!
//! Record terminators are `\n`, `\r\n`, a bare `\r`, and end of input.
//! The `\r` lookahead is the reason the source must support pushback: a
//! character following a bare `\r` is un-read so it becomes the first
//! character of the next record.
//!
//! Quoting follows the usual doubling convention: a quoted cell may
//! contain delimiters, terminators, and doubled quotes (collapsed to one
//! literal quote). A quote inside an unquoted cell is a literal.

use alloc::{string::String, vec::Vec};
use core::convert::Infallible;

use crate::{
    error::{ErrorSource, ParseError, SyntaxError},
    source::{CharSource, StrSource},
};

/// One parsed row: the cells of a single record, in source order.
///
/// A record with N delimiters always has exactly N + 1 cells.
pub type Record = Vec<String>;

/// A fully parsed document: every record, in source order. Never empty;
/// an empty input parses to one record holding one empty cell.
pub type Document = Vec<Record>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Start,
    InUnquotedCell,
    InQuotedCell,
    QuotedCellAfterQuote,
    AfterCarriageReturn,
    CellBoundary,
    RecordComplete,
    InputExhausted,
}

/// How a record ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordEnd {
    /// A line terminator was consumed; more input may follow.
    Terminator,
    /// End of input. `consumed_any` is false when the parse attempt saw
    /// end of input immediately, without reading a single character.
    EndOfInput { consumed_any: bool },
}

/// Parses a complete CSV document from a string slice.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not well-formed CSV.
pub fn parse_str(input: &str) -> Result<Document, ParseError<Infallible>> {
    RecordParser::new(StrSource::new(input))?.parse_all()
}

/// The record-by-record CSV parser.
///
/// Owns its source and a scratch buffer for the cell under construction;
/// no state is shared between parsers, so independent documents can be
/// parsed concurrently by independent instances.
#[derive(Debug)]
pub struct RecordParser<S: CharSource> {
    source: S,
    /// Cell under construction; emptied into the record at each boundary.
    cell: String,
    line: usize,
    /// Column of the most recently read character; 0 at a line start.
    column: usize,
}

impl<S: CharSource> RecordParser<S> {
    /// Wraps `source` for parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorSource::Unsupported`] if the source reports that it
    /// cannot honor one-character pushback.
    pub fn new(source: S) -> Result<Self, ParseError<S::Error>> {
        if !source.supports_unread() {
            return Err(ParseError::new(ErrorSource::Unsupported, 1, 0));
        }
        Ok(Self {
            source,
            cell: String::new(),
            line: 1,
            column: 0,
        })
    }

    /// Parses one record, leaving the source positioned at the start of
    /// the next. The flag is `true` when end of input was reached.
    ///
    /// The terminator (if any) is consumed and appears in no cell value;
    /// a pending cell is flushed even at end of input, so the returned
    /// record always has at least one (possibly empty) cell.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on malformed quoting or a source failure.
    pub fn parse_record(&mut self) -> Result<(Record, bool), ParseError<S::Error>> {
        let (record, end) = self.next_record()?;
        Ok((record, matches!(end, RecordEnd::EndOfInput { .. })))
    }

    /// Parses records until end of input and returns them in order.
    ///
    /// A final parse attempt that consumed no characters saw only the
    /// preceding record's terminator and yields no record; an empty
    /// document still parses to one record with one empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] on malformed quoting or a source failure.
    pub fn parse_all(mut self) -> Result<Document, ParseError<S::Error>> {
        let mut records = Document::new();

        loop {
            let (record, end) = self.next_record()?;
            match end {
                RecordEnd::Terminator => records.push(record),
                RecordEnd::EndOfInput { consumed_any } => {
                    if consumed_any || records.is_empty() {
                        records.push(record);
                    }
                    return Ok(records);
                }
            }
        }
    }

    fn next_record(&mut self) -> Result<(Record, RecordEnd), ParseError<S::Error>> {
        let mut record = Record::new();
        let mut consumed_any = false;
        let mut state = ParseState::Start;

        loop {
            if state == ParseState::CellBoundary {
                self.flush_cell(&mut record);
                state = ParseState::Start;
                continue;
            }

            let current = self.read()?;
            consumed_any |= current.is_some();

            state = match state {
                ParseState::Start => self.state_start(current),
                ParseState::InUnquotedCell => self.state_unquoted_cell(current),
                ParseState::InQuotedCell => self.state_quoted_cell(current)?,
                ParseState::QuotedCellAfterQuote => self.state_after_quote(current)?,
                ParseState::AfterCarriageReturn => self.state_after_carriage_return(current),
                ParseState::CellBoundary
                | ParseState::RecordComplete
                | ParseState::InputExhausted => unreachable!("never dispatched"),
            };

            match state {
                ParseState::RecordComplete => {
                    self.flush_cell(&mut record);
                    return Ok((record, RecordEnd::Terminator));
                }
                ParseState::InputExhausted => {
                    self.flush_cell(&mut record);
                    return Ok((record, RecordEnd::EndOfInput { consumed_any }));
                }
                _ => {}
            }
        }
    }

    fn state_start(&mut self, current: Option<char>) -> ParseState {
        match current {
            Some('"') => ParseState::InQuotedCell,
            Some(',') => ParseState::CellBoundary,
            Some('\n') => ParseState::RecordComplete,
            Some('\r') => ParseState::AfterCarriageReturn,
            None => ParseState::InputExhausted,
            Some(ch) => {
                self.cell.push(ch);
                ParseState::InUnquotedCell
            }
        }
    }

    fn state_unquoted_cell(&mut self, current: Option<char>) -> ParseState {
        match current {
            Some(',') => ParseState::CellBoundary,
            Some('\n') => ParseState::RecordComplete,
            Some('\r') => ParseState::AfterCarriageReturn,
            None => ParseState::InputExhausted,
            // A quote here is an ordinary literal character.
            Some(ch) => {
                self.cell.push(ch);
                ParseState::InUnquotedCell
            }
        }
    }

    fn state_quoted_cell(
        &mut self,
        current: Option<char>,
    ) -> Result<ParseState, ParseError<S::Error>> {
        match current {
            Some('"') => Ok(ParseState::QuotedCellAfterQuote),
            None => Err(self.fail(SyntaxError::UnterminatedQuote)),
            Some(ch) => {
                self.cell.push(ch);
                Ok(ParseState::InQuotedCell)
            }
        }
    }

    fn state_after_quote(
        &mut self,
        current: Option<char>,
    ) -> Result<ParseState, ParseError<S::Error>> {
        match current {
            // Doubled quote: one literal quote, still inside the cell.
            Some('"') => {
                self.cell.push('"');
                Ok(ParseState::InQuotedCell)
            }
            Some(',') => Ok(ParseState::CellBoundary),
            Some('\n') => Ok(ParseState::RecordComplete),
            Some('\r') => Ok(ParseState::AfterCarriageReturn),
            None => Ok(ParseState::InputExhausted),
            Some(ch) => Err(self.fail(SyntaxError::InvalidCharAfterQuote(ch))),
        }
    }

    fn state_after_carriage_return(&mut self, current: Option<char>) -> ParseState {
        match current {
            Some('\n') => ParseState::RecordComplete,
            None => ParseState::InputExhausted,
            Some(ch) => {
                // The bare \r alone terminated the record; this character
                // belongs to the next one.
                self.source.unread(ch);
                self.line += 1;
                self.column = 0;
                ParseState::RecordComplete
            }
        }
    }

    fn flush_cell(&mut self, record: &mut Record) {
        record.push(core::mem::take(&mut self.cell));
    }

    fn read(&mut self) -> Result<Option<char>, ParseError<S::Error>> {
        let current = self
            .source
            .next_char()
            .map_err(|e| ParseError::new(ErrorSource::Source(e), self.line, self.column))?;
        match current {
            Some('\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        Ok(current)
    }

    fn fail(&self, error: SyntaxError) -> ParseError<S::Error> {
        ParseError::new(ErrorSource::Syntax(error), self.line, self.column)
    }
}
