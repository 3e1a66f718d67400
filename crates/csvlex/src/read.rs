//! `std::io::Read`-backed character source and file helpers.

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use alloc::vec::Vec;

use crate::{
    error::{ErrorSource, ParseError},
    parser::{Document, RecordParser},
    source::CharSource,
};

const BUF_SIZE: usize = 8 * 1024;

/// A buffered, incrementally decoded UTF-8 source over any [`Read`].
///
/// Decoding uses [`bstr::decode_utf8`]; invalid sequences decode to
/// U+FFFD rather than failing, so only genuine I/O errors surface.
pub struct ReadSource<R> {
    inner: R,
    buf: Vec<u8>,
    /// Start of the not-yet-decoded region of `buf`.
    start: usize,
    eof: bool,
    pushback: Option<char>,
}

impl<R: Read> ReadSource<R> {
    /// Creates a source reading from `inner`.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_SIZE),
            start: 0,
            eof: false,
            pushback: None,
        }
    }

    /// Keep at least one full scalar's worth of bytes buffered so a
    /// multi-byte sequence is never split across refills.
    fn fill(&mut self) -> io::Result<()> {
        while !self.eof && self.buf.len() - self.start < 4 {
            if self.start > 0 {
                self.buf.drain(..self.start);
                self.start = 0;
            }
            let len = self.buf.len();
            self.buf.resize(len + BUF_SIZE, 0);
            let read = self.inner.read(&mut self.buf[len..])?;
            self.buf.truncate(len + read);
            if read == 0 {
                self.eof = true;
            }
        }
        Ok(())
    }
}

impl<R: Read> CharSource for ReadSource<R> {
    type Error = io::Error;

    fn next_char(&mut self) -> Result<Option<char>, io::Error> {
        if let Some(ch) = self.pushback.take() {
            return Ok(Some(ch));
        }
        self.fill()?;
        let (ch, len) = bstr::decode_utf8(&self.buf[self.start..]);
        if len == 0 {
            return Ok(None);
        }
        self.start += len;
        Ok(Some(ch.unwrap_or('\u{FFFD}')))
    }

    fn unread(&mut self, ch: char) {
        debug_assert!(self.pushback.is_none(), "one-slot pushback occupied");
        self.pushback = Some(ch);
    }
}

/// Parses a complete CSV document from any reader.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed CSV or an I/O failure.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document, ParseError<io::Error>> {
    RecordParser::new(ReadSource::new(reader))?.parse_all()
}

/// Opens the file at `path` and parses it as a CSV document.
///
/// # Errors
///
/// Returns [`ParseError`] on malformed CSV or an I/O failure, including
/// failure to open the file.
pub fn parse_path<P: AsRef<Path>>(path: P) -> Result<Document, ParseError<io::Error>> {
    let file =
        File::open(path).map_err(|e| ParseError::new(ErrorSource::Source(e), 1, 0))?;
    parse_reader(BufReader::new(file))
}
