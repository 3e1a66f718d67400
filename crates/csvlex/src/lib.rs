//! A streaming CSV record parser built on a one-character pushback source.
//!
//! The core is a deterministic state machine that consumes characters one
//! at a time and assembles records (rows of string cells). Input comes
//! through the [`CharSource`] trait, which requires nothing more than
//! "read the next character" and "un-read the most recent one"; no
//! seeking, no whole-document buffering.
//!
//! ```rust
//! let document = csvlex::parse_str("a,\"b,c\"\nd,e\n").unwrap();
//! assert_eq!(document, [["a", "b,c"], ["d", "e"]]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod parser;
mod source;

#[cfg(feature = "std")]
mod read;

#[cfg(test)]
mod tests;

pub use error::{ErrorSource, ParseError, SyntaxError};
pub use parser::{Document, Record, RecordParser, parse_str};
#[cfg(feature = "std")]
pub use read::{ReadSource, parse_path, parse_reader};
pub use source::{CharSource, StrSource};
