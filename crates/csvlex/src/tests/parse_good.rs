use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use rstest::rstest;

use crate::{RecordParser, StrSource, parse_str};

fn doc(input: &str) -> Vec<Vec<String>> {
    parse_str(input).expect("well-formed input")
}

fn rows(expected: &[&[&str]]) -> Vec<Vec<String>> {
    expected
        .iter()
        .map(|record| record.iter().map(|cell| (*cell).to_string()).collect())
        .collect()
}

#[test]
fn empty_input_is_one_empty_record() {
    // A parse is always attempted at least once, so an empty document
    // yields a single record holding a single empty cell. Intentional;
    // callers may rely on the document never being empty.
    assert_eq!(doc(""), rows(&[&[""]]));
}

#[test]
fn single_record_without_terminator() {
    assert_eq!(doc("a,b,c"), rows(&[&["a", "b", "c"]]));
}

#[rstest]
#[case("a,b\n")]
#[case("a,b\r\n")]
#[case("a,b\r")]
fn line_endings_are_equivalent(#[case] input: &str) {
    assert_eq!(doc(input), rows(&[&["a", "b"]]));
}

#[test]
fn trailing_delimiter_yields_trailing_empty_cell() {
    assert_eq!(doc("a,"), rows(&[&["a", ""]]));
}

#[test]
fn leading_delimiter_yields_leading_empty_cell() {
    assert_eq!(doc(",a"), rows(&[&["", "a"]]));
}

#[test]
fn n_delimiters_yield_n_plus_one_cells() {
    assert_eq!(doc(",,,"), rows(&[&["", "", "", ""]]));
}

#[test]
fn multiple_records() {
    assert_eq!(doc("a,b\nc,d\n"), rows(&[&["a", "b"], &["c", "d"]]));
}

#[test]
fn end_of_input_finalizes_pending_record() {
    assert_eq!(doc("a,b\nc,d"), doc("a,b\nc,d\n"));
}

#[test]
fn blank_line_is_an_empty_record() {
    assert_eq!(doc("a\n\nb"), rows(&[&["a"], &[""], &["b"]]));
}

#[test]
fn bare_carriage_return_splits_records() {
    // The character after a bare \r is pushed back and starts the next
    // record.
    assert_eq!(doc("a\rb"), rows(&[&["a"], &["b"]]));
}

#[test]
fn mixed_line_endings() {
    assert_eq!(
        doc("a\r\nb\rc\nd"),
        rows(&[&["a"], &["b"], &["c"], &["d"]])
    );
}

#[test]
fn quoted_cell_may_contain_delimiter() {
    assert_eq!(doc("\"a,b\",c"), rows(&[&["a,b", "c"]]));
}

#[test]
fn quoted_cell_may_contain_line_terminators() {
    assert_eq!(doc("\"a\nb\",c"), rows(&[&["a\nb", "c"]]));
    assert_eq!(doc("\"a\r\nb\""), rows(&[&["a\r\nb"]]));
}

#[test]
fn doubled_quote_is_a_literal_quote() {
    assert_eq!(doc("\"a\"\"b\""), rows(&[&["a\"b"]]));
}

#[test]
fn quoted_empty_cell() {
    assert_eq!(doc("\"\",\"\""), rows(&[&["", ""]]));
}

#[test]
fn quote_inside_unquoted_cell_is_literal() {
    assert_eq!(doc("a\"b,c"), rows(&[&["a\"b", "c"]]));
}

#[test]
fn trailing_quoted_empty_cell_is_kept() {
    // Unlike a trailing terminator, the final "" consumed characters, so
    // it is a real (empty) record.
    assert_eq!(doc("a\n\"\""), rows(&[&["a"], &[""]]));
}

#[test]
fn ragged_records_are_legal() {
    // Column counts are not enforced across records.
    assert_eq!(doc("a,b,c\nd\ne,f"), rows(&[&["a", "b", "c"], &["d"], &["e", "f"]]));
}

#[test]
fn parsing_is_idempotent() {
    let input = "a,\"b\n c\",d\r\ne,,\"f\"\"g\"";
    assert_eq!(parse_str(input), parse_str(input));
}

#[test]
fn parse_record_reports_end_of_input() {
    let mut parser = RecordParser::new(StrSource::new("a,b\nc")).unwrap();

    let (record, end) = parser.parse_record().unwrap();
    assert_eq!(record, vec!["a".to_string(), "b".to_string()]);
    assert!(!end);

    let (record, end) = parser.parse_record().unwrap();
    assert_eq!(record, vec!["c".to_string()]);
    assert!(end);
}

#[test]
fn parse_record_on_empty_input() {
    let mut parser = RecordParser::new(StrSource::new("")).unwrap();
    let (record, end) = parser.parse_record().unwrap();
    assert_eq!(record, vec![String::new()]);
    assert!(end);
}
