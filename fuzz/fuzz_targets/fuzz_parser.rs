#![no_main]

use csvlex::{ErrorSource, parse_str};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    match parse_str(data) {
        Ok(document) => {
            // A parse is always attempted once, so a document is never
            // empty, and every record holds at least one cell.
            assert!(!document.is_empty());
            assert!(document.iter().all(|record| !record.is_empty()));
        }
        Err(err) => {
            // String sources cannot fail to read.
            assert!(matches!(err.source, ErrorSource::Syntax(_)));
        }
    }

    // Pure function of the input.
    assert_eq!(parse_str(data), parse_str(data));
});
