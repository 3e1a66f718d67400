//! Parses a CSV file and prints one line per record, cells separated by
//! " | ".

#![allow(missing_docs)]

use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: dump <file.csv>");
        return ExitCode::FAILURE;
    };

    match csvlex::parse_path(&path) {
        Ok(document) => {
            for record in document {
                println!("{}", record.join(" | "));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{path}: {err}");
            ExitCode::FAILURE
        }
    }
}
