//! Throughput of `parse_str` over documents with a mix of plain and
//! quoted cells.

#![allow(missing_docs)]

use std::fmt::Write as _;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use csvlex::parse_str;

fn document(records: usize) -> String {
    let mut out = String::new();
    for i in 0..records {
        writeln!(out, "row{i},\"quoted,cell {i}\",plain,{}", i * 7).unwrap();
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let small = document(100);
    let large = document(10_000);

    c.bench_function("parse_100_records", |b| {
        b.iter(|| parse_str(black_box(&small)).unwrap());
    });
    c.bench_function("parse_10k_records", |b| {
        b.iter(|| parse_str(black_box(&large)).unwrap());
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
