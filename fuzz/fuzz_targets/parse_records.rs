// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bibliography parsing.
//!
//! Real anthology exports contain unbalanced braces, stray quotes, CRLF line
//! endings and multi-byte author names. The parser has to shrug all of it off
//! and account for every `@inproceedings{` block it sees.

#![no_main]

use arbitrary::Arbitrary;
use bibrank::parse_records_with_stats;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    /// Free text spliced between entry delimiters.
    chunks: Vec<String>,
    /// Prefix each chunk with a delimiter when true.
    delimited: Vec<bool>,
}

fuzz_target!(|input: Input| {
    let mut text = String::new();
    for (i, chunk) in input.chunks.iter().enumerate() {
        if input.delimited.get(i).copied().unwrap_or(false) {
            text.push_str("@inproceedings{");
        }
        text.push_str(chunk);
    }

    let (records, stats) = parse_records_with_stats(&text);

    assert_eq!(stats.records, records.len());
    assert_eq!(
        stats.without_abstract + stats.incomplete + stats.records,
        stats.blocks,
        "every block is counted exactly once"
    );

    for record in &records {
        assert!(!record.abstract_text.is_empty());
        assert!(!record.title.contains('\n'));
        assert!(!record.url.contains('\n'));
        // Display must not panic on whatever was extracted.
        let _ = record.to_string();
    }
});
