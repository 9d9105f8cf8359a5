// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record extraction from raw BibTeX text.
//!
//! Best effort: the input is split on `@inproceedings{`, every block
//! that yields all five fields becomes a [`PaperRecord`], and everything else
//! is dropped without an error. A file with zero usable entries parses to an
//! empty corpus, which the rest of the pipeline handles as a normal case.
//!
//! The drops are still counted in [`ParseStats`] so `inspect` and the debug
//! log can tell you how much of a file was usable.

mod field;

pub use field::{extract_field, Terminator};

use serde::Serialize;
use tracing::debug;

use crate::types::PaperRecord;

/// Literal that opens every entry we index.
pub const ENTRY_DELIMITER: &str = "@inproceedings{";

/// What happened to each block during parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStats {
    /// Blocks following an entry delimiter.
    pub blocks: usize,
    /// Blocks skipped because the word `abstract` never appears.
    pub without_abstract: usize,
    /// Blocks with an abstract token but a missing or malformed field.
    pub incomplete: usize,
    /// Records produced.
    pub records: usize,
}

/// Parse every complete entry in `text`, in order of appearance.
pub fn parse_records(text: &str) -> Vec<PaperRecord> {
    parse_records_with_stats(text).0
}

/// Like [`parse_records`], also reporting how many blocks were dropped and why.
pub fn parse_records_with_stats(text: &str) -> (Vec<PaperRecord>, ParseStats) {
    let mut stats = ParseStats::default();
    let mut records = Vec::new();

    for block in text.split(ENTRY_DELIMITER).skip(1) {
        stats.blocks += 1;

        if !block.contains("abstract") {
            stats.without_abstract += 1;
            continue;
        }

        match parse_block(block) {
            Some(record) => records.push(record),
            None => stats.incomplete += 1,
        }
    }

    stats.records = records.len();
    debug!(
        blocks = stats.blocks,
        without_abstract = stats.without_abstract,
        incomplete = stats.incomplete,
        records = stats.records,
        "parsed bibliography"
    );

    (records, stats)
}

/// Turn one entry block into a record, or `None` if any field is missing.
fn parse_block(block: &str) -> Option<PaperRecord> {
    let block = join_author_lines(block);

    let title = extract_field(&block, "title", Terminator::Comma)?;
    let author = extract_field(&block, "author", Terminator::Comma)?;
    let abstract_text = extract_field(&block, "abstract", Terminator::OptionalComma)?;
    let year = extract_field(&block, "year", Terminator::Comma)?;
    let url = extract_field(&block, "url", Terminator::Comma)?;

    if abstract_text.is_empty() {
        return None;
    }

    Some(PaperRecord {
        title: title.to_string(),
        author: collapse_whitespace(author),
        abstract_text: abstract_text.to_string(),
        year: year.to_string(),
        url: url.to_string(),
    })
}

/// Author lists wrap as `A and\n   B`. Pull the continuation onto the `and`
/// line so the single-line field scanner sees the whole list.
fn join_author_lines(block: &str) -> String {
    block.replace("and\r\n", "and ").replace("and\n", "and ")
}

/// Collapse every whitespace run to a single space.
///
/// Leading and trailing runs become a single space too rather than being
/// trimmed; the value between the delimiters is kept as written.
fn collapse_whitespace(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_space = false;
    for c in value.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
