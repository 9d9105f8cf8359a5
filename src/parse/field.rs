// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-field extraction from a BibTeX entry block.
//!
//! A field looks like `key = "value",` or `key = {value},`. The key matches
//! case-insensitively, whitespace (newlines included) may surround the `=`,
//! and the value lives on the line it opens on. The value ends at the LAST
//! matching closer on that line that is followed by a comma, so nested braces
//! like `{{BERT}: Pre-training}` and embedded quotes survive intact.
//!
//! `abstract` is usually the last field of an entry and may have no trailing
//! comma, so for it the comma is optional: the last closer on the line wins.
//!
//! If an occurrence of the key does not yield a value, later occurrences are
//! tried. A key only matches at a field-name boundary, so `booktitle` never
//! stands in for `title`.

/// Whether a value must be followed by a comma to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `key = "value",`
    Comma,
    /// `key = "value"` with or without the comma.
    OptionalComma,
}

/// Extract the raw value of `key` from `block`, or `None` if no occurrence of
/// the key carries a well-formed value.
pub fn extract_field<'a>(block: &'a str, key: &str, terminator: Terminator) -> Option<&'a str> {
    let bytes = block.as_bytes();
    let key_len = key.len();
    if key_len == 0 || bytes.len() < key_len {
        return None;
    }

    let mut start = 0;
    while start + key_len <= bytes.len() {
        let candidate = &bytes[start..start + key_len];
        if candidate.eq_ignore_ascii_case(key.as_bytes()) && at_name_boundary(bytes, start) {
            if let Some(value) = value_after_key(block, start + key_len, terminator) {
                return Some(value);
            }
        }
        start += 1;
    }
    None
}

/// A key must not be the tail of a longer identifier (`booktitle`).
fn at_name_boundary(bytes: &[u8], start: usize) -> bool {
    match start.checked_sub(1).map(|i| bytes[i]) {
        None => true,
        Some(prev) => !(prev.is_ascii_alphanumeric() || prev == b'_' || prev >= 0x80),
    }
}

/// Parse `\s* = \s* <open> value <close>[,]` starting right after the key.
fn value_after_key(block: &str, mut pos: usize, terminator: Terminator) -> Option<&str> {
    let bytes = block.as_bytes();

    pos = skip_whitespace(bytes, pos);
    if bytes.get(pos) != Some(&b'=') {
        return None;
    }
    pos = skip_whitespace(bytes, pos + 1);

    let close = match bytes.get(pos)? {
        b'"' => b'"',
        b'{' => b'}',
        _ => return None,
    };
    let value_start = pos + 1;

    // The value cannot span lines.
    let line_end = bytes[value_start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |offset| value_start + offset);
    let line = &bytes[value_start..line_end];

    let value_end = line.iter().enumerate().rev().find_map(|(i, &b)| {
        if b != close {
            return None;
        }
        match terminator {
            Terminator::OptionalComma => Some(i),
            Terminator::Comma if line.get(i + 1) == Some(&b',') => Some(i),
            Terminator::Comma => None,
        }
    })?;

    // Both ends sit next to ASCII delimiters, so they are char boundaries.
    Some(&block[value_start..value_start + value_end])
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}
