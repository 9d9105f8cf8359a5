//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::PaperRecord;

/// Create a record whose abstract is `abstract_text` and whose other fields
/// are derived from `id`.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: usize, abstract_text: &str) -> PaperRecord {
    PaperRecord {
        title: format!("Paper {}", id),
        author: format!("Author {}", id),
        abstract_text: abstract_text.to_string(),
        year: "2020".to_string(),
        url: format!("https://example.org/{}", id),
    }
}

/// Create one record per abstract, ids in order.
pub fn make_records(abstracts: &[&str]) -> Vec<PaperRecord> {
    abstracts
        .iter()
        .enumerate()
        .map(|(id, text)| make_record(id, text))
        .collect()
}

/// Builder for an `@inproceedings{...}` block in the ACL Anthology layout.
///
/// Defaults produce a complete entry. Use [`BibEntry::field`] to override a
/// value and [`BibEntry::without`] to drop a field entirely.
#[derive(Debug, Clone)]
pub struct BibEntry {
    key: String,
    fields: Vec<(String, String)>,
    braced: bool,
}

impl BibEntry {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            fields: vec![
                ("title".to_string(), format!("Title {}", key)),
                (
                    "author".to_string(),
                    format!("Writer, First {} and\n      Second, Person", key),
                ),
                ("booktitle".to_string(), "Proceedings of the Workshop".to_string()),
                ("year".to_string(), "2020".to_string()),
                ("url".to_string(), format!("https://example.org/{}", key)),
                ("abstract".to_string(), format!("Summary of work {}.", key)),
            ],
            braced: false,
        }
    }

    /// Set or replace a field value.
    pub fn field(mut self, name: &str, value: &str) -> Self {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.fields.push((name.to_string(), value.to_string())),
        }
        self
    }

    /// Remove a field.
    pub fn without(mut self, name: &str) -> Self {
        self.fields.retain(|(n, _)| n != name);
        self
    }

    /// Render values as `{value}` instead of `"value"`.
    pub fn braced(mut self) -> Self {
        self.braced = true;
        self
    }

    pub fn render(&self) -> String {
        let (open, close) = if self.braced { ('{', '}') } else { ('"', '"') };
        let mut out = format!("@inproceedings{{{},\n", self.key);
        for (name, value) in &self.fields {
            out.push_str(&format!("    {} = {}{}{},\n", name, open, value, close));
        }
        out.push_str("}\n\n");
        out
    }
}

/// Render several entries into one bibliography string.
pub fn render_bibliography(entries: &[BibEntry]) -> String {
    entries.iter().map(BibEntry::render).collect()
}
