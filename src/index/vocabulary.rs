// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary and IDF table.
//!
//! Column ids follow lexicographic term order, so the same set of abstracts
//! always produces the same columns regardless of document order. IDF uses
//! the smoothed form:
//!
//! ```text
//! idf(t) = ln((1 + N) / (1 + df(t))) + 1
//! ```
//!
//! The `+1` inside the ratio acts like one extra document containing every
//! term, so nothing divides by zero; the trailing `+1` keeps terms that occur
//! in every document from vanishing entirely.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Term → column mapping with per-column document frequency and IDF.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    columns: HashMap<String, u32>,
    terms: Vec<String>,
    doc_freq: Vec<usize>,
    idf: Vec<f64>,
    num_docs: usize,
}

impl Vocabulary {
    /// Build from already-tokenized documents.
    pub fn build<S: AsRef<str>>(docs: &[Vec<S>]) -> Self {
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in docs {
            let unique: BTreeSet<&str> = tokens.iter().map(|t| t.as_ref()).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let num_docs = docs.len();
        let mut columns = HashMap::with_capacity(df.len());
        let mut terms = Vec::with_capacity(df.len());
        let mut doc_freq = Vec::with_capacity(df.len());
        let mut idf = Vec::with_capacity(df.len());

        for (col, (term, count)) in df.into_iter().enumerate() {
            columns.insert(term.to_string(), col as u32);
            terms.push(term.to_string());
            doc_freq.push(count);
            idf.push(smoothed_idf(num_docs, count));
        }

        Self {
            columns,
            terms,
            doc_freq,
            idf,
            num_docs,
        }
    }

    /// Column of `term`, if it was seen while indexing.
    pub fn column(&self, term: &str) -> Option<u32> {
        self.columns.get(term).copied()
    }

    /// Term stored at `col`.
    pub fn term(&self, col: u32) -> Option<&str> {
        self.terms.get(col as usize).map(String::as_str)
    }

    pub fn idf(&self, col: u32) -> f64 {
        self.idf[col as usize]
    }

    pub fn doc_freq(&self, col: u32) -> usize {
        self.doc_freq[col as usize]
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// `(term, column)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.terms
            .iter()
            .enumerate()
            .map(|(col, term)| (term.as_str(), col as u32))
    }
}

/// `ln((1 + n) / (1 + df)) + 1`
pub fn smoothed_idf(num_docs: usize, doc_freq: usize) -> f64 {
    ((1 + num_docs) as f64 / (1 + doc_freq) as f64).ln() + 1.0
}
