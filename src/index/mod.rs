// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF index over the sampled abstracts.
//!
//! Two stages, each testable on its own: [`Vocabulary`] decides the columns
//! and IDF weights, then every abstract becomes an L2-normalized
//! [`SparseVector`] of `tf * idf`. Queries are vectorized against the same
//! fixed vocabulary, so terms never seen while indexing contribute nothing.
//!
//! # Invariants
//!
//! - `rows.len() == vocabulary.num_docs()`
//! - every row column is `< vocabulary.len()`
//! - every non-empty row has unit norm

mod vector;
mod vocabulary;

pub use vector::{cosine_similarity, SparseVector};
pub use vocabulary::{smoothed_idf, Vocabulary};

use std::collections::HashMap;
use tracing::debug;

use crate::text::Analyzer;
use crate::types::DocId;

/// Vocabulary, IDF table and the document × term weight matrix.
#[derive(Debug, Clone, Default)]
pub struct TfidfIndex {
    analyzer: Analyzer,
    vocabulary: Vocabulary,
    rows: Vec<SparseVector>,
}

impl TfidfIndex {
    /// Index `docs` (one string per document, in sampled-set order).
    pub fn build<'a, I>(docs: I, analyzer: Analyzer) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenized: Vec<Vec<String>> = docs.into_iter().map(|d| analyzer.tokens(d)).collect();
        let vocabulary = Vocabulary::build(&tokenized);

        let rows: Vec<SparseVector> = tokenized
            .iter()
            .map(|tokens| weigh(tokens, &vocabulary))
            .collect();

        debug!(
            docs = rows.len(),
            terms = vocabulary.len(),
            nnz = rows.iter().map(SparseVector::nnz).sum::<usize>(),
            "built tf-idf index"
        );

        Self {
            analyzer,
            vocabulary,
            rows,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Weight row for a document.
    pub fn row(&self, doc: DocId) -> Option<&SparseVector> {
        self.rows.get(doc.as_usize())
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn num_docs(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Weigh arbitrary text against the fixed vocabulary and IDF table.
    /// Returns the zero vector when no term is known.
    pub fn vectorize(&self, text: &str) -> SparseVector {
        weigh(&self.analyzer.tokens(text), &self.vocabulary)
    }

    /// The `n` terms with the highest IDF, rarest first. Ties by term order.
    pub fn top_idf_terms(&self, n: usize) -> Vec<(&str, f64)> {
        let mut terms: Vec<(&str, f64)> = self
            .vocabulary
            .iter()
            .map(|(term, col)| (term, self.vocabulary.idf(col)))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1));
        terms.truncate(n);
        terms
    }
}

/// Raw counts times IDF, L2-normalized. Unknown terms are skipped.
fn weigh<S: AsRef<str>>(tokens: &[S], vocabulary: &Vocabulary) -> SparseVector {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for token in tokens {
        if let Some(col) = vocabulary.column(token.as_ref()) {
            *counts.entry(col).or_insert(0) += 1;
        }
    }

    let mut vector = SparseVector::from_unsorted(
        counts
            .into_iter()
            .map(|(col, tf)| (col, tf as f64 * vocabulary.idf(col)))
            .collect(),
    );
    vector.l2_normalize();
    vector
}
