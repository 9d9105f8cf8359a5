// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: vectorize, score every row, rank.
//!
//! The index is read-only here. Each call allocates its own query vector and
//! score list, so any number of threads can search the same index at once.
//! With the `parallel` feature rows are scored on the rayon pool; `par_iter`
//! keeps row order, so ranking is identical to the sequential path.

pub mod ranking;

pub use ranking::{compare_scored, rank, Scored};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use crate::index::{cosine_similarity, SparseVector, TfidfIndex};
use crate::types::{DocId, PaperRecord, SearchHit};

/// Cosine similarity of `query` against every row, in row order.
pub fn score_all(index: &TfidfIndex, query: &SparseVector) -> Vec<f64> {
    if query.is_empty() {
        return vec![0.0; index.num_docs()];
    }

    #[cfg(feature = "parallel")]
    let scores: Vec<f64> = index
        .rows()
        .par_iter()
        .map(|row| cosine_similarity(query, row))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<f64> = index
        .rows()
        .iter()
        .map(|row| cosine_similarity(query, row))
        .collect();

    scores
}

/// Rank `records` (the documents `index` was built from, same order) against
/// `query`. Returns at most `k` hits, each scoring above `min_score`.
pub fn search<'a>(
    index: &TfidfIndex,
    records: &'a [PaperRecord],
    query: &str,
    k: usize,
    min_score: f64,
) -> Vec<SearchHit<'a>> {
    debug_assert_eq!(index.num_docs(), records.len());

    let query_vector = index.vectorize(query);
    let scored: Vec<Scored> = score_all(index, &query_vector)
        .into_iter()
        .enumerate()
        .map(|(doc, score)| Scored { doc, score })
        .collect();

    // Rows past u32::MAX have no DocId. EngineConfig::validate caps the
    // sample below that, so only a hand-built index can reach the skip.
    let hits: Vec<SearchHit<'a>> = rank(scored, k, min_score)
        .into_iter()
        .filter_map(|s| {
            let doc_id = DocId::try_from(s.doc).ok()?;
            Some(SearchHit {
                doc_id,
                score: s.score,
                record: &records[s.doc],
            })
        })
        .collect();

    trace!(
        query,
        query_terms = query_vector.nnz(),
        hits = hits.len(),
        "search"
    );

    hits
}
