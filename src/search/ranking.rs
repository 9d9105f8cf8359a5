// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted.
//!
//! Sort order:
//! 1. **Score** - descending, higher similarity first
//! 2. **Doc ID** - ascending, the earlier sampled document wins a tie
//!
//! Scores are finite cosines in `[0, 1]`, but `total_cmp` keeps the order
//! total even if a NaN ever slips through.

use std::cmp::Ordering;

/// A document position and its similarity, before records are attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub doc: usize,
    pub score: f64,
}

/// Compare two scored documents for ranking.
pub fn compare_scored(a: &Scored, b: &Scored) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.doc.cmp(&b.doc),
        ord => ord,
    }
}

/// Sort by score, then truncate to `k`, then drop anything at or below
/// `min_score`.
///
/// Filtering happens after truncation. Because the list is already sorted,
/// everything outside the top `k` scores no higher than what was kept, so
/// filtering first would select the same documents.
pub fn rank(mut scored: Vec<Scored>, k: usize, min_score: f64) -> Vec<Scored> {
    scored.sort_by(compare_scored);
    scored.truncate(k);
    scored.retain(|s| s.score > min_score);
    scored
}
