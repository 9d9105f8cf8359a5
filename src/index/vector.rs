// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sparse weight vectors and cosine similarity.
//!
//! A `SparseVector` is a list of `(column, weight)` pairs sorted by column
//! with no duplicate columns. That invariant makes dot products a linear
//! merge instead of a hash lookup per entry.

use serde::Serialize;

/// Sorted `(column, weight)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SparseVector {
    entries: Vec<(u32, f64)>,
}

impl SparseVector {
    /// Build from pairs in any order. Duplicate columns are summed and zero
    /// weights dropped.
    pub fn from_unsorted(mut entries: Vec<(u32, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(col, _)| col);
        let mut merged: Vec<(u32, f64)> = Vec::with_capacity(entries.len());
        for (col, weight) in entries {
            match merged.last_mut() {
                Some(last) if last.0 == col => last.1 += weight,
                _ => merged.push((col, weight)),
            }
        }
        merged.retain(|&(_, w)| w != 0.0);
        Self { entries: merged }
    }

    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Weight at `col`, zero if absent.
    pub fn get(&self, col: u32) -> f64 {
        self.entries
            .binary_search_by_key(&col, |&(c, _)| c)
            .map_or(0.0, |i| self.entries[i].1)
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit length. A zero vector stays zero.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for entry in &mut self.entries {
                entry.1 /= norm;
            }
        }
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Dense copy with `width` columns.
    pub fn to_dense(&self, width: usize) -> Vec<f64> {
        let mut dense = vec![0.0; width];
        for &(col, w) in &self.entries {
            if let Some(slot) = dense.get_mut(col as usize) {
                *slot = w;
            }
        }
        dense
    }
}

/// `(a · b) / (||a|| ||b||)`, or 0 when either side is the zero vector.
///
/// Clamped to `[0, 1]`: `sqrt(x) * sqrt(x)` can round below `x`, which would
/// let a vector scored against itself come out a hair above 1. Weights are
/// never negative, so the lower bound only absorbs `-0.0`.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(0.0, 1.0)
}
