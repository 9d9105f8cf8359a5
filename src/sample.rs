// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic corpus subsampling.
//!
//! Partial Fisher–Yates over corpus positions, driven by `ChaCha8Rng` seeded
//! from the config. The first `min(sample_size, n)` positions in draw order are the
//! sample, so the output order is the order the RNG picked records in, not
//! corpus order. Same corpus, same seed: same sample, every run.
//!
//! ChaCha's output stream is fixed for a given seed, and the bounded draw
//! below is ours rather than `Rng::gen_range`, so a `cargo update` cannot
//! change which records get indexed.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::types::PaperRecord;

/// A bounded subset of the corpus, in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledSet {
    records: Vec<PaperRecord>,
    corpus_positions: Vec<usize>,
}

impl SampledSet {
    /// The sampled records, indexed by sampled-set position.
    pub fn records(&self) -> &[PaperRecord] {
        &self.records
    }

    /// Where each sampled record sits in the original corpus.
    pub fn corpus_positions(&self) -> &[usize] {
        &self.corpus_positions
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the abstracts in sampled-set order.
    pub fn abstracts(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.abstract_text.as_str())
    }
}

/// Draw `min(sample_size, corpus.len())` corpus positions without replacement.
pub fn sample_positions(corpus_len: usize, sample_size: usize, seed: u64) -> Vec<usize> {
    let draws = sample_size.min(corpus_len);
    let mut positions: Vec<usize> = (0..corpus_len).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for i in 0..draws {
        let j = i + draw_below(&mut rng, corpus_len - i);
        positions.swap(i, j);
    }

    positions.truncate(draws);
    positions
}

/// Uniform draw from `0..bound` (Lemire's widening multiply with rejection).
///
/// `bound` must be non-zero.
fn draw_below(rng: &mut ChaCha8Rng, bound: usize) -> usize {
    let bound = bound as u64;
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let m = u128::from(rng.next_u64()) * u128::from(bound);
        if (m as u64) >= threshold {
            return (m >> 64) as usize;
        }
    }
}

/// Select the working subset of `corpus`.
pub fn sample_records(corpus: &[PaperRecord], sample_size: usize, seed: u64) -> SampledSet {
    let corpus_positions = sample_positions(corpus.len(), sample_size, seed);
    let records = corpus_positions
        .iter()
        .map(|&pos| corpus[pos].clone())
        .collect();

    debug!(
        corpus = corpus.len(),
        sampled = corpus_positions.len(),
        seed,
        "sampled corpus"
    );

    SampledSet {
        records,
        corpus_positions,
    }
}
