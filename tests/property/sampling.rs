//! Sampler properties: bounded, without replacement, reproducible.

use bibrank::sample::sample_positions;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn prop_sample_size_is_bounded(len in 0usize..300, size in 0usize..600, seed in any::<u64>()) {
        let positions = sample_positions(len, size, seed);
        prop_assert_eq!(positions.len(), len.min(size));
    }

    #[test]
    fn prop_sample_has_no_duplicates(len in 0usize..300, size in 0usize..600, seed in any::<u64>()) {
        let positions = sample_positions(len, size, seed);
        let unique: HashSet<usize> = positions.iter().copied().collect();
        prop_assert_eq!(unique.len(), positions.len());
        prop_assert!(positions.iter().all(|&p| p < len));
    }

    #[test]
    fn prop_sample_is_reproducible(len in 0usize..300, size in 0usize..600, seed in any::<u64>()) {
        prop_assert_eq!(sample_positions(len, size, seed), sample_positions(len, size, seed));
    }
}
