// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the engine to verify it never panics
//! and never returns results that break the ranking invariants.
//! If your search engine crashes on emoji or null bytes, you have a bad day.

#![no_main]

use bibrank::testing::make_records;
use bibrank::{Engine, EngineBuilder, EngineConfig};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

const ABSTRACTS: &[&str] = &[
    "We apply graph neural networks to predict molecule properties.",
    "Neural machine translation for low-resource languages.",
    "A lexicon-based approach to sentiment analysis of reviews.",
    "Dependency parsing with pretrained transformers.",
    "Speech recognition for noisy audio with convolutional networks.",
    "Café résumé naïve Ærø straße 東京 данные.",
];

/// The engine must survive whatever users throw at it.
fuzz_target!(|query: &[u8]| {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    let engine = ENGINE.get_or_init(|| {
        EngineBuilder::new(EngineConfig::default())
            .expect("default config is valid")
            .build_from_records(&make_records(ABSTRACTS))
    });

    let query = String::from_utf8_lossy(query);
    let min_score = engine.config().min_score;

    for k in [0, 1, 5, ABSTRACTS.len() + 1] {
        let hits = engine.search(&query, k);
        assert!(hits.len() <= k);
        for hit in &hits {
            assert!(hit.score > min_score && hit.score <= 1.0);
            assert!(hit.doc_id.as_usize() < engine.sample().len());
        }
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
});
