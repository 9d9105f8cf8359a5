// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The retrieval pipeline as a two-state object.
//!
//! [`EngineBuilder`] is the Unindexed state: it only holds configuration.
//! [`EngineBuilder::build`] consumes it and runs parse → sample → index once,
//! producing a Ready [`Engine`]. There is no way back and no re-indexing; to
//! index a different corpus, build a new engine.
//!
//! A Ready engine never mutates, so it is `Send + Sync` and can be shared
//! across threads (behind an `Arc` or a scoped borrow) without locking.

use tracing::info;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::index::TfidfIndex;
use crate::parse::{parse_records_with_stats, ParseStats};
use crate::sample::{sample_records, SampledSet};
use crate::search;
use crate::text::Analyzer;
use crate::types::{PaperRecord, SearchHit};

/// Unindexed pipeline: configuration only.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    /// Validates the config up front so a bad threshold fails before any work.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse `text`, sample it, and index the sample.
    pub fn build(self, text: &str) -> Engine {
        let (corpus, parse_stats) = parse_records_with_stats(text);
        self.assemble(&corpus, Some(parse_stats))
    }

    /// Skip parsing and index an existing corpus.
    pub fn build_from_records(self, corpus: &[PaperRecord]) -> Engine {
        self.assemble(corpus, None)
    }

    fn assemble(self, corpus: &[PaperRecord], parse_stats: Option<ParseStats>) -> Engine {
        let sample = sample_records(corpus, self.config.sample_size, self.config.seed);
        let index = TfidfIndex::build(
            sample.abstracts(),
            Analyzer::new(self.config.analyzer.clone()),
        );

        info!(
            corpus = corpus.len(),
            sampled = sample.len(),
            terms = index.vocabulary().len(),
            "engine ready"
        );

        Engine {
            config: self.config,
            corpus_len: corpus.len(),
            parse_stats,
            sample,
            index,
        }
    }
}

/// Ready pipeline: sampled records plus their TF-IDF index.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    corpus_len: usize,
    parse_stats: Option<ParseStats>,
    sample: SampledSet,
    index: TfidfIndex,
}

impl Engine {
    /// Build with default settings.
    pub fn from_text(text: &str) -> Engine {
        EngineBuilder::default().build(text)
    }

    /// Top `config.top_k` hits for `query`.
    pub fn query(&self, query: &str) -> Vec<SearchHit<'_>> {
        self.search(query, self.config.top_k)
    }

    /// Top `k` hits for `query`, each scoring above `config.min_score`.
    pub fn search(&self, query: &str, k: usize) -> Vec<SearchHit<'_>> {
        search::search(
            &self.index,
            self.sample.records(),
            query,
            k,
            self.config.min_score,
        )
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of records parsed before sampling.
    pub fn corpus_len(&self) -> usize {
        self.corpus_len
    }

    /// Parse statistics, when the engine was built from raw text.
    pub fn parse_stats(&self) -> Option<&ParseStats> {
        self.parse_stats.as_ref()
    }

    pub fn sample(&self) -> &SampledSet {
        &self.sample
    }

    pub fn index(&self) -> &TfidfIndex {
        &self.index
    }
}
