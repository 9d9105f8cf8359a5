// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Sample size, seed, result cap and noise threshold are all fields here,
//! with the constants below as defaults. The binary layers a JSON file and
//! CLI/env overrides on top of `Default`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Upper bound on how many records are indexed.
pub const DEFAULT_SAMPLE_SIZE: usize = 500;

/// Largest sample a [`crate::DocId`] can address.
pub const MAX_SAMPLE_SIZE: usize = u32::MAX as usize;

/// Seed for the corpus sampler.
pub const DEFAULT_SEED: u64 = 42;

/// Maximum number of hits returned per query.
pub const DEFAULT_TOP_K: usize = 5;

/// Scores must be strictly greater than this to be reported.
pub const NOISE_THRESHOLD: f64 = 0.001;

/// Which stop-word list the analyzer removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// The scikit-learn `ENGLISH_STOP_WORDS` list.
    #[default]
    English,
    /// Keep every token.
    None,
}

/// Tokenizer settings shared by indexing and querying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    pub lowercase: bool,
    /// Requires the `unicode-normalization` feature; ignored without it.
    pub strip_accents: bool,
    pub stop_words: StopWords,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_accents: false,
            stop_words: StopWords::English,
        }
    }
}

/// Settings for building and querying an [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub sample_size: usize,
    pub seed: u64,
    pub top_k: usize,
    pub min_score: f64,
    pub analyzer: AnalyzerConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
            top_k: DEFAULT_TOP_K,
            min_score: NOISE_THRESHOLD,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load a config from a JSON file. Missing keys fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EngineConfig = serde_json::from_str(&raw).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the ranker cannot use.
    ///
    /// Sampled documents are addressed by a `u32` [`crate::DocId`], so the
    /// sample is capped at [`MAX_SAMPLE_SIZE`]. Cosine scores live in `[0, 1]`, so a threshold outside `[0, 1)` either
    /// lets nothing through or is meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.sample_size > MAX_SAMPLE_SIZE {
            return Err(Error::InvalidConfig {
                field: "sampleSize",
                reason: format!("must be at most {}, got {}", MAX_SAMPLE_SIZE, self.sample_size),
            });
        }
        if !self.min_score.is_finite() {
            return Err(Error::InvalidConfig {
                field: "minScore",
                reason: format!("must be finite, got {}", self.min_score),
            });
        }
        if !(0.0..1.0).contains(&self.min_score) {
            return Err(Error::InvalidConfig {
                field: "minScore",
                reason: format!("must be in [0, 1), got {}", self.min_score),
            });
        }
        Ok(())
    }
}
