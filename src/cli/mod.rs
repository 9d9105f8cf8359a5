// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bibrank command-line interface.
//!
//! Three subcommands: `search` runs one query, `repl` reads queries until
//! Ctrl-C, and `inspect` summarizes what was parsed and indexed. Engine
//! settings layer as defaults → `--config` JSON file → env vars and flags.

pub mod display;

use std::path::PathBuf;

use bibrank::{EngineConfig, Result};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "bibrank",
    about = "Rank BibTeX papers against a query by TF-IDF similarity of their abstracts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON file with engine settings (sampleSize, seed, topK, minScore, analyzer)
    #[arg(long, global = true, env = "BIBRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum number of papers to index
    #[arg(long, global = true, env = "BIBRANK_SAMPLE_SIZE")]
    pub sample_size: Option<usize>,

    /// Seed for choosing which papers are indexed
    #[arg(long, global = true, env = "BIBRANK_SEED")]
    pub seed: Option<u64>,

    /// Log pipeline statistics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank papers against a single query
    Search {
        /// Path to the .bib file
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short = 'k', long, env = "BIBRANK_TOP_K")]
        top_k: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Read queries interactively until Ctrl-C or Ctrl-D
    Repl {
        /// Path to the .bib file
        file: PathBuf,

        /// Maximum number of results per query
        #[arg(short = 'k', long, env = "BIBRANK_TOP_K")]
        top_k: Option<usize>,
    },

    /// Show parse statistics, sample size and vocabulary summary
    Inspect {
        /// Path to the .bib file
        file: PathBuf,

        /// Number of highest-IDF terms to list
        #[arg(long, default_value = "10")]
        terms: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Resolve engine settings: defaults, then the config file, then flags.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)?,
            None => EngineConfig::default(),
        };

        if let Some(sample_size) = self.sample_size {
            config.sample_size = sample_size;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        match &self.command {
            Commands::Search {
                top_k: Some(k), ..
            }
            | Commands::Repl { top_k: Some(k), .. } => config.top_k = *k,
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }

    pub fn corpus_path(&self) -> &PathBuf {
        match &self.command {
            Commands::Search { file, .. }
            | Commands::Repl { file, .. }
            | Commands::Inspect { file, .. } => file,
        }
    }
}
