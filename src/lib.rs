//! TF-IDF retrieval over BibTeX paper abstracts.
//!
//! Give it the text of a bibliography, ask it a question in plain words, get
//! back the papers whose abstracts share the most informative terms with the
//! question. No embeddings, no persisted index: the whole pipeline is rebuilt
//! in memory on startup and is read-only afterwards.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  parse.rs   │────▶│  sample.rs  │────▶│   index/     │────▶│   search/   │
//! │ (BibTeX →   │     │ (seeded     │     │ (vocabulary, │     │ (cosine,    │
//! │ PaperRecord)│     │  subset)    │     │  tf-idf rows)│     │  top-k)     │
//! └─────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//!        │                                       ▲                    │
//!        │                               ┌───────┴──────┐             │
//!        │                               │   text/      │◀────────────┘
//!        │                               │ (tokenizer,  │
//!        │                               │  stop words) │
//!        ▼                               └──────────────┘
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 engine.rs (EngineBuilder → Engine)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use bibrank::{Engine, EngineBuilder, EngineConfig};
//!
//! let text = r#"@inproceedings{k1,
//!     title = "Molecular Graphs",
//!     author = "Doe, Jane",
//!     year = "2021",
//!     url = "https://example.org/k1",
//!     abstract = "graph neural networks for molecules",
//! }
//! "#;
//!
//! let engine = EngineBuilder::new(EngineConfig::default())
//!     .unwrap()
//!     .build(text);
//! let hits = engine.query("neural networks");
//! assert_eq!(hits[0].record.title, "Molecular Graphs");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod parse;
pub mod sample;
pub mod search;
pub mod testing;
pub mod text;
mod types;

// Re-exports for public API
pub use config::{AnalyzerConfig, EngineConfig, StopWords, MAX_SAMPLE_SIZE, NOISE_THRESHOLD};
pub use engine::{Engine, EngineBuilder};
pub use error::{Error, Result};
pub use index::{cosine_similarity, SparseVector, TfidfIndex, Vocabulary};
pub use loader::load_corpus;
pub use parse::{parse_records, parse_records_with_stats, ParseStats};
pub use sample::{sample_records, SampledSet};
pub use text::Analyzer;
pub use types::{DocId, PaperRecord, SearchHit};
