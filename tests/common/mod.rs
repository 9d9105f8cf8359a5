//! Shared test utilities and fixtures.

#![allow(dead_code)]

use bibrank::{Engine, EngineBuilder, EngineConfig, PaperRecord};

// Re-export canonical test utilities from bibrank::testing
pub use bibrank::testing::{make_record, make_records, render_bibliography, BibEntry};

// ============================================================================
// FIXTURE BIBLIOGRAPHY
// ============================================================================

/// A small bibliography in the ACL Anthology export layout.
///
/// Seven entry blocks: five complete records, one keynote without an abstract
/// and one entry whose `url` field is missing.
pub const ACL_FIXTURE: &str = r#"% Exported from the anthology

@proceedings{workshop-2020,
    title = "Proceedings of the Workshop",
    year = "2020",
}

@inproceedings{smith-2020-graph,
    title = "Graph Neural Networks for Molecule Property Prediction",
    author = "Smith, Alice  and
      Jones, Bob",
    booktitle = "Proceedings of the Workshop on Chemistry",
    month = jul,
    year = "2020",
    address = "Online",
    publisher = "Association for Computational Linguistics",
    url = "https://aclanthology.org/2020.chem-1.1",
    doi = "10.18653/v1/2020.chem-1.1",
    pages = "1--10",
    abstract = "We apply graph neural networks to predict molecule properties. Neural networks over graphs capture molecular structure.",
}

@inproceedings{lee-2021-translation,
    title = "Transfer Learning for Low-Resource Translation",
    author = "Lee, Min  and
      Park, Ji-woo  and
      Kim, Soo",
    booktitle = "Proceedings of the Conference on Machine Translation",
    year = "2021",
    url = "https://aclanthology.org/2021.mt-1.7",
    abstract = "We study neural machine translation for low-resource languages using transfer learning from related high-resource languages.",
}

@inproceedings{garcia-2019-sentiment,
    title = "Lexicon-Based Sentiment Analysis of {S}panish Reviews",
    author = "Garc{\'\i}a, Luis",
    booktitle = "Proceedings of the Workshop on Sentiment",
    year = "2019",
    url = "https://aclanthology.org/2019.sent-1.3",
    abstract = "A lexicon-based approach to sentiment analysis of product reviews in Spanish.",
}

@inproceedings{chen-2022-parsing,
    title = {{BERT}-based Dependency Parsing},
    author = {Chen, Wei},
    booktitle = {Proceedings of the Parsing Workshop},
    year = {2022},
    url = {https://aclanthology.org/2022.parse-1.2},
    abstract = {Dependency parsing with pretrained transformers improves accuracy on treebanks.}
}

@inproceedings{keynote-2020,
    title = "Keynote: Forty Years of Computational Linguistics",
    author = "Speaker, Invited",
    booktitle = "Proceedings of the Workshop",
    year = "2020",
    url = "https://aclanthology.org/2020.ws-1.0",
}

@inproceedings{ortiz-2021-dialogue,
    title = "Dialogue State Tracking",
    author = "Ortiz, Ana",
    booktitle = "Proceedings of the Dialogue Workshop",
    year = "2021",
    abstract = "Dialogue state tracking with slot filling for task-oriented assistants.",
}

@inproceedings{novak-2018-speech,
    title = "Robust Speech Recognition",
    author = "Nov{\'a}k, Petr",
    booktitle = "Proceedings of the Speech Workshop",
    year = "2018",
    url = "https://aclanthology.org/2018.speech-1.4",
    abstract = "Speech recognition for noisy call center audio with convolutional networks.",
}
"#;

/// Number of `@inproceedings{` blocks in [`ACL_FIXTURE`].
pub const FIXTURE_BLOCKS: usize = 7;

/// Number of complete records in [`ACL_FIXTURE`].
pub const FIXTURE_RECORDS: usize = 5;

// ============================================================================
// ENGINE HELPERS
// ============================================================================

/// Engine over the fixture with default settings.
pub fn fixture_engine() -> Engine {
    Engine::from_text(ACL_FIXTURE)
}

/// Engine over `text` with a custom config.
pub fn engine_with(config: EngineConfig, text: &str) -> Engine {
    EngineBuilder::new(config)
        .expect("test config must be valid")
        .build(text)
}

/// Engine over pre-built records with a custom config.
pub fn engine_from_records(config: EngineConfig, records: &[PaperRecord]) -> Engine {
    EngineBuilder::new(config)
        .expect("test config must be valid")
        .build_from_records(records)
}

/// Titles of the hits for `query`, best first.
pub fn hit_titles(engine: &Engine, query: &str) -> Vec<String> {
    engine
        .query(query)
        .iter()
        .map(|hit| hit.record.title.clone())
        .collect()
}

/// A corpus of `n` records, each about a distinct made-up topic word.
pub fn numbered_corpus(n: usize) -> Vec<PaperRecord> {
    (0..n)
        .map(|i| make_record(i, &format!("topic{} shared corpus text", i)))
        .collect()
}
