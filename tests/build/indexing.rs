//! Tests for vocabulary and TF-IDF row construction.

use super::common::{fixture_engine, make_records, FIXTURE_RECORDS};
use bibrank::index::smoothed_idf;
use bibrank::{Analyzer, AnalyzerConfig, DocId, StopWords, TfidfIndex};

const EPSILON: f64 = 1e-9;

#[test]
fn test_fixture_vocabulary() {
    let engine = fixture_engine();
    let vocabulary = engine.index().vocabulary();
    assert_eq!(vocabulary.num_docs(), FIXTURE_RECORDS);
    assert_eq!(vocabulary.len(), 43);

    // Stop words never become columns.
    for word in ["we", "the", "for", "with", "over"] {
        assert!(vocabulary.column(word).is_none(), "{} is a stop word", word);
    }

    // "neural" appears in two abstracts, "networks" in two.
    let neural = vocabulary.column("neural").unwrap();
    assert_eq!(vocabulary.doc_freq(neural), 2);
    assert!((vocabulary.idf(neural) - smoothed_idf(5, 2)).abs() < EPSILON);
}

#[test]
fn test_rows_are_unit_length() {
    let engine = fixture_engine();
    for row in engine.index().rows() {
        assert!((row.norm() - 1.0).abs() < EPSILON);
    }
}

#[test]
fn test_columns_follow_term_order() {
    let index = TfidfIndex::build(
        ["zebra apple", "mango apple"],
        Analyzer::default(),
    );
    let vocabulary = index.vocabulary();
    assert_eq!(vocabulary.column("apple"), Some(0));
    assert_eq!(vocabulary.column("mango"), Some(1));
    assert_eq!(vocabulary.column("zebra"), Some(2));
}

#[test]
fn test_stop_words_disabled() {
    let analyzer = Analyzer::new(AnalyzerConfig {
        stop_words: StopWords::None,
        ..AnalyzerConfig::default()
    });
    let index = TfidfIndex::build(["the cat"], analyzer);
    assert!(index.vocabulary().column("the").is_some());
}

#[test]
fn test_stop_word_only_abstract_gets_empty_row() {
    let records = make_records(&["the of and", "real content here"]);
    let index = TfidfIndex::build(
        records.iter().map(|r| r.abstract_text.as_str()),
        Analyzer::default(),
    );
    assert!(index.row(DocId(0)).unwrap().is_empty());
    assert!(!index.row(DocId(1)).unwrap().is_empty());
}

#[test]
fn test_top_idf_terms_are_rarest() {
    let index = TfidfIndex::build(
        ["common rare", "common unique", "common"],
        Analyzer::default(),
    );
    let top = index.top_idf_terms(2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0, "rare");
    assert_eq!(top[1].0, "unique");
    assert!(top[0].1 > index.vocabulary().idf(index.vocabulary().column("common").unwrap()));
}
