//! Tests for result ordering and the top-k cut.

use super::common::{engine_from_records, fixture_engine, hit_titles, make_records};
use bibrank::EngineConfig;

#[test]
fn test_neural_networks_ranking() {
    let engine = fixture_engine();
    assert_eq!(
        hit_titles(&engine, "neural networks"),
        vec![
            "Graph Neural Networks for Molecule Property Prediction",
            "Robust Speech Recognition",
            "Transfer Learning for Low-Resource Translation",
        ]
    );
}

#[test]
fn test_scores_descend() {
    let engine = fixture_engine();
    let hits = engine.query("neural networks");
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!((hits[0].score - 0.6054).abs() < 1e-3);
}

#[test]
fn test_top_k_cut() {
    let engine = fixture_engine();
    assert_eq!(engine.search("neural networks", 1).len(), 1);
    assert_eq!(engine.search("neural networks", 2).len(), 2);
    assert_eq!(engine.search("neural networks", 50).len(), 3);
    assert!(engine.search("neural networks", 0).is_empty());
}

#[test]
fn test_default_k_is_five() {
    let abstracts: Vec<String> = (0..8).map(|i| format!("shared word{}", i)).collect();
    let refs: Vec<&str> = abstracts.iter().map(String::as_str).collect();
    let engine = engine_from_records(EngineConfig::default(), &make_records(&refs));
    assert_eq!(engine.query("shared").len(), 5);
}

#[test]
fn test_equal_scores_keep_sample_order() {
    // Identical abstracts score identically; the earlier sampled doc wins.
    let records = make_records(&["identical text", "identical text", "identical text"]);
    let engine = engine_from_records(EngineConfig::default(), &records);
    let hits = engine.query("text");
    let ids: Vec<u32> = hits.iter().map(|h| h.doc_id.get()).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    let expected: Vec<&str> = engine
        .sample()
        .records()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    let titles: Vec<&str> = hits.iter().map(|h| h.record.title.as_str()).collect();
    assert_eq!(titles, expected);
}
