//! End-to-end: bibliography file on disk → engine → formatted hits.

use super::common::ACL_FIXTURE;
use bibrank::{load_corpus, Engine, EngineConfig, Error};
use std::io::Write;

#[test]
fn test_file_to_results() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ACL_FIXTURE.as_bytes()).unwrap();

    let text = load_corpus(file.path()).unwrap();
    let engine = Engine::from_text(&text);
    let hits = engine.query("dependency parsing treebanks");

    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].record.to_string(),
        "{BERT}-based Dependency Parsing (Chen, Wei, 2022). https://aclanthology.org/2022.parse-1.2."
    );
    assert!((hits[0].score - 0.6547).abs() < 1e-3);
}

#[test]
fn test_query_normalization() {
    let engine = Engine::from_text(ACL_FIXTURE);
    let plain: Vec<f64> = engine.query("neural networks").iter().map(|h| h.score).collect();
    let noisy: Vec<f64> = engine.query("Neural NETWORKS!!").iter().map(|h| h.score).collect();
    assert_eq!(plain, noisy);
}

#[test]
fn test_hits_serialize_to_json() {
    let engine = Engine::from_text(ACL_FIXTURE);
    let hits = engine.query("sentiment");
    let json = serde_json::to_value(&hits).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 1);
    let hit = &json[0];
    assert_eq!(hit["record"]["year"], "2019");
    assert_eq!(
        hit["record"]["abstract"],
        "A lexicon-based approach to sentiment analysis of product reviews in Spanish."
    );
    assert!(hit["score"].as_f64().unwrap() > 0.3);
}

#[test]
fn test_config_file_drives_engine() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"topK": 1, "minScore": 0.0}}"#).unwrap();
    let config = EngineConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.top_k, 1);
    assert_eq!(config.sample_size, 500);

    let engine = bibrank::EngineBuilder::new(config).unwrap().build(ACL_FIXTURE);
    assert_eq!(engine.query("neural networks").len(), 1);
}

#[test]
fn test_missing_corpus_reports_path() {
    let err = load_corpus(std::path::Path::new("/definitely/not/here.bib")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.bib"));
}
