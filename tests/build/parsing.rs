//! Tests for bibliography parsing.

use super::common::{render_bibliography, BibEntry, ACL_FIXTURE, FIXTURE_BLOCKS, FIXTURE_RECORDS};
use bibrank::{load_corpus, parse_records, parse_records_with_stats};
use std::io::Write;

#[test]
fn test_fixture_stats() {
    let (records, stats) = parse_records_with_stats(ACL_FIXTURE);
    assert_eq!(stats.blocks, FIXTURE_BLOCKS);
    assert_eq!(stats.without_abstract, 1, "keynote has no abstract");
    assert_eq!(stats.incomplete, 1, "dialogue entry has no url");
    assert_eq!(stats.records, FIXTURE_RECORDS);
    assert_eq!(records.len(), FIXTURE_RECORDS);
}

#[test]
fn test_fixture_records_in_file_order() {
    let titles: Vec<String> = parse_records(ACL_FIXTURE)
        .into_iter()
        .map(|r| r.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Graph Neural Networks for Molecule Property Prediction",
            "Transfer Learning for Low-Resource Translation",
            "Lexicon-Based Sentiment Analysis of {S}panish Reviews",
            "{BERT}-based Dependency Parsing",
            "Robust Speech Recognition",
        ]
    );
}

#[test]
fn test_wrapped_author_lists_are_joined() {
    let records = parse_records(ACL_FIXTURE);
    assert_eq!(records[0].author, "Smith, Alice and Jones, Bob");
    assert_eq!(records[1].author, "Lee, Min and Park, Ji-woo and Kim, Soo");
}

#[test]
fn test_braced_entry_fields() {
    let records = parse_records(ACL_FIXTURE);
    let chen = &records[3];
    assert_eq!(chen.author, "Chen, Wei");
    assert_eq!(chen.year, "2022");
    assert_eq!(chen.url, "https://aclanthology.org/2022.parse-1.2");
    assert_eq!(
        chen.abstract_text,
        "Dependency parsing with pretrained transformers improves accuracy on treebanks."
    );
}

#[test]
fn test_booktitle_does_not_satisfy_title() {
    let text = render_bibliography(&[BibEntry::new("k").without("title")]);
    let (records, stats) = parse_records_with_stats(&text);
    assert!(records.is_empty());
    assert_eq!(stats.incomplete, 1);
}

#[test]
fn test_other_entry_types_are_ignored() {
    let text = "@article{a,\n title = \"T\",\n abstract = \"x y\",\n}\n";
    let (records, stats) = parse_records_with_stats(text);
    assert!(records.is_empty());
    assert_eq!(stats.blocks, 0);
}

#[test]
fn test_crlf_line_endings() {
    let text = render_bibliography(&[BibEntry::new("w")]).replace('\n', "\r\n");
    let records = parse_records(&text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author, "Writer, First w and Second, Person");
}

#[test]
fn test_load_and_parse_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ACL_FIXTURE.as_bytes()).unwrap();
    let text = load_corpus(file.path()).unwrap();
    assert_eq!(parse_records(&text).len(), FIXTURE_RECORDS);
}
