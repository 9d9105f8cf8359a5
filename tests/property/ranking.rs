//! Ranking properties over random corpora and queries.

use super::common::engine_from_records;
use super::{abstract_strategy, corpus_strategy};
use bibrank::testing::make_records;
use bibrank::{DocId, EngineConfig};
use proptest::prelude::*;

fn engine_for(corpus: &[String]) -> bibrank::Engine {
    let refs: Vec<&str> = corpus.iter().map(String::as_str).collect();
    engine_from_records(EngineConfig::default(), &make_records(&refs))
}

proptest! {
    #[test]
    fn prop_hits_are_bounded_sorted_and_above_threshold(
        corpus in corpus_strategy(),
        query in abstract_strategy(),
        k in 0usize..10,
    ) {
        let engine = engine_for(&corpus);
        let hits = engine.search(&query, k);
        let min_score = engine.config().min_score;

        prop_assert!(hits.len() <= k);
        for hit in &hits {
            prop_assert!(hit.score > min_score);
            prop_assert!(hit.score <= 1.0);
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].doc_id < pair[1].doc_id);
            }
        }
    }

    #[test]
    fn prop_abstract_finds_itself(corpus in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let engine = engine_for(&corpus);
        let doc = pick.index(engine.sample().len());
        let row = engine.index().row(DocId(doc as u32)).unwrap();
        let text = &engine.sample().records()[doc].abstract_text;

        let hits = engine.search(text, corpus.len());
        if row.is_empty() {
            prop_assert!(hits.is_empty());
        } else {
            prop_assert!(hits[0].score <= 1.0);
            prop_assert!((hits[0].score - 1.0).abs() < 1e-9);
            prop_assert!(hits.iter().any(|h| h.doc_id == DocId(doc as u32)));
        }
    }
}
