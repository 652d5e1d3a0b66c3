use atlas_core::config::RetrievalConfig;
use atlas_corpus::load_corpus;
use atlas_retrieval::RetrievalEngine;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "llc", "texas", "business", "insurance", "license", "tax", "franchise", "registered",
    "agent", "office", "compliance", "federal", "state", "the", "of", "how", "do", "I",
    "employees", "checklist", "bylaws", "zebra", "capital", "France", "?", "2024",
];

fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(WORDS), 0..8).prop_map(|w| w.join(" ")),
        ".{0,60}",
    ]
}

proptest! {
    #[test]
    fn never_errors_and_respects_top_k(q in query_strategy(), k in 1usize..10) {
        let corpus = load_corpus().unwrap();
        let engine = RetrievalEngine::new(&corpus, RetrievalConfig::default());
        let ranked = engine.rank(&q, k).unwrap();
        prop_assert!(ranked.len() <= k);
    }

    #[test]
    fn sorted_by_score_then_index(q in query_strategy()) {
        let corpus = load_corpus().unwrap();
        let engine = RetrievalEngine::new(&corpus, RetrievalConfig::default());
        let ranked = engine.rank(&q, 10).unwrap();
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].index < pair[1].index)
            );
        }
    }

    #[test]
    fn scores_are_positive_cosines(q in query_strategy()) {
        let corpus = load_corpus().unwrap();
        let engine = RetrievalEngine::new(&corpus, RetrievalConfig::default());
        for s in engine.rank(&q, 10).unwrap() {
            prop_assert!(s.score > 0.0 && s.score <= 1.0 + 1e-9, "score {}", s.score);
        }
    }

    #[test]
    fn prefix_monotonicity(q in query_strategy(), m in 1usize..7) {
        let corpus = load_corpus().unwrap();
        let engine = RetrievalEngine::new(&corpus, RetrievalConfig::default());
        let full = engine.rank(&q, 7).unwrap();
        let short = engine.rank(&q, m).unwrap();
        prop_assert_eq!(short.as_slice(), &full[..m.min(full.len())]);
    }

    #[test]
    fn idempotent(q in query_strategy()) {
        let corpus = load_corpus().unwrap();
        let engine = RetrievalEngine::new(&corpus, RetrievalConfig::default());
        prop_assert_eq!(engine.rank(&q, 5).unwrap(), engine.rank(&q, 5).unwrap());
    }

    #[test]
    fn whitespace_queries_are_empty(ws in "[ \t\n]{0,12}", k in 1usize..6) {
        let corpus = load_corpus().unwrap();
        let engine = RetrievalEngine::new(&corpus, RetrievalConfig::default());
        prop_assert!(engine.rank(&ws, k).unwrap().is_empty());
    }

    #[test]
    fn case_does_not_change_ranking(
        words in prop::collection::vec(prop::sample::select(WORDS), 1..6)
    ) {
        let corpus = load_corpus().unwrap();
        let engine = RetrievalEngine::new(&corpus, RetrievalConfig::default());
        let q = words.join(" ");
        prop_assert_eq!(engine.rank(&q, 5).unwrap(), engine.rank(&q.to_uppercase(), 5).unwrap());
    }
}
