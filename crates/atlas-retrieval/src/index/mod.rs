//! TF-IDF index over the corpus, built once and read-only afterwards.
//!
//! Each entry contributes `question + " " + answer`. Weights are
//! `tf' * idf` with `tf' = 1 + ln(tf)` and `idf = ln((1 + n) / (1 + df)) + 1`,
//! then each vector is L2-normalized so cosine similarity is a dot product.

pub mod sparse;
pub mod vocabulary;
pub mod weighting;

use std::collections::BTreeMap;

use atlas_core::config::RetrievalConfig;
use atlas_core::traits::ICorpusStore;
use tracing::info;

use crate::tokenizer::Tokenizer;

pub use sparse::SparseVector;
pub use vocabulary::Vocabulary;

/// Vocabulary, idf table, and normalized document matrix.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    tokenizer: Tokenizer,
    vocabulary: Vocabulary,
    documents: Vec<SparseVector>,
    sublinear_tf: bool,
}

impl TfIdfIndex {
    /// Vectorize every entry of `corpus`.
    pub fn build(corpus: &dyn ICorpusStore, config: &RetrievalConfig) -> Self {
        let tokenizer = Tokenizer::from_config(config);
        let term_lists: Vec<Vec<String>> = (0..corpus.size())
            .filter_map(|i| corpus.entry(i))
            .map(|entry| tokenizer.terms(&entry.document_text()))
            .collect();

        let vocabulary = Vocabulary::build(&term_lists, config.max_df);
        let mut index = Self {
            tokenizer,
            vocabulary,
            documents: Vec::with_capacity(term_lists.len()),
            sublinear_tf: config.sublinear_tf,
        };
        let documents = term_lists.iter().map(|terms| index.weigh(terms)).collect();
        index.documents = documents;

        info!(
            documents = index.documents.len(),
            vocabulary = index.vocabulary.len(),
            max_df = config.max_df,
            "tf-idf index built"
        );
        index
    }

    /// Project `text` into the frozen vocabulary. Unknown terms are ignored.
    pub fn vectorize(&self, text: &str) -> SparseVector {
        self.weigh(&self.tokenizer.terms(text))
    }

    /// Cosine similarity of `query` against every document, in corpus order.
    pub fn similarities(&self, query: &SparseVector) -> Vec<f64> {
        self.documents.iter().map(|doc| query.dot(doc)).collect()
    }

    pub fn document(&self, index: usize) -> Option<&SparseVector> {
        self.documents.get(index)
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn weigh(&self, terms: &[String]) -> SparseVector {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for term in terms {
            if let Some(column) = self.vocabulary.column(term) {
                *counts.entry(column).or_default() += 1;
            }
        }
        SparseVector::from_sorted(counts.into_iter().map(|(column, tf)| {
            let weight =
                weighting::scaled_tf(tf, self.sublinear_tf) * self.vocabulary.idf(column);
            (column, weight)
        }))
        .l2_normalized()
    }
}

#[cfg(test)]
mod tests {
    use atlas_core::models::Entry;

    use super::*;

    struct Entries(Vec<Entry>);

    impl ICorpusStore for Entries {
        fn entry(&self, index: usize) -> Option<&Entry> {
            self.0.get(index)
        }
        fn size(&self) -> usize {
            self.0.len()
        }
    }

    fn corpus(docs: &[(&str, &str)]) -> Entries {
        Entries(
            docs.iter()
                .enumerate()
                .map(|(i, (q, a))| Entry::new(format!("e{i}"), "", *q, *a, vec![]))
                .collect(),
        )
    }

    #[test]
    fn document_vectors_are_unit_length() {
        let c = corpus(&[
            ("Tomato watering?", "Water tomatoes twice weekly."),
            ("Rose pruning?", "Prune roses in winter."),
        ]);
        let index = TfIdfIndex::build(&c, &RetrievalConfig::default());
        for i in 0..index.document_count() {
            let norm = index.document(i).unwrap().norm();
            assert!((norm - 1.0).abs() < 1e-9, "doc {i} norm {norm}");
        }
    }

    #[test]
    fn stop_word_only_entry_has_zero_vector() {
        let c = corpus(&[("What is it?", "It is what it is."), ("Compost?", "Turn compost.")]);
        let index = TfIdfIndex::build(&c, &RetrievalConfig::default());
        assert!(index.document(0).unwrap().is_empty());
        assert!(!index.document(1).unwrap().is_empty());
    }

    #[test]
    fn unknown_query_terms_contribute_nothing() {
        let c = corpus(&[("Tomato watering?", "Water tomatoes."), ("Roses?", "Prune roses.")]);
        let index = TfIdfIndex::build(&c, &RetrievalConfig::default());
        assert!(index.vectorize("capital france").is_empty());
    }

    #[test]
    fn single_term_query_scores_that_terms_document_weight() {
        let c = corpus(&[("Tomato?", "Water."), ("Roses?", "Prune.")]);
        let index = TfIdfIndex::build(&c, &RetrievalConfig::default());
        let q = index.vectorize("tomato tomato");
        // "tomato tomato" is not a vocabulary bigram, so only the unigram survives.
        assert_eq!(q.len(), 1);
        let col = index.vocabulary().column("tomato").unwrap();
        assert!((q.get(col) - 1.0).abs() < 1e-12);
        let sims = index.similarities(&q);
        assert!((sims[0] - index.document(0).unwrap().get(col)).abs() < 1e-12);
        assert_eq!(sims[1], 0.0);
    }

    #[test]
    fn sublinear_toggle_changes_weights() {
        let c = corpus(&[
            ("Tax tax tax filing?", "Tax forms."),
            ("Roses?", "Prune roses."),
        ]);
        let sub = TfIdfIndex::build(&c, &RetrievalConfig::default());
        let raw = TfIdfIndex::build(
            &c,
            &RetrievalConfig {
                sublinear_tf: false,
                ..RetrievalConfig::default()
            },
        );
        let col = sub.vocabulary().column("tax").unwrap();
        assert!(raw.document(0).unwrap().get(col) > sub.document(0).unwrap().get(col));
    }

    #[test]
    fn empty_corpus_builds_empty_index() {
        let index = TfIdfIndex::build(&corpus(&[]), &RetrievalConfig::default());
        assert_eq!(index.document_count(), 0);
        assert!(index.vocabulary().is_empty());
    }
}
