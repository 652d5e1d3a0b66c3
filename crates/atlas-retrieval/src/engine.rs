//! RetrievalEngine: implements IRetriever over a corpus and its TF-IDF index.
//!
//! query → tokenize → weigh with frozen idf → cosine against every document
//! → floor → sort (score desc, index asc) → top_k.

use atlas_core::config::RetrievalConfig;
use atlas_core::errors::{AtlasResult, RetrievalError};
use atlas_core::models::RetrievalHit;
use atlas_core::traits::{ICorpusStore, IRetriever};
use tracing::debug;

use crate::index::TfIdfIndex;
use crate::ranking::{self, ScoredIndex};

/// Ranks entries of a borrowed corpus. Immutable after construction, so one
/// engine can serve concurrent callers by shared reference.
pub struct RetrievalEngine<'a> {
    corpus: &'a dyn ICorpusStore,
    index: TfIdfIndex,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    /// Build the index over `corpus`. Runs once, at startup.
    pub fn new(corpus: &'a dyn ICorpusStore, config: RetrievalConfig) -> Self {
        let index = TfIdfIndex::build(corpus, &config);
        Self {
            corpus,
            index,
            config,
        }
    }

    /// Positions and scores of the best `top_k` entries.
    pub fn rank(&self, query: &str, top_k: usize) -> AtlasResult<Vec<ScoredIndex>> {
        if top_k == 0 {
            return Err(RetrievalError::InvalidTopK { top_k }.into());
        }
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let query_vector = self.index.vectorize(query);
        if query_vector.is_empty() {
            debug!(query, "no query terms in vocabulary");
            return Ok(Vec::new());
        }

        let scores = self.index.similarities(&query_vector);
        let ranked = ranking::rank(&scores, self.config.min_score, top_k);
        debug!(
            query,
            top_k,
            terms = query_vector.len(),
            hits = ranked.len(),
            "ranked query"
        );
        Ok(ranked)
    }

    /// The rank-1 hit, if any entry clears the relevance floor.
    pub fn best_match(&self, query: &str) -> AtlasResult<Option<RetrievalHit>> {
        Ok(self.retrieve(query, 1)?.into_iter().next())
    }

    pub fn vocabulary_size(&self) -> usize {
        self.index.vocabulary().len()
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }
}

impl<'a> IRetriever for RetrievalEngine<'a> {
    fn retrieve(&self, query: &str, top_k: usize) -> AtlasResult<Vec<RetrievalHit>> {
        let ranked = self.rank(query, top_k)?;
        Ok(ranked
            .iter()
            .enumerate()
            .filter_map(|(i, scored)| {
                self.corpus
                    .entry(scored.index)
                    .map(|entry| RetrievalHit::from_entry(i + 1, entry, scored.score))
            })
            .collect())
    }
}
