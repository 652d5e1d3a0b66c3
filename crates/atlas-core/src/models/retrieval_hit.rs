use serde::{Deserialize, Serialize};

use super::Entry;

/// A ranked match, carrying the entry fields the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalHit {
    /// 1-based position in the result list.
    pub rank: usize,
    pub entry_id: String,
    pub question: String,
    pub category: String,
    pub answer: String,
    pub sources: Vec<String>,
    /// Cosine similarity in `[0, 1]`.
    pub score: f64,
}

impl RetrievalHit {
    pub fn from_entry(rank: usize, entry: &Entry, score: f64) -> Self {
        Self {
            rank,
            entry_id: entry.id.clone(),
            question: entry.question.clone(),
            category: entry.category.clone(),
            answer: entry.answer.clone(),
            sources: entry.sources.clone(),
            score,
        }
    }
}
