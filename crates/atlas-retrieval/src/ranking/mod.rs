//! Score filtering and deterministic ordering.

use std::cmp::Ordering;

/// A corpus position and its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredIndex {
    pub index: usize,
    pub score: f64,
}

/// Keep scores above `min_score`, order by score descending then corpus
/// index ascending, and truncate to `top_k`.
pub fn rank(scores: &[f64], min_score: f64, top_k: usize) -> Vec<ScoredIndex> {
    let mut ranked: Vec<ScoredIndex> = scores
        .iter()
        .enumerate()
        .filter(|&(_, &score)| score > min_score)
        .map(|(index, &score)| ScoredIndex { index, score })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.index.cmp(&b.index))
    });
    ranked.truncate(top_k);
    ranked
}
