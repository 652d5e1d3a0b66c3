use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{AtlasError, AtlasResult};

/// Vectorizer and ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Terms present in more than this fraction of documents are dropped
    /// from the vocabulary. Must be in `(0, 1]`.
    pub max_df: f64,
    /// Smallest n-gram length emitted by the tokenizer.
    pub ngram_min: usize,
    /// Largest n-gram length emitted by the tokenizer.
    pub ngram_max: usize,
    /// Use `1 + ln(tf)` instead of raw counts.
    pub sublinear_tf: bool,
    /// Relevance floor. Hits scoring at or below it are discarded; the
    /// default `0.0` keeps every entry sharing a weighted term with the query.
    pub min_score: f64,
    /// Result count used when the caller does not pass one.
    pub default_top_k: usize,
    /// Largest result count a caller may request from the presentation layer.
    pub max_top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_df: defaults::DEFAULT_MAX_DF,
            ngram_min: defaults::DEFAULT_NGRAM_MIN,
            ngram_max: defaults::DEFAULT_NGRAM_MAX,
            sublinear_tf: defaults::DEFAULT_SUBLINEAR_TF,
            min_score: defaults::DEFAULT_MIN_SCORE,
            default_top_k: defaults::DEFAULT_TOP_K,
            max_top_k: defaults::DEFAULT_MAX_TOP_K,
        }
    }
}

impl RetrievalConfig {
    pub fn validate(&self) -> AtlasResult<()> {
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(AtlasError::ConfigError(format!(
                "retrieval.max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        if self.ngram_min == 0 || self.ngram_min > self.ngram_max {
            return Err(AtlasError::ConfigError(format!(
                "retrieval n-gram range {}..={} is empty",
                self.ngram_min, self.ngram_max
            )));
        }
        if !(self.min_score >= 0.0) {
            return Err(AtlasError::ConfigError(format!(
                "retrieval.min_score must be non-negative, got {}",
                self.min_score
            )));
        }
        if self.default_top_k == 0 || self.default_top_k > self.max_top_k {
            return Err(AtlasError::ConfigError(format!(
                "retrieval.default_top_k must be in 1..={}, got {}",
                self.max_top_k, self.default_top_k
            )));
        }
        Ok(())
    }
}
