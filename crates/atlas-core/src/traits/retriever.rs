use crate::errors::AtlasResult;
use crate::models::RetrievalHit;

/// Ranks corpus entries against a free-text query.
pub trait IRetriever: Send + Sync {
    /// Return at most `top_k` hits, best first. An empty result means no
    /// entry is similar enough. `top_k == 0` is rejected.
    fn retrieve(&self, query: &str, top_k: usize) -> AtlasResult<Vec<RetrievalHit>>;
}
