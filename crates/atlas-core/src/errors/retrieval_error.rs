/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("invalid top_k {top_k}: at least one result must be requested")]
    InvalidTopK { top_k: usize },
}
