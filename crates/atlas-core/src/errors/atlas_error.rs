use super::{CorpusError, RetrievalError};

/// Top-level error for every ATLAS crate.
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("corpus error: {0}")]
    CorpusError(#[from] CorpusError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type AtlasResult<T> = Result<T, AtlasError>;
