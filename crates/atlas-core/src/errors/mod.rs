//! Error taxonomy: corpus load failures are fatal at startup, an invalid
//! `top_k` is a caller contract violation. Empty queries are not errors.

pub mod atlas_error;
pub mod corpus_error;
pub mod retrieval_error;

pub use atlas_error::{AtlasError, AtlasResult};
pub use corpus_error::CorpusError;
pub use retrieval_error::RetrievalError;
