//! # atlas-core
//!
//! Foundation crate for the ATLAS business Q&A retriever.
//! Defines the entry and hit models, the corpus/retriever traits, the error
//! taxonomy, configuration, and constants. Every other crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AtlasConfig;
pub use errors::{AtlasError, AtlasResult};
pub use models::{Entry, RetrievalHit};
pub use traits::{ICorpusStore, IRetriever};
