//! # atlas-corpus
//!
//! The Corpus Store: a fixed list of curated entries, validated once at load
//! and read-only afterwards.
//!
//! Sources:
//! - [`load_corpus`]: the compiled-in Texas business knowledge base.
//! - [`load_corpus_from_path`]: a `.json` or `.toml` file with the same fields.
//! - [`load_corpus_with_config`]: picks one of the above from [`CorpusConfig`].

pub mod builtin;
pub mod loader;
pub mod store;
pub mod validation;

use atlas_core::config::CorpusConfig;
use atlas_core::errors::CorpusError;
use tracing::info;

pub use loader::load_corpus_from_path;
pub use store::CorpusStore;

/// Build the store from the compiled-in knowledge base.
pub fn load_corpus() -> Result<CorpusStore, CorpusError> {
    let store = CorpusStore::new(builtin::entries())?;
    info!(entries = store.len(), source = "builtin", "corpus loaded");
    Ok(store)
}

/// Load from `config.path` when set, otherwise from the built-in entries.
pub fn load_corpus_with_config(config: &CorpusConfig) -> Result<CorpusStore, CorpusError> {
    match &config.path {
        Some(path) => load_corpus_from_path(path),
        None => load_corpus(),
    }
}
