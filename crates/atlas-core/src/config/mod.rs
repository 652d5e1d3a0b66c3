//! Configuration loaded from TOML. Every section falls back to its defaults,
//! so an empty document is a valid configuration.

pub mod corpus_config;
pub mod defaults;
pub mod observability_config;
pub mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use corpus_config::CorpusConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::{AtlasError, AtlasResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    pub corpus: CorpusConfig,
    pub retrieval: RetrievalConfig,
    pub observability: ObservabilityConfig,
}

impl AtlasConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> AtlasResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| AtlasError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AtlasResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            AtlasError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&source)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> AtlasResult<()> {
        self.retrieval.validate()
    }
}
