use serde::{Deserialize, Serialize};

/// Corpus source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Structured corpus file (`.json` or `.toml`). `None` uses the built-in
    /// knowledge base.
    pub path: Option<String>,
}
