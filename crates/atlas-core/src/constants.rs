/// ATLAS version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query shown when the caller does not supply one.
pub const DEFAULT_QUERY: &str = "How do I properly set up an LLC in Texas?";

/// Message rendered when retrieval finds nothing above the relevance floor.
pub const NO_MATCH_MESSAGE: &str =
    "No close matches found in the knowledge base. Try rephrasing your question.";

/// Message rendered for an entry without stored sources.
pub const NO_SOURCES_MESSAGE: &str = "No specific source links stored for this prompt.";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "ATLAS_LOG";
