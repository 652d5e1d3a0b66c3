use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging and query log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter used when `ATLAS_LOG` is unset.
    pub log_level: String,
    /// Emit structured JSON lines instead of human-readable output.
    pub json_logs: bool,
    /// Maximum queries retained by the in-memory query log.
    pub query_log_capacity: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
            query_log_capacity: defaults::DEFAULT_QUERY_LOG_CAPACITY,
        }
    }
}
