//! Default values for every configuration field.

// Retrieval
pub const DEFAULT_MAX_DF: f64 = 0.95;
pub const DEFAULT_NGRAM_MIN: usize = 1;
pub const DEFAULT_NGRAM_MAX: usize = 2;
pub const DEFAULT_SUBLINEAR_TF: bool = true;
pub const DEFAULT_MIN_SCORE: f64 = 0.0;
pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_MAX_TOP_K: usize = 5;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const DEFAULT_QUERY_LOG_CAPACITY: usize = 1_000;
