//! # atlas-observability
//!
//! Tracing subscriber setup, span helpers, and a bounded query log used by
//! the presentation layer to report retrieval latency.

pub mod query_log;
pub mod tracing_setup;

pub use query_log::{QueryLog, QueryLogEntry};
pub use tracing_setup::init_tracing;
