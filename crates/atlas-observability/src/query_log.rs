//! Query performance logging: query text, result count, top score, latency.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A single query log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub query: String,
    pub top_k: usize,
    pub result_count: usize,
    /// Score of the rank-1 hit, if there was one.
    pub top_score: Option<f64>,
    pub latency: Duration,
    pub timestamp_epoch_ms: i64,
}

impl QueryLogEntry {
    /// Create a new entry with the timestamp set to now.
    pub fn new(
        query: impl Into<String>,
        top_k: usize,
        result_count: usize,
        top_score: Option<f64>,
        latency: Duration,
    ) -> Self {
        Self {
            query: query.into(),
            top_k,
            result_count,
            top_score,
            latency,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Whether the query produced no hits.
    pub fn is_miss(&self) -> bool {
        self.result_count == 0
    }
}

/// Bounded, append-only query log. The oldest entries are dropped first.
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: Vec<QueryLogEntry>,
    max_entries: usize,
}

impl QueryLog {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Record a query.
    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            event = "query_logged",
            query = %entry.query,
            top_k = entry.top_k,
            result_count = entry.result_count,
            top_score = ?entry.top_score,
            latency_us = entry.latency.as_micros() as u64,
            "query logged"
        );

        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.drain(..self.entries.len() - self.max_entries);
        }
    }

    pub fn entries(&self) -> &[QueryLogEntry] {
        &self.entries
    }

    /// Total number of retained queries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Retained queries that found nothing.
    pub fn miss_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_miss()).count()
    }

    /// Average latency across retained queries.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let idx = ((p.clamp(0.0, 1.0) * (latencies.len() - 1) as f64).round() as usize)
            .min(latencies.len() - 1);
        latencies[idx]
    }

    /// Summary as JSON, for logging at shutdown.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "queries": self.count(),
            "misses": self.miss_count(),
            "avg_latency_us": self.avg_latency().as_micros() as u64,
            "p95_latency_us": self.latency_percentile(0.95).as_micros() as u64,
        })
    }
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::with_capacity(atlas_core::config::defaults::DEFAULT_QUERY_LOG_CAPACITY)
    }
}
