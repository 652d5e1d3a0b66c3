use std::time::Duration;

use atlas_observability::{QueryLog, QueryLogEntry};

fn entry(query: &str, results: usize, ms: u64) -> QueryLogEntry {
    let top = (results > 0).then_some(0.5);
    QueryLogEntry::new(query, 3, results, top, Duration::from_millis(ms))
}

#[test]
fn empty_log_reports_zero_latency() {
    let log = QueryLog::default();
    assert_eq!(log.count(), 0);
    assert_eq!(log.avg_latency(), Duration::ZERO);
    assert_eq!(log.latency_percentile(0.5), Duration::ZERO);
}

#[test]
fn average_and_percentiles() {
    let mut log = QueryLog::with_capacity(10);
    for (i, ms) in [10, 20, 30, 40].into_iter().enumerate() {
        log.record(entry(&format!("q{i}"), 1, ms));
    }
    assert_eq!(log.avg_latency(), Duration::from_millis(25));
    assert_eq!(log.latency_percentile(0.0), Duration::from_millis(10));
    assert_eq!(log.latency_percentile(1.0), Duration::from_millis(40));
}

#[test]
fn capacity_drops_oldest_entries() {
    let mut log = QueryLog::with_capacity(2);
    log.record(entry("first", 1, 1));
    log.record(entry("second", 0, 1));
    log.record(entry("third", 2, 1));
    let queries: Vec<&str> = log.entries().iter().map(|e| e.query.as_str()).collect();
    assert_eq!(queries, vec!["second", "third"]);
}

#[test]
fn misses_are_counted() {
    let mut log = QueryLog::with_capacity(10);
    log.record(entry("capital of france", 0, 1));
    log.record(entry("llc texas", 3, 1));
    assert_eq!(log.miss_count(), 1);
    assert_eq!(log.summary()["misses"], 1);
    assert_eq!(log.summary()["queries"], 2);
}
