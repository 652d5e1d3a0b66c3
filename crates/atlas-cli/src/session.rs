//! Interactive question loop and result-count resolution.

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{bail, Result};
use atlas_core::config::RetrievalConfig;
use atlas_core::traits::IRetriever;
use atlas_observability::{QueryLog, QueryLogEntry};

use crate::render;

const QUIT_COMMANDS: &[&str] = &[":quit", ":q", ":exit"];

/// Requested result count, or the configured default. Must be in
/// `1..=max_top_k`.
pub fn resolve_top_k(requested: Option<usize>, config: &RetrievalConfig) -> Result<usize> {
    let top_k = requested.unwrap_or(config.default_top_k);
    if top_k == 0 || top_k > config.max_top_k {
        bail!("--top-k must be between 1 and {}, got {top_k}", config.max_top_k);
    }
    Ok(top_k)
}

/// Answer one question per input line until EOF or a quit command.
/// Blank lines are skipped.
pub fn run_repl(
    retriever: &dyn IRetriever,
    top_k: usize,
    log_capacity: usize,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<QueryLog> {
    let mut log = QueryLog::with_capacity(log_capacity);
    for line in input.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&query) {
            break;
        }

        let started = Instant::now();
        let hits = retriever.retrieve(query, top_k)?;
        log.record(QueryLogEntry::new(
            query,
            top_k,
            hits.len(),
            hits.first().map(|h| h.score),
            started.elapsed(),
        ));

        writeln!(output, "> {query}")?;
        write!(output, "{}", render::render_hits(&hits))?;
        writeln!(output)?;
    }
    output.flush()?;
    Ok(log)
}

#[cfg(test)]
mod tests {
    use atlas_core::config::RetrievalConfig;
    use atlas_core::constants::NO_MATCH_MESSAGE;
    use atlas_corpus::load_corpus;
    use atlas_retrieval::RetrievalEngine;

    use super::*;

    #[test]
    fn top_k_defaults_and_bounds() {
        let config = RetrievalConfig::default();
        assert_eq!(resolve_top_k(None, &config).unwrap(), 3);
        assert_eq!(resolve_top_k(Some(5), &config).unwrap(), 5);
        assert!(resolve_top_k(Some(0), &config).is_err());
        assert!(resolve_top_k(Some(6), &config).is_err());
    }

    #[test]
    fn repl_answers_each_line_until_quit() {
        let corpus = load_corpus().unwrap();
        let engine = RetrievalEngine::new(&corpus, RetrievalConfig::default());
        let input = "Do I need a business license in DFW?\n\n  \nWhere can I buy a zebra?\n:quit\nignored\n";
        let mut out = Vec::new();
        let log = run_repl(&engine, 3, 10, input.as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("> Do I need a business license in DFW?"));
        assert!(text.contains("Do I need a business license in DFW?\nCategory: Business Setup & Management"));
        assert!(text.contains(NO_MATCH_MESSAGE));
        assert!(!text.contains("ignored"));
        assert_eq!(log.count(), 2);
        assert_eq!(log.miss_count(), 1);
    }
}
