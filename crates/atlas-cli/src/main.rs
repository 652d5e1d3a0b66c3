//! # atlas
//!
//! Terminal front end for the ATLAS knowledge base.
//!
//! Usage:
//!   atlas ask "Do I need a business license in DFW?"
//!   atlas ask "business insurance" --top-k 5 --json
//!   atlas list
//!   atlas repl < questions.txt

mod cli;
mod render;
mod session;

use std::process::ExitCode;

use anyhow::{Context, Result};
use atlas_core::config::AtlasConfig;
use atlas_core::traits::IRetriever;
use atlas_corpus::{load_corpus_with_config, CorpusStore};
use atlas_observability::init_tracing;
use atlas_retrieval::RetrievalEngine;
use clap::Parser;
use tracing::info;

use cli::{Cli, Command};

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AtlasConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AtlasConfig::default(),
    };
    if let Some(path) = &cli.corpus {
        config.corpus.path = Some(path.display().to_string());
    }
    init_tracing(&config.observability);

    let corpus = {
        let source = config.corpus.path.as_deref().unwrap_or("builtin");
        let _span = atlas_observability::corpus_span!(source).entered();
        load_corpus_with_config(&config.corpus).context("loading knowledge base")?
    };

    match cli.command {
        Command::List => {
            print!("{}", render::render_entries(corpus.iter()));
        }
        Command::Ask { query, top_k, json } => {
            let top_k = session::resolve_top_k(top_k, &config.retrieval)?;
            let engine = build_engine(&corpus, &config);
            let hits = {
                let _span = atlas_observability::retrieval_span!(query, top_k).entered();
                engine.retrieve(&query, top_k)?
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!("{}", render::render_hits(&hits));
            }
        }
        Command::Repl { top_k } => {
            let top_k = session::resolve_top_k(top_k, &config.retrieval)?;
            let engine = build_engine(&corpus, &config);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            let log = session::run_repl(
                &engine,
                top_k,
                config.observability.query_log_capacity,
                stdin.lock(),
                &mut stdout,
            )?;
            info!(summary = %log.summary(), "session finished");
        }
    }
    Ok(())
}

fn build_engine<'a>(corpus: &'a CorpusStore, config: &AtlasConfig) -> RetrievalEngine<'a> {
    let _span = atlas_observability::index_span!(corpus.len()).entered();
    let engine = RetrievalEngine::new(corpus, config.retrieval.clone());
    info!(
        entries = corpus.len(),
        vocabulary = engine.vocabulary_size(),
        "knowledge base ready"
    );
    engine
}
