//! Structured corpus files. `.json` holds an array of entries or an object
//! with an `entries` array; `.toml` holds `[[entries]]` tables.

use std::path::Path;

use atlas_core::errors::CorpusError;
use atlas_core::models::Entry;
use serde::Deserialize;
use tracing::info;

use crate::store::CorpusStore;

#[derive(Deserialize)]
struct CorpusDocument {
    #[serde(default)]
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCorpus {
    List(Vec<Entry>),
    Document(CorpusDocument),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn detect_format(path: &Path) -> Option<Format> {
    match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "json" => Some(Format::Json),
        "toml" => Some(Format::Toml),
        _ => None,
    }
}

/// Read, parse, and validate a corpus file.
pub fn load_corpus_from_path(path: impl AsRef<Path>) -> Result<CorpusStore, CorpusError> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    let format = detect_format(path).ok_or_else(|| CorpusError::UnsupportedFormat {
        path: shown.clone(),
    })?;

    let content = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: shown.clone(),
        reason: e.to_string(),
    })?;

    let entries = parse_entries(&content, format).map_err(|reason| CorpusError::Parse {
        path: shown.clone(),
        reason,
    })?;

    let store = CorpusStore::new(entries)?;
    info!(entries = store.len(), source = %shown, "corpus loaded");
    Ok(store)
}

fn parse_entries(content: &str, format: Format) -> Result<Vec<Entry>, String> {
    match format {
        Format::Json => match serde_json::from_str::<JsonCorpus>(content) {
            Ok(JsonCorpus::List(entries)) => Ok(entries),
            Ok(JsonCorpus::Document(doc)) => Ok(doc.entries),
            Err(e) => Err(e.to_string()),
        },
        Format::Toml => toml::from_str::<CorpusDocument>(content)
            .map(|doc| doc.entries)
            .map_err(|e| e.to_string()),
    }
}
