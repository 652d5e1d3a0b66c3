//! Eager corpus checks: unique well-formed ids, non-empty question and answer.

use std::collections::HashSet;
use std::sync::LazyLock;

use atlas_core::errors::CorpusError;
use atlas_core::models::Entry;
use regex::Regex;

static ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("entry id pattern is valid")
});

/// Whether `id` is a lowercase kebab-case slug.
pub fn is_well_formed_id(id: &str) -> bool {
    ID_PATTERN.is_match(id)
}

/// Check every entry in order and report the first violation.
pub fn validate_entries(entries: &[Entry]) -> Result<(), CorpusError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
    for entry in entries {
        validate_entry(entry)?;
        if !seen.insert(entry.id.as_str()) {
            return Err(CorpusError::DuplicateId {
                id: entry.id.clone(),
            });
        }
    }
    Ok(())
}

fn validate_entry(entry: &Entry) -> Result<(), CorpusError> {
    if !is_well_formed_id(&entry.id) {
        return Err(CorpusError::MalformedId {
            id: entry.id.clone(),
        });
    }
    if entry.question.trim().is_empty() {
        return Err(CorpusError::EmptyField {
            id: entry.id.clone(),
            field: "question",
        });
    }
    if entry.answer.trim().is_empty() {
        return Err(CorpusError::EmptyField {
            id: entry.id.clone(),
            field: "answer",
        });
    }
    Ok(())
}
