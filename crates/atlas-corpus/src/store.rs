use std::collections::HashMap;

use atlas_core::errors::CorpusError;
use atlas_core::models::Entry;
use atlas_core::traits::ICorpusStore;

use crate::validation;

/// Immutable, validated collection of entries in load order.
#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    entries: Vec<Entry>,
    by_id: HashMap<String, usize>,
}

impl CorpusStore {
    /// Validate `entries` and take ownership. Fails on the first invalid entry.
    pub fn new(entries: Vec<Entry>) -> Result<Self, CorpusError> {
        validation::validate_entries(&entries)?;
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Ok(Self { entries, by_id })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Corpus position of the entry with `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.position(id).map(|i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

impl ICorpusStore for CorpusStore {
    fn entry(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    fn size(&self) -> usize {
        self.entries.len()
    }
}
