//! Frozen vocabulary: surviving terms, their stable columns, and idf values.

use std::collections::{BTreeMap, HashMap};

use super::weighting::{max_document_count, smoothed_idf};

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Terms in column order (lexicographic).
    terms: Vec<String>,
    columns: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl Vocabulary {
    /// Build from per-document term lists. Terms whose document frequency
    /// exceeds the `max_df` ceiling are excluded.
    pub fn build(documents: &[Vec<String>], max_df: f64) -> Self {
        let n = documents.len();
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in documents {
            let mut unique: Vec<&str> = terms.iter().map(String::as_str).collect();
            unique.sort_unstable();
            unique.dedup();
            for term in unique {
                *document_frequency.entry(term).or_default() += 1;
            }
        }

        let ceiling = max_document_count(max_df, n);
        let mut vocab = Self::default();
        // BTreeMap iteration is lexicographic, which fixes the column order.
        for (term, df) in document_frequency {
            if df as f64 > ceiling {
                continue;
            }
            vocab.columns.insert(term.to_string(), vocab.terms.len());
            vocab.terms.push(term.to_string());
            vocab.idf.push(smoothed_idf(n, df));
        }
        vocab
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    /// Learned idf for `column`. Panics on an out-of-range column.
    pub fn idf(&self, column: usize) -> f64 {
        self.idf[column]
    }
}
