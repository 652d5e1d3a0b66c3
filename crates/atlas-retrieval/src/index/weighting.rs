//! TF-IDF weighting formulas.

/// Term-frequency scaling. Sublinear: `1 + ln(tf)`; raw otherwise. Zero stays zero.
pub fn scaled_tf(count: u32, sublinear: bool) -> f64 {
    if count == 0 {
        0.0
    } else if sublinear {
        1.0 + f64::from(count).ln()
    } else {
        f64::from(count)
    }
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
///
/// Never zero, even for a term present in every document.
pub fn smoothed_idf(document_count: usize, document_frequency: usize) -> f64 {
    ((1.0 + document_count as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

/// Largest document frequency a term may have and stay in the vocabulary.
///
/// `max_df * n`, floored at one document so a single-entry corpus keeps
/// its terms.
pub fn max_document_count(max_df: f64, document_count: usize) -> f64 {
    (max_df * document_count as f64).max(1.0)
}
