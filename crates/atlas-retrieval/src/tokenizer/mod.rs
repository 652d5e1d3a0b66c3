//! Query and document tokenizer: lower-case alphabetic words, stop words
//! removed, then contiguous n-grams over the surviving words.

pub mod stop_words;

use atlas_core::config::RetrievalConfig;

pub use stop_words::is_stop_word;

/// Shortest word kept. Single letters are dropped.
const MIN_WORD_CHARS: usize = 2;

/// Produces the terms both index and queries are vectorized from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    ngram_min: usize,
    ngram_max: usize,
}

impl Tokenizer {
    /// `ngram_min..=ngram_max`; both are clamped to at least one.
    pub fn new(ngram_min: usize, ngram_max: usize) -> Self {
        let ngram_min = ngram_min.max(1);
        Self {
            ngram_min,
            ngram_max: ngram_max.max(ngram_min),
        }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(config.ngram_min, config.ngram_max)
    }

    /// Lower-cased alphabetic words with stop words removed, in text order.
    pub fn words(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphabetic())
            .filter(|w| w.chars().count() >= MIN_WORD_CHARS && !is_stop_word(w))
            .map(str::to_string)
            .collect()
    }

    /// All n-gram terms of `text`: unigrams first, then bigrams, and so on.
    pub fn terms(&self, text: &str) -> Vec<String> {
        let words = self.words(text);
        let mut terms = Vec::new();
        for n in self.ngram_min..=self.ngram_max {
            if n > words.len() {
                break;
            }
            terms.extend(words.windows(n).map(|w| w.join(" ")));
        }
        terms
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(1, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_punctuation_and_digits() {
        let t = Tokenizer::default();
        assert_eq!(
            t.words("How do I set up an LLC in Texas? (Form 205)"),
            vec!["set", "llc", "texas", "form"]
        );
    }

    #[test]
    fn bigrams_span_removed_stop_words() {
        let t = Tokenizer::default();
        assert_eq!(
            t.terms("How do I set up an LLC in Texas?"),
            vec!["set", "llc", "texas", "set llc", "llc texas"]
        );
    }

    #[test]
    fn apostrophes_split_words_and_single_letters_drop() {
        let t = Tokenizer::default();
        assert_eq!(t.words("the city’s rules"), vec!["city", "rules"]);
        assert_eq!(t.words("entity's"), vec!["entity"]);
    }

    #[test]
    fn hyphens_and_slashes_separate_words() {
        let t = Tokenizer::new(1, 1);
        assert_eq!(
            t.terms("company/operating self-employment"),
            vec!["company", "operating", "self", "employment"]
        );
    }

    #[test]
    fn unigram_only_range_emits_no_bigrams() {
        let t = Tokenizer::new(1, 1);
        assert_eq!(t.terms("business insurance"), vec!["business", "insurance"]);
    }

    #[test]
    fn bigram_only_range_skips_unigrams() {
        let t = Tokenizer::new(2, 2);
        assert_eq!(t.terms("business insurance"), vec!["business insurance"]);
        assert!(t.terms("insurance").is_empty());
    }

    #[test]
    fn empty_and_stop_word_only_text_yield_nothing() {
        let t = Tokenizer::default();
        assert!(t.terms("").is_empty());
        assert!(t.terms("   ").is_empty());
        assert!(t.terms("what is the of").is_empty());
    }

    #[test]
    fn degenerate_range_is_clamped() {
        assert_eq!(Tokenizer::new(0, 0), Tokenizer::new(1, 1));
        assert_eq!(Tokenizer::new(2, 1), Tokenizer::new(2, 2));
    }
}
