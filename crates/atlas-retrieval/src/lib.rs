//! # atlas-retrieval
//!
//! The Retrieval Engine. Builds a TF-IDF vector space over the corpus once,
//! then answers each query with a cosine-ranked, deterministic hit list.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine (IRetriever)
//! ├── TfIdfIndex
//! │   ├── Tokenizer (alphabetic words, stop words, unigrams + bigrams)
//! │   ├── Vocabulary (lexicographic columns, smoothed idf, max_df ceiling)
//! │   └── SparseVector (sublinear tf · idf, L2-normalized)
//! └── ranking (relevance floor, score desc / index asc, top_k)
//! ```

pub mod engine;
pub mod index;
pub mod ranking;
pub mod tokenizer;

pub use engine::RetrievalEngine;
pub use index::TfIdfIndex;
pub use ranking::ScoredIndex;
pub use tokenizer::Tokenizer;
