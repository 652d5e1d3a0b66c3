//! Span definitions per operation: corpus load, index build, retrieval.

/// Create a corpus load span.
#[macro_export]
macro_rules! corpus_span {
    ($source:expr) => {
        tracing::info_span!("atlas.corpus", source = %$source)
    };
}

/// Create an index build span.
#[macro_export]
macro_rules! index_span {
    ($documents:expr) => {
        tracing::info_span!("atlas.index", documents = $documents)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query:expr, $top_k:expr) => {
        tracing::info_span!("atlas.retrieval", query = %$query, top_k = $top_k)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn span_macros_expand() {
        let _corpus = crate::corpus_span!("builtin");
        let _index = crate::index_span!(7usize);
        let _retrieval = crate::retrieval_span!("llc texas", 3usize);
    }
}
