/// Corpus load and validation errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("duplicate entry id: {id}")]
    DuplicateId { id: String },

    #[error("malformed entry id {id:?}: expected a lowercase kebab-case slug")]
    MalformedId { id: String },

    #[error("entry {id} has an empty {field}")]
    EmptyField { id: String, field: &'static str },

    #[error("failed to read corpus file {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("failed to parse corpus file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("unsupported corpus file format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: String },
}
