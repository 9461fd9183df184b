//! Error types for document reading, configuration and generation.

use std::path::PathBuf;

/// Why a JSON value was rejected as a document record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("expected a JSON object of the form {{\"text\": \"...\", \"stopwords\": [\"...\"]}}")]
    NotAnObject,

    #[error("missing required field \"text\"")]
    MissingText,

    #[error("field \"text\" must be a string")]
    TextNotString,

    #[error("field \"stopwords\" must be an array of strings")]
    StopwordsNotArray,

    #[error("stopwords[{index}] is not a string")]
    StopwordNotString { index: usize },
}

/// Top-level error for everything outside the tokenize/aggregate core, which never fails.
#[derive(Debug, thiserror::Error)]
pub enum FreqError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file {0} is empty, skipping")]
    EmptyFile(PathBuf),

    #[error("failed to parse JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid record in {path}: {reason}")]
    InvalidRecord { path: PathBuf, reason: RecordError },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FreqError {
    /// Whether this error concerns a single record and should not stop a batch.
    pub fn is_per_record(&self) -> bool {
        matches!(
            self,
            FreqError::Io { .. }
                | FreqError::EmptyFile(_)
                | FreqError::Parse { .. }
                | FreqError::InvalidRecord { .. }
        )
    }
}

pub type FreqResult<T> = Result<T, FreqError>;
