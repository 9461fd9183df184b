//! Reading and validating one document file.

use std::path::Path;

use log::debug;
use serde_json::Value;

use crate::types::{Document, FreqError, FreqResult};

/// Read, parse and validate the document at `path`.
///
/// Fails on an unreadable file, a zero-byte file, malformed JSON, or a
/// record that is not `{"text": string, "stopwords"?: [string]}`.
pub fn read_document(path: &Path) -> FreqResult<Document> {
    let bytes = std::fs::read(path).map_err(|source| FreqError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if bytes.is_empty() {
        return Err(FreqError::EmptyFile(path.to_path_buf()));
    }

    let value: Value = serde_json::from_slice(&bytes).map_err(|source| FreqError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let document = Document::from_value(&value).map_err(|reason| FreqError::InvalidRecord {
        path: path.to_path_buf(),
        reason,
    })?;

    debug!(
        "read {} ({} bytes of text, {} stop-words)",
        path.display(),
        document.text.len(),
        document.stopwords.len()
    );
    Ok(document)
}
