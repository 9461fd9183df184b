//! On-disk JSON document records: reading, writing and sample generation.

pub mod reader;
pub mod writer;

use std::path::{Path, PathBuf};

pub use reader::read_document;
pub use writer::{generate_documents, write_document};

/// `dir/{prefix}{index}.json`
pub fn document_path(dir: &Path, prefix: &str, index: usize) -> PathBuf {
    dir.join(format!("{}{}.json", prefix, index))
}
