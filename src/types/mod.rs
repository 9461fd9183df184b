//! Data types shared by the reader, the batch runner and the CLI.

pub mod document;
pub mod error;

pub use document::Document;
pub use error::{FreqError, FreqResult, RecordError};
