//! wordtally: Unicode-aware word frequency analysis for JSON text records.
//!
//! The core ([`engine`]) turns a text and its stop-word list into a token
//! stream, counts it, and ranks the most frequent words. Everything around it
//! (file records, sample generation, batch runs, rendering) lives in the other
//! modules.

pub mod batch;
pub mod config;
pub mod engine;
pub mod format;
pub mod report;
pub mod types;

pub use batch::{
    analyze_file, run_batch, run_benchmark, run_paths, BatchReport, BenchmarkReport, FileOutcome,
};
pub use config::TallyConfig;
pub use engine::{
    aggregate, analyze, is_word_char, normalize_word, tokenize, top_k, AnalysisReport, Analyzer,
    FrequencyTable, RankedEntry, StopwordSet, Tokenizer, Tokens, DEFAULT_TOP_K,
};
pub use format::{document_path, generate_documents, read_document, write_document};
pub use types::{Document, FreqError, FreqResult, RecordError};
