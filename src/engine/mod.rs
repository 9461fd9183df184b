//! The analysis core: tokenization, counting and ranking. Pure and in-memory.

pub mod analyzer;
pub mod frequency;
pub mod tokenizer;

pub use analyzer::{analyze, AnalysisReport, Analyzer, DEFAULT_TOP_K};
pub use frequency::{aggregate, top_k, FrequencyTable, RankedEntry};
pub use tokenizer::{is_word_char, normalize_word, tokenize, StopwordSet, Tokenizer, Tokens};
