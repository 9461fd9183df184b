//! Per-document analysis: tokenize, count, rank.

use serde::Serialize;

use crate::types::Document;

use super::frequency::{FrequencyTable, RankedEntry};
use super::tokenizer::{tokenize, StopwordSet};

/// Default number of ranked words in a report.
pub const DEFAULT_TOP_K: usize = 5;

/// Summary of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Tokens counted after stop-word filtering.
    pub total: u64,
    /// Distinct tokens.
    pub unique: usize,
    /// Most frequent words, count descending then word ascending.
    pub top: Vec<RankedEntry>,
}

/// Reusable analysis state.
///
/// Holds a stop-word set and a frequency table that are cleared and refilled
/// on every call, so a batch over many documents reuses their allocations.
/// Calls take `&mut self`: one analysis at a time per analyzer.
#[derive(Debug, Clone)]
pub struct Analyzer {
    top_k: usize,
    stopwords: StopwordSet,
    table: FrequencyTable,
}

impl Analyzer {
    pub fn new(top_k: usize) -> Self {
        Self {
            top_k,
            stopwords: StopwordSet::new(),
            table: FrequencyTable::new(),
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn set_top_k(&mut self, top_k: usize) {
        self.top_k = top_k;
    }

    /// Analyze `text` with its raw stop-word list.
    pub fn analyze<S: AsRef<str>>(&mut self, text: &str, stopwords: &[S]) -> AnalysisReport {
        self.stopwords.reset(stopwords);
        self.table.refill(tokenize(text, &self.stopwords));

        AnalysisReport {
            total: self.table.total(),
            unique: self.table.unique(),
            top: self.table.top_k(self.top_k),
        }
    }

    pub fn analyze_document(&mut self, document: &Document) -> AnalysisReport {
        self.analyze(&document.text, &document.stopwords)
    }

    /// Table from the most recent call.
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}

/// One-shot analysis with fresh buffers.
pub fn analyze<S: AsRef<str>>(text: &str, stopwords: &[S], top_k: usize) -> AnalysisReport {
    Analyzer::new(top_k).analyze(text, stopwords)
}
