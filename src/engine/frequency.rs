//! Word counting and deterministic top-K ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Count descending, then word ascending. `str` ordering is byte order of the
/// UTF-8 encoding, which equals codepoint order.
fn rank_order(a: &(&str, u64), b: &(&str, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Word → occurrence count for one document, plus the number of tokens seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token in one pass.
    pub fn aggregate<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Into<String>,
    {
        let mut table = Self::new();
        table.extend(tokens);
        table
    }

    /// Discard the previous counts and count `tokens`, keeping the allocation.
    pub fn refill<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str> + Into<String>,
    {
        self.clear();
        self.extend(tokens);
    }

    /// Count one occurrence of `word`. Only allocates for a new key.
    pub fn record<S>(&mut self, word: S)
    where
        S: AsRef<str> + Into<String>,
    {
        match self.counts.get_mut(word.as_ref()) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.into(), 1);
            }
        }
        self.total += 1;
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    /// Number of tokens consumed.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `word`, 0 if absent.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Iterate over `(word, count)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// The `k` most frequent words, count descending, ties by ascending word.
    ///
    /// `k == 0` yields nothing; `k` past the number of distinct words yields
    /// every entry.
    pub fn top_k(&self, k: usize) -> Vec<RankedEntry> {
        if k == 0 {
            return Vec::new();
        }

        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        if k < entries.len() {
            entries.select_nth_unstable_by(k, rank_order);
            entries.truncate(k);
        }
        entries.sort_unstable_by(rank_order);

        entries
            .into_iter()
            .map(|(word, count)| RankedEntry::new(word, count))
            .collect()
    }
}

impl<S> Extend<S> for FrequencyTable
where
    S: AsRef<str> + Into<String>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.record(word);
        }
    }
}

impl<S> FromIterator<S> for FrequencyTable
where
    S: AsRef<str> + Into<String>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::aggregate(iter)
    }
}

/// Count a token stream. See [`FrequencyTable::aggregate`].
pub fn aggregate<I, S>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Into<String>,
{
    FrequencyTable::aggregate(tokens)
}

/// Rank a table. See [`FrequencyTable::top_k`].
pub fn top_k(table: &FrequencyTable, k: usize) -> Vec<RankedEntry> {
    table.top_k(k)
}
