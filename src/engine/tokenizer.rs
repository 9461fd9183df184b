//! Unicode-aware word tokenizer with per-document stop-word filtering.
//!
//! Text is scanned codepoint by codepoint. Alphabetic and numeric codepoints
//! (any script) are word characters; everything else separates words. Word
//! characters are lowercased with the locale-independent Unicode mapping as
//! they are accumulated, so every token consists of word characters only.

use std::collections::HashSet;
use std::str::Chars;

use log::debug;

use super::frequency::FrequencyTable;

/// Whether `c` can be part of a word.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Normalize a single word with the same rule the tokenizer applies to text.
///
/// Returns `None` when `raw` does not segment into exactly one token, e.g.
/// `""`, `"!!"` or `"don't"`.
pub fn normalize_word(raw: &str) -> Option<String> {
    let mut segments = Segments::new(raw);
    let word = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    Some(word)
}

/// Lowercased word segments of a string, without stop-word filtering.
#[derive(Debug, Clone)]
struct Segments<'a> {
    chars: Chars<'a>,
}

impl<'a> Segments<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars(),
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut word = String::new();
        for c in self.chars.by_ref() {
            if is_word_char(c) {
                // Some mappings expand (U+0130 -> "i\u{307}"); keep only word chars.
                word.extend(c.to_lowercase().filter(|&l| is_word_char(l)));
            } else if !word.is_empty() {
                return Some(word);
            }
        }
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }
}

/// Normalized stop-words for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create an empty set (nothing is filtered).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw stop-words. Duplicates collapse and entries that
    /// do not normalize to a single token are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend(words);
        set
    }

    /// Replace the contents with a new list, keeping the allocation.
    pub fn reset<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.clear();
        self.extend(words);
    }

    /// Add one raw stop-word. Returns `true` if it normalized and was new.
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalize_word(raw) {
            Some(word) => self.words.insert(word),
            None => {
                debug!("ignoring stop-word {:?}: not a single word", raw);
                false
            }
        }
    }

    /// Check an already-normalized token against the set.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> Extend<S> for StopwordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

/// Lazy token stream over one text. Cloning restarts from the same position.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    segments: Segments<'a>,
    stopwords: &'a StopwordSet,
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let word = self.segments.next()?;
            if !self.stopwords.contains(&word) {
                return Some(word);
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Tokenize `text`, skipping anything in `stopwords`.
pub fn tokenize<'a>(text: &'a str, stopwords: &'a StopwordSet) -> Tokens<'a> {
    Tokens {
        segments: Segments::new(text),
        stopwords,
    }
}

/// Deterministic tokenizer bound to one stop-word set.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stop_words: StopwordSet,
}

impl Tokenizer {
    /// Create a tokenizer that filters nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer from a raw stop-word list.
    pub fn with_stopwords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: StopwordSet::from_words(words),
        }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stop_words
    }

    /// Tokenize text into lowercase words, excluding stop words.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        tokenize(text, &self.stop_words)
    }

    /// Tokenize raw bytes. Invalid UTF-8 decodes to U+FFFD, which separates words.
    pub fn tokenize_bytes(&self, bytes: &[u8]) -> Vec<String> {
        let text = String::from_utf8_lossy(bytes);
        self.tokenize(&text).collect()
    }

    /// Tokenize and return term frequencies.
    pub fn term_frequencies(&self, text: &str) -> FrequencyTable {
        self.tokenize(text).collect()
    }
}
