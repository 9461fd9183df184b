//! The document record: a text body plus its own stop-word list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::RecordError;

/// A single input record, `{"text": "...", "stopwords": ["..."]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    #[serde(default)]
    pub stopwords: Vec<String>,
}

impl Document {
    pub fn new(text: impl Into<String>, stopwords: Vec<String>) -> Self {
        Self {
            text: text.into(),
            stopwords,
        }
    }

    /// Validate an already-parsed JSON value and extract the document.
    ///
    /// `text` is required and must be a string. `stopwords` is optional
    /// (absent or `null` means none) but, when present, every entry must be
    /// a string. A bare string in place of the `stopwords` array is rejected,
    /// not promoted to a one-element list.
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        let obj = value.as_object().ok_or(RecordError::NotAnObject)?;

        let text = match obj.get("text") {
            None => return Err(RecordError::MissingText),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(RecordError::TextNotString),
        };

        let stopwords = match obj.get("stopwords") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_str()
                        .map(str::to_owned)
                        .ok_or(RecordError::StopwordNotString { index })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(RecordError::StopwordsNotArray),
        };

        Ok(Self { text, stopwords })
    }
}
