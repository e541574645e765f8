use serde::{Deserialize, Serialize};

/// An unprocessed headline/snippet pair as returned by a story source.
///
/// Only `title` and `snippet` are guaranteed; upstream APIs routinely omit
/// the rest, so the optional fields default when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStory {
    pub title: String,
    pub snippet: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// The six-field structured summary produced by the digest step.
///
/// The five non-highlight fields are subject to the word budget; the
/// highlight is a cleaned headline and is never counted or trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub highlight: String,
    pub description: String,
    pub what: String,
    pub why_matters: String,
    pub cool_factor: String,
    pub takeaway: String,
}

impl ContentRecord {
    /// The five fields that count against the word budget.
    pub fn budgeted_fields(&self) -> [&str; 5] {
        [
            self.description.as_str(),
            self.what.as_str(),
            self.why_matters.as_str(),
            self.cool_factor.as_str(),
            self.takeaway.as_str(),
        ]
    }
}

/// Final artifacts for one generation run: both rendered documents plus the
/// word count shown in their footers.
#[derive(Debug, Clone)]
pub struct RenderedOutput {
    pub markdown: String,
    pub html: String,
    pub word_count: usize,
}
