use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use snap_core::{Error, RawStory, Result};
use tracing::info;

pub mod demo;
pub mod newsapi;

pub use demo::DemoSource;
pub use newsapi::NewsApiSource;

/// Environment variable holding the search API key. When unset the demo
/// source is selected silently.
pub const API_KEY_ENV: &str = "SEARCH_API_KEY";

/// Search queries cycled through day by day.
pub const SEARCH_TERMS: &[&str] = &[
    "AI breakthrough news today",
    "OpenAI ChatGPT latest updates",
    "Google Gemini new features",
    "Claude AI recent developments",
    "AWS cloud AI services news",
    "Microsoft Azure AI announcements",
    "machine learning breakthrough",
    "artificial intelligence industry news",
    "cloud computing innovations",
    "AI tools launched this week",
];

#[async_trait]
pub trait StorySource: Send + Sync {
    /// Short name of the source, for logging and CLI selection.
    fn name(&self) -> &str;

    /// Search for stories matching the query. Upstream results with missing
    /// optional fields must map to defaults, never to an error.
    async fn search(&self, query: &str) -> Result<Vec<RawStory>>;
}

/// Pick a source from the environment: a configured API key selects the
/// real search API, otherwise the built-in demo data is used.
pub fn source_from_env() -> Result<Box<dyn StorySource>> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => {
            info!("🔑 API key found, searching with NewsAPI");
            Ok(Box::new(NewsApiSource::new(key)?))
        }
        _ => {
            info!("🔍 No API key set, using demo results");
            Ok(Box::new(DemoSource::new()))
        }
    }
}

/// Resolve a source by its CLI name.
pub fn source_by_name(name: &str) -> Result<Box<dyn StorySource>> {
    match name {
        "demo" => Ok(Box::new(DemoSource::new())),
        "newsapi" => {
            let key = std::env::var(API_KEY_ENV).map_err(|_| {
                Error::Source(format!("{} must be set to use the newsapi source", API_KEY_ENV))
            })?;
            Ok(Box::new(NewsApiSource::new(key)?))
        }
        other => Err(Error::Source(format!("Unknown source: {}", other))),
    }
}

/// Deterministic query for a given day: the same date always searches the
/// same term, so reruns are reproducible.
pub fn query_for_date(date: NaiveDate) -> &'static str {
    SEARCH_TERMS[date.ordinal0() as usize % SEARCH_TERMS.len()]
}

/// Pick the story a run is built from. First result wins; an empty list is
/// the caller's cue to use the fallback record.
pub fn select_story(stories: Vec<RawStory>) -> Option<RawStory> {
    stories.into_iter().next()
}

pub mod prelude {
    pub use super::{query_for_date, select_story, source_from_env, StorySource};
    pub use snap_core::{RawStory, Result};
}
