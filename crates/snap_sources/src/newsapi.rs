use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use snap_core::{RawStory, Result};

use crate::StorySource;

const BASE_URL: &str = "https://newsapi.org/v2/everything";
const TECH_DOMAINS: &str = "techcrunch.com,wired.com,theverge.com,arstechnica.com";
const PAGE_SIZE: usize = 5;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<ApiArticle>,
}

#[derive(Deserialize)]
struct ApiArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "publishedAt", default)]
    published_at: Option<String>,
    #[serde(default)]
    source: Option<ApiArticleSource>,
}

#[derive(Deserialize)]
struct ApiArticleSource {
    #[serde(default)]
    name: Option<String>,
}

/// NewsAPI-backed story source, used when `SEARCH_API_KEY` is set.
pub struct NewsApiSource {
    client: Client,
    api_key: String,
}

impl NewsApiSource {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }
}

impl std::fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl StorySource for NewsApiSource {
    fn name(&self) -> &str {
        "newsapi"
    }

    async fn search(&self, query: &str) -> Result<Vec<RawStory>> {
        let page_size = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(BASE_URL)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", page_size.as_str()),
                ("domains", TECH_DOMAINS),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        Ok(response.articles.into_iter().map(into_story).collect())
    }
}

fn into_story(article: ApiArticle) -> RawStory {
    RawStory {
        title: article.title.unwrap_or_default(),
        snippet: article.description.unwrap_or_default(),
        url: article.url,
        date: article.published_at,
        source: article.source.and_then(|s| s.name),
    }
}
