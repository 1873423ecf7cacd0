//! Local SearXNG-style web search

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{CalltoolsError, Result};

use super::{endpoint, get_json};

/// One search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Client for a search service speaking the SearXNG JSON format
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Top hit for `query`
    pub async fn first_result(&self, query: &str) -> Result<SearchHit> {
        let url = endpoint(&self.base_url, "/search");
        let response: SearchResponse = get_json(&self.http, &url, &[("q", query), ("format", "json")]).await?;

        response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| CalltoolsError::EmptyResult(format!("no search results for {:?}", query)))
    }
}
