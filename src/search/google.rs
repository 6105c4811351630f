// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google Programmable Search API provider
//!
//! Implements web search using the Google Custom Search JSON API. A query
//! with zero matches comes back without an `items` field; that deserializes
//! to an empty result list rather than an error.

use async_trait::async_trait;
use reqwest::Client;

use super::provider::SearchProvider;
use super::types::{SearchError, SearchResult};

const GOOGLE_API_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Maximum results per request accepted by the API
const MAX_PAGE_SIZE: usize = 10;

/// Google Programmable Search provider
pub struct GoogleSearchProvider {
    api_key: String,
    engine_id: String,
    site: Option<String>,
    client: Client,
}

impl GoogleSearchProvider {
    /// Create a new Google search provider
    ///
    /// # Arguments
    /// * `api_key` - Google Programmable Search API key
    /// * `engine_id` - Search engine id (cx parameter)
    /// * `site` - Optional site restriction applied to every query
    pub fn new(api_key: String, engine_id: String, site: Option<String>) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            engine_id,
            site,
            client,
        }
    }
}

#[async_trait]
impl SearchProvider for GoogleSearchProvider {
    async fn search(
        &self,
        query: &str,
        page_size: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let num = page_size.min(MAX_PAGE_SIZE).to_string();
        let mut request = self.client.get(GOOGLE_API_URL).query(&[
            ("key", self.api_key.as_str()),
            ("cx", self.engine_id.as_str()),
            ("q", query),
            ("num", num.as_str()),
        ]);

        if let Some(ref site) = self.site {
            request = request.query(&[("siteSearch", site.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SearchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let data: GoogleResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(data.items)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

#[derive(Debug, serde::Deserialize)]
struct GoogleResponse {
    // Absent entirely when the query has no matches
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = GoogleSearchProvider::new(
            "test-api-key".to_string(),
            "test-engine-id".to_string(),
            None,
        );
        assert_eq!(provider.name(), "google");
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "items": [
                {
                    "title": "Stack Overflow",
                    "snippet": "A question and answer site",
                    "link": "https://stackoverflow.com"
                }
            ]
        }"#;

        let response: GoogleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].title, "Stack Overflow");
        assert_eq!(response.items[0].link, "https://stackoverflow.com");
    }

    #[test]
    fn test_response_without_items_is_empty() {
        // The API omits "items" entirely for zero-match queries
        let json = r#"{"kind": "customsearch#search", "queries": {}}"#;

        let response: GoogleResponse = serde_json::from_str(json).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_response_item_missing_fields() {
        let json = r#"{"items": [{"title": "No snippet or link"}]}"#;

        let response: GoogleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items[0].snippet, "");
        assert_eq!(response.items[0].link, "");
    }
}
