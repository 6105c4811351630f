// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search provider trait definition

use async_trait::async_trait;

use super::types::{SearchError, SearchResult};

/// Trait for implementing search providers
///
/// The error/empty distinction is explicit at this boundary: zero matches
/// are `Ok` with an empty vector, failures are `Err`. Degrading to an empty
/// result list is the pipeline's decision, not the provider's.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Perform a web search
    ///
    /// # Arguments
    /// * `query` - The search query string
    /// * `page_size` - Maximum number of results to return
    ///
    /// # Returns
    /// A vector of search results (possibly empty) or an error
    async fn search(
        &self,
        query: &str,
        page_size: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockProvider;

    #[async_trait]
    impl SearchProvider for MockProvider {
        async fn search(
            &self,
            query: &str,
            _page_size: usize,
        ) -> Result<Vec<SearchResult>, SearchError> {
            Ok(vec![SearchResult {
                title: format!("Result for {}", query),
                snippet: "A mock result".to_string(),
                link: "https://example.com".to_string(),
            }])
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[tokio::test]
    async fn test_mock_provider_search() {
        let provider = MockProvider;
        let results = provider.search("test", 5).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].title.contains("test"));
        assert_eq!(provider.name(), "mock");
    }
}
