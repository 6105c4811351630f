// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search result cleaning
//!
//! Reduces raw result records to the two parallel sequences the rest of the
//! pipeline consumes: snippet text for context assembly, URLs for page
//! fetching. Both sequences stay index-aligned with the input order.

use super::types::SearchResult;

/// Snippets and URLs extracted from a list of search results
#[derive(Debug, Clone, Default)]
pub struct CleanedResults {
    /// Trimmed snippet text, one entry per input result
    pub snippets: Vec<String>,
    /// Trimmed link URLs, one entry per input result
    pub urls: Vec<String>,
}

impl CleanedResults {
    /// Extract snippets and URLs from raw search results
    ///
    /// Pure and total: empty fields stay empty strings, nothing is dropped
    /// or reordered.
    pub fn from_results(results: &[SearchResult]) -> Self {
        let snippets = results
            .iter()
            .map(|r| r.snippet.trim().to_string())
            .collect();
        let urls = results.iter().map(|r| r.link.trim().to_string()).collect();

        Self { snippets, urls }
    }

    /// Number of cleaned results
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Whether any results were cleaned
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(snippet: &str, link: &str) -> SearchResult {
        SearchResult {
            title: "title".to_string(),
            snippet: snippet.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_index_alignment() {
        let results = vec![
            result("first", "https://a.example.com"),
            result("second", "https://b.example.com"),
            result("third", "https://c.example.com"),
        ];

        let cleaned = CleanedResults::from_results(&results);
        assert_eq!(cleaned.snippets.len(), results.len());
        assert_eq!(cleaned.urls.len(), results.len());
        assert_eq!(cleaned.snippets[1], "second");
        assert_eq!(cleaned.urls[1], "https://b.example.com");
    }

    #[test]
    fn test_missing_fields_become_empty_strings() {
        let results = vec![result("", ""), result("has snippet", "")];

        let cleaned = CleanedResults::from_results(&results);
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned.snippets[0], "");
        assert_eq!(cleaned.urls[0], "");
        assert_eq!(cleaned.snippets[1], "has snippet");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let results = vec![result("  padded snippet \n", " https://example.com ")];

        let cleaned = CleanedResults::from_results(&results);
        assert_eq!(cleaned.snippets[0], "padded snippet");
        assert_eq!(cleaned.urls[0], "https://example.com");
    }

    #[test]
    fn test_empty_input() {
        let cleaned = CleanedResults::from_results(&[]);
        assert!(cleaned.is_empty());
        assert_eq!(cleaned.len(), 0);
    }
}
