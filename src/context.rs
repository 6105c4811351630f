// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Context assembly for model grounding
//!
//! Builds the numbered plain-text block of search snippets that grounds the
//! model's answer. Every input item appears exactly once, in order; no
//! truncation, deduplication, or relevance filtering.

/// Build the numbered context block from snippet text
///
/// Output is `"Search Results:\n"` followed by one 1-indexed
/// `"Result {i}: {snippet}\n"` line per input item.
pub fn build_context(snippets: &[String]) -> String {
    let mut context = String::from("Search Results:\n");
    for (idx, snippet) in snippets.iter().enumerate() {
        context.push_str(&format!("Result {}: {}\n", idx + 1, snippet));
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_header() {
        let context = build_context(&["a snippet".to_string()]);
        assert!(context.starts_with("Search Results:\n"));
    }

    #[test]
    fn test_one_line_per_snippet_in_order() {
        let snippets = vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
        ];

        let context = build_context(&snippets);
        assert_eq!(
            context,
            "Search Results:\nResult 1: first\nResult 2: second\nResult 3: third\n"
        );
    }

    #[test]
    fn test_empty_input_is_header_only() {
        assert_eq!(build_context(&[]), "Search Results:\n");
    }

    #[test]
    fn test_empty_snippet_still_represented() {
        let context = build_context(&["".to_string()]);
        assert_eq!(context, "Search Results:\nResult 1: \n");
    }
}
