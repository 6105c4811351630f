// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for web search

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single search result from the search API
///
/// Fields absent from the API response deserialize to empty strings so that
/// a sparse result record never fails the whole query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the search result
    #[serde(default)]
    pub title: String,
    /// Snippet/description of the search result
    #[serde(default)]
    pub snippet: String,
    /// URL of the search result
    #[serde(default)]
    pub link: String,
}

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure reaching the search API
    #[error("Search request failed: {0}")]
    Http(String),

    /// Non-success status from the search API
    #[error("Search API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message body
        message: String,
    },

    /// Response body could not be decoded
    #[error("Failed to decode search response: {0}")]
    Decode(String),
}
