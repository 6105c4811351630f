// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Web search module
//!
//! Issues a single query to an external search API and normalizes the raw
//! result records for the rest of the answer pipeline.

pub mod clean;
pub mod google;
pub mod provider;
pub mod types;

// Re-export commonly used types
pub use clean::CleanedResults;
pub use google::GoogleSearchProvider;
pub use provider::SearchProvider;
pub use types::{SearchError, SearchResult};
