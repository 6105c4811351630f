//! Page content fetching for context enrichment
//!
//! Fetches one supporting page from a search result URL and reduces it to a
//! plain-text blob for the model context. Failures never propagate: the
//! sentinel contract turns every error into a fixed placeholder string the
//! caller compares against.

pub mod extractor;
pub mod fetcher;

pub use extractor::extract_text;
pub use fetcher::{FetchError, PageFetcher, PageSource, FETCH_ERROR_SENTINEL};
