//! HTTP page fetching with the sentinel error contract

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::extractor::extract_text;

/// Fixed placeholder returned when a page cannot be fetched or parsed
pub const FETCH_ERROR_SENTINEL: &str = "Error fetching content";

/// Content fetch error types
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL is unsafe (localhost, private IP) or unparsable
    #[error("Unsafe URL blocked: {0}")]
    UnsafeUrl(String),

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(String),

    /// HTTP non-success status
    #[error("HTTP {0} for: {1}")]
    Status(u16, String),
}

/// Source of plain-text page content
///
/// The pipeline consumes this seam so tests can script fetch outcomes
/// without a network.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a page and reduce it to plain text, yielding the sentinel on
    /// any failure
    async fn fetch_and_extract_text(&self, url: &str) -> String;
}

/// HTTP page fetcher
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Create a new page fetcher
    ///
    /// Uses the HTTP client's default timeout; a single GET, no retries.
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; websage/0.1)")
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch a page and extract its plain text
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if !Self::is_safe_url(url) {
            return Err(FetchError::UnsafeUrl(url.to_string()));
        }

        debug!("Fetching content from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16(), url.to_string()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(extract_text(&html))
    }

    /// Check if URL is safe to fetch (http/https, not localhost/private IP)
    pub fn is_safe_url(url: &str) -> bool {
        let parsed = match Url::parse(url) {
            Ok(u) => u,
            Err(_) => return false,
        };

        if !matches!(parsed.scheme(), "http" | "https") {
            return false;
        }

        match parsed.host_str() {
            Some(host) => {
                let host = host.to_lowercase();
                !(host == "localhost"
                    || host == "0.0.0.0"
                    || host.starts_with("127.")
                    || host.starts_with("10.")
                    || host.starts_with("192.168.")
                    || host.starts_with("169.254.")
                    || is_private_172(&host))
            }
            None => false,
        }
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch_and_extract_text(&self, url: &str) -> String {
        match self.fetch(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Page fetch failed for {}: {}", url, e);
                FETCH_ERROR_SENTINEL.to_string()
            }
        }
    }
}

// 172.16.0.0/12
fn is_private_172(host: &str) -> bool {
    host.strip_prefix("172.")
        .and_then(|rest| rest.split('.').next())
        .and_then(|octet| octet.parse::<u8>().ok())
        .map(|octet| (16..=31).contains(&octet))
        .unwrap_or(false)
}
