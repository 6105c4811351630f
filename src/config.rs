// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Process configuration loaded once at startup
//!
//! Credentials and identifiers for the external boundaries (search API,
//! inference endpoint) come from environment variables. A missing required
//! value is a startup error, never a runtime search/model failure.

use std::env;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level process configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Search API configuration
    pub search: SearchConfig,
    /// Inference endpoint configuration
    pub inference: InferenceConfig,
}

/// Configuration for the web search boundary
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Google Programmable Search API key
    pub api_key: String,
    /// Google Programmable Search engine id (cx)
    pub engine_id: String,
    /// Number of results requested per query
    pub page_size: usize,
    /// Optional site restriction (e.g. "en.wikipedia.org")
    pub site: Option<String>,
}

/// Configuration for the model invocation boundary
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Base URL of the hosted inference endpoint
    pub endpoint: String,
    /// Credential sent as a bearer token
    pub api_key: String,
    /// Model identifier passed on every invocation
    pub model_id: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling parameter
    pub top_p: f32,
    /// Maximum generation length in tokens
    pub max_gen_len: u32,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns `ConfigError::MissingVar` when a required credential is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            search: SearchConfig {
                api_key: require("GOOGLE_SEARCH_API_KEY")?,
                engine_id: require("GOOGLE_CSE_ID")?,
                page_size: env::var("SEARCH_PAGE_SIZE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
                site: env::var("SEARCH_SITE").ok().filter(|v| !v.is_empty()),
            },
            inference: InferenceConfig {
                endpoint: require("INFERENCE_ENDPOINT")?,
                api_key: require("INFERENCE_API_KEY")?,
                model_id: env::var("MODEL_ID")
                    .unwrap_or_else(|_| "meta.llama3-1-405b-instruct-v1:0".to_string()),
                temperature: env::var("MODEL_TEMPERATURE")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0.7),
                top_p: env::var("MODEL_TOP_P")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0.9),
                max_gen_len: env::var("MODEL_MAX_GEN_LEN")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(200),
            },
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.page_size == 0 {
            return Err(ConfigError::Invalid(
                "SEARCH_PAGE_SIZE must be at least 1".to_string(),
            ));
        }
        if self.inference.max_gen_len == 0 {
            return Err(ConfigError::Invalid(
                "MODEL_MAX_GEN_LEN must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.inference.temperature) {
            return Err(ConfigError::Invalid(
                "MODEL_TEMPERATURE must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.inference.top_p) {
            return Err(ConfigError::Invalid(
                "MODEL_TOP_P must be between 0.0 and 1.0".to_string(),
            ));
        }
        Ok(())
    }
}

fn require(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            search: SearchConfig {
                api_key: "search-key".to_string(),
                engine_id: "engine-id".to_string(),
                page_size: 5,
                site: None,
            },
            inference: InferenceConfig {
                endpoint: "https://inference.example.com".to_string(),
                api_key: "inference-key".to_string(),
                model_id: "meta.llama3-1-405b-instruct-v1:0".to_string(),
                temperature: 0.7,
                top_p: 0.9,
                max_gen_len: 200,
            },
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = valid_config();
        config.search.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_sampling() {
        let mut config = valid_config();
        config.inference.temperature = 1.5;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.inference.top_p = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_requires_credentials() {
        // Single test so the env mutations cannot race each other
        for key in [
            "GOOGLE_SEARCH_API_KEY",
            "GOOGLE_CSE_ID",
            "INFERENCE_ENDPOINT",
            "INFERENCE_API_KEY",
        ] {
            env::remove_var(key);
        }
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("GOOGLE_SEARCH_API_KEY"))
        ));

        env::set_var("GOOGLE_SEARCH_API_KEY", "k");
        env::set_var("GOOGLE_CSE_ID", "cx");
        env::set_var("INFERENCE_ENDPOINT", "https://inference.example.com");
        env::set_var("INFERENCE_API_KEY", "token");

        let config = Config::from_env().expect("all required variables set");
        assert_eq!(config.search.page_size, 5);
        assert_eq!(config.inference.temperature, 0.7);
        assert_eq!(config.inference.top_p, 0.9);
        assert_eq!(config.inference.max_gen_len, 200);
    }
}
