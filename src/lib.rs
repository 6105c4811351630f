// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod config;
pub mod content;
pub mod context;
pub mod inference;
pub mod pipeline;
pub mod search;

// Re-export main types
pub use config::{Config, ConfigError, InferenceConfig, SearchConfig};
pub use content::{FetchError, PageFetcher, PageSource, FETCH_ERROR_SENTINEL};
pub use context::build_context;
pub use inference::{
    build_prompt, decode_response, HttpInferenceClient, InvokeError, InvokeParams, ModelInvoker,
    ModelOutput,
};
pub use pipeline::{AnswerPipeline, Conversation, Turn, INVOKE_ERROR_TEXT};
pub use search::{CleanedResults, GoogleSearchProvider, SearchError, SearchProvider, SearchResult};
