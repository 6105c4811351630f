// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Answer pipeline orchestration
//!
//! Sequences search, result cleaning, page fetching, context assembly, and
//! model invocation for one query. Every boundary failure degrades to a
//! benign placeholder so the pipeline always completes and returns a string;
//! the typed errors are recorded in the log before being suppressed.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::content::{PageFetcher, PageSource, FETCH_ERROR_SENTINEL};
use crate::context::build_context;
use crate::inference::{build_prompt, HttpInferenceClient, InvokeParams, ModelInvoker};
use crate::search::{CleanedResults, GoogleSearchProvider, SearchProvider, SearchResult};

/// Fixed text returned when model invocation fails
pub const INVOKE_ERROR_TEXT: &str =
    "An error occurred while processing the query with the model.";

/// One completed query/answer exchange
#[derive(Debug, Clone)]
pub struct Turn {
    /// The user's question
    pub query: String,
    /// Raw search results backing the answer
    pub results: Vec<SearchResult>,
    /// The model's answer text
    pub answer: String,
}

/// Caller-owned conversation state
///
/// Holds at most the latest turn; recording a new turn clears the prior one.
/// There is no process-wide session state anywhere in the crate.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    latest: Option<Turn>,
}

impl Conversation {
    /// Record a turn, replacing any prior one
    pub fn record(&mut self, turn: Turn) {
        self.latest = Some(turn);
    }

    /// The most recent turn, if any
    pub fn latest(&self) -> Option<&Turn> {
        self.latest.as_ref()
    }
}

/// Sequential search-grounded answer pipeline
pub struct AnswerPipeline {
    search: Box<dyn SearchProvider>,
    pages: Box<dyn PageSource>,
    invoker: Box<dyn ModelInvoker>,
    model_id: String,
    params: InvokeParams,
    page_size: usize,
}

impl AnswerPipeline {
    /// Assemble a pipeline from its parts
    pub fn new(
        search: Box<dyn SearchProvider>,
        pages: Box<dyn PageSource>,
        invoker: Box<dyn ModelInvoker>,
        model_id: String,
        params: InvokeParams,
        page_size: usize,
    ) -> Self {
        Self {
            search,
            pages,
            invoker,
            model_id,
            params,
            page_size,
        }
    }

    /// Build the production pipeline from process configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Box::new(GoogleSearchProvider::new(
                config.search.api_key.clone(),
                config.search.engine_id.clone(),
                config.search.site.clone(),
            )),
            Box::new(PageFetcher::new()),
            Box::new(HttpInferenceClient::new(
                config.inference.endpoint.clone(),
                config.inference.api_key.clone(),
            )),
            config.inference.model_id.clone(),
            InvokeParams {
                temperature: config.inference.temperature,
                top_p: config.inference.top_p,
                max_gen_len: config.inference.max_gen_len,
            },
            config.search.page_size,
        )
    }

    /// Answer a single query
    pub async fn answer(&self, query: &str) -> String {
        let conversation = self.answer_turn(Conversation::default(), query).await;
        conversation
            .latest()
            .map(|turn| turn.answer.clone())
            .unwrap_or_default()
    }

    /// Run one query through the pipeline, recording the turn on the
    /// caller-owned conversation
    ///
    /// Any prior turn is cleared; only the new exchange is retained.
    pub async fn answer_turn(&self, mut conversation: Conversation, query: &str) -> Conversation {
        // Step 1: live web search, degrading to empty results on failure
        let results = match self.search.search(query, self.page_size).await {
            Ok(results) => {
                if results.is_empty() {
                    info!("No results found for query");
                }
                results
            }
            Err(e) => {
                warn!("Search via {} failed, continuing without results: {}", self.search.name(), e);
                Vec::new()
            }
        };

        // Step 2: extract parallel snippet/url sequences
        let CleanedResults { mut snippets, urls } = CleanedResults::from_results(&results);

        // Step 3: append the first successfully fetched page, then stop
        for url in &urls {
            let page_text = self.pages.fetch_and_extract_text(url).await;
            if page_text != FETCH_ERROR_SENTINEL {
                snippets.push(page_text);
                break;
            }
        }

        // Steps 4-5: assemble context and invoke the model
        let context = build_context(&snippets);
        debug!("Prepared context ({} chars)", context.len());

        let prompt = build_prompt(&context, query);
        let answer = match self.invoker.invoke(&self.model_id, &prompt, self.params).await {
            Ok(output) => output.into_text(),
            Err(e) => {
                warn!("Model invocation failed: {}", e);
                INVOKE_ERROR_TEXT.to_string()
            }
        };

        conversation.record(Turn {
            query: query.to_string(),
            results,
            answer,
        });
        conversation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(query: &str) -> Turn {
        Turn {
            query: query.to_string(),
            results: vec![],
            answer: "an answer".to_string(),
        }
    }

    #[test]
    fn test_conversation_starts_empty() {
        let conversation = Conversation::default();
        assert!(conversation.latest().is_none());
    }

    #[test]
    fn test_conversation_keeps_only_latest_turn() {
        let mut conversation = Conversation::default();
        conversation.record(turn("first question"));
        conversation.record(turn("second question"));

        let latest = conversation.latest().unwrap();
        assert_eq!(latest.query, "second question");
    }
}
