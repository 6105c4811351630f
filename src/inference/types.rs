// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for model invocation

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Fixed text used when a structured response carries no generation field
pub const NO_GENERATION_TEXT: &str = "No response from the model.";

/// Sampling parameters for a model invocation
#[derive(Debug, Clone, Copy)]
pub struct InvokeParams {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling parameter
    pub top_p: f32,
    /// Maximum generation length in tokens
    pub max_gen_len: u32,
}

impl Default for InvokeParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
            max_gen_len: 200,
        }
    }
}

/// Decoded model response
///
/// The endpoint's reassembled body is either a JSON payload carrying a
/// `generation` field or raw answer text. The two cases are kept distinct so
/// the fallback is an explicit branch, not an exception path.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    /// Body parsed as JSON and the generation field was extracted
    Structured(String),
    /// Body was not valid JSON; the whole body is the answer
    Raw(String),
}

impl ModelOutput {
    /// Answer text with stray delimiter fragments removed and whitespace
    /// trimmed
    pub fn into_text(self) -> String {
        let text = match self {
            Self::Structured(text) | Self::Raw(text) => text,
        };
        marker_regex().replace_all(&text, "").trim().to_string()
    }

    /// The undecorated answer text
    pub fn as_str(&self) -> &str {
        match self {
            Self::Structured(text) | Self::Raw(text) => text,
        }
    }
}

/// Errors that can occur during model invocation
#[derive(Debug, Error)]
pub enum InvokeError {
    /// Transport-level failure reaching the inference endpoint
    #[error("Inference request failed: {0}")]
    Http(String),

    /// Non-success status from the inference endpoint
    #[error("Inference API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message body
        message: String,
    },
}

/// Decode a reassembled response body into a tagged model output
///
/// A JSON object yields `Structured` with its `generation` field (or the
/// fixed no-generation text when the field is absent); anything that fails
/// JSON decoding falls back to `Raw` with the whole body as the answer.
pub fn decode_response(body: &str) -> ModelOutput {
    #[derive(Deserialize)]
    struct GenerationBody {
        generation: Option<String>,
    }

    match serde_json::from_str::<GenerationBody>(body) {
        Ok(decoded) => ModelOutput::Structured(
            decoded
                .generation
                .unwrap_or_else(|| NO_GENERATION_TEXT.to_string()),
        ),
        Err(_) => ModelOutput::Raw(body.to_string()),
    }
}

// Stray instruction-format fragments imperfect model output can leak
fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"</?s>|<</?INST>>|<</?SYS>>|\[/?INST\]").expect("valid marker pattern")
    })
}
