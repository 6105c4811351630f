// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Model invocation module
//!
//! Formats an instruction prompt from the assembled context and the user's
//! question, calls the hosted inference endpoint once, reassembles the
//! chunked response body, and extracts the generated answer text.

pub mod client;
pub mod prompt;
pub mod types;

// Re-export commonly used types
pub use client::{reassemble_chunks, HttpInferenceClient, ModelInvoker};
pub use prompt::{build_prompt, SYSTEM_PREAMBLE};
pub use types::{decode_response, InvokeError, InvokeParams, ModelOutput, NO_GENERATION_TEXT};
