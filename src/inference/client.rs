// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP client for the hosted inference endpoint

use async_trait::async_trait;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::Client;
use tracing::debug;

use super::types::{decode_response, InvokeError, InvokeParams, ModelOutput};

/// Trait for invoking a hosted model
///
/// The pipeline consumes this seam so tests can capture prompts and script
/// model replies without a network.
#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Invoke the model once with a fully formatted prompt
    ///
    /// # Arguments
    /// * `model_id` - Model identifier understood by the endpoint
    /// * `prompt` - Instruction-formatted prompt
    /// * `params` - Sampling parameters
    ///
    /// # Returns
    /// The decoded model output or an error
    async fn invoke(
        &self,
        model_id: &str,
        prompt: &str,
        params: InvokeParams,
    ) -> Result<ModelOutput, InvokeError>;
}

/// Client for a hosted model-invocation endpoint
///
/// Sends one JSON request per query and reassembles the possibly-chunked
/// response body before decoding.
pub struct HttpInferenceClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl HttpInferenceClient {
    /// Create a new inference client
    ///
    /// # Arguments
    /// * `endpoint` - Base URL of the inference endpoint
    /// * `api_key` - Credential sent as a bearer token
    pub fn new(endpoint: String, api_key: String) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            client,
        }
    }

    fn invoke_url(&self, model_id: &str) -> String {
        format!(
            "{}/model/{}/invoke",
            self.endpoint.trim_end_matches('/'),
            model_id
        )
    }
}

#[async_trait]
impl ModelInvoker for HttpInferenceClient {
    async fn invoke(
        &self,
        model_id: &str,
        prompt: &str,
        params: InvokeParams,
    ) -> Result<ModelOutput, InvokeError> {
        let body = serde_json::json!({
            "prompt": prompt,
            "temperature": params.temperature,
            "top_p": params.top_p,
            "max_gen_len": params.max_gen_len,
        });

        let response = self
            .client
            .post(self.invoke_url(model_id))
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| InvokeError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InvokeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // The endpoint may deliver the body as a sequence of byte chunks
        let stream = response.bytes_stream();
        futures::pin_mut!(stream);
        let text = reassemble_chunks(stream)
            .await
            .map_err(|e| InvokeError::Http(e.to_string()))?;

        debug!("Reassembled {} bytes from inference response", text.len());

        Ok(decode_response(&text))
    }
}

/// Concatenate a chunked response body, in arrival order, into one string
pub async fn reassemble_chunks<S, E>(mut stream: S) -> Result<String, E>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
{
    let mut raw = Vec::new();
    while let Some(chunk) = stream.next().await {
        raw.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}
