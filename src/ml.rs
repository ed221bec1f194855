//! HTTP client for the model sidecar.
//!
//! The learned models (sentiment, emotion, summarization) run in a separate
//! inference service. This module only speaks its wire contract; the signal
//! wrappers decide what to do when a call fails.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ModelError, ModelResult};

/// One label/score pair as returned by a text-classification pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Which learned models the sidecar reports as loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidecarHealth {
    #[serde(default)]
    pub sentiment: bool,
    #[serde(default)]
    pub emotion: bool,
    #[serde(default)]
    pub summarization: bool,
}

#[derive(Debug, Serialize)]
struct TextPayload<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SummarizePayload<'a> {
    text: &'a str,
    max_length: usize,
    min_length: usize,
}

#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary_text: String,
}

/// Thin wrapper around a shared `reqwest::Client`. Cloning is cheap and the
/// client is safe to use from concurrent requests.
#[derive(Debug, Clone)]
pub struct SidecarClient {
    client: reqwest::Client,
    base_url: String,
}

impl SidecarClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ModelResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Asks the sidecar which models it has loaded.
    pub async fn health(&self) -> ModelResult<SidecarHealth> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        let health = response
            .json::<SidecarHealth>()
            .await
            .map_err(|e| ModelError::BadResponse(format!("health parse error: {}", e)))?;
        debug!(?health, "sidecar health");
        Ok(health)
    }

    /// Calls the sentiment pipeline. The top prediction comes first.
    pub async fn sentiment(&self, text: &str) -> ModelResult<Vec<LabelScore>> {
        self.classify("sentiment", text).await
    }

    /// Calls the emotion pipeline. The top prediction comes first.
    pub async fn emotion(&self, text: &str) -> ModelResult<Vec<LabelScore>> {
        self.classify("emotion", text).await
    }

    /// Runs sequence-to-sequence summarization with output length bounds.
    pub async fn summarize(&self, text: &str, max_length: usize, min_length: usize) -> ModelResult<String> {
        let response = self
            .client
            .post(format!("{}/ml/summarize", self.base_url))
            .json(&SummarizePayload {
                text,
                max_length,
                min_length,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("⚠️ [ML] summarize request failed: {}", response.status());
            return Err(ModelError::Unavailable(format!(
                "summarize returned {}",
                response.status()
            )));
        }

        let data = response
            .json::<SummarizeResponse>()
            .await
            .map_err(|e| ModelError::BadResponse(format!("summarize parse error: {}", e)))?;
        Ok(data.summary_text)
    }

    async fn classify(&self, task: &str, text: &str) -> ModelResult<Vec<LabelScore>> {
        let response = self
            .client
            .post(format!("{}/ml/{}", self.base_url, task))
            .json(&TextPayload { text })
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("⚠️ [ML] {} request failed: {}", task, response.status());
            return Err(ModelError::Unavailable(format!(
                "{} returned {}",
                task,
                response.status()
            )));
        }

        response
            .json::<Vec<LabelScore>>()
            .await
            .map_err(|e| ModelError::BadResponse(format!("{} parse error: {}", task, e)))
    }
}
