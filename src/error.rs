//! Error types shared across the analysis pipeline.
//!
//! Model failures never leave the signal wrappers: they are logged and turned
//! into the deterministic fallback result. Only request validation surfaces to
//! callers (see `api::ApiError`).

use std::time::Duration;

/// Failure of a learned model (sentiment, emotion or summarization).
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The model was not loaded or the sidecar reported it as missing.
    #[error("model unavailable: {0}")]
    Unavailable(String),

    /// The sidecar could not be reached or returned a non-success status.
    #[error("model transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Inference did not finish within the configured budget.
    #[error("model timed out after {0:?}")]
    Timeout(Duration),

    /// The sidecar answered but the payload was not what the contract promises.
    #[error("unexpected model response: {0}")]
    BadResponse(String),

    /// The model ran but produced nothing usable.
    #[error("model returned no output")]
    EmptyOutput,
}

/// Failure to build a TF-IDF matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TfIdfError {
    /// Every token was a stop word or too short to count.
    #[error("empty vocabulary; documents only contain stop words")]
    EmptyVocabulary,
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
