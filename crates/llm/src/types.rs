//! Shared LLM Types
//!
//! Provider configuration, structured-output request shape, and the error
//! taxonomy shared by all provider implementations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for an LLM provider instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key. `None` means the provider is unconfigured; requests fail
    /// with an authentication error before any network call.
    pub api_key: Option<String>,
    /// Model identifier (e.g. "gpt-4o-mini").
    pub model: String,
    /// Override for the provider's default API endpoint.
    pub base_url: Option<String>,
    /// Maximum output tokens per completion.
    pub max_tokens: u32,
    /// Default sampling temperature. Low values favor consistency over
    /// creativity, which structured assessments want.
    pub temperature: f32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            base_url: None,
            max_tokens: 2048,
            temperature: 0.3,
        }
    }
}

/// A structured-output completion request.
///
/// Carries a system instruction, a user prompt, and the JSON Schema the
/// response must conform to. The provider is responsible for translating
/// the schema into its native output-constraint mechanism.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    /// System instruction.
    pub system: String,
    /// User prompt.
    pub prompt: String,
    /// Name the schema is registered under with the provider.
    pub schema_name: String,
    /// JSON Schema the response must conform to.
    pub schema: serde_json::Value,
    /// Per-request sampling temperature override.
    pub temperature_override: Option<f32>,
}

/// LLM provider errors.
#[derive(Debug, Error)]
pub enum LlmError {
    /// API key missing or rejected (HTTP 401/403).
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Requested model does not exist (HTTP 404).
    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    /// Provider throttled the request (HTTP 429).
    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        /// Seconds to wait, when the provider said so.
        retry_after: Option<u64>,
    },

    /// Request rejected as malformed (HTTP 400).
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Provider-side failure (HTTP 5xx).
    #[error("Server error: {message}")]
    ServerError {
        message: String,
        status: Option<u16>,
    },

    /// The request exceeded its deadline.
    #[error("Request timed out: {message}")]
    Timeout { message: String },

    /// Network-level failure that is not a timeout.
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// Response arrived but could not be parsed into the expected shape.
    #[error("Parse error: {message}")]
    ParseError { message: String },

    /// Anything else.
    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for LLM operations.
pub type LlmResult<T> = Result<T, LlmError>;

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                message: err.to_string(),
            }
        } else {
            Self::NetworkError {
                message: err.to_string(),
            }
        }
    }
}
