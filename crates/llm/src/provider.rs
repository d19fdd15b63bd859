//! LLM Provider Trait
//!
//! Defines the common interface for structured-output providers.

use async_trait::async_trait;

use super::types::{LlmError, LlmResult, ProviderConfig, StructuredRequest};

/// Trait that all LLM providers must implement.
///
/// Providers take a [`StructuredRequest`] and return a JSON value
/// conforming to the request's schema. Schema enforcement happens at the
/// provider API level where supported; callers still validate the shape
/// when deserializing.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Complete a structured-output request.
    ///
    /// Returns the model's response parsed as a JSON value. Providers must
    /// strip transport artifacts (markdown fences, surrounding prose)
    /// before parsing.
    async fn complete_structured(&self, request: &StructuredRequest)
        -> LlmResult<serde_json::Value>;

    /// Check if the provider is healthy and reachable.
    ///
    /// For API providers, this validates the API key.
    async fn health_check(&self) -> LlmResult<()>;

    /// Get the configuration for this provider.
    fn config(&self) -> &ProviderConfig;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
