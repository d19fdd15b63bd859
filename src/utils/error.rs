//! Error Handling
//!
//! Unified error types for the sync pipeline.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

use sprint_pilot_llm::LlmError;

/// Pipeline-wide error type.
///
/// Propagation policy: task-source and delivery errors end the run;
/// analyzer errors never reach this type; they degrade to the fixed
/// fallback analysis per ticket.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Missing required identifier or credential. Fatal, never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream rejected our credentials (HTTP 401).
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Upstream throttled us (HTTP 429). Surfaced, not auto-retried.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// An outbound call exceeded its deadline.
    #[error("Timeout during {stage}")]
    Timeout {
        /// Pipeline stage the deadline expired in (e.g. "task fetch").
        stage: String,
    },

    /// Generic non-2xx from the task source or delivery destination.
    #[error("Upstream error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Model service errors (auto-converted from the llm crate).
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Network-level failures that are not timeouts.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Delivery failed after exhausting all attempts.
    #[error("Delivery failed after {attempts} attempts: {message}")]
    Delivery { attempts: u32, message: String },

    /// File I/O errors (config read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors (malformed request input).
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for pipeline errors.
pub type SyncResult<T> = Result<T, SyncError>;

impl SyncError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an auth error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a rate-limited error
    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::RateLimited(msg.into())
    }

    /// Create a timeout error tagged with the stage it occurred in
    pub fn timeout(stage: impl Into<String>) -> Self {
        Self::Timeout {
            stage: stage.into(),
        }
    }

    /// Create an upstream error carrying the HTTP status code
    pub fn upstream(status: u16, msg: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: msg.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Convert a reqwest error into the matching taxonomy kind.
    ///
    /// Timeouts get their own kind, tagged with the stage, so they are
    /// never conflated with generic network failures.
    pub fn from_reqwest(err: reqwest::Error, stage: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                stage: stage.to_string(),
            }
        } else {
            Self::Http(err.to_string())
        }
    }
}
