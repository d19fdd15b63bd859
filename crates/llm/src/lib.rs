//! Sprint Pilot LLM
//!
//! Provides a unified interface for structured-output completions against
//! generative model services. The single shipped implementation targets
//! OpenAI-compatible chat-completions endpoints with JSON-schema response
//! constraints; the `LlmProvider` trait is the seam for alternatives.

pub mod http_client;
pub mod openai;
pub mod provider;
pub mod types;

// Re-export main types
pub use http_client::build_http_client;
pub use openai::OpenAIProvider;
pub use provider::LlmProvider;
pub use types::*;
