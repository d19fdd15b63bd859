//! Shared Test Fixtures
//!
//! Mock HTTP servers and scripted LLM providers used across the
//! integration tests.

use async_trait::async_trait;
use axum::Router;

use sprint_pilot_llm::{LlmError, LlmProvider, LlmResult, ProviderConfig, StructuredRequest};

/// Serve an axum router on an ephemeral port, returning its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Provider returning canned analyses keyed on marker strings in the
/// ticket prompt.
///
/// - a title containing "urgent-fix" scores 5 / complexity "fix"
/// - a title containing "FAIL-ME" errors (exercising the fallback path)
/// - anything else scores 2 / complexity "feature"
pub struct ScriptedProvider {
    config: ProviderConfig,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            config: ProviderConfig::default(),
        }
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete_structured(
        &self,
        request: &StructuredRequest,
    ) -> LlmResult<serde_json::Value> {
        if request.prompt.contains("FAIL-ME") {
            return Err(LlmError::Other {
                message: "scripted failure".to_string(),
            });
        }

        if request.prompt.contains("urgent-fix") {
            Ok(serde_json::json!({
                "qualityScore": 5,
                "missingElements": [],
                "affectedFiles": ["app/login/page.tsx"],
                "complexity": "fix",
                "suggestedApproach": "Patch the redirect target.",
            }))
        } else {
            Ok(serde_json::json!({
                "qualityScore": 2,
                "missingElements": ["acceptance criteria"],
                "affectedFiles": [],
                "complexity": "feature",
                "suggestedApproach": "Draft a design first.",
            }))
        }
    }

    async fn health_check(&self) -> LlmResult<()> {
        Ok(())
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}
