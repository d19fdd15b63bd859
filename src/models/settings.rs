//! Settings Models
//!
//! Pipeline configuration stored in config.json. Components receive the
//! pieces they need at construction; nothing reads configuration ambiently.

use serde::{Deserialize, Serialize};

use sprint_pilot_llm::ProviderConfig;

/// Pipeline configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Task tracker API token.
    pub api_token: Option<String>,
    /// Task tracker API base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// List synced when a request names none.
    #[serde(default)]
    pub default_list_id: Option<String>,
    /// Model provider API key.
    pub model_api_key: Option<String>,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Override for the model provider's API endpoint.
    #[serde(default)]
    pub model_base_url: Option<String>,
    /// Sampling temperature for analysis calls.
    #[serde(default = "default_temperature")]
    pub model_temperature: f32,
    /// Maximum output tokens per analysis call.
    #[serde(default = "default_max_tokens")]
    pub model_max_tokens: u32,
    /// Simultaneous model calls per batch group.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Total delivery attempts before surfacing the last error.
    #[serde(default = "default_max_delivery_attempts")]
    pub max_delivery_attempts: u32,
    /// Deadline for the task-source fetch, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://api.clickup.com/api/v2".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_concurrency() -> usize {
    5
}

fn default_max_delivery_attempts() -> u32 {
    3
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            api_base_url: default_api_base_url(),
            default_list_id: None,
            model_api_key: None,
            model: default_model(),
            model_base_url: None,
            model_temperature: default_temperature(),
            model_max_tokens: default_max_tokens(),
            concurrency: default_concurrency(),
            max_delivery_attempts: default_max_delivery_attempts(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub api_token: Option<String>,
    pub api_base_url: Option<String>,
    pub default_list_id: Option<String>,
    pub model_api_key: Option<String>,
    pub model: Option<String>,
    pub model_base_url: Option<String>,
    pub model_temperature: Option<f32>,
    pub model_max_tokens: Option<u32>,
    pub concurrency: Option<usize>,
    pub max_delivery_attempts: Option<u32>,
    pub fetch_timeout_secs: Option<u64>,
}

impl SyncConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(token) = update.api_token {
            self.api_token = Some(token);
        }
        if let Some(base_url) = update.api_base_url {
            self.api_base_url = base_url;
        }
        if let Some(list_id) = update.default_list_id {
            self.default_list_id = Some(list_id);
        }
        if let Some(key) = update.model_api_key {
            self.model_api_key = Some(key);
        }
        if let Some(model) = update.model {
            self.model = model;
        }
        if let Some(base_url) = update.model_base_url {
            self.model_base_url = Some(base_url);
        }
        if let Some(temperature) = update.model_temperature {
            self.model_temperature = temperature;
        }
        if let Some(max_tokens) = update.model_max_tokens {
            self.model_max_tokens = max_tokens;
        }
        if let Some(concurrency) = update.concurrency {
            self.concurrency = concurrency;
        }
        if let Some(attempts) = update.max_delivery_attempts {
            self.max_delivery_attempts = attempts;
        }
        if let Some(timeout) = update.fetch_timeout_secs {
            self.fetch_timeout_secs = timeout;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.concurrency < 1 || self.concurrency > 20 {
            return Err(format!(
                "concurrency must be between 1 and 20, got {}",
                self.concurrency
            ));
        }

        if self.max_delivery_attempts < 1 || self.max_delivery_attempts > 10 {
            return Err(format!(
                "max_delivery_attempts must be between 1 and 10, got {}",
                self.max_delivery_attempts
            ));
        }

        if !(0.0..=2.0).contains(&self.model_temperature) {
            return Err(format!(
                "model_temperature must be between 0.0 and 2.0, got {}",
                self.model_temperature
            ));
        }

        if self.fetch_timeout_secs < 5 {
            return Err("fetch_timeout_secs must be at least 5 seconds".to_string());
        }

        Ok(())
    }

    /// Build the provider configuration for the analysis model.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            api_key: self.model_api_key.clone(),
            model: self.model.clone(),
            base_url: self.model_base_url.clone(),
            max_tokens: self.model_max_tokens,
            temperature: self.model_temperature,
        }
    }
}
