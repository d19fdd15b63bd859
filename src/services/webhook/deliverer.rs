//! Webhook Deliverer
//!
//! POSTs the delivery payload to the caller-supplied destination with
//! optional HMAC signing and exponential-backoff retry.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::models::sync::DeliveryPayload;
use crate::services::webhook::signature;
use crate::services::webhook::types::DeliveryRecord;
use crate::utils::error::{SyncError, SyncResult};

/// Default total attempts before surfacing the last error.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Per-attempt request deadline.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Delivers rendered sprint reports to webhook destinations.
pub struct WebhookDeliverer {
    client: reqwest::Client,
    max_attempts: u32,
}

impl WebhookDeliverer {
    /// Create a deliverer. `max_attempts` below 1 is treated as 1.
    pub fn new(max_attempts: u32) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Deliver the payload, signing when a secret is supplied.
    ///
    /// The signature is computed over the exact serialized body that goes
    /// on the wire and attached as the `X-Sprint-Pilot-Signature` header.
    /// Network failures and non-2xx responses are retried with delays of
    /// 2^n seconds (n = 0-indexed attempt number); the final failure is
    /// surfaced immediately with no trailing delay.
    pub async fn deliver(
        &self,
        url: &str,
        payload: &DeliveryPayload,
        secret: Option<&str>,
    ) -> SyncResult<DeliveryRecord> {
        let body = serde_json::to_string(payload)?;
        let signature = secret
            .filter(|s| !s.is_empty())
            .map(|s| signature::sign(s, body.as_bytes()));

        let start = Instant::now();
        let mut last_error = String::new();

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                let delay = 2u64.pow(attempt - 1);
                debug!(
                    attempt = attempt + 1,
                    delay_secs = delay,
                    "delivery retry after backoff"
                );
                tokio::time::sleep(Duration::from_secs(delay)).await;
            }

            match self.attempt_send(url, &body, signature.as_deref()).await {
                Ok(status_code) => {
                    debug!(attempt = attempt + 1, status_code, "delivery succeeded");
                    return Ok(DeliveryRecord {
                        attempts: attempt + 1,
                        status_code,
                        signature,
                        latency_ms: start.elapsed().as_millis() as u64,
                        delivered_at: chrono::Utc::now().to_rfc3339(),
                    });
                }
                Err(message) => {
                    warn!(attempt = attempt + 1, error = %message, "delivery attempt failed");
                    last_error = message;
                }
            }
        }

        Err(SyncError::Delivery {
            attempts: self.max_attempts,
            message: last_error,
        })
    }

    async fn attempt_send(
        &self,
        url: &str,
        body: &str,
        signature: Option<&str>,
    ) -> Result<u16, String> {
        let mut request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));

        if let Some(sig) = signature {
            request = request.header(signature::SIGNATURE_HEADER, sig);
        }

        let response = request
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            Err(format!("destination returned HTTP {}", status.as_u16()))
        }
    }
}

impl Default for WebhookDeliverer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}
