//! Webhook Delivery Types

use serde::{Deserialize, Serialize};

/// Record of one successful delivery, for reporting and audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRecord {
    /// Total attempts made, including the successful one.
    pub attempts: u32,
    /// HTTP status the destination answered with.
    pub status_code: u16,
    /// Signature header value sent, when a secret was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Wall-clock time from first attempt to success, in milliseconds.
    pub latency_ms: u64,
    /// When the delivery completed, RFC-3339.
    pub delivered_at: String,
}
