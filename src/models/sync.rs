//! Sync Run Models
//!
//! Request, metadata, wire payload, and final result types for one sync
//! run.

use serde::{Deserialize, Serialize};

use super::analysis::AnalyzedItem;
use super::structure::ProjectStructure;

/// Metadata describing one sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncMetadata {
    /// When the sync ran, RFC-3339.
    pub synced_at: String,
    pub task_count: usize,
    /// Source list identifier.
    pub list_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
}

impl SyncMetadata {
    /// Create metadata stamped with the current time.
    pub fn new(list_id: impl Into<String>, list_name: Option<String>, task_count: usize) -> Self {
        Self {
            synced_at: chrono::Utc::now().to_rfc3339(),
            task_count,
            list_id: list_id.into(),
            list_name,
        }
    }
}

/// Wire payload POSTed to the delivery destination.
///
/// The signature travels in the `X-Sprint-Pilot-Signature` header, computed
/// over the serialized body; the embedded field stays `None` on send and
/// exists for receivers that persist the signature alongside the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPayload {
    /// The rendered sprint report.
    pub sprint_markdown: String,
    /// Analyzed tickets in report order.
    pub tickets: Vec<AnalyzedItem>,
    pub metadata: SyncMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// Input accepted by the pipeline entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    /// List to sync; falls back to the configured default.
    #[serde(default)]
    pub list_id: Option<String>,
    /// Caller-supplied codebase map.
    pub codebase_map: ProjectStructure,
    /// Destination for the rendered report. Must be a valid http(s) URL.
    pub webhook_url: String,
    /// Secret for HMAC signing of the delivery body.
    #[serde(default)]
    pub webhook_secret: Option<String>,
}

/// Final result of one sync run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRunResult {
    pub success: bool,
    pub ticket_count: usize,
    pub webhook_delivered: bool,
    /// Human-readable outcome, distinguishing "no tickets found",
    /// "succeeded with delivery", and "analyzed but delivery failed".
    pub message: String,
}

impl SyncRunResult {
    /// A failed run that never produced tickets.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ticket_count: 0,
            webhook_delivered: false,
            message: message.into(),
        }
    }
}
