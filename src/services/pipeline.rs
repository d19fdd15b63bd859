//! Pipeline Controller
//!
//! Sequences fetch, batch analysis, report rendering, and delivery for
//! one sync run, and folds every outcome into a `SyncRunResult`.

use tracing::{info, warn};

use crate::models::sync::{DeliveryPayload, SyncMetadata, SyncRequest, SyncRunResult};
use crate::services::batch::BatchAnalyzer;
use crate::services::formatter::{format_report, sort_items};
use crate::services::task_source::TaskSourceClient;
use crate::services::webhook::WebhookDeliverer;

/// One-run sync pipeline: fetch, analyze, format, deliver.
pub struct SyncPipeline {
    source: TaskSourceClient,
    batch: BatchAnalyzer,
    deliverer: WebhookDeliverer,
}

impl SyncPipeline {
    pub fn new(source: TaskSourceClient, batch: BatchAnalyzer, deliverer: WebhookDeliverer) -> Self {
        Self {
            source,
            batch,
            deliverer,
        }
    }

    /// Run one sync end to end.
    ///
    /// An empty fetch short-circuits to success without invoking the
    /// formatter or deliverer. A delivery failure keeps the completed
    /// analysis: the result reports the ticket count with
    /// `webhook_delivered: false`.
    pub async fn run(&self, request: &SyncRequest) -> SyncRunResult {
        if let Err(reason) = validate_webhook_url(&request.webhook_url) {
            return SyncRunResult::failure(format!(
                "Invalid webhook URL {:?}: {}",
                request.webhook_url, reason
            ));
        }

        info!(list_id = ?request.list_id, "sync run started");

        let fetched = match self
            .source
            .fetch_items(request.list_id.as_deref(), true, None)
            .await
        {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(error = %err, "task fetch failed, aborting run");
                return SyncRunResult::failure(format!("Task fetch failed: {}", err));
            }
        };

        if fetched.items.is_empty() {
            info!(list_id = %fetched.list_id, "no tickets found, skipping delivery");
            return SyncRunResult {
                success: true,
                ticket_count: 0,
                webhook_delivered: false,
                message: format!(
                    "No tickets found in list {}; nothing to deliver.",
                    fetched.list_id
                ),
            };
        }

        let analyzed = self
            .batch
            .analyze_all(&fetched.items, &request.codebase_map)
            .await;
        let ticket_count = analyzed.len();

        let metadata = SyncMetadata::new(fetched.list_id.clone(), None, ticket_count);
        let sorted = sort_items(&analyzed);
        let sprint_markdown = format_report(&sorted, &metadata);

        let payload = DeliveryPayload {
            sprint_markdown,
            tickets: sorted,
            metadata,
            signature: None,
        };

        match self
            .deliverer
            .deliver(
                &request.webhook_url,
                &payload,
                request.webhook_secret.as_deref(),
            )
            .await
        {
            Ok(record) => {
                info!(
                    ticket_count,
                    attempts = record.attempts,
                    "sync run complete, report delivered"
                );
                SyncRunResult {
                    success: true,
                    ticket_count,
                    webhook_delivered: true,
                    message: format!(
                        "Synced {} tickets and delivered the sprint report in {} attempt(s).",
                        ticket_count, record.attempts
                    ),
                }
            }
            Err(err) => {
                warn!(ticket_count, error = %err, "analysis succeeded, delivery failed");
                SyncRunResult {
                    success: false,
                    ticket_count,
                    webhook_delivered: false,
                    message: format!(
                        "Analyzed {} tickets but delivery failed: {}",
                        ticket_count, err
                    ),
                }
            }
        }
    }
}

/// Validate the webhook URL up front; only http(s) destinations are
/// accepted.
fn validate_webhook_url(raw: &str) -> Result<(), String> {
    let parsed = url::Url::parse(raw).map_err(|e| e.to_string())?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme {:?}", other)),
    }
}
