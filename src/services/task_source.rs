//! Task Source Client
//!
//! Fetches tickets from the list-based tracker API and normalizes them
//! into `WorkItem`s. Partially malformed upstream items are coerced, not
//! dropped; a bad item never aborts the batch.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::models::task::{Priority, TaskStatus, WorkItem};
use crate::utils::error::{SyncError, SyncResult};

/// Coercion default for items arriving without a usable name.
const UNTITLED_TASK: &str = "Untitled Task";

/// Result of one fetch: normalized items plus the list id actually used.
#[derive(Debug, Clone)]
pub struct FetchedTasks {
    pub items: Vec<WorkItem>,
    /// The list id the fetch resolved to (request value or configured
    /// default).
    pub list_id: String,
}

/// Outcome of validating one raw upstream task.
///
/// Keeping the distinction explicit makes the coercion policy
/// independently testable instead of an inline fallback.
#[derive(Debug, Clone)]
pub enum ParsedTask {
    /// The item matched the strict `WorkItem` shape.
    StrictlyValid(WorkItem),
    /// The item failed strict validation and was rebuilt best-effort.
    Coerced(WorkItem),
}

impl ParsedTask {
    pub fn into_item(self) -> WorkItem {
        match self {
            Self::StrictlyValid(item) | Self::Coerced(item) => item,
        }
    }

    pub fn is_coerced(&self) -> bool {
        matches!(self, Self::Coerced(_))
    }
}

/// Wire shape of the tracker's list-task endpoint.
#[derive(Debug, Deserialize)]
struct TasksResponse {
    #[serde(default)]
    tasks: Vec<serde_json::Value>,
}

/// Client for the list-based tracker API.
pub struct TaskSourceClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
    default_list_id: Option<String>,
    timeout: Duration,
}

impl TaskSourceClient {
    /// Create a new client.
    ///
    /// `default_list_id` is used when a fetch names no list; `timeout`
    /// bounds each outbound request.
    pub fn new(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
        default_list_id: Option<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.into(),
            api_token: api_token.into(),
            default_list_id,
            timeout,
        }
    }

    /// Fetch all tasks from a list.
    ///
    /// `list_id` falls back to the configured default; having neither is a
    /// configuration error. Timeouts, 401, and 429 are surfaced as their
    /// own error kinds; any other non-2xx becomes an upstream error with
    /// the status code.
    pub async fn fetch_items(
        &self,
        list_id: Option<&str>,
        include_subtasks: bool,
        status_filter: Option<&[String]>,
    ) -> SyncResult<FetchedTasks> {
        let list_id = list_id
            .map(str::to_string)
            .or_else(|| self.default_list_id.clone())
            .ok_or_else(|| {
                SyncError::config("no list id given and no default list configured")
            })?;

        let url = format!("{}/list/{}/task", self.base_url, list_id);
        let mut request = self
            .client
            .get(&url)
            .header("Authorization", &self.api_token)
            .timeout(self.timeout)
            .query(&[("subtasks", include_subtasks)]);

        if let Some(statuses) = status_filter {
            for status in statuses {
                request = request.query(&[("statuses[]", status)]);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| SyncError::from_reqwest(e, "task fetch"))?;

        let status = response.status().as_u16();
        match status {
            401 => return Err(SyncError::auth("task source rejected the API token")),
            429 => return Err(SyncError::rate_limited("task source throttled the request")),
            _ if !(200..300).contains(&status) => {
                let body = response.text().await.unwrap_or_default();
                return Err(SyncError::upstream(status, body));
            }
            _ => {}
        }

        let body: TasksResponse = response
            .json()
            .await
            .map_err(|e| SyncError::from_reqwest(e, "task fetch"))?;

        let mut items = Vec::with_capacity(body.tasks.len());
        let mut coerced = 0usize;
        for raw in body.tasks {
            let parsed = parse_or_coerce(raw);
            if parsed.is_coerced() {
                coerced += 1;
            }
            items.push(parsed.into_item());
        }

        if coerced > 0 {
            warn!(
                coerced,
                total = items.len(),
                %list_id,
                "task fetch: coerced malformed upstream items"
            );
        }
        debug!(count = items.len(), %list_id, "task fetch complete");

        Ok(FetchedTasks { items, list_id })
    }
}

/// Validate one raw upstream task, coercing on strict-shape failure.
pub fn parse_or_coerce(raw: serde_json::Value) -> ParsedTask {
    match serde_json::from_value::<WorkItem>(raw.clone()) {
        Ok(item) => ParsedTask::StrictlyValid(item),
        Err(err) => {
            debug!(error = %err, "strict task validation failed, coercing");
            ParsedTask::Coerced(coerce_task(&raw))
        }
    }
}

/// Rebuild a best-effort `WorkItem` from a malformed raw task.
///
/// Rules: id stringified, name defaulted to "Untitled Task", status
/// defaulted to "unknown", collections defaulted empty. Pure.
fn coerce_task(raw: &serde_json::Value) -> WorkItem {
    let id = match &raw["id"] {
        serde_json::Value::String(s) if !s.is_empty() => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => "unknown".to_string(),
    };

    let name = raw["name"]
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNTITLED_TASK)
        .to_string();

    let status = raw["status"]["status"]
        .as_str()
        .map(|s| TaskStatus {
            status: s.to_string(),
        })
        .unwrap_or_default();

    let string_list = |value: &serde_json::Value| -> Vec<String> {
        value
            .as_array()
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    };

    WorkItem {
        id,
        name,
        description: raw["description"].as_str().map(str::to_string),
        status,
        assignees: string_list(&raw["assignees"]),
        priority: raw["priority"].as_str().and_then(Priority::parse),
        tags: string_list(&raw["tags"]),
        due_date: raw["dueDate"].as_str().map(str::to_string),
        custom_fields: raw["customFields"].as_array().cloned().unwrap_or_default(),
        url: raw["url"].as_str().map(str::to_string),
    }
}
