//! Task Models
//!
//! Tickets as fetched from the external tracker, plus the priority ladder
//! that drives report ordering.

use serde::{Deserialize, Deserializer, Serialize};

/// Priority labels recognized from the tracker, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Normal,
    Low,
}

impl Priority {
    /// Sort rank: Urgent(1) < High(2) < Normal(3) < Low(4).
    /// Unset or unrecognized priorities rank 5, see [`priority_rank`].
    pub fn rank(self) -> u8 {
        match self {
            Self::Urgent => 1,
            Self::High => 2,
            Self::Normal => 3,
            Self::Low => 4,
        }
    }

    /// Parse a tracker label, case-insensitively.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "urgent" => Some(Self::Urgent),
            "high" => Some(Self::High),
            "normal" => Some(Self::Normal),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Human-readable label for report rendering.
    pub fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Normal => "Normal",
            Self::Low => "Low",
        }
    }
}

/// Sort rank for an optional priority; absent ranks last.
pub fn priority_rank(priority: Option<Priority>) -> u8 {
    priority.map(Priority::rank).unwrap_or(5)
}

/// Lenient priority field: null and unrecognized labels both become `None`.
fn priority_lenient<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(Priority::parse))
}

/// Status label wrapper, matching the tracker's nested shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatus {
    pub status: String,
}

impl TaskStatus {
    /// Coercion default for items arriving without a status.
    pub fn unknown() -> Self {
        Self {
            status: "unknown".to_string(),
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::unknown()
    }
}

/// One ticket fetched from the external tracker.
///
/// Immutable once fetched; owned by the pipeline for the duration of one
/// sync run. Strict deserialization requires `id`, `name`, and `status`;
/// everything else defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// External identifier.
    pub id: String,
    /// Ticket title.
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default, deserialize_with = "priority_lenient")]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// Opaque tracker-specific custom fields, carried through untouched.
    #[serde(default)]
    pub custom_fields: Vec<serde_json::Value>,
    #[serde(default)]
    pub url: Option<String>,
}
