//! Analysis Models
//!
//! The model's structured assessment of one ticket, and the pairing of
//! ticket + assessment that flows from the batch analyzer to the formatter.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::task::WorkItem;

/// Two-valued complexity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Small, targeted change.
    Fix,
    /// Larger piece of work.
    Feature,
}

impl Complexity {
    /// Lowercase label used in the rendered report.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fix => "fix",
            Self::Feature => "feature",
        }
    }

    /// Derived action-command hint for the report.
    pub fn action_command(self) -> &'static str {
        match self {
            Self::Fix => "/fix",
            Self::Feature => "/agent",
        }
    }

    /// Sort rank: fixes before features when everything else ties.
    pub fn sort_rank(self) -> u8 {
        match self {
            Self::Fix => 0,
            Self::Feature => 1,
        }
    }
}

/// Structured quality/mapping assessment of one ticket.
///
/// Produced once per ticket by the analyzer; never mutated after creation.
/// The `JsonSchema` derive is handed to the model service as the output
/// constraint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Ticket quality score, 1 (unusable) to 5 (ready to implement).
    #[schemars(range(min = 1, max = 5))]
    pub quality_score: u8,
    /// What the ticket is missing (acceptance criteria, repro steps, ...).
    pub missing_elements: Vec<String>,
    /// Repository paths this ticket likely touches. Not required to exist
    /// in the codebase map.
    pub affected_files: Vec<String>,
    pub complexity: Complexity,
    /// Free-text implementation suggestion.
    pub suggested_approach: String,
}

impl Analysis {
    /// The fixed safe-default substituted when model analysis fails.
    pub fn fallback() -> Self {
        Self {
            quality_score: 3,
            missing_elements: vec![
                "Automated analysis unavailable; manual review needed".to_string()
            ],
            affected_files: Vec::new(),
            complexity: Complexity::Feature,
            suggested_approach: "Review this ticket manually; automated analysis did not complete."
                .to_string(),
        }
    }

    /// Clamp the quality score into the 1–5 band.
    ///
    /// The schema constrains the model, but gateways without strict schema
    /// support can still return out-of-band integers.
    pub fn clamped(mut self) -> Self {
        self.quality_score = self.quality_score.clamp(1, 5);
        self
    }
}

/// One ticket paired with its assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedItem {
    pub task: WorkItem,
    pub analysis: Analysis,
}
