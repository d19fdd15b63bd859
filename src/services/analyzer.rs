//! Ticket Analyzer
//!
//! Scores one ticket against the codebase map via a structured model
//! call. The public surface never fails: any internal error degrades to
//! the fixed fallback analysis, substituted in exactly one place.

use std::sync::Arc;

use tracing::{debug, warn};

use sprint_pilot_llm::{LlmProvider, StructuredRequest};

use crate::models::analysis::{Analysis, AnalyzedItem};
use crate::models::structure::ProjectStructure;
use crate::models::task::WorkItem;
use crate::utils::error::SyncResult;

/// Maximum component paths listed in the prompt before eliding.
const COMPONENT_PATH_CAP: usize = 50;

/// Sampling temperature for analysis calls. Low: consistency over
/// creativity.
const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// Analyzes one ticket at a time against the codebase map.
pub struct TicketAnalyzer {
    provider: Arc<dyn LlmProvider>,
}

impl TicketAnalyzer {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Analyze one ticket.
    ///
    /// Never fails. Model errors, malformed output, and timeouts all
    /// yield [`Analysis::fallback`], logged per ticket.
    pub async fn analyze(&self, item: &WorkItem, structure: &ProjectStructure) -> AnalyzedItem {
        let analysis = match self.try_analyze(item, structure).await {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!(
                    task_id = %item.id,
                    error = %err,
                    "ticket analysis failed, substituting fallback"
                );
                Analysis::fallback()
            }
        };

        AnalyzedItem {
            task: item.clone(),
            analysis,
        }
    }

    async fn try_analyze(
        &self,
        item: &WorkItem,
        structure: &ProjectStructure,
    ) -> SyncResult<Analysis> {
        let request = StructuredRequest {
            system: build_system_prompt(),
            prompt: build_user_prompt(item, structure),
            schema_name: "ticket_analysis".to_string(),
            schema: serde_json::to_value(schemars::schema_for!(Analysis))?,
            temperature_override: Some(ANALYSIS_TEMPERATURE),
        };

        let value = self.provider.complete_structured(&request).await?;
        let analysis: Analysis = serde_json::from_value(value)?;

        debug!(
            task_id = %item.id,
            score = analysis.quality_score,
            complexity = analysis.complexity.label(),
            "ticket analysis complete"
        );
        Ok(analysis.clamped())
    }
}

/// Build the system instruction for ticket analysis.
pub fn build_system_prompt() -> String {
    "You are a senior engineer triaging sprint tickets against a summarized codebase map.\n\
     For the ticket you are given, assess:\n\
     - qualityScore: 1 (unusable as written) to 5 (ready to implement)\n\
     - missingElements: what the ticket lacks (acceptance criteria, repro steps, designs, ...); empty if nothing is missing\n\
     - affectedFiles: repository paths the work likely touches, preferring paths from the codebase map\n\
     - complexity: \"fix\" for a small targeted change, \"feature\" for larger work\n\
     - suggestedApproach: a concrete, short implementation plan\n\
     Respond with a single JSON object conforming to the provided schema."
        .to_string()
}

/// Build the user prompt from the ticket and the codebase map.
pub fn build_user_prompt(item: &WorkItem, structure: &ProjectStructure) -> String {
    let description = item
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("(no description provided)");

    let priority = item
        .priority
        .map(|p| p.label())
        .unwrap_or("(none)");

    format!(
        "## Ticket\nTitle: {}\nDescription: {}\nStatus: {}\nPriority: {}\n\n## Codebase map\n{}",
        item.name,
        description,
        item.status.status,
        priority,
        summarize_structure(structure)
    )
}

/// Render the codebase map for the prompt.
///
/// Routes are listed with their files; component paths are capped at
/// [`COMPONENT_PATH_CAP`] with an explicit elision marker.
fn summarize_structure(structure: &ProjectStructure) -> String {
    let mut out = String::new();

    out.push_str("Routes:\n");
    if structure.routes.is_empty() {
        out.push_str("(none)\n");
    } else {
        for route in &structure.routes {
            out.push_str(&format!("- {} (files: {})\n", route.path, route.files.join(", ")));
        }
    }

    out.push_str("\nComponents:\n");
    if structure.components.is_empty() {
        out.push_str("(none)\n");
    } else {
        for component in structure.components.iter().take(COMPONENT_PATH_CAP) {
            out.push_str(&format!("- {}\n", component));
        }
        if structure.components.len() > COMPONENT_PATH_CAP {
            out.push_str(&format!(
                "... and {} more\n",
                structure.components.len() - COMPONENT_PATH_CAP
            ));
        }
    }

    out.push_str("\nActions:\n");
    if structure.actions.is_empty() {
        out.push_str("(none)\n");
    } else {
        for action in &structure.actions {
            out.push_str(&format!("- {}\n", action));
        }
    }

    out
}
