//! Document Formatter
//!
//! Deterministic priority sort and markdown rendering of the analyzed
//! sprint. Pure: no I/O, no clock reads beyond the metadata passed in.

use std::cmp::Reverse;
use std::fmt::Write as _;

use crate::models::analysis::{AnalyzedItem, Complexity};
use crate::models::sync::SyncMetadata;
use crate::models::task::priority_rank;

/// Sort analyzed items into report order.
///
/// Precedence: priority rank ascending (Urgent first, unset last),
/// quality score descending, fixes before features, original relative
/// order beyond that. The underlying sort is stable.
pub fn sort_items(items: &[AnalyzedItem]) -> Vec<AnalyzedItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| {
        (
            priority_rank(item.task.priority),
            Reverse(item.analysis.quality_score),
            item.analysis.complexity.sort_rank(),
        )
    });
    sorted
}

/// Mean quality score rounded to one decimal; 0 for an empty list.
fn mean_quality(items: &[AnalyzedItem]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }
    let sum: u32 = items.iter().map(|i| u32::from(i.analysis.quality_score)).sum();
    let mean = f64::from(sum) / items.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Calendar date from an RFC-3339 timestamp; falls back to the raw value.
fn calendar_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Render the sprint report.
///
/// Deterministic given identical inputs; the metadata timestamp is
/// consumed as passed.
pub fn format_report(items: &[AnalyzedItem], metadata: &SyncMetadata) -> String {
    let sorted = sort_items(items);

    let fix_count = sorted
        .iter()
        .filter(|i| i.analysis.complexity == Complexity::Fix)
        .count();
    let feature_count = sorted.len() - fix_count;

    let mut out = String::new();

    let _ = writeln!(out, "# Sprint Plan - {}", calendar_date(&metadata.synced_at));
    out.push('\n');

    match &metadata.list_name {
        Some(name) => {
            let _ = writeln!(
                out,
                "Synced from \"{}\" ({}) at {}",
                name, metadata.list_id, metadata.synced_at
            );
        }
        None => {
            let _ = writeln!(out, "Synced from list {} at {}", metadata.list_id, metadata.synced_at);
        }
    }
    out.push('\n');

    let _ = writeln!(out, "## Summary");
    out.push('\n');
    let _ = writeln!(out, "- Fixes: {}", fix_count);
    let _ = writeln!(out, "- Features: {}", feature_count);
    let _ = writeln!(out, "- Average quality: {:.1}/5", mean_quality(&sorted));
    out.push('\n');

    if sorted.is_empty() {
        let _ = writeln!(out, "No tickets found.");
        return out;
    }

    let _ = writeln!(out, "## Tickets");
    out.push('\n');

    for (index, item) in sorted.iter().enumerate() {
        render_ticket(&mut out, index + 1, item);
    }

    out
}

/// Render one ticket block.
fn render_ticket(out: &mut String, ordinal: usize, item: &AnalyzedItem) {
    let task = &item.task;
    let analysis = &item.analysis;

    let _ = writeln!(
        out,
        "### {}. [{}] {}",
        ordinal,
        analysis.complexity.label().to_uppercase(),
        task.name
    );
    out.push('\n');

    let _ = writeln!(out, "- ID: {}", task.id);
    let _ = writeln!(out, "- Status: {}", task.status.status);

    if analysis.missing_elements.is_empty() {
        let _ = writeln!(out, "- Quality: {}/5", analysis.quality_score);
    } else {
        let _ = writeln!(
            out,
            "- Quality: {}/5 (missing: {})",
            analysis.quality_score,
            analysis.missing_elements.join(", ")
        );
    }

    let _ = writeln!(out, "- Complexity: {}", analysis.complexity.label());

    if let Some(priority) = task.priority {
        let _ = writeln!(out, "- Priority: {}", priority.label());
    }
    if !task.assignees.is_empty() {
        let _ = writeln!(out, "- Assignees: {}", task.assignees.join(", "));
    }
    if !task.tags.is_empty() {
        let _ = writeln!(out, "- Tags: {}", task.tags.join(", "));
    }
    if let Some(due_date) = &task.due_date {
        let _ = writeln!(out, "- Due: {}", due_date);
    }
    out.push('\n');

    if analysis.affected_files.is_empty() {
        let _ = writeln!(out, "Affected files: (none identified)");
    } else {
        let _ = writeln!(out, "Affected files:");
        for file in &analysis.affected_files {
            let _ = writeln!(out, "- {}", file);
        }
    }
    out.push('\n');

    let _ = writeln!(out, "Suggested approach: {}", analysis.suggested_approach);
    out.push('\n');

    let _ = writeln!(out, "Action: `{}`", analysis.complexity.action_command());
    out.push('\n');

    if let Some(description) = task.description.as_deref() {
        if !description.trim().is_empty() {
            let _ = writeln!(out, "> {}", description.trim());
            out.push('\n');
        }
    }

    if let Some(url) = &task.url {
        let _ = writeln!(out, "[View ticket]({})", url);
        out.push('\n');
    }
}
