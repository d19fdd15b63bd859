//! Report Formatting Scenario Tests
//!
//! Full-report rendering over mixed ticket sets; ordering and summary
//! arithmetic as a reader of the document would see them.

use sprint_pilot::services::formatter::format_report;
use sprint_pilot::{Analysis, AnalyzedItem, Complexity, Priority, SyncMetadata, TaskStatus, WorkItem};

fn ticket(
    id: &str,
    name: &str,
    priority: Option<Priority>,
    score: u8,
    complexity: Complexity,
) -> AnalyzedItem {
    AnalyzedItem {
        task: WorkItem {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            status: TaskStatus {
                status: "open".to_string(),
            },
            assignees: vec![],
            priority,
            tags: vec![],
            due_date: None,
            custom_fields: vec![],
            url: None,
        },
        analysis: Analysis {
            quality_score: score,
            missing_elements: vec![],
            affected_files: vec![],
            complexity,
            suggested_approach: "Do the work.".to_string(),
        },
    }
}

fn metadata() -> SyncMetadata {
    SyncMetadata {
        synced_at: "2026-08-07T10:00:00+00:00".to_string(),
        task_count: 0,
        list_id: "901100123456".to_string(),
        list_name: Some("Sprint 34".to_string()),
    }
}

#[test]
fn report_orders_mixed_backlog_by_priority_then_quality_then_complexity() {
    let items = vec![
        ticket("d", "Low priority gem", Some(Priority::Low), 5, Complexity::Fix),
        ticket("a", "High feature", Some(Priority::High), 4, Complexity::Feature),
        ticket("b", "High fix", Some(Priority::High), 4, Complexity::Fix),
        ticket("c", "Urgent mess", Some(Priority::Urgent), 1, Complexity::Feature),
        ticket("e", "No priority", None, 5, Complexity::Fix),
    ];

    let report = format_report(&items, &metadata());

    let pos = |needle: &str| report.find(needle).unwrap();
    // Urgent first regardless of quality, then the High pair with the fix
    // winning the complexity tie-break, then Low, then unset.
    assert!(pos("Urgent mess") < pos("High fix"));
    assert!(pos("High fix") < pos("High feature"));
    assert!(pos("High feature") < pos("Low priority gem"));
    assert!(pos("Low priority gem") < pos("No priority"));

    // Ordinals follow the sorted order
    assert!(report.contains("### 1. [FEATURE] Urgent mess"));
    assert!(report.contains("### 2. [FIX] High fix"));
    assert!(report.contains("### 5. [FIX] No priority"));
}

#[test]
fn report_summary_reflects_the_whole_batch() {
    let items = vec![
        ticket("a", "One", None, 4, Complexity::Fix),
        ticket("b", "Two", None, 2, Complexity::Feature),
        ticket("c", "Three", None, 5, Complexity::Fix),
    ];

    let report = format_report(&items, &metadata());

    assert!(report.contains("- Fixes: 2"));
    assert!(report.contains("- Features: 1"));
    assert!(report.contains("- Average quality: 3.7/5"));
    assert!(report.contains("# Sprint Plan - 2026-08-07"));
    assert!(report.contains("\"Sprint 34\" (901100123456)"));
    assert!(report.contains("at 2026-08-07T10:00:00+00:00"));
}

#[test]
fn empty_batch_renders_the_no_tickets_line() {
    let report = format_report(&[], &metadata());
    assert!(report.contains("No tickets found."));
    assert!(!report.contains("### "));
    assert!(!report.contains("## Tickets"));
}

#[test]
fn equal_tickets_keep_input_order() {
    let items: Vec<AnalyzedItem> = (0..4)
        .map(|i| {
            ticket(
                &format!("t-{}", i),
                &format!("Twin {}", i),
                Some(Priority::Normal),
                3,
                Complexity::Feature,
            )
        })
        .collect();

    let report = format_report(&items, &metadata());
    let pos = |needle: &str| report.find(needle).unwrap();
    assert!(pos("Twin 0") < pos("Twin 1"));
    assert!(pos("Twin 1") < pos("Twin 2"));
    assert!(pos("Twin 2") < pos("Twin 3"));
}
