//! Webhook Delivery Integration Tests
//!
//! Delivery against a mock receiver: signing over the raw body, retry
//! with exponential backoff, and exhaustion behavior.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;

use sprint_pilot::services::webhook::signature;
use sprint_pilot::{
    Analysis, AnalyzedItem, DeliveryPayload, SyncError, SyncMetadata, TaskStatus,
    WebhookDeliverer, WorkItem,
};

use super::support::spawn_server;

fn sample_payload() -> DeliveryPayload {
    let task = WorkItem {
        id: "t-1".to_string(),
        name: "Fix login redirect".to_string(),
        description: None,
        status: TaskStatus {
            status: "open".to_string(),
        },
        assignees: vec![],
        priority: None,
        tags: vec![],
        due_date: None,
        custom_fields: vec![],
        url: None,
    };
    DeliveryPayload {
        sprint_markdown: "# Sprint Plan - 2026-08-07".to_string(),
        tickets: vec![AnalyzedItem {
            task,
            analysis: Analysis::fallback(),
        }],
        metadata: SyncMetadata::new("list-1", None, 1),
        signature: None,
    }
}

/// Receiver that records the signature header and raw body of each request.
fn recording_receiver(
    received: Arc<Mutex<Vec<(Option<String>, String)>>>,
) -> Router {
    Router::new().route(
        "/webhook",
        post(move |headers: HeaderMap, body: String| {
            let received = received.clone();
            async move {
                let sig = headers
                    .get("X-Sprint-Pilot-Signature")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                received.lock().unwrap().push((sig, body));
                StatusCode::OK
            }
        }),
    )
}

#[tokio::test]
async fn delivery_signs_over_the_raw_body() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let base = spawn_server(recording_receiver(received.clone())).await;

    let record = WebhookDeliverer::new(3)
        .deliver(
            &format!("{}/webhook", base),
            &sample_payload(),
            Some("shared-secret"),
        )
        .await
        .unwrap();

    assert_eq!(record.attempts, 1);
    assert_eq!(record.status_code, 200);

    let requests = received.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (header, body) = &requests[0];

    // Receiver-side contract: recompute over the raw received bytes
    assert!(signature::verify(
        "shared-secret",
        body.as_bytes(),
        header.as_deref()
    ));
    // Wrong secret or a mutated body must fail
    assert!(!signature::verify("other-secret", body.as_bytes(), header.as_deref()));
    let mut tampered = body.clone();
    tampered.push(' ');
    assert!(!signature::verify("shared-secret", tampered.as_bytes(), header.as_deref()));

    // The body is the payload JSON the receiver can reparse after verifying
    let parsed: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(parsed["sprintMarkdown"], "# Sprint Plan - 2026-08-07");
    assert_eq!(parsed["tickets"][0]["task"]["id"], "t-1");
    assert_eq!(parsed["metadata"]["listId"], "list-1");
}

#[tokio::test]
async fn delivery_without_secret_sends_no_signature_header() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let base = spawn_server(recording_receiver(received.clone())).await;

    WebhookDeliverer::new(3)
        .deliver(&format!("{}/webhook", base), &sample_payload(), None)
        .await
        .unwrap();

    let requests = received.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].0.is_none());
}

#[tokio::test]
async fn delivery_retries_with_exponential_backoff() {
    let calls = Arc::new(AtomicU32::new(0));
    let calls_handler = calls.clone();
    let app = Router::new().route(
        "/webhook",
        post(move || {
            let calls = calls_handler.clone();
            async move {
                // Fail twice, then accept
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    StatusCode::INTERNAL_SERVER_ERROR
                } else {
                    StatusCode::OK
                }
            }
        }),
    );
    let base = spawn_server(app).await;

    let start = Instant::now();
    let record = WebhookDeliverer::new(3)
        .deliver(&format!("{}/webhook", base), &sample_payload(), None)
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(record.attempts, 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    // Backoff before attempts 2 and 3: 1s + 2s
    assert!(elapsed.as_secs_f64() >= 3.0, "elapsed {:?}", elapsed);
    assert!(elapsed.as_secs_f64() < 10.0, "elapsed {:?}", elapsed);
}

#[tokio::test]
async fn delivery_surfaces_last_error_after_exhaustion() {
    let calls = Arc::new(AtomicU32::new(0));
    let calls_handler = calls.clone();
    let app = Router::new().route(
        "/webhook",
        post(move || {
            let calls = calls_handler.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                (StatusCode::BAD_GATEWAY, "upstream down")
            }
        }),
    );
    let base = spawn_server(app).await;

    let err = WebhookDeliverer::new(2)
        .deliver(&format!("{}/webhook", base), &sample_payload(), None)
        .await
        .unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    match err {
        SyncError::Delivery { attempts, message } => {
            assert_eq!(attempts, 2);
            assert!(message.contains("502"));
        }
        other => panic!("expected Delivery error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_secret_is_treated_as_unsigned() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let base = spawn_server(recording_receiver(received.clone())).await;

    WebhookDeliverer::new(1)
        .deliver(&format!("{}/webhook", base), &sample_payload(), Some(""))
        .await
        .unwrap();

    let requests = received.lock().unwrap();
    assert!(requests[0].0.is_none());
}
