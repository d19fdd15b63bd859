//! Task Source Integration Tests
//!
//! Fetching against a mock tracker: normalization, coercion of malformed
//! items, and error-kind mapping for 401/429/5xx.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use sprint_pilot::{SyncError, TaskSourceClient};

use super::support::spawn_server;

fn client(base_url: &str) -> TaskSourceClient {
    TaskSourceClient::new(
        "pk_test_token",
        base_url.to_string(),
        Some("default-list".to_string()),
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn fetch_normalizes_well_formed_tasks() {
    let app = Router::new().route(
        "/list/:id/task",
        get(|Path(id): Path<String>| async move {
            Json(serde_json::json!({
                "tasks": [
                    {
                        "id": format!("{}-1", id),
                        "name": "Fix login redirect",
                        "status": { "status": "in progress" },
                        "priority": "urgent",
                        "tags": ["auth"],
                    },
                    {
                        "id": format!("{}-2", id),
                        "name": "Add CSV export",
                        "status": { "status": "open" },
                    },
                ]
            }))
        }),
    );
    let base = spawn_server(app).await;

    let fetched = client(&base)
        .fetch_items(Some("sprint"), true, None)
        .await
        .unwrap();

    assert_eq!(fetched.list_id, "sprint");
    assert_eq!(fetched.items.len(), 2);
    assert_eq!(fetched.items[0].id, "sprint-1");
    assert_eq!(fetched.items[0].status.status, "in progress");
    assert_eq!(fetched.items[1].priority, None);
}

#[tokio::test]
async fn fetch_falls_back_to_default_list() {
    let app = Router::new().route(
        "/list/:id/task",
        get(|Path(id): Path<String>| async move {
            assert_eq!(id, "default-list");
            Json(serde_json::json!({ "tasks": [] }))
        }),
    );
    let base = spawn_server(app).await;

    let fetched = client(&base).fetch_items(None, true, None).await.unwrap();
    assert_eq!(fetched.list_id, "default-list");
    assert!(fetched.items.is_empty());
}

#[tokio::test]
async fn fetch_passes_subtasks_and_status_filters() {
    let app = Router::new().route(
        "/list/:id/task",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("subtasks").map(String::as_str), Some("true"));
            assert_eq!(params.get("statuses[]").map(String::as_str), Some("open"));
            Json(serde_json::json!({ "tasks": [] }))
        }),
    );
    let base = spawn_server(app).await;

    client(&base)
        .fetch_items(Some("sprint"), true, Some(&["open".to_string()]))
        .await
        .unwrap();
}

#[tokio::test]
async fn malformed_item_is_coerced_not_dropped() {
    let app = Router::new().route(
        "/list/:id/task",
        get(|| async {
            Json(serde_json::json!({
                "tasks": [
                    { "id": 12345, "name": "Missing status entirely" },
                    { "id": "ok-1", "name": "Well formed", "status": { "status": "open" } },
                ]
            }))
        }),
    );
    let base = spawn_server(app).await;

    let fetched = client(&base)
        .fetch_items(Some("sprint"), true, None)
        .await
        .unwrap();

    assert_eq!(fetched.items.len(), 2);
    assert_eq!(fetched.items[0].id, "12345");
    assert_eq!(fetched.items[0].status.status, "unknown");
    assert_eq!(fetched.items[1].status.status, "open");
}

#[tokio::test]
async fn http_401_maps_to_auth_error() {
    let app = Router::new().route(
        "/list/:id/task",
        get(|| async { (StatusCode::UNAUTHORIZED, "bad token") }),
    );
    let base = spawn_server(app).await;

    let err = client(&base)
        .fetch_items(Some("sprint"), true, None)
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Auth(_)));
}

#[tokio::test]
async fn http_429_maps_to_rate_limited() {
    let app = Router::new().route(
        "/list/:id/task",
        get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let base = spawn_server(app).await;

    let err = client(&base)
        .fetch_items(Some("sprint"), true, None)
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::RateLimited(_)));
}

#[tokio::test]
async fn other_non_2xx_maps_to_upstream_with_status() {
    let app = Router::new().route(
        "/list/:id/task",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let base = spawn_server(app).await;

    let err = client(&base)
        .fetch_items(Some("sprint"), true, None)
        .await
        .unwrap_err();
    match err {
        SyncError::Upstream { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("maintenance"));
        }
        other => panic!("expected Upstream error, got {:?}", other),
    }
}
