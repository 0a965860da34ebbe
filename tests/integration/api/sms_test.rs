//! SMS endpoint tests
//!
//! Submission and deletion through the HTTP surface, observed both in the
//! response bodies and on a connected subscriber.

use crate::common::{create_test_server, drain};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use smsrelay::shared::{DeletionReason, RelayEvent, Snapshot, DEFAULT_MESSAGE};

#[tokio::test]
async fn test_submit_json() {
    let (server, app_state) = create_test_server();
    let mut viewer = app_state.gateway.connect().await;
    let before = chrono::Utc::now().timestamp_millis();

    let response = server
        .post("/sms")
        .json(&json!({"key": "hello", "time": "2024-01-01T00:00:00Z"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "SMS received successfully");
    let expires_at = body["expiresAt"].as_i64().unwrap();
    assert!(expires_at >= before + 180_000);

    assert_eq!(
        drain(&mut viewer),
        vec![
            RelayEvent::deleted(DeletionReason::NoMessage),
            RelayEvent::new_message(Snapshot::new("hello", "2024-01-01T00:00:00Z", expires_at)),
        ]
    );
}

#[tokio::test]
async fn test_submit_form() {
    let (server, app_state) = create_test_server();

    server
        .post("/sms")
        .form(&[("key", "from a form"), ("time", "2024-05-05T10:00:00Z")])
        .await
        .assert_status_ok();

    let current = app_state.gateway.peek().await.unwrap();
    assert_eq!(current.message, "from a form");
    assert_eq!(current.timestamp, "2024-05-05T10:00:00Z");
}

#[tokio::test]
async fn test_submit_empty_body_uses_defaults() {
    let (server, app_state) = create_test_server();

    let response = server.post("/sms").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["success"], true);

    let current = app_state.gateway.peek().await.unwrap();
    assert_eq!(current.message, DEFAULT_MESSAGE);
    assert!(chrono::DateTime::parse_from_rfc3339(&current.timestamp).is_ok());
}

#[tokio::test]
async fn test_submit_malformed_body_uses_defaults() {
    let (server, app_state) = create_test_server();

    server
        .post("/sms")
        .content_type("application/json")
        .bytes("{broken".into())
        .await
        .assert_status_ok();

    assert_eq!(app_state.gateway.peek().await.unwrap().message, DEFAULT_MESSAGE);
}

#[tokio::test]
async fn test_submit_replaces_previous() {
    let (server, app_state) = create_test_server();

    server.post("/sms").json(&json!({"key": "first"})).await.assert_status_ok();
    server.post("/sms").json(&json!({"key": "second"})).await.assert_status_ok();

    assert_eq!(app_state.gateway.peek().await.unwrap().message, "second");
}

#[tokio::test]
async fn test_delete_without_message() {
    let (server, app_state) = create_test_server();
    let mut viewer = app_state.gateway.connect().await;
    drain(&mut viewer);

    let response = server.delete("/sms").await;
    response.assert_status_ok();
    response.assert_json(&json!({"success": true, "message": "No SMS to delete"}));

    assert!(drain(&mut viewer).is_empty());
}

#[tokio::test]
async fn test_submit_then_delete() {
    let (server, app_state) = create_test_server();
    let mut viewer = app_state.gateway.connect().await;

    server.post("/sms").json(&json!({"key": "bye"})).await.assert_status_ok();
    let response = server.delete("/sms").await;
    response.assert_json(&json!({"success": true, "message": "SMS deleted"}));

    let events = drain(&mut viewer);
    assert_eq!(events.len(), 3);
    assert_eq!(events[2], RelayEvent::deleted(DeletionReason::Deleted));
    assert_eq!(app_state.gateway.peek().await, None);

    server
        .delete("/sms")
        .await
        .assert_json(&json!({"success": true, "message": "No SMS to delete"}));
}

#[tokio::test]
async fn test_instances_are_isolated() {
    let (first, first_state) = create_test_server();
    let (_second, second_state) = create_test_server();

    first.post("/sms").json(&json!({"key": "only here"})).await.assert_status_ok();

    assert!(first_state.gateway.peek().await.is_some());
    assert_eq!(second_state.gateway.peek().await, None);
}
