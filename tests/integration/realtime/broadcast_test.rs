//! Real-time broadcast integration tests
//!
//! Lifecycle scenarios driven through the gateway, with paused tokio time so
//! the three-minute TTL elapses instantly.

use crate::common::drain;
use assert_matches::assert_matches;
use smsrelay::backend::realtime::BroadcastGateway;
use smsrelay::shared::{DeletionReason, RelayEvent, MESSAGE_TTL};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_expiry_reaches_every_subscriber() {
    let gateway = BroadcastGateway::new(16);
    let mut first = gateway.connect().await;
    let mut second = gateway.connect().await;

    gateway.submit(Some("hello".to_string()), None).await;
    tokio::time::sleep(MESSAGE_TTL + Duration::from_millis(1)).await;

    for viewer in [&mut first, &mut second] {
        let events = drain(viewer);
        assert_eq!(events.len(), 3);
        assert_matches!(&events[1], RelayEvent::NewMessage(s) if s.message == "hello");
        assert_eq!(events[2], RelayEvent::deleted(DeletionReason::Expired));
    }
    assert_eq!(gateway.peek().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_late_subscriber_gets_current_message_once() {
    let gateway = BroadcastGateway::new(16);
    let snapshot = gateway.submit(Some("current".to_string()), None).await;

    tokio::time::sleep(Duration::from_secs(60)).await;
    let mut viewer = gateway.connect().await;

    assert_eq!(drain(&mut viewer), vec![RelayEvent::new_message(snapshot)]);
}

#[tokio::test(start_paused = true)]
async fn test_subscriber_after_expiry_gets_none() {
    let gateway = BroadcastGateway::new(16);
    gateway.submit(Some("old".to_string()), None).await;

    tokio::time::sleep(MESSAGE_TTL + Duration::from_secs(1)).await;
    let mut viewer = gateway.connect().await;

    assert_eq!(
        drain(&mut viewer),
        vec![RelayEvent::deleted(DeletionReason::NoMessage)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_replaced_message_never_expires_early() {
    let gateway = BroadcastGateway::new(16);
    let mut viewer = gateway.connect().await;

    gateway.submit(Some("first".to_string()), None).await;
    tokio::time::sleep(Duration::from_secs(120)).await;
    gateway.submit(Some("second".to_string()), None).await;

    // First message's deadline passes without an event
    tokio::time::sleep(Duration::from_secs(90)).await;
    let events = drain(&mut viewer);
    assert_eq!(events.len(), 3);
    assert_matches!(&events[2], RelayEvent::NewMessage(s) if s.message == "second");

    // Second message expires on its own schedule
    tokio::time::sleep(Duration::from_secs(91)).await;
    assert_eq!(
        drain(&mut viewer),
        vec![RelayEvent::deleted(DeletionReason::Expired)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_delete_then_wait_emits_single_deletion() {
    let gateway = BroadcastGateway::new(16);
    let mut viewer = gateway.connect().await;

    gateway.submit(Some("x".to_string()), None).await;
    gateway.remove().await;
    tokio::time::sleep(MESSAGE_TTL * 3).await;

    let deletions: Vec<_> = drain(&mut viewer)
        .into_iter()
        .filter(|e| matches!(e, RelayEvent::MessageDeleted(d) if d.reason != DeletionReason::NoMessage))
        .collect();
    assert_eq!(deletions, vec![RelayEvent::deleted(DeletionReason::Deleted)]);
}

#[tokio::test]
async fn test_concurrent_submissions_keep_one_slot() {
    let gateway = BroadcastGateway::new(256);
    let mut viewer = gateway.connect().await;

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let gateway = gateway.clone();
            tokio::spawn(async move { gateway.submit(Some(format!("m{i}")), None).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let events = drain(&mut viewer);
    assert_eq!(events.len(), 33);
    // The last broadcast is the message left in the slot
    let current = gateway.peek().await.unwrap();
    assert_eq!(events.last(), Some(&RelayEvent::new_message(current)));
}
