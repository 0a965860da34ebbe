//! Property-based tests for the message slot lifecycle
//!
//! Random sequences of submissions, deletions and waits are run against a
//! gateway on paused tokio time and compared with a reference model: the
//! slot holds at most one message, only the latest submission can expire,
//! and every subscriber event matches the model's transition.

use proptest::prelude::*;
use smsrelay::backend::realtime::{BroadcastGateway, RemoveOutcome, Subscription};
use smsrelay::shared::{DeletionReason, RelayEvent, MESSAGE_TTL};
use std::time::Duration;

#[derive(Debug, Clone)]
enum Op {
    Submit(String),
    Remove,
    /// Wait this many milliseconds. Each wait is a few milliseconds past a
    /// whole second, so no run of waits adds up to exactly one TTL and a wait
    /// never ends on an expiry deadline.
    Wait(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[a-z]{1,8}".prop_map(Op::Submit),
        1 => Just(Op::Remove),
        3 => (0u64..200, 1u64..10).prop_map(|(secs, millis)| Op::Wait(secs * 1000 + millis)),
    ]
}

/// Reference model: current content and the instant (ms since start) it expires
#[derive(Default)]
struct Model {
    now: u64,
    current: Option<(String, u64)>,
}

impl Model {
    fn advance(&mut self, millis: u64, expected: &mut Vec<RelayEvent>) {
        self.now += millis;
        if matches!(&self.current, Some((_, deadline)) if *deadline <= self.now) {
            self.current = None;
            expected.push(RelayEvent::deleted(DeletionReason::Expired));
        }
    }
}

fn drain(subscription: &mut Subscription) -> Vec<RelayEvent> {
    std::iter::from_fn(|| subscription.try_next_event()).collect()
}

fn event_kind(event: &RelayEvent) -> String {
    match event {
        RelayEvent::NewMessage(snapshot) => format!("new:{}", snapshot.message),
        RelayEvent::MessageDeleted(deletion) => format!("deleted:{:?}", deletion.reason),
    }
}

fn run_ops(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .expect("runtime");

    runtime.block_on(async move {
        let gateway = BroadcastGateway::new(1024);
        let mut viewer = gateway.connect().await;
        prop_assert_eq!(
            drain(&mut viewer),
            vec![RelayEvent::deleted(DeletionReason::NoMessage)]
        );

        let ttl = MESSAGE_TTL.as_millis() as u64;
        let mut model = Model::default();

        for op in ops {
            let mut expected = Vec::new();
            match op {
                Op::Submit(content) => {
                    let snapshot = gateway.submit(Some(content.clone()), None).await;
                    prop_assert_eq!(&snapshot.message, &content);
                    model.current = Some((content, model.now + ttl));
                    expected.push(RelayEvent::new_message(snapshot));
                }
                Op::Remove => {
                    let outcome = gateway.remove().await;
                    let had_message = model.current.take().is_some();
                    prop_assert_eq!(outcome, RemoveOutcome { had_message });
                    if had_message {
                        expected.push(RelayEvent::deleted(DeletionReason::Deleted));
                    }
                }
                Op::Wait(millis) => {
                    tokio::time::sleep(Duration::from_millis(millis)).await;
                    model.advance(millis, &mut expected);
                }
            }

            let observed = drain(&mut viewer);
            prop_assert_eq!(
                observed.iter().map(event_kind).collect::<Vec<_>>(),
                expected.iter().map(event_kind).collect::<Vec<_>>()
            );

            let current = gateway.peek().await;
            prop_assert_eq!(
                current.as_ref().map(|s| s.message.clone()),
                model.current.as_ref().map(|(content, _)| content.clone())
            );
        }
        Ok(())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_slot_matches_model(ops in prop::collection::vec(op_strategy(), 1..40)) {
        run_ops(ops)?;
    }
}
