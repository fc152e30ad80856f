//! Property-Based Tests for Mailbox Module
//!
//! Drives both strategies with random operation sequences and checks them
//! against a simple deque model and against each other.

use proptest::prelude::*;
use std::collections::VecDeque;

use crate::mailbox::{
    ArrayMailbox, MailStatus, Mailbox, MailboxStore, Message, NodeMailbox, MAX_MSG_SIZE,
};

// == Test Configuration ==
const TEST_CAPACITY: usize = 3;

// == Strategies ==
/// Generates short printable message texts
fn text_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,16}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum MailOp {
    Add(String),
    Delete,
    Scroll,
    View,
    Init,
}

fn mail_op_strategy() -> impl Strategy<Value = MailOp> {
    prop_oneof![
        4 => text_strategy().prop_map(MailOp::Add),
        2 => Just(MailOp::Delete),
        2 => Just(MailOp::Scroll),
        2 => Just(MailOp::View),
        1 => Just(MailOp::Init),
    ]
}

fn msg(text: &str) -> Message {
    Message::try_from(text).unwrap()
}

fn texts<M: Mailbox + ?Sized>(mailbox: &M) -> Vec<String> {
    mailbox.view_all().map(Message::as_text).collect()
}

// == Reference Model ==
/// Straightforward deque rendition of the mailbox rules.
#[derive(Debug, Default)]
struct Model {
    items: VecDeque<String>,
    cursor: usize,
}

impl Model {
    fn add(&mut self, text: &str) -> MailStatus {
        let status = if self.items.len() == TEST_CAPACITY {
            self.items.pop_front();
            MailStatus::Overwritten
        } else {
            MailStatus::Ok
        };
        self.items.push_back(text.to_string());
        status
    }

    fn scroll(&mut self) -> MailStatus {
        if self.items.len() <= 1 {
            self.cursor = 0;
            return MailStatus::Empty;
        }
        self.cursor = (self.cursor + 1) % self.items.len();
        MailStatus::Ok
    }

    fn view(&mut self) -> (MailStatus, String) {
        if self.items.is_empty() {
            return (MailStatus::Empty, String::new());
        }
        if self.cursor >= self.items.len() {
            self.cursor = 0;
        }
        (MailStatus::Ok, self.items[self.cursor].clone())
    }

    fn delete(&mut self) -> MailStatus {
        if self.cursor >= self.items.len() {
            return MailStatus::Empty;
        }
        let newest = self.items.len() - 1;
        self.items.remove(self.cursor);
        if self.cursor == newest {
            self.cursor = 0;
        }
        MailStatus::Ok
    }
}

/// Applies `op` to `mailbox` and checks the outcome against `model`.
fn check_step<M: Mailbox + ?Sized>(
    mailbox: &mut M,
    model: &mut Model,
    op: &MailOp,
) -> std::result::Result<(), TestCaseError> {
    match op {
        MailOp::Add(text) => {
            let status = mailbox.add(&msg(text)).unwrap();
            prop_assert_eq!(status, model.add(text));
        }
        MailOp::Delete => {
            prop_assert_eq!(mailbox.delete_current(), model.delete());
        }
        MailOp::Scroll => {
            prop_assert_eq!(mailbox.scroll_next(), model.scroll());
        }
        MailOp::View => {
            let mut out = msg("garbage");
            let status = mailbox.view_current(&mut out);
            let (expected_status, expected_text) = model.view();
            prop_assert_eq!(status, expected_status);
            prop_assert_eq!(out.as_text(), expected_text);
        }
        MailOp::Init => {
            mailbox.init();
            *model = Model::default();
        }
    }

    prop_assert_eq!(mailbox.len(), model.items.len());
    prop_assert_eq!(mailbox.cursor(), model.cursor);
    prop_assert_eq!(texts(&*mailbox), Vec::from(model.items.clone()));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any sequence of adds, the live count never exceeds capacity and
    // view-all yields the last min(adds, capacity) messages in insertion order.
    #[test]
    fn prop_capacity_and_insertion_order(adds in prop::collection::vec(text_strategy(), 1..30)) {
        let mut array = ArrayMailbox::<TEST_CAPACITY>::new();
        let mut node = NodeMailbox::<TEST_CAPACITY>::new();

        for text in &adds {
            array.add(&msg(text)).unwrap();
            node.add(&msg(text)).unwrap();
            prop_assert!(array.len() <= TEST_CAPACITY);
            prop_assert!(node.len() <= TEST_CAPACITY);
        }

        let keep = adds.len().min(TEST_CAPACITY);
        let expected: Vec<String> = adds[adds.len() - keep..].to_vec();
        prop_assert_eq!(texts(&array), expected.clone());
        prop_assert_eq!(texts(&node), expected);
    }

    // After any add or delete, array ranks are exactly 0..len with no gaps.
    #[test]
    fn prop_array_ranks_contiguous(ops in prop::collection::vec(mail_op_strategy(), 1..60)) {
        let mut array = ArrayMailbox::<TEST_CAPACITY>::new();

        for op in ops {
            match op {
                MailOp::Add(text) => { array.add(&msg(&text)).unwrap(); }
                MailOp::Delete => { let _ = array.delete_current(); }
                MailOp::Scroll => { let _ = array.scroll_next(); }
                MailOp::View => { let _ = array.view_current(&mut Message::zeroed()); }
                MailOp::Init => array.init(),
            }
            let expected: Vec<usize> = (0..array.len()).collect();
            prop_assert_eq!(array.live_ranks(), expected);
        }
    }

    // Both strategies follow the deque model step for step.
    #[test]
    fn prop_strategies_match_model(ops in prop::collection::vec(mail_op_strategy(), 1..80)) {
        let mut array = ArrayMailbox::<TEST_CAPACITY>::new();
        let mut array_model = Model::default();
        let mut node = NodeMailbox::<TEST_CAPACITY>::new();
        let mut node_model = Model::default();

        for op in &ops {
            check_step(&mut array, &mut array_model, op)?;
            check_step(&mut node, &mut node_model, op)?;
        }

        prop_assert!(node.arena_len() <= TEST_CAPACITY);
    }

    // Viewing right after adding to an empty mailbox returns the same bytes.
    #[test]
    fn prop_view_round_trip(raw in prop::array::uniform16(any::<u8>())) {
        let original = Message::new(raw);

        let mut array = ArrayMailbox::<TEST_CAPACITY>::new();
        let mut node = NodeMailbox::<TEST_CAPACITY>::new();
        array.add(&original).unwrap();
        node.add(&original).unwrap();

        let mut out = Message::zeroed();
        prop_assert_eq!(array.view_current(&mut out), MailStatus::Ok);
        prop_assert_eq!(out, original);
        prop_assert_eq!(node.view_current(&mut out), MailStatus::Ok);
        prop_assert_eq!(out, original);
    }

    // Scrolling with zero or one message is always empty and parks the cursor at 0.
    #[test]
    fn prop_scroll_boundary(text in text_strategy(), add_one in any::<bool>(), scrolls in 1usize..5) {
        let mut array = ArrayMailbox::<TEST_CAPACITY>::new();
        let mut node = NodeMailbox::<TEST_CAPACITY>::new();
        if add_one {
            array.add(&msg(&text)).unwrap();
            node.add(&msg(&text)).unwrap();
        }

        for _ in 0..scrolls {
            prop_assert_eq!(array.scroll_next(), MailStatus::Empty);
            prop_assert_eq!(node.scroll_next(), MailStatus::Empty);
            prop_assert_eq!(array.cursor(), 0);
            prop_assert_eq!(node.cursor(), 0);
        }
    }
}

// Concurrent access through the store, one write lock per operation
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_shared_store_stays_consistent(
        ops in prop::collection::vec(mail_op_strategy(), 10..40),
        node_backed in any::<bool>()
    ) {
        use std::sync::Arc;
        use tokio::sync::RwLock;

        let inner: Box<dyn Mailbox + Send + Sync> = if node_backed {
            Box::new(NodeMailbox::<TEST_CAPACITY>::new())
        } else {
            Box::new(ArrayMailbox::<TEST_CAPACITY>::new())
        };
        let store = Arc::new(RwLock::new(MailboxStore::with_mailbox(inner)));

        let results: Vec<bool> = tokio_test::block_on(async {
            let mut handles = vec![];
            for op in ops {
                let store = Arc::clone(&store);
                handles.push(tokio::spawn(async move {
                    let mut guard = store.write().await;
                    match op {
                        MailOp::Add(text) => { guard.add_text(&text).unwrap(); }
                        MailOp::Delete => { let _ = guard.delete_current(); }
                        MailOp::Scroll => { let _ = guard.scroll_next(); }
                        MailOp::View => { let _ = guard.current(); }
                        MailOp::Init => guard.init(),
                    }
                    guard.len() <= TEST_CAPACITY
                        && guard.view_all().count() == guard.len()
                        && (guard.is_empty() || guard.cursor() < guard.len())
                }));
            }

            let mut results = vec![];
            for handle in handles {
                results.push(handle.await.expect("task should not panic"));
            }
            results
        });

        prop_assert!(results.iter().all(|ok| *ok), "store invariant broken under shared access");

        let guard = tokio_test::block_on(store.read());
        for message in guard.view_all() {
            prop_assert!(message.as_bytes().len() == MAX_MSG_SIZE);
        }
    }
}

// == Scenario Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_capacity_two<M: Mailbox>(mut mailbox: M) {
        assert_eq!(mailbox.add(&msg("a")).unwrap(), MailStatus::Ok);
        assert_eq!(mailbox.add(&msg("b")).unwrap(), MailStatus::Ok);
        assert_eq!(mailbox.add(&msg("c")).unwrap(), MailStatus::Overwritten);
        assert_eq!(texts(&mailbox), vec!["b", "c"]);

        assert_eq!(mailbox.cursor(), 0);
        assert_eq!(mailbox.delete_current(), MailStatus::Ok);
        assert_eq!(texts(&mailbox), vec!["c"]);
    }

    fn scenario_empty<M: Mailbox>(mut mailbox: M) {
        let mut out = msg("stale");

        assert_eq!(mailbox.view_current(&mut out), MailStatus::Empty);
        assert!(out.is_cleared());
        assert_eq!(mailbox.delete_current(), MailStatus::Empty);
        assert_eq!(mailbox.scroll_next(), MailStatus::Empty);
        assert_eq!(mailbox.cursor(), 0);
        assert_eq!(mailbox.len(), 0);
        assert_eq!(mailbox.view_all().status(), MailStatus::Empty);
    }

    #[test]
    fn test_scenario_capacity_two_both_strategies() {
        scenario_capacity_two(ArrayMailbox::<2>::new());
        scenario_capacity_two(NodeMailbox::<2>::new());
    }

    #[test]
    fn test_scenario_empty_both_strategies() {
        scenario_empty(ArrayMailbox::<2>::new());
        scenario_empty(NodeMailbox::<2>::new());
    }

    #[test]
    fn test_capacity_one_always_overwrites() {
        let mut array = ArrayMailbox::<1>::new();
        let mut node = NodeMailbox::<1>::new();

        assert_eq!(array.add(&msg("a")).unwrap(), MailStatus::Ok);
        assert_eq!(node.add(&msg("a")).unwrap(), MailStatus::Ok);
        assert_eq!(array.add(&msg("b")).unwrap(), MailStatus::Overwritten);
        assert_eq!(node.add(&msg("b")).unwrap(), MailStatus::Overwritten);
        assert_eq!(texts(&array), vec!["b"]);
        assert_eq!(texts(&node), vec!["b"]);
    }
}
