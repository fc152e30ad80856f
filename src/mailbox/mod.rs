//! Mailbox Module
//!
//! Bounded message storage that keeps the most recent messages, evicting the
//! oldest on overflow, with a cursor for stepping through them one at a time.

mod array;
mod contract;
mod message;
mod node;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use array::ArrayMailbox;
pub use contract::{MailStatus, Mailbox, MailboxSnapshot, RankedMessage, StrategyKind, ViewAll};
pub use message::Message;
pub use node::NodeMailbox;
pub use stats::MailboxStats;
pub use store::MailboxStore;

// == Public Constants ==
/// Default number of messages a mailbox retains
pub const MAX_MAILS: usize = 4;

/// Size of every message in bytes
pub const MAX_MSG_SIZE: usize = 16;
