//! Mailbox Contract
//!
//! The operation set shared by every storage strategy, plus the outcome and
//! snapshot types those operations produce.
//!
//! Ranks are logical positions among the live messages: rank 0 is the oldest,
//! rank `len() - 1` the newest. After every mutation the live ranks form the
//! contiguous range `0..len()`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MailboxError, Result};
use crate::mailbox::Message;

// == Mail Status ==
/// Outcome of a mailbox operation that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailStatus {
    /// Completed with no caveat
    Ok,
    /// Nothing to act on; the mailbox was left untouched
    Empty,
    /// Message stored, but the oldest one was evicted to make room
    Overwritten,
}

// == Strategy Kind ==
/// Storage strategy backing a mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Fixed slot table, no heap use
    #[default]
    Array,
    /// Linked chain of individually allocated nodes
    Node,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Array => f.write_str("array"),
            StrategyKind::Node => f.write_str("node"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = MailboxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" | "static" => Ok(StrategyKind::Array),
            "node" | "dynamic" => Ok(StrategyKind::Node),
            other => Err(MailboxError::InvalidRequest(format!(
                "Unknown mailbox strategy '{}'",
                other
            ))),
        }
    }
}

// == View All ==
/// Lazy iterator over live messages from oldest to newest.
///
/// Carries the status the request would have reported: [`MailStatus::Empty`]
/// when nothing is live.
pub struct ViewAll<'a> {
    inner: Box<dyn Iterator<Item = &'a Message> + 'a>,
    status: MailStatus,
}

impl<'a> ViewAll<'a> {
    pub(crate) fn new(live: usize, inner: impl Iterator<Item = &'a Message> + 'a) -> Self {
        let status = if live == 0 {
            MailStatus::Empty
        } else {
            MailStatus::Ok
        };

        Self {
            inner: Box::new(inner.take(live)),
            status,
        }
    }

    /// Returns `Empty` if the mailbox held no messages.
    pub fn status(&self) -> MailStatus {
        self.status
    }
}

impl<'a> Iterator for ViewAll<'a> {
    type Item = &'a Message;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

// == Snapshot ==
/// A message together with its rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMessage {
    pub rank: usize,
    pub message: String,
}

/// Debug dump of a mailbox's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailboxSnapshot {
    pub strategy: StrategyKind,
    pub capacity: usize,
    pub live_count: usize,
    pub cursor: usize,
    pub messages: Vec<RankedMessage>,
}

// == Mailbox Trait ==
/// Bounded, single-consumer message store.
pub trait Mailbox {
    /// Drops every message and resets the cursor to 0.
    fn init(&mut self);

    /// Appends `msg` as the newest message.
    ///
    /// When the mailbox is full the oldest message is evicted first and
    /// [`MailStatus::Overwritten`] is returned.
    fn add(&mut self, msg: &Message) -> Result<MailStatus>;

    /// Moves the cursor one rank toward newer messages, wrapping to 0 past
    /// the newest. Returns `Empty` (cursor reset to 0) with fewer than two
    /// messages.
    fn scroll_next(&mut self) -> MailStatus;

    /// Copies the message under the cursor into `out`.
    ///
    /// An out-of-range cursor is first reset to 0. With no messages `out` is
    /// zeroed and `Empty` is returned.
    fn view_current(&mut self, out: &mut Message) -> MailStatus;

    /// Removes the message under the cursor and closes the rank gap.
    ///
    /// Deleting the newest message resets the cursor to 0. A cursor that
    /// addresses no live message yields `Empty` with no mutation.
    fn delete_current(&mut self) -> MailStatus;

    /// Iterates live messages from oldest to newest.
    fn view_all(&self) -> ViewAll<'_>;

    /// Number of live messages.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of live messages.
    fn capacity(&self) -> usize;

    /// Rank currently selected for viewing or deletion.
    fn cursor(&self) -> usize;

    fn strategy(&self) -> StrategyKind;

    /// Captures the current state for diagnostics.
    fn dump(&self) -> MailboxSnapshot {
        let messages = self
            .view_all()
            .enumerate()
            .map(|(rank, msg)| RankedMessage {
                rank,
                message: msg.as_text(),
            })
            .collect();

        MailboxSnapshot {
            strategy: self.strategy(),
            capacity: self.capacity(),
            live_count: self.len(),
            cursor: self.cursor(),
            messages,
        }
    }
}
