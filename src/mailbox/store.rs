//! Mailbox Store Module
//!
//! The strategy selection point: owns one concrete mailbox chosen at
//! construction, forwards every operation to it and keeps usage statistics.

use tracing::{debug, info, warn};

use crate::error::{MailboxError, Result};
use crate::mailbox::{
    ArrayMailbox, MailStatus, Mailbox, MailboxStats, Message, NodeMailbox, StrategyKind,
    ViewAll, MAX_MAILS,
};

// == Mailbox Store ==
/// A mailbox of either strategy, plus usage statistics.
pub struct MailboxStore {
    /// Selected storage strategy
    inner: Box<dyn Mailbox + Send + Sync>,
    /// Usage statistics
    stats: MailboxStats,
}

impl MailboxStore {
    // == Constructor ==
    /// Creates an empty store backed by `kind` with the default capacity.
    pub fn new(kind: StrategyKind) -> Self {
        let inner: Box<dyn Mailbox + Send + Sync> = match kind {
            StrategyKind::Array => Box::new(ArrayMailbox::<MAX_MAILS>::new()),
            StrategyKind::Node => Box::new(NodeMailbox::<MAX_MAILS>::new()),
        };
        info!("Using {} mailbox with capacity {}", kind, MAX_MAILS);

        Self::with_mailbox(inner)
    }

    /// Wraps an existing mailbox, e.g. one with a non-default capacity.
    pub fn with_mailbox(inner: Box<dyn Mailbox + Send + Sync>) -> Self {
        let mut stats = MailboxStats::new();
        stats.set_live_count(inner.len());

        Self { inner, stats }
    }

    // == Stats ==
    /// Returns current usage statistics.
    pub fn stats(&self) -> MailboxStats {
        let mut stats = self.stats.clone();
        stats.set_live_count(self.inner.len());
        stats
    }

    // == Add Text ==
    /// Converts `text` to a message and adds it.
    pub fn add_text(&mut self, text: &str) -> Result<MailStatus> {
        let msg = Message::try_from(text)?;
        self.add(&msg)
    }

    // == View Current Message ==
    /// Returns the message under the cursor, or `None` when empty.
    pub fn current(&mut self) -> Option<Message> {
        let mut out = Message::zeroed();
        match self.view_current(&mut out) {
            MailStatus::Empty => None,
            _ => Some(out),
        }
    }
}

impl Mailbox for MailboxStore {
    fn init(&mut self) {
        self.inner.init();
        self.stats.set_live_count(0);
        debug!("Mailbox initialized");
    }

    fn add(&mut self, msg: &Message) -> Result<MailStatus> {
        match self.inner.add(msg) {
            Ok(status) => {
                self.stats.record_add(status);
                self.stats.set_live_count(self.inner.len());
                if status == MailStatus::Overwritten {
                    warn!("Oldest message overwritten");
                } else {
                    debug!("Message added, {} live", self.inner.len());
                }
                Ok(status)
            }
            Err(err @ MailboxError::AllocationFailed(_)) => {
                self.stats.record_allocation_failure();
                warn!("Message not stored: {}", err);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn scroll_next(&mut self) -> MailStatus {
        let status = self.inner.scroll_next();
        self.stats.record_scroll(status);
        debug!("Scroll: {:?}, cursor {}", status, self.inner.cursor());
        status
    }

    fn view_current(&mut self, out: &mut Message) -> MailStatus {
        let status = self.inner.view_current(out);
        self.stats.record_view(status);
        status
    }

    fn delete_current(&mut self) -> MailStatus {
        let status = self.inner.delete_current();
        self.stats.record_delete(status);
        self.stats.set_live_count(self.inner.len());
        debug!("Delete: {:?}, {} live", status, self.inner.len());
        status
    }

    fn view_all(&self) -> ViewAll<'_> {
        self.inner.view_all()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn cursor(&self) -> usize {
        self.inner.cursor()
    }

    fn strategy(&self) -> StrategyKind {
        self.inner.strategy()
    }
}
