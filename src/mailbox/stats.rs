//! Mailbox Statistics Module
//!
//! Counts how a mailbox has been used: messages added, messages lost to
//! eviction, deletions, cursor movement and advisory empty results.

use serde::Serialize;

use crate::mailbox::MailStatus;

// == Mailbox Stats ==
/// Tracks mailbox usage counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MailboxStats {
    /// Messages stored, including those that evicted another
    pub adds: u64,
    /// Messages evicted to make room for a new one
    pub overwrites: u64,
    /// Messages removed by delete-current
    pub deletes: u64,
    /// Successful cursor moves
    pub scrolls: u64,
    /// Successful views of the current message
    pub views: u64,
    /// Operations that reported an empty mailbox
    pub empty_results: u64,
    /// Adds rejected because node storage could not be acquired
    pub allocation_failures: u64,
    /// Current number of live messages
    pub live_count: usize,
}

impl MailboxStats {
    // == Constructor ==
    /// Creates a new MailboxStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Overwrite Rate ==
    /// Fraction of adds that evicted an older message, or 0.0 before any add.
    pub fn overwrite_rate(&self) -> f64 {
        if self.adds == 0 {
            0.0
        } else {
            self.overwrites as f64 / self.adds as f64
        }
    }

    // == Record Outcomes ==
    pub fn record_add(&mut self, status: MailStatus) {
        self.adds += 1;
        if status == MailStatus::Overwritten {
            self.overwrites += 1;
        }
    }

    pub fn record_delete(&mut self, status: MailStatus) {
        match status {
            MailStatus::Empty => self.empty_results += 1,
            _ => self.deletes += 1,
        }
    }

    pub fn record_scroll(&mut self, status: MailStatus) {
        match status {
            MailStatus::Empty => self.empty_results += 1,
            _ => self.scrolls += 1,
        }
    }

    pub fn record_view(&mut self, status: MailStatus) {
        match status {
            MailStatus::Empty => self.empty_results += 1,
            _ => self.views += 1,
        }
    }

    pub fn record_allocation_failure(&mut self) {
        self.allocation_failures += 1;
    }

    // == Update Live Count ==
    pub fn set_live_count(&mut self, count: usize) {
        self.live_count = count;
    }
}
