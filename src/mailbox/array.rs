//! Array Mailbox Module
//!
//! Fixed table of slots, each tagged present/absent and carrying a rank.
//! Uses no heap memory, so it suits statically sized targets.

use crate::error::{MailboxError, Result};
use crate::mailbox::{MailStatus, Mailbox, Message, StrategyKind, ViewAll, MAX_MAILS};

// == Slot ==
#[derive(Debug, Clone, Copy)]
struct Slot {
    present: bool,
    rank: usize,
    msg: Message,
}

impl Slot {
    const EMPTY: Slot = Slot {
        present: false,
        rank: 0,
        msg: Message::zeroed(),
    };
}

// == Array Mailbox ==
/// Slot-table mailbox holding at most `N` messages.
///
/// Every lookup is a linear scan for `present && rank == target`; rank
/// uniqueness among present slots is maintained by every mutation.
#[derive(Debug, Clone)]
pub struct ArrayMailbox<const N: usize = MAX_MAILS> {
    slots: [Slot; N],
    live: usize,
    cursor: usize,
}

impl<const N: usize> ArrayMailbox<N> {
    const NON_ZERO: () = assert!(N >= 1, "mailbox capacity must be at least 1");

    // == Constructor ==
    /// Creates an empty mailbox.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;

        Self {
            slots: [Slot::EMPTY; N],
            live: 0,
            cursor: 0,
        }
    }

    // == Slot Lookup ==
    fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.present)
    }

    fn find(&self, rank: usize) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.present && slot.rank == rank)
    }

    #[cfg(test)]
    pub(crate) fn live_ranks(&self) -> Vec<usize> {
        let mut ranks: Vec<usize> = self
            .slots
            .iter()
            .filter(|slot| slot.present)
            .map(|slot| slot.rank)
            .collect();
        ranks.sort_unstable();
        ranks
    }
}

impl<const N: usize> Default for ArrayMailbox<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Mailbox for ArrayMailbox<N> {
    fn init(&mut self) {
        self.slots = [Slot::EMPTY; N];
        self.live = 0;
        self.cursor = 0;
    }

    fn add(&mut self, msg: &Message) -> Result<MailStatus> {
        let (index, status) = match self.free_slot() {
            Some(index) => {
                self.live += 1;
                (index, MailStatus::Ok)
            }
            None => {
                // Full: reuse the oldest slot and shift every other rank down
                let index = self.find(0).ok_or_else(|| {
                    MailboxError::Internal("full mailbox has no rank 0 slot".to_string())
                })?;
                for slot in self.slots.iter_mut().filter(|s| s.present && s.rank > 0) {
                    slot.rank -= 1;
                }
                (index, MailStatus::Overwritten)
            }
        };

        self.slots[index] = Slot {
            present: true,
            rank: self.live - 1,
            msg: *msg,
        };

        Ok(status)
    }

    fn scroll_next(&mut self) -> MailStatus {
        if self.live <= 1 {
            self.cursor = 0;
            return MailStatus::Empty;
        }

        self.cursor = (self.cursor + 1) % self.live;
        MailStatus::Ok
    }

    fn view_current(&mut self, out: &mut Message) -> MailStatus {
        if self.live == 0 {
            out.clear();
            return MailStatus::Empty;
        }

        if self.cursor >= self.live {
            self.cursor = 0;
        }

        match self.find(self.cursor) {
            Some(index) => {
                *out = self.slots[index].msg;
                MailStatus::Ok
            }
            None => {
                out.clear();
                MailStatus::Empty
            }
        }
    }

    fn delete_current(&mut self) -> MailStatus {
        let Some(index) = self.find(self.cursor) else {
            return MailStatus::Empty;
        };

        let removed = self.cursor;
        self.slots[index] = Slot::EMPTY;

        for slot in self
            .slots
            .iter_mut()
            .filter(|s| s.present && s.rank > removed)
        {
            slot.rank -= 1;
        }

        if removed == self.live - 1 {
            self.cursor = 0;
        }
        self.live -= 1;

        MailStatus::Ok
    }

    fn view_all(&self) -> ViewAll<'_> {
        let ordered = (0..self.live)
            .filter_map(move |rank| self.find(rank))
            .map(move |index| &self.slots[index].msg);

        ViewAll::new(self.live, ordered)
    }

    fn len(&self) -> usize {
        self.live
    }

    fn capacity(&self) -> usize {
        N
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn strategy(&self) -> StrategyKind {
        StrategyKind::Array
    }
}
