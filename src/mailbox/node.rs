//! Node Mailbox Module
//!
//! Singly linked chain of messages. Nodes live in an arena addressed by
//! integer handles; released nodes are threaded onto a free list and reused,
//! so the arena never holds more than `N` nodes.
//!
//! The cursor is a position counted from the head, so unlinking a node
//! renumbers everything after it without touching the other nodes.

use std::iter;

use tracing::warn;

use crate::error::{MailboxError, Result};
use crate::mailbox::{MailStatus, Mailbox, Message, StrategyKind, ViewAll, MAX_MAILS};

// == Node ==
#[derive(Debug, Clone)]
struct Node {
    msg: Message,
    /// Next node in the chain, or in the free list once released
    next: Option<usize>,
}

// == Node Mailbox ==
/// Linked-chain mailbox holding at most `N` messages.
#[derive(Debug, Clone)]
pub struct NodeMailbox<const N: usize = MAX_MAILS> {
    nodes: Vec<Node>,
    free: Option<usize>,
    head: Option<usize>,
    live: usize,
    cursor: usize,
}

impl<const N: usize> NodeMailbox<N> {
    const NON_ZERO: () = assert!(N >= 1, "mailbox capacity must be at least 1");

    // == Constructor ==
    /// Creates an empty mailbox. Nodes are allocated on demand.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO;

        Self {
            nodes: Vec::new(),
            free: None,
            head: None,
            live: 0,
            cursor: 0,
        }
    }

    // == Node Management ==
    /// Takes a node from the free list, or grows the arena by one.
    fn acquire(&mut self, msg: &Message) -> Result<usize> {
        if let Some(handle) = self.free {
            self.free = self.nodes[handle].next;
            self.nodes[handle] = Node {
                msg: *msg,
                next: None,
            };
            return Ok(handle);
        }

        self.nodes.try_reserve(1).map_err(|err| {
            warn!("Node allocation failed: {}", err);
            MailboxError::AllocationFailed(err.to_string())
        })?;
        self.nodes.push(Node {
            msg: *msg,
            next: None,
        });

        Ok(self.nodes.len() - 1)
    }

    /// Returns a detached node to the free list.
    fn release(&mut self, handle: usize) {
        let node = &mut self.nodes[handle];
        node.msg.clear();
        node.next = self.free;
        self.free = Some(handle);
    }

    /// Walks `position` links from the head.
    fn handle_at(&self, position: usize) -> Option<usize> {
        self.chain().nth(position)
    }

    fn chain(&self) -> impl Iterator<Item = usize> + '_ {
        iter::successors(self.head, move |&handle| self.nodes[handle].next)
    }

    /// Unlinks and releases the head node.
    fn pop_head(&mut self) {
        if let Some(handle) = self.head {
            self.head = self.nodes[handle].next;
            self.release(handle);
        }
    }

    /// Links `handle` after the current tail.
    fn append(&mut self, handle: usize) {
        let tail = self.chain().last();
        match tail {
            Some(tail) => self.nodes[tail].next = Some(handle),
            None => self.head = Some(handle),
        }
    }

    #[cfg(test)]
    pub(crate) fn arena_len(&self) -> usize {
        self.nodes.len()
    }
}

impl<const N: usize> Default for NodeMailbox<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Mailbox for NodeMailbox<N> {
    fn init(&mut self) {
        self.nodes.clear();
        self.free = None;
        self.head = None;
        self.live = 0;
        self.cursor = 0;
    }

    fn add(&mut self, msg: &Message) -> Result<MailStatus> {
        let status = if self.live >= N {
            // Evicting first frees a node, so the acquire below cannot fail
            self.pop_head();
            MailStatus::Overwritten
        } else {
            MailStatus::Ok
        };

        let handle = self.acquire(msg)?;
        self.append(handle);

        if status == MailStatus::Ok {
            self.live += 1;
        }

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

        match self.handle_at(self.cursor) {
            Some(handle) => {
                *out = self.nodes[handle].msg;
                MailStatus::Ok
            }
            None => {
                out.clear();
                MailStatus::Empty
            }
        }
    }

    fn delete_current(&mut self) -> MailStatus {
        if self.cursor >= self.live {
            return MailStatus::Empty;
        }

        if self.cursor == 0 {
            self.pop_head();
        } else {
            let Some(prev) = self.handle_at(self.cursor - 1) else {
                return MailStatus::Empty;
            };
            let Some(target) = self.nodes[prev].next else {
                return MailStatus::Empty;
            };
            self.nodes[prev].next = self.nodes[target].next;
            self.release(target);
        }

        if self.cursor == self.live - 1 {
            self.cursor = 0;
        }
        self.live -= 1;

        MailStatus::Ok
    }

    fn view_all(&self) -> ViewAll<'_> {
        let ordered = self.chain().map(move |handle| &self.nodes[handle].msg);
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
        StrategyKind::Node
    }
}
