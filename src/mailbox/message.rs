//! Message Module
//!
//! Defines the fixed-length message buffer stored in every mailbox slot.

use std::fmt;

use crate::error::{MailboxError, Result};
use crate::mailbox::MAX_MSG_SIZE;

// == Message ==
/// An opaque fixed-length byte buffer.
///
/// Contents are copied verbatim; the store never adds or checks a terminator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Message {
    bytes: [u8; MAX_MSG_SIZE],
}

impl Message {
    // == Constructors ==
    /// Creates an all-zero message.
    pub const fn zeroed() -> Self {
        Self {
            bytes: [0; MAX_MSG_SIZE],
        }
    }

    /// Wraps an exact-size buffer.
    pub const fn new(bytes: [u8; MAX_MSG_SIZE]) -> Self {
        Self { bytes }
    }

    /// Copies `src` into a new message, zero-padding the remainder.
    ///
    /// Input longer than [`MAX_MSG_SIZE`] is rejected rather than truncated.
    pub fn from_bytes(src: &[u8]) -> Result<Self> {
        if src.len() > MAX_MSG_SIZE {
            return Err(MailboxError::MessageTooLong(src.len()));
        }

        let mut msg = Self::zeroed();
        msg.bytes[..src.len()].copy_from_slice(src);
        Ok(msg)
    }

    // == Accessors ==
    /// Returns the raw buffer.
    pub fn as_bytes(&self) -> &[u8; MAX_MSG_SIZE] {
        &self.bytes
    }

    /// Renders the bytes up to the first NUL as text.
    ///
    /// Invalid UTF-8 is replaced, so this is only meant for display.
    pub fn as_text(&self) -> String {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_MSG_SIZE);
        String::from_utf8_lossy(&self.bytes[..end]).into_owned()
    }

    /// Returns true if every byte is zero.
    pub fn is_cleared(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    // == Mutation ==
    /// Zero-fills the buffer.
    pub fn clear(&mut self) {
        self.bytes = [0; MAX_MSG_SIZE];
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Message").field(&self.as_text()).finish()
    }
}

impl TryFrom<&str> for Message {
    type Error = MailboxError;

    fn try_from(text: &str) -> Result<Self> {
        Self::from_bytes(text.as_bytes())
    }
}
