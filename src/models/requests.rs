//! Request DTOs for the mailbox API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::mailbox::MAX_MSG_SIZE;

/// Request body for the add operation (POST /mails)
#[derive(Debug, Clone, Deserialize)]
pub struct AddRequest {
    /// Message text, at most `MAX_MSG_SIZE` bytes
    pub message: String,
}

impl AddRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.message.is_empty() {
            return Some("Message cannot be empty".to_string());
        }
        if self.message.len() > MAX_MSG_SIZE {
            return Some(format!(
                "Message exceeds maximum length of {} bytes",
                MAX_MSG_SIZE
            ));
        }
        None
    }
}
