//! Error types for the mailbox store
//!
//! Provides unified error handling using thiserror. Advisory outcomes such as
//! an empty mailbox or an overwritten message are not errors and live in
//! [`crate::mailbox::MailStatus`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::mailbox::MAX_MSG_SIZE;
use crate::models::ErrorResponse;

// == Mailbox Error Enum ==
/// Unified error type for the mailbox store and its HTTP surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailboxError {
    /// Message does not fit in a fixed-size slot
    #[error("Message is {0} bytes, maximum is {max}", max = MAX_MSG_SIZE)]
    MessageTooLong(usize),

    /// Storage for a new node could not be acquired
    #[error("Allocation failed: {0}")]
    AllocationFailed(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for MailboxError {
    fn into_response(self) -> Response {
        let status = match &self {
            MailboxError::MessageTooLong(_) => StatusCode::BAD_REQUEST,
            MailboxError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            MailboxError::AllocationFailed(_) => StatusCode::INSUFFICIENT_STORAGE,
            MailboxError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the mailbox store.
pub type Result<T> = std::result::Result<T, MailboxError>;
