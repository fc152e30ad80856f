//! Response DTOs for the mailbox API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::mailbox::{
    MailStatus, MailboxStats, RankedMessage, StrategyKind, MAX_MAILS, MAX_MSG_SIZE,
};

/// Response body for init, add and delete-current
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    /// Operation outcome
    pub status: MailStatus,
    /// Live messages after the operation
    pub live_count: usize,
}

impl StatusResponse {
    pub fn new(status: MailStatus, live_count: usize) -> Self {
        Self { status, live_count }
    }
}

/// Response body for scroll-next (POST /mails/scroll)
#[derive(Debug, Clone, Serialize)]
pub struct ScrollResponse {
    pub status: MailStatus,
    /// Cursor after scrolling
    pub cursor: usize,
}

impl ScrollResponse {
    pub fn new(status: MailStatus, cursor: usize) -> Self {
        Self { status, cursor }
    }
}

/// Response body for view-current (GET /mails/current)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentResponse {
    pub status: MailStatus,
    pub cursor: usize,
    /// Message on screen, null when the mailbox is empty
    pub message: Option<String>,
}

impl CurrentResponse {
    pub fn new(cursor: usize, message: Option<String>) -> Self {
        let status = if message.is_some() {
            MailStatus::Ok
        } else {
            MailStatus::Empty
        };
        Self {
            status,
            cursor,
            message,
        }
    }
}

/// Response body for view-all (GET /mails)
#[derive(Debug, Clone, Serialize)]
pub struct ViewAllResponse {
    pub status: MailStatus,
    /// Live messages, oldest first
    pub messages: Vec<RankedMessage>,
}

impl ViewAllResponse {
    pub fn new(status: MailStatus, messages: Vec<RankedMessage>) -> Self {
        Self { status, messages }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: MailboxStats,
    /// Fraction of adds that evicted an older message
    pub overwrite_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from mailbox statistics
    pub fn new(stats: MailboxStats) -> Self {
        let overwrite_rate = stats.overwrite_rate();
        Self {
            stats,
            overwrite_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for the version endpoint (GET /version)
#[derive(Debug, Clone, Serialize)]
pub struct VersionResponse {
    /// Package version
    pub version: String,
    pub strategy: StrategyKind,
    pub capacity: usize,
    pub message_size: usize,
    /// Server start time in ISO 8601 format
    pub started_at: String,
}

impl VersionResponse {
    pub fn new(strategy: StrategyKind, started_at: DateTime<Utc>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            strategy,
            capacity: MAX_MAILS,
            message_size: MAX_MSG_SIZE,
            started_at: started_at.to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
