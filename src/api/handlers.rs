//! API Handlers
//!
//! HTTP request handlers, one per user action on the mailbox.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};

use crate::error::{MailboxError, Result};
use crate::mailbox::{MailStatus, Mailbox, MailboxSnapshot, MailboxStore, StrategyKind};
use crate::models::{
    AddRequest, CurrentResponse, HealthResponse, ScrollResponse, StatsResponse, StatusResponse,
    VersionResponse, ViewAllResponse,
};

/// Application state shared across all handlers.
///
/// The mailbox sits behind one lock; every operation holds it for its whole
/// duration, since intermediate renumbering states are not meaningful.
#[derive(Clone)]
pub struct AppState {
    /// Shared mailbox store
    pub mailbox: Arc<RwLock<MailboxStore>>,
    /// Server start time, reported by /version
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates a new AppState with the given mailbox store.
    pub fn new(mailbox: MailboxStore) -> Self {
        Self {
            mailbox: Arc::new(RwLock::new(mailbox)),
            started_at: Utc::now(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes the mailbox with the configured storage strategy.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(MailboxStore::new(config.strategy))
    }
}

/// Handler for POST /init
///
/// Drops every message and resets the cursor.
pub async fn init_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let mut mailbox = state.mailbox.write().await;
    mailbox.init();

    Json(StatusResponse::new(MailStatus::Ok, mailbox.len()))
}

/// Handler for POST /mails
///
/// Adds a message, evicting the oldest one when the mailbox is full.
pub async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<AddRequest>,
) -> Result<Json<StatusResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(MailboxError::InvalidRequest(error_msg));
    }

    let mut mailbox = state.mailbox.write().await;
    let status = mailbox.add_text(&req.message)?;

    Ok(Json(StatusResponse::new(status, mailbox.len())))
}

/// Handler for DELETE /mails/current
pub async fn delete_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let mut mailbox = state.mailbox.write().await;
    let status = mailbox.delete_current();

    Json(StatusResponse::new(status, mailbox.len()))
}

/// Handler for POST /mails/scroll
pub async fn scroll_handler(State(state): State<AppState>) -> Json<ScrollResponse> {
    let mut mailbox = state.mailbox.write().await;
    let status = mailbox.scroll_next();

    Json(ScrollResponse::new(status, mailbox.cursor()))
}

/// Handler for GET /mails/current
///
/// Takes the write lock: viewing may normalize the cursor and updates stats.
pub async fn current_handler(State(state): State<AppState>) -> Json<CurrentResponse> {
    let mut mailbox = state.mailbox.write().await;
    let message = mailbox.current().map(|msg| msg.as_text());

    Json(CurrentResponse::new(mailbox.cursor(), message))
}

/// Handler for GET /mails
pub async fn view_all_handler(State(state): State<AppState>) -> Json<ViewAllResponse> {
    let mailbox = state.mailbox.read().await;
    let status = mailbox.view_all().status();
    let snapshot = mailbox.dump();

    Json(ViewAllResponse::new(status, snapshot.messages))
}

/// Handler for GET /debug
pub async fn debug_handler(State(state): State<AppState>) -> Json<MailboxSnapshot> {
    let mailbox = state.mailbox.read().await;
    Json(mailbox.dump())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let mailbox = state.mailbox.read().await;
    Json(StatsResponse::new(mailbox.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /version
pub async fn version_handler(State(state): State<AppState>) -> Json<VersionResponse> {
    let strategy: StrategyKind = state.mailbox.read().await.strategy();
    Json(VersionResponse::new(strategy, state.started_at))
}
