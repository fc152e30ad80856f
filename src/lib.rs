//! Mailbox Store - A bounded message store with a viewing cursor
//!
//! Retains the most recent messages up to a fixed capacity, evicting the
//! oldest on overflow. Array and node backed strategies share one contract.

pub mod api;
pub mod config;
pub mod error;
pub mod mailbox;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use error::MailboxError;
pub use mailbox::{Mailbox, MailboxStore};
