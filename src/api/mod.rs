//! API Module
//!
//! HTTP handlers and routing for the mailbox REST API. Each route maps one
//! user action onto the mailbox contract.
//!
//! # Endpoints
//! - `POST /init` - Reset the mailbox
//! - `POST /mails` - Add a message
//! - `GET /mails` - List every message
//! - `GET /mails/current` - View the current message
//! - `DELETE /mails/current` - Delete the current message
//! - `POST /mails/scroll` - Scroll to the next message
//! - `GET /debug`, `GET /stats`, `GET /health`, `GET /version`

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
