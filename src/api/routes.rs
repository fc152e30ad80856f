//! API Routes
//!
//! Configures the Axum router with all mailbox endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_handler, current_handler, debug_handler, delete_handler, health_handler, init_handler,
    scroll_handler, stats_handler, version_handler, view_all_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /init` - Reset the mailbox
/// - `POST /mails` - Add a message
/// - `GET /mails` - List every message, oldest first
/// - `GET /mails/current` - View the message under the cursor
/// - `DELETE /mails/current` - Delete the message under the cursor
/// - `POST /mails/scroll` - Move the cursor to the next message
/// - `GET /debug` - Dump mailbox state
/// - `GET /stats` - Usage statistics
/// - `GET /health` - Health check endpoint
/// - `GET /version` - Version and build configuration
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/init", post(init_handler))
        .route("/mails", post(add_handler).get(view_all_handler))
        .route("/mails/current", get(current_handler).delete(delete_handler))
        .route("/mails/scroll", post(scroll_handler))
        .route("/debug", get(debug_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/version", get(version_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
