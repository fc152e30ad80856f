//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.
//! Mailbox capacity and message size are compile-time constants; only the
//! storage strategy is chosen at startup.

use std::env;

use tracing::warn;

use crate::mailbox::StrategyKind;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage strategy backing the mailbox
    pub strategy: StrategyKind,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAILBOX_STRATEGY` - `array` or `node` (default: array)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let strategy = match env::var("MAILBOX_STRATEGY") {
            Ok(raw) => raw.parse::<StrategyKind>().unwrap_or_else(|err| {
                warn!("{}, falling back to {}", err, StrategyKind::default());
                StrategyKind::default()
            }),
            Err(_) => StrategyKind::default(),
        };

        Self {
            strategy,
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Array,
            server_port: 3000,
        }
    }
}
