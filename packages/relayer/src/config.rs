//! Relay configuration.

use serde::Deserialize;

/// Configuration for the relay process.
///
/// The reserialize flag is fixed at startup and injected into the record
/// store's constructor; it is never re-read from the environment at call
/// time, so tests can run both modes side by side.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::bind_address")]
    pub bind_address: String,

    #[serde(default = "defaults::reserialize")]
    pub reserialize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: defaults::bind_address(),
            reserialize: defaults::reserialize(),
        }
    }
}

mod defaults {
    /// Listen address. `PORT` selects the port, default 3001.
    pub fn bind_address() -> String {
        let port = std::env::var("PORT").unwrap_or_else(|_| "3001".into());
        format!("0.0.0.0:{port}")
    }

    /// `RESERIALIZE=1` selects decode/re-encode mode; anything else is
    /// pass-through.
    pub fn reserialize() -> bool {
        std::env::var("RESERIALIZE").map(|v| v == "1").unwrap_or(false)
    }
}
