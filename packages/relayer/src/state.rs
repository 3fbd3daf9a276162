//! Application state shared across handlers.

use crate::config::Config;
use crate::store::RecordStore;
use std::sync::atomic::AtomicU64;
use std::time::Instant;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: RecordStore,
    pub start_time: Instant,
    pub request_count: AtomicU64,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(config: Config) -> Self {
        Self {
            store: RecordStore::new(config.reserialize),
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }
}
