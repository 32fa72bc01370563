//! Application State
//!
//! Shared state accessible by all handlers.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn static_dir(&self) -> &Path {
        &self.config.static_dir
    }

    /// Whether the built frontend's entry document is present
    pub async fn frontend_ready(&self) -> bool {
        tokio::fs::metadata(self.config.index_file())
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }
}
