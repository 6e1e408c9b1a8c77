use tracing::info;

use crate::config::DbConfig;

/// Application state shared across requests. Needs to be thread-safe.
pub struct AppState {
    /// Connection parameters for the `/db` probe, snapshotted at startup.
    pub db_config: DbConfig,
}

impl AppState {
    /// Creates a new application state holding the probe configuration.
    pub fn new(db_config: DbConfig) -> Self {
        info!("Initializing application state");
        Self { db_config }
    }
}
