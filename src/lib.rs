//! # Pgprobe - Postgres Connectivity Probe Service
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the two endpoints
//! - [`config`] - Startup snapshot of database connection parameters
//! - [`error`] - Classification of probe failures for logging
//! - [`utils`] - Fixed response strings

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::config::DbConfig;
use crate::handlers::{db_check, read_root};
use crate::models::AppState;

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `db_config` - Connection parameters for the `/db` probe. Injected rather
///   than read from the environment per request, so tests can supply their
///   own values deterministically.
///
/// # Returns
///
/// A configured Axum router serving the liveness and connectivity endpoints.
pub fn app(db_config: DbConfig) -> Router {
    let state = Arc::new(AppState::new(db_config));

    Router::new()
        .route("/", get(read_root))
        .route("/db", get(db_check))
        .with_state(state)
}
