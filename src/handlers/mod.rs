//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the probe service.
//! Each handler is responsible for processing specific HTTP requests and
//! returning appropriate responses.
//!
//! ## Available Handlers
//!
//! - **Liveness** (`liveness`) - Process-is-up check, no external dependencies
//! - **Database Check** (`db_check`) - Postgres reachability probe

mod db_check;
mod liveness;

pub use db_check::*;
pub use liveness::*;
