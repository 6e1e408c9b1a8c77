//! # Application Constants
//!
//! Fixed response strings for both endpoints. External monitoring scripts
//! match on these exact bytes, so they must never change casually.

/// Message returned by the liveness endpoint.
///
/// Kept byte-for-byte compatible with the deployment this service replaced.
pub const LIVENESS_MSG: &str = "FastAPI working inside Docker!";

/// Status string returned when the database handshake succeeds.
pub const DB_CONNECTED_STATUS: &str = "Connected to PostgreSQL";

/// Status string returned for every probe failure, regardless of cause.
pub const DB_FAILED_STATUS: &str = "DB Connection Failed";
