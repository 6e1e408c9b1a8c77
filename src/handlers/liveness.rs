//! # Liveness Handler
//!
//! Simple liveness endpoint for monitoring application availability.
//! This endpoint can be used by load balancers, monitoring systems, or
//! deployment tools to verify that the application is running.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::utils::constant::LIVENESS_MSG;

/// Response confirming the service is up.
#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub msg: String,
}

/// Liveness endpoint that returns a fixed message.
///
/// GET /
///
/// Indicates the application is running and able to respond to HTTP requests.
/// It touches no external dependency and cannot fail.
///
/// # Returns
///
/// Always returns `200 OK` with the fixed message body.
#[instrument]
pub async fn read_root() -> Json<LivenessResponse> {
    debug!("Liveness endpoint accessed");

    Json(LivenessResponse {
        msg: LIVENESS_MSG.to_string(),
    })
}
