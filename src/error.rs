//! # Probe Error Classification
//!
//! The `/db` endpoint collapses every failure into one generic status string
//! on the wire. Internally, connection errors are still classified so logs can
//! distinguish an unreachable host from rejected credentials.

use std::io;

use thiserror::Error;

/// Classified reasons a connectivity probe can fail.
///
/// Classification feeds log output only; it never changes the response body.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("connection refused or host unreachable")]
    Unreachable(#[source] sqlx::Error),

    #[error("authentication failed")]
    AuthFailed(#[source] sqlx::Error),

    #[error("connection attempt timed out")]
    TimedOut(#[source] sqlx::Error),

    #[error("invalid connection configuration")]
    Misconfigured(#[source] sqlx::Error),

    #[error("database connection failed")]
    Other(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ProbeError {
    fn from(e: sqlx::Error) -> Self {
        // Postgres class 28 covers invalid_authorization_specification and
        // invalid_password.
        let wrap: fn(sqlx::Error) -> ProbeError = match &e {
            sqlx::Error::Configuration(_) => ProbeError::Misconfigured,
            sqlx::Error::Io(source) if source.kind() == io::ErrorKind::TimedOut => {
                ProbeError::TimedOut
            }
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) => ProbeError::Unreachable,
            sqlx::Error::PoolTimedOut => ProbeError::TimedOut,
            sqlx::Error::Database(db)
                if matches!(db.code().as_deref(), Some("28000" | "28P01")) =>
            {
                ProbeError::AuthFailed
            }
            _ => ProbeError::Other,
        };
        wrap(e)
    }
}
