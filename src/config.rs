//! # Probe Configuration
//!
//! Connection parameters for the `/db` probe, snapshotted once at process
//! startup. Handlers receive the snapshot through shared state instead of
//! reading the environment per request, so tests can inject their own values.

use std::{env, fs};

use sqlx::postgres::PgConnectOptions;
use tracing::error;

/// Connection parameters for the probe target.
///
/// No defaults and no validation: an absent environment variable yields an
/// empty string, which surfaces later as a generic connection failure.
#[derive(Debug, Clone, Default)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

impl DbConfig {
    /// Reads `DB_HOST`, `DB_USER`, `DB_PASS` and `DB_NAME` from the
    /// environment. The password may alternatively be supplied through a file
    /// named by `DB_PASS_FILE`, which takes precedence when set.
    pub fn from_env() -> Self {
        Self {
            host: env::var("DB_HOST").unwrap_or_default(),
            user: env::var("DB_USER").unwrap_or_default(),
            password: secret_from_env("DB_PASS_FILE", "DB_PASS").unwrap_or_default(),
            dbname: env::var("DB_NAME").unwrap_or_default(),
        }
    }

    /// Builds driver options from the stored parameters.
    ///
    /// `~/.pgpass` lookup is disabled so the outcome depends only on these
    /// four values.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new_without_pgpass()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
    }
}

/// Resolves a secret from a file path named by `file_var` (container secret
/// mounts), falling back to the plain environment variable `var`.
fn secret_from_env(file_var: &str, var: &str) -> Option<String> {
    match env::var(file_var) {
        Ok(path) => match fs::read_to_string(&path) {
            Ok(content) => Some(content.trim().to_string()),
            Err(e) => {
                error!(%path, ?e, "Error reading secret file");
                None
            }
        },
        Err(_) => env::var(var).ok(),
    }
}
