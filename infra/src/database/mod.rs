//! Database module - MySQL implementations using SQLx

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::info;

use ct_core::errors::DomainError;
use ct_shared::config::DatabaseConfig;

pub mod mysql;

pub use mysql::{MySqlListingRepository, MySqlUserRepository};

/// Create a MySQL connection pool from the database configuration.
///
/// The pool is long-lived and shared across requests; sqlx handles
/// connection-level concurrency.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Internal {
            message: format!("Failed to connect to database: {e}"),
        })?;

    info!(max_connections = config.max_connections, "database pool ready");
    Ok(pool)
}
