//! Configuration management for the CampusTrade backend.
//!
//! All configuration is read from the process environment exactly once at
//! startup and carried as plain structs afterwards. Nothing in here touches
//! the environment after construction.

pub mod auth;
pub mod database;
pub mod server;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Error raised when required configuration is missing or malformed.
///
/// Signing secrets and the database URL have no usable defaults, so a
/// missing value here is fatal at startup rather than per-request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Name of the offending environment variable
    pub variable: String,
    /// What was wrong with it
    pub message: String,
}

impl ConfigError {
    pub fn missing(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            message: "not set".to_string(),
        }
    }

    pub fn invalid(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration error: {} ({})", self.variable, self.message)
    }
}

impl std::error::Error for ConfigError {}
