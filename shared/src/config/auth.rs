//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// JWT authentication configuration for the dual-token session model.
///
/// Access and refresh tokens are signed with two independent secrets bound
/// to two independent lifetimes. Neither token is persisted server-side;
/// rotating a secret invalidates every outstanding token of that kind.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens (`JWT_SECRET`)
    pub access_secret: String,

    /// Secret key for signing refresh tokens (`JWT_REFRESH_SECRET`)
    pub refresh_secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with the two signing secrets and the
    /// default lifetimes (15 minutes / 7 days).
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_token_expiry: 15 * 60,
            refresh_token_expiry: 7 * 24 * 60 * 60,
        }
    }

    /// Load the configuration from `JWT_SECRET` / `JWT_REFRESH_SECRET`.
    ///
    /// Missing secrets are a startup-fatal configuration error; there is no
    /// usable default for a signing key.
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::missing("JWT_SECRET"))?;
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .map_err(|_| ConfigError::missing("JWT_REFRESH_SECRET"))?;

        if access_secret == refresh_secret {
            return Err(ConfigError::invalid(
                "JWT_REFRESH_SECRET",
                "must differ from JWT_SECRET",
            ));
        }

        Ok(Self::new(access_secret, refresh_secret))
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86400;
        self
    }
}
