//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (15 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 15;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims structure shared by access and refresh tokens.
///
/// Token validity is signature plus expiry only; there is no issuer,
/// audience, or server-side state behind these claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email of the authenticated identity
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for an access token expiring 15 minutes from now
    pub fn new_access_token(user_id: Uuid, email: impl Into<String>) -> Self {
        Self::with_lifetime(user_id, email, Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES))
    }

    /// Creates claims for a refresh token expiring 7 days from now
    pub fn new_refresh_token(user_id: Uuid, email: impl Into<String>) -> Self {
        Self::with_lifetime(user_id, email, Duration::days(REFRESH_TOKEN_EXPIRY_DAYS))
    }

    fn with_lifetime(user_id: Uuid, email: impl Into<String>, lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            email: email.into(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Token pair returned to the client on login.
///
/// The access token travels in the response body; the refresh token is set
/// as an HTTP-only cookie by the API layer and never appears in a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with the standard lifetimes
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
            refresh_expires_in: REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, "user@campus.edu");

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "user@campus.edu");
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_EXPIRY_MINUTES * 60);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_refresh_token(user_id, "user@campus.edu");

        assert_eq!(claims.exp - claims.iat, REFRESH_TOKEN_EXPIRY_DAYS * 86_400);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, "user@campus.edu");
        assert_eq!(claims.user_id().unwrap(), user_id);

        let bad = Claims {
            sub: "not-a-uuid".to_string(),
            ..claims
        };
        assert!(bad.user_id().is_err());
    }

    #[test]
    fn test_token_pair_lifetimes() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string());
        assert_eq!(pair.access_expires_in, 900);
        assert_eq!(pair.refresh_expires_in, 604_800);
    }
}
