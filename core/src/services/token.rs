//! Stateless dual-secret token service.
//!
//! Access and refresh tokens are HS256 JWTs signed with two independent
//! secrets bound to two independent lifetimes. Nothing is persisted
//! server-side: validity is signature plus expiry, full stop. The trade-off
//! is explicit - a refresh token cannot be invalidated before its natural
//! expiry short of rotating the refresh secret globally, and logout only
//! clears the client-held cookie.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use ct_shared::config::JwtConfig;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// Service for issuing and verifying JWT access and refresh tokens.
///
/// Pure and stateless; safe to share across requests behind an `Arc` and
/// run fully in parallel.
pub struct TokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_expiry_secs: i64,
    refresh_expiry_secs: i64,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the JWT configuration.
    ///
    /// The signing keys are derived once here; a misconfigured secret is a
    /// startup failure, not a per-call one.
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry boundaries are exact: a token is valid at exp-1s and
        // rejected at exp.
        validation.leeway = 0;

        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            access_expiry_secs: config.access_token_expiry,
            refresh_expiry_secs: config.refresh_token_expiry,
            validation,
        }
    }

    /// Issues a short-lived access token for the given identity
    pub fn issue_access_token(&self, user_id: Uuid, email: &str) -> Result<String, DomainError> {
        let claims = self.build_claims(user_id, email, self.access_expiry_secs);
        self.encode_jwt(&claims, &self.access_encoding)
    }

    /// Issues a long-lived refresh token for the given identity
    pub fn issue_refresh_token(&self, user_id: Uuid, email: &str) -> Result<String, DomainError> {
        let claims = self.build_claims(user_id, email, self.refresh_expiry_secs);
        self.encode_jwt(&claims, &self.refresh_encoding)
    }

    /// Verifies an access token's signature and expiry.
    ///
    /// # Returns
    /// * `Ok(Claims)` - The decoded claims
    /// * `Err(TokenError::TokenExpired)` - Expiry has passed
    /// * `Err(TokenError::InvalidToken)` - Signature or claim check failed
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.decode_jwt(token, &self.access_decoding)
    }

    /// Verifies a refresh token's signature and expiry against the refresh
    /// secret.
    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.decode_jwt(token, &self.refresh_decoding)
    }

    /// Mints a new access token from a valid refresh token.
    ///
    /// The new token carries the same identity claims as the refresh
    /// token. The refresh token itself is not rotated on use; possession
    /// within its window keeps minting access tokens.
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String, DomainError> {
        let claims = self.verify_refresh_token(refresh_token)?;
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        self.issue_access_token(user_id, &claims.email)
    }

    fn build_claims(&self, user_id: Uuid, email: &str, lifetime_secs: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + lifetime_secs,
        }
    }

    fn encode_jwt(&self, claims: &Claims, key: &EncodingKey) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    fn decode_jwt(&self, token: &str, key: &DecodingKey) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                DomainError::Token(TokenError::TokenExpired)
            } else {
                DomainError::Token(TokenError::InvalidToken)
            }
        })?;
        Ok(data.claims)
    }
}
