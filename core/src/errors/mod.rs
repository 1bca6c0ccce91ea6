//! Domain-specific error types and error handling.
//!
//! Every failure the services can produce is represented here; the API
//! layer maps these to HTTP statuses in one place. Nothing in the domain
//! layer panics on the error path.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    EmailAlreadyRegistered,

    #[error("User not found")]
    UserNotFound,

    #[error("Not the owner of this resource")]
    NotOwner,

    #[error("Password hashing failed")]
    HashingFailed,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// No credential was supplied at all (maps to 401)
    #[error("Missing token")]
    MissingToken,

    /// A credential was supplied but its expiry has passed (maps to 403)
    #[error("Token expired")]
    TokenExpired,

    /// A credential was supplied but failed signature or claim checks
    /// (maps to 403)
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Uniqueness violation: {field}")]
    Conflict { field: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a missing resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }
}
