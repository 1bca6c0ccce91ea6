//! Domain error to HTTP response mapping.
//!
//! The single place where the error taxonomy turns into wire statuses:
//! missing credential 401, bad credential 403, malformed input 400,
//! uniqueness violation 409, missing record 404, everything downstream
//! (database, object store) 500. One deliberate exception: a duplicate
//! email on signup keeps the observed 400 contract rather than 409.

use actix_web::HttpResponse;

use ct_core::errors::{AuthError, DomainError, TokenError};
use ct_shared::types::ErrorResponse;

/// Convert a domain error into the corresponding HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {error:?}");

    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }

        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{resource} not found"),
        )),

        DomainError::Conflict { field } => HttpResponse::Conflict().json(ErrorResponse::new(
            "conflict",
            format!("A record with this {field} already exists"),
        )),

        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized()
                .json(ErrorResponse::new("invalid_credentials", "Invalid credentials")),
            // Observed signup contract: duplicate email is a 400, not 409
            AuthError::EmailAlreadyRegistered => HttpResponse::BadRequest()
                .json(ErrorResponse::new("email_taken", "User already exists")),
            AuthError::UserNotFound => {
                HttpResponse::NotFound().json(ErrorResponse::new("user_not_found", "User not found"))
            }
            AuthError::NotOwner => HttpResponse::Forbidden().json(ErrorResponse::new(
                "forbidden",
                "Not the owner of this resource",
            )),
            AuthError::HashingFailed => HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal_error", "Server error")),
        },

        DomainError::Token(token_error) => match token_error {
            TokenError::MissingToken => HttpResponse::Unauthorized()
                .json(ErrorResponse::new("unauthorized", "Missing token")),
            TokenError::TokenExpired => HttpResponse::Forbidden()
                .json(ErrorResponse::new("token_expired", "Token has expired")),
            TokenError::InvalidToken => {
                HttpResponse::Forbidden().json(ErrorResponse::new("invalid_token", "Invalid token"))
            }
            TokenError::TokenGenerationFailed => HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal_error", "Token generation failed")),
        },

        DomainError::Storage { message } => {
            log::error!("Storage failure: {message}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("storage_error", "Image storage failed"))
        }

        DomainError::Internal { message } => {
            log::error!("Internal failure: {message}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("internal_error", "Server error"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_taxonomy_status_mapping() {
        let cases = [
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::not_found("Listing"), StatusCode::NOT_FOUND),
            (
                DomainError::Conflict { field: "public_id".into() },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::Token(TokenError::MissingToken),
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::Token(TokenError::TokenExpired),
                StatusCode::FORBIDDEN,
            ),
            (
                DomainError::Auth(AuthError::NotOwner),
                StatusCode::FORBIDDEN,
            ),
            (
                DomainError::Auth(AuthError::EmailAlreadyRegistered),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Storage { message: "boom".into() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(handle_domain_error(error).status(), status);
        }
    }
}
