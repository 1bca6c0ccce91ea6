//! Login endpoint

use actix_web::{web, HttpResponse};
use validator::Validate;

use ct_core::errors::{AuthError, DomainError};
use ct_core::repositories::{ListingRepository, UserRepository};
use ct_core::services::storage::ImageStore;
use ct_shared::types::ErrorResponse;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::auth::refresh_cookie;

/// Handle POST /login.
///
/// On success the access token is returned in the body and the refresh
/// token is set as an HTTP-only cookie. Bad credentials keep the observed
/// contract: 200 with `success: false`, never a 401.
pub async fn login<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    body: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    if body.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "validation_error",
            "Email and password are required",
        ));
    }

    match state.auth_service.login(&body.email, &body.password).await {
        Ok(pair) => HttpResponse::Ok()
            .cookie(refresh_cookie(pair.refresh_token, pair.refresh_expires_in))
            .json(LoginResponse {
                success: true,
                message: "Login successful".to_string(),
                access_token: Some(pair.access_token),
            }),
        Err(DomainError::Auth(AuthError::InvalidCredentials)) => {
            HttpResponse::Ok().json(LoginResponse {
                success: false,
                message: "Invalid email or password".to_string(),
                access_token: None,
            })
        }
        Err(err) => handle_domain_error(err),
    }
}
