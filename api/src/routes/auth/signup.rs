//! Account registration endpoint

use actix_web::{web, HttpResponse};
use validator::Validate;

use ct_core::repositories::{ListingRepository, UserRepository};
use ct_core::services::storage::ImageStore;
use ct_shared::types::ErrorResponse;

use crate::app::AppState;
use crate::dto::auth::{SignupRequest, SignupResponse};
use crate::handlers::error::handle_domain_error;

/// Handle POST /signup
pub async fn signup<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    body: web::Json<SignupRequest>,
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

    match state.auth_service.signup(&body.email, &body.password).await {
        Ok(_) => HttpResponse::Created().json(SignupResponse {
            success: true,
            message: "User registered successfully".to_string(),
        }),
        Err(err) => handle_domain_error(err),
    }
}
