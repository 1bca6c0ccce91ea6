//! Authenticated account update endpoints

use actix_web::{web, HttpResponse};

use ct_core::repositories::{ListingRepository, UserRepository};
use ct_core::services::storage::ImageStore;

use crate::app::AppState;
use crate::dto::auth::{
    UpdateEmailRequest, UpdateEmailResponse, UpdatePasswordRequest, UpdatePasswordResponse,
};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handle POST /update-email.
///
/// The target account is the one in the verified claims; the body only
/// carries the new address.
pub async fn update_email<U, L, S>(
    ctx: AuthContext,
    state: web::Data<AppState<U, L, S>>,
    body: web::Json<UpdateEmailRequest>,
) -> HttpResponse
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    match state.auth_service.update_email(ctx.user_id, &body.email).await {
        Ok(user) => HttpResponse::Ok().json(UpdateEmailResponse {
            success: true,
            message: "Email updated successfully".to_string(),
            email: user.email,
        }),
        Err(err) => handle_domain_error(err),
    }
}

/// Handle POST /update-password
pub async fn update_password<U, L, S>(
    ctx: AuthContext,
    state: web::Data<AppState<U, L, S>>,
    body: web::Json<UpdatePasswordRequest>,
) -> HttpResponse
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    match state
        .auth_service
        .update_password(ctx.user_id, &body.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(UpdatePasswordResponse {
            success: true,
            message: "Password updated successfully".to_string(),
        }),
        Err(err) => handle_domain_error(err),
    }
}
