//! Access token refresh endpoint

use actix_web::{web, HttpRequest, HttpResponse};

use ct_core::repositories::{ListingRepository, UserRepository};
use ct_core::services::storage::ImageStore;
use ct_shared::types::ErrorResponse;

use crate::app::AppState;
use crate::dto::auth::RefreshResponse;
use crate::handlers::error::handle_domain_error;
use crate::routes::auth::REFRESH_COOKIE;

/// Handle POST /refresh.
///
/// Reads the refresh token from its cookie and mints a fresh access token.
/// No cookie is a 401; a present but invalid or expired cookie is a 403.
/// The refresh token is not rotated.
pub async fn refresh<U, L, S>(
    req: HttpRequest,
    state: web::Data<AppState<U, L, S>>,
) -> HttpResponse
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    let cookie = match req.cookie(REFRESH_COOKIE) {
        Some(cookie) => cookie,
        None => {
            return HttpResponse::Unauthorized()
                .json(ErrorResponse::new("unauthorized", "No refresh token"));
        }
    };

    match state.token_service.refresh_access_token(cookie.value()) {
        Ok(access_token) => HttpResponse::Ok().json(RefreshResponse { access_token }),
        Err(err) => handle_domain_error(err),
    }
}
