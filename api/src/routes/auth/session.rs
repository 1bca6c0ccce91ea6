//! Session presence probe

use actix_web::{HttpRequest, HttpResponse};

use crate::dto::auth::CheckSessionResponse;
use crate::routes::auth::REFRESH_COOKIE;

/// Handle POST /check-refresh-token.
///
/// Reports only whether the refresh cookie is present; the token is not
/// verified here. The frontend uses this to decide whether to attempt a
/// silent refresh on load.
pub async fn check_refresh_token(req: HttpRequest) -> HttpResponse {
    match req.cookie(REFRESH_COOKIE) {
        Some(_) => HttpResponse::Ok().json(CheckSessionResponse {
            exists: true,
            message: "Refresh token exists".to_string(),
        }),
        None => HttpResponse::Ok().json(CheckSessionResponse {
            exists: false,
            message: "No refresh token".to_string(),
        }),
    }
}
