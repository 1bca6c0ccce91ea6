//! Logout endpoint

use actix_web::HttpResponse;

use crate::dto::auth::LogoutResponse;
use crate::routes::auth::clear_refresh_cookie;

/// Handle POST /logout.
///
/// Tokens are stateless, so logout is purely client-side: the refresh
/// cookie is cleared and any access token the client still holds simply
/// ages out within its 15 minute window.
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(clear_refresh_cookie())
        .json(LogoutResponse {
            message: "Logged out successfully".to_string(),
        })
}
