//! Authentication and account routes.
//!
//! The refresh token travels exclusively in an HTTP-only cookie; no
//! handler ever puts it in a response body.

use actix_web::cookie::{time::Duration, Cookie, SameSite};

pub mod account;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod session;
pub mod signup;

/// Name of the cookie carrying the refresh token
pub const REFRESH_COOKIE: &str = "refreshToken";

/// Builds the refresh token cookie.
///
/// HTTP-only and Secure with `SameSite=None` so the browser sends it on
/// cross-origin requests from the frontend but scripts cannot read it.
pub(crate) fn refresh_cookie(token: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

/// Builds an expired cookie that removes the refresh token on the client
pub(crate) fn clear_refresh_cookie() -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .max_age(Duration::ZERO)
        .finish()
}
