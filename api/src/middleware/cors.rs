//! CORS middleware configuration for cross-origin requests.
//!
//! The refresh token rides in a cross-site cookie, so the browser only
//! sends it when the response carries `Access-Control-Allow-Credentials`
//! for an explicitly named origin. Wildcard origins and credentials are
//! mutually exclusive; the allowed frontend origin comes from
//! configuration.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Creates a CORS middleware instance allowing credentialed requests from
/// the configured frontend origin.
pub fn create_cors(allowed_origin: &str) -> Cors {
    log::info!("Configuring CORS for origin: {allowed_origin}");

    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .supports_credentials()
        .max_age(3600)
}
