//! Application state and factory.
//!
//! `create_app` wires middleware and routes; it is generic over the
//! repository and store implementations so integration tests can run the
//! whole HTTP surface against the in-memory mocks.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use ct_core::repositories::{ListingRepository, UserRepository};
use ct_core::services::auth::AuthService;
use ct_core::services::listing::ListingService;
use ct_core::services::storage::ImageStore;
use ct_core::services::token::TokenService;
use ct_shared::types::ErrorResponse;

use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{auth, listings};

/// Shared application state handed to every handler.
///
/// Repositories are injected explicitly and owned by the services; nothing
/// is reached through ambient global lookup.
pub struct AppState<U, L, S>
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    pub auth_service: AuthService<U>,
    pub listing_service: ListingService<L, S>,
    pub token_service: Arc<TokenService>,
}

/// Create and configure the application with all dependencies.
///
/// Route-level auth policy: mutations and the dashboard fetch are guarded
/// by [`JwtAuth`]; signup, login, the refresh/session/logout cookie
/// operations, and the single-item read are public.
pub fn create_app<U, L, S>(
    app_state: web::Data<AppState<U, L, S>>,
    allowed_origin: &str,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    L: ListingRepository + 'static,
    S: ImageStore + 'static,
{
    let guard = || JwtAuth::new(Arc::clone(&app_state.token_service));
    let cors = create_cors(allowed_origin);

    App::new()
        .app_data(app_state.clone())
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Credential lifecycle
        .route("/signup", web::post().to(auth::signup::signup::<U, L, S>))
        .route("/login", web::post().to(auth::login::login::<U, L, S>))
        .route("/refresh", web::post().to(auth::refresh::refresh::<U, L, S>))
        .route(
            "/check-refresh-token",
            web::post().to(auth::session::check_refresh_token),
        )
        .route("/logout", web::post().to(auth::logout::logout))
        .route(
            "/update-email",
            web::post()
                .to(auth::account::update_email::<U, L, S>)
                .wrap(guard()),
        )
        .route(
            "/update-password",
            web::post()
                .to(auth::account::update_password::<U, L, S>)
                .wrap(guard()),
        )
        // Listings
        .route(
            "/upload",
            web::post()
                .to(listings::create::create_listing::<U, L, S>)
                .wrap(guard()),
        )
        .route(
            "/get_items_secure",
            web::post()
                .to(listings::list::get_items_secure::<U, L, S>)
                .wrap(guard()),
        )
        .route("/item/{id}", web::post().to(listings::get::get_item::<U, L, S>))
        .route(
            "/delete",
            web::delete()
                .to(listings::delete::delete_listing::<U, L, S>)
                .wrap(guard()),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "campus-trade-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for unknown routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("not_found", "Route not found"))
}
