use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;

use ct_api::app::{create_app, AppState};
use ct_core::services::auth::AuthService;
use ct_core::services::listing::ListingService;
use ct_core::services::token::TokenService;
use ct_infra::database::{create_pool, MySqlListingRepository, MySqlUserRepository};
use ct_infra::storage::CloudinaryStore;
use ct_shared::config::{DatabaseConfig, JwtConfig, ServerConfig};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting CampusTrade API server");

    // Configuration. Missing secrets are a startup failure, never a
    // per-request one.
    let jwt_config = JwtConfig::from_env().map_err(config_error)?;
    let database_config = DatabaseConfig::from_env().map_err(config_error)?;
    let server_config = ServerConfig::from_env();

    let pool = create_pool(&database_config)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let user_repo = MySqlUserRepository::new(pool.clone());
    let listing_repo = MySqlListingRepository::new(pool);
    let store = CloudinaryStore::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let token_service = Arc::new(TokenService::new(&jwt_config));
    let auth_service = AuthService::new(user_repo, Arc::clone(&token_service));
    let listing_service = ListingService::new(listing_repo, store);

    let app_state = web::Data::new(AppState {
        auth_service,
        listing_service,
        token_service,
    });

    let bind_address = server_config.bind_address();
    let allowed_origin = server_config.allowed_origin.clone();
    info!("Server will bind to: {bind_address}");

    HttpServer::new(move || create_app(app_state.clone(), &allowed_origin))
        .bind(&bind_address)?
        .run()
        .await
}

fn config_error(err: ct_shared::config::ConfigError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
}
