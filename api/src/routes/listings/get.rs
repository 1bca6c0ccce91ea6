//! Single listing lookup endpoint

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ct_core::repositories::{ListingRepository, UserRepository};
use ct_core::services::storage::ImageStore;

use crate::app::AppState;
use crate::handlers::error::handle_domain_error;

/// Handle POST /item/{id}.
///
/// Public read. Keeps the observed miss contract: an unknown or malformed
/// id is a 200 with `message: false`, not a 404.
pub async fn get_item<U, L, S>(
    state: web::Data<AppState<U, L, S>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    let id = match Uuid::parse_str(&path.into_inner()) {
        Ok(id) => id,
        Err(_) => return miss(),
    };

    match state.listing_service.get(id).await {
        Ok(Some(item)) => HttpResponse::Ok().json(serde_json::json!({
            "response": item,
            "message": true,
        })),
        Ok(None) => miss(),
        Err(err) => handle_domain_error(err),
    }
}

fn miss() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": false }))
}
