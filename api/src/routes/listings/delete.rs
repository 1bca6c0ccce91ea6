//! Listing deletion endpoint

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use ct_core::repositories::{ListingRepository, UserRepository};
use ct_core::services::storage::ImageStore;
use ct_shared::types::ErrorResponse;

use crate::app::AppState;
use crate::dto::listing::DeleteListingRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handle DELETE /delete.
///
/// Only the listing's owner may delete it; the requester is the
/// authenticated identity from the claims.
pub async fn delete_listing<U, L, S>(
    ctx: AuthContext,
    state: web::Data<AppState<U, L, S>>,
    body: web::Json<DeleteListingRequest>,
) -> HttpResponse
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    let raw_id = match body.id.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest()
                .json(ErrorResponse::new("validation_error", "ID is required"));
        }
    };

    let id = match Uuid::parse_str(raw_id) {
        Ok(id) => id,
        Err(_) => {
            return HttpResponse::NotFound()
                .json(ErrorResponse::new("not_found", "Listing not found"));
        }
    };

    match state.listing_service.delete(id, ctx.user_id).await {
        Ok(()) => HttpResponse::Ok().body("Document deleted successfully"),
        Err(err) => handle_domain_error(err),
    }
}
