//! Dashboard listing fetch endpoint

use actix_web::{web, HttpResponse};

use ct_core::repositories::{ListingRepository, UserRepository};
use ct_core::services::storage::ImageStore;

use crate::app::AppState;
use crate::dto::listing::{AuthenticatedUser, ListItemsResponse};
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handle POST /get_items_secure.
///
/// Returns every listing together with an echo of the authenticated
/// identity so the frontend can render the dashboard header.
pub async fn get_items_secure<U, L, S>(
    ctx: AuthContext,
    state: web::Data<AppState<U, L, S>>,
) -> HttpResponse
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    match state.listing_service.list_all().await {
        Ok(data) => HttpResponse::Ok().json(ListItemsResponse {
            message: "Welcome to Dashboard".to_string(),
            data,
            user: AuthenticatedUser {
                id: ctx.user_id.to_string(),
                email: ctx.email,
            },
        }),
        Err(err) => handle_domain_error(err),
    }
}
