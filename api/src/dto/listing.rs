//! Listing DTOs

use serde::{Deserialize, Serialize};

use ct_core::domain::entities::listing::Listing;

/// Response for a successful listing creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListingResponse {
    pub message: String,
    pub item: Listing,
}

/// Identity echo returned alongside the dashboard listing fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
}

/// Response for the dashboard listing fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItemsResponse {
    pub message: String,
    pub data: Vec<Listing>,
    pub user: AuthenticatedUser,
}

/// Body of the delete operation (internal listing id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteListingRequest {
    pub id: Option<String>,
}
