//! Mock implementation of ListingRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::listing::Listing;
use crate::errors::DomainError;

use super::ListingRepository;

/// In-memory listing repository for tests, enforcing the same uniqueness
/// constraints the production unique indexes do.
#[derive(Clone)]
pub struct MockListingRepository {
    listings: Arc<RwLock<HashMap<Uuid, Listing>>>,
}

impl MockListingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            listings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored listings (test helper)
    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    /// Whether the store is empty (test helper)
    pub async fn is_empty(&self) -> bool {
        self.listings.read().await.is_empty()
    }
}

impl Default for MockListingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingRepository for MockListingRepository {
    async fn insert(&self, listing: Listing) -> Result<Listing, DomainError> {
        let mut listings = self.listings.write().await;

        for existing in listings.values() {
            if existing.public_id == listing.public_id {
                return Err(DomainError::Conflict {
                    field: "public_id".to_string(),
                });
            }
            if existing.image_url == listing.image_url {
                return Err(DomainError::Conflict {
                    field: "image_url".to_string(),
                });
            }
            if existing.image_ref == listing.image_ref {
                return Err(DomainError::Conflict {
                    field: "image_ref".to_string(),
                });
            }
        }

        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn find_all(&self) -> Result<Vec<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut listings = self.listings.write().await;
        Ok(listings.remove(&id).is_some())
    }
}
