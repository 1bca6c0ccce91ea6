//! Listing ingestion pipeline and listing queries.
//!
//! Creation is a two-step saga: upload the image first, persist the
//! metadata second. The ordering is the correctness mechanism - a listing
//! record can never point at an image that was not stored. The rarer
//! inverse failure (stored image, failed insert) is handled with a
//! best-effort compensating delete against the store.

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::entities::listing::{Listing, NewListing};
use crate::errors::DomainError;
use crate::repositories::ListingRepository;
use crate::services::storage::ImageStore;

/// Logical folder every listing image is uploaded into
const UPLOAD_FOLDER: &str = "uploads";

/// Service orchestrating listing creation, lookup, and deletion.
pub struct ListingService<L: ListingRepository, S: ImageStore> {
    listings: L,
    store: S,
}

impl<L: ListingRepository, S: ImageStore> ListingService<L, S> {
    /// Creates a new listing service
    pub fn new(listings: L, store: S) -> Self {
        Self { listings, store }
    }

    /// Creates a listing from caller metadata and raw image bytes.
    ///
    /// # Errors
    /// * `DomainError::Validation` - No image bytes were supplied
    /// * `DomainError::Storage` - The upload failed; no record was written
    /// * `DomainError::Conflict` - A uniqueness constraint fired on insert
    ///   (the uploaded image is deleted again before this returns)
    pub async fn create_listing(
        &self,
        owner_id: Uuid,
        metadata: NewListing,
        image_bytes: Vec<u8>,
    ) -> Result<Listing, DomainError> {
        if image_bytes.is_empty() {
            return Err(DomainError::validation("No file uploaded"));
        }

        // Upload first. A failure here terminates the pipeline with no
        // partial state: nothing has been written to the repository yet.
        let stored = self.store.upload(image_bytes, UPLOAD_FOLDER).await?;

        let listing = Listing::new(owner_id, metadata, stored.url, &stored.storage_ref);

        match self.listings.insert(listing).await {
            Ok(created) => {
                info!(listing_id = %created.id, public_id = %created.public_id, "listing created");
                Ok(created)
            }
            Err(err) => {
                // Persistence failed after a successful upload: delete the
                // stored image again so it does not linger unreferenced.
                // Best effort - the insert error is what the caller sees.
                if let Err(cleanup_err) = self.store.delete(&stored.storage_ref).await {
                    error!(
                        storage_ref = %stored.storage_ref,
                        error = %cleanup_err,
                        "failed to delete orphaned image after insert failure"
                    );
                }
                Err(err)
            }
        }
    }

    /// Returns every listing (full scan, no pagination)
    pub async fn list_all(&self) -> Result<Vec<Listing>, DomainError> {
        self.listings.find_all().await
    }

    /// Looks up a single listing by its internal id
    pub async fn get(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        self.listings.find_by_id(id).await
    }

    /// Deletes a listing by its internal id.
    ///
    /// Only the owner may delete their listing. The backing image is
    /// deleted from the store afterwards, best effort.
    pub async fn delete(&self, id: Uuid, requester: Uuid) -> Result<(), DomainError> {
        let listing = self
            .listings
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing"))?;

        if listing.owner_id != requester {
            return Err(DomainError::Auth(crate::errors::AuthError::NotOwner));
        }

        if !self.listings.delete_by_id(id).await? {
            // Lost a race with a concurrent delete
            return Err(DomainError::not_found("Listing"));
        }

        if let Err(err) = self.store.delete(&listing.image_ref).await {
            warn!(storage_ref = %listing.image_ref, error = %err, "failed to delete stored image");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repositories::listing::MockListingRepository;
    use crate::services::storage::MockImageStore;

    fn metadata(name: &str) -> NewListing {
        NewListing {
            name: name.to_string(),
            description: "desc".to_string(),
            price_per_day: "5".to_string(),
            category: "misc".to_string(),
            contact_number: "0400000000".to_string(),
        }
    }

    fn service() -> ListingService<MockListingRepository, Arc<MockImageStore>> {
        ListingService::new(MockListingRepository::new(), Arc::new(MockImageStore::new()))
    }

    #[tokio::test]
    async fn test_missing_image_is_rejected_before_any_side_effect() {
        let svc = service();
        let err = svc
            .create_listing(Uuid::new_v4(), metadata("bike"), Vec::new())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
        assert!(svc.listings.is_empty().await);
    }

    #[tokio::test]
    async fn test_upload_failure_leaves_no_repository_record() {
        let svc = service();
        svc.store.fail_next_uploads();

        let err = svc
            .create_listing(Uuid::new_v4(), metadata("bike"), vec![1, 2, 3])
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Storage { .. }));
        assert!(svc.listings.is_empty().await);
    }

    #[tokio::test]
    async fn test_created_listing_carries_exact_upload_result() {
        let svc = service();
        let owner = Uuid::new_v4();

        let created = svc
            .create_listing(owner, metadata("bike"), vec![1, 2, 3])
            .await
            .unwrap();

        assert_eq!(created.image_url, "https://images.example.com/uploads/0.png");
        assert_eq!(created.image_ref, "uploads/0");

        // find_by_id immediately after creation returns an equal record
        let fetched = svc.get(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_insert_failure_triggers_compensating_delete() {
        let store = Arc::new(MockImageStore::new());
        let repo = MockListingRepository::new();
        let svc = ListingService::new(repo, Arc::clone(&store));
        let owner = Uuid::new_v4();

        // First create claims storage ref "uploads/0"
        svc.create_listing(owner, metadata("bike"), vec![1]).await.unwrap();

        // Force the next create into an insert conflict: pre-claim the
        // image ref the store will hand out next.
        let colliding = Listing::new(
            owner,
            metadata("tent"),
            "https://images.example.com/uploads/1.png",
            "uploads/1",
        );
        svc.listings.insert(colliding).await.unwrap();

        let err = svc
            .create_listing(owner, metadata("kayak"), vec![2])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));

        // The orphaned upload was deleted again
        assert_eq!(store.deleted_refs().await, vec!["uploads/1".to_string()]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_public_ids() {
        let svc = Arc::new(service());
        let owner = Uuid::new_v4();

        let a = {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move {
                svc.create_listing(owner, metadata("bike"), vec![1]).await
            })
        };
        let b = {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move {
                svc.create_listing(owner, metadata("tent"), vec![2]).await
            })
        };

        let a = a.await.unwrap().unwrap();
        let b = b.await.unwrap().unwrap();

        assert_ne!(a.public_id, b.public_id);
        assert_eq!(svc.listings.len().await, 2);
    }

    #[tokio::test]
    async fn test_delete_enforces_ownership_and_absence() {
        let svc = service();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let created = svc
            .create_listing(owner, metadata("bike"), vec![1])
            .await
            .unwrap();

        let err = svc.delete(created.id, stranger).await.unwrap_err();
        assert!(matches!(err, DomainError::Auth(_)));

        svc.delete(created.id, owner).await.unwrap();

        // Second delete: the record is gone
        let err = svc.delete(created.id, owner).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
