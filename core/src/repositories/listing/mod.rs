//! Listing repository trait defining the interface for listing persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::listing::Listing;
use crate::errors::DomainError;

pub mod mock;

pub use mock::MockListingRepository;

/// Repository trait for [`Listing`] persistence operations.
///
/// Uniqueness of `public_id`, `image_url`, and `image_ref` is enforced at
/// this boundary: concurrent creates racing on any of those values resolve
/// to one success and one `Conflict`, never silent corruption.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Persist a new listing
    ///
    /// # Returns
    /// * `Ok(Listing)` - The stored listing
    /// * `Err(DomainError::Conflict)` - `public_id`, `image_url`, or
    ///   `image_ref` already exists
    async fn insert(&self, listing: Listing) -> Result<Listing, DomainError>;

    /// Fetch every listing (full scan; no pagination at current scale)
    async fn find_all(&self) -> Result<Vec<Listing>, DomainError>;

    /// Find a listing by its internal identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError>;

    /// Delete a listing by its internal identifier
    ///
    /// # Returns
    /// * `Ok(true)` - The listing existed and was deleted
    /// * `Ok(false)` - No listing with the given id
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError>;
}

#[async_trait]
impl<T: ListingRepository + ?Sized> ListingRepository for std::sync::Arc<T> {
    async fn insert(&self, listing: Listing) -> Result<Listing, DomainError> {
        (**self).insert(listing).await
    }

    async fn find_all(&self) -> Result<Vec<Listing>, DomainError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        (**self).find_by_id(id).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        (**self).delete_by_id(id).await
    }
}
