//! Listing entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied metadata for a listing, before the image has been
/// stored. The ingestion pipeline combines this with the upload result to
/// build a [`Listing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewListing {
    /// Display name of the item
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Rental price per day (kept as the caller-supplied string)
    pub price_per_day: String,

    /// Item category
    pub category: String,

    /// Contact number of the owner
    pub contact_number: String,
}

/// A rental listing with its backing stored image.
///
/// Invariant: every listing references exactly one successfully stored
/// image, and no stored image is referenced by more than one listing.
/// `image_url` and `image_ref` are taken verbatim from the image store's
/// upload response, and both carry unique indexes at the repository
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Internal identifier (repository key, never shown to clients
    /// except for the delete operation)
    pub id: Uuid,

    /// Service-generated identifier used in all external references
    pub public_id: String,

    /// Identity that created the listing
    pub owner_id: Uuid,

    /// Display name of the item
    pub name: String,

    /// Free-form description
    pub description: String,

    /// Rental price per day
    pub price_per_day: String,

    /// Item category
    pub category: String,

    /// Contact number of the owner
    pub contact_number: String,

    /// Public URL of the stored image
    pub image_url: String,

    /// Opaque handle identifying the stored image for later deletion
    pub image_ref: String,

    /// Timestamp when the listing was created
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Assembles a listing from caller metadata and a successful upload.
    ///
    /// Generates the internal id and the public id; a 128-bit random UUID
    /// makes collisions across concurrent callers negligible, and the
    /// repository's unique index turns any residual race into a conflict
    /// rather than silent corruption.
    pub fn new(
        owner_id: Uuid,
        metadata: NewListing,
        image_url: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            public_id: Uuid::new_v4().to_string(),
            owner_id,
            name: metadata.name,
            description: metadata.description,
            price_per_day: metadata.price_per_day,
            category: metadata.category,
            contact_number: metadata.contact_number,
            image_url: image_url.into(),
            image_ref: image_ref.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> NewListing {
        NewListing {
            name: "Mountain bike".to_string(),
            description: "Good brakes".to_string(),
            price_per_day: "12".to_string(),
            category: "sports".to_string(),
            contact_number: "0412345678".to_string(),
        }
    }

    #[test]
    fn test_new_listing_carries_upload_result() {
        let owner = Uuid::new_v4();
        let listing = Listing::new(owner, metadata(), "https://img/x.png", "uploads/x");

        assert_eq!(listing.owner_id, owner);
        assert_eq!(listing.image_url, "https://img/x.png");
        assert_eq!(listing.image_ref, "uploads/x");
        assert!(!listing.public_id.is_empty());
    }

    #[test]
    fn test_public_ids_are_distinct() {
        let owner = Uuid::new_v4();
        let a = Listing::new(owner, metadata(), "u1", "r1");
        let b = Listing::new(owner, metadata(), "u2", "r2");
        assert_ne!(a.public_id, b.public_id);
        assert_ne!(a.id, b.id);
    }
}
