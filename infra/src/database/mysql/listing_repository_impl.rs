//! MySQL implementation of the ListingRepository trait.
//!
//! The `public_id`, `image_url`, and `image_ref` columns carry unique
//! indexes; a concurrent insert racing on any of them resolves to one
//! success and one `Conflict`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use ct_core::domain::entities::listing::Listing;
use ct_core::errors::DomainError;
use ct_core::repositories::ListingRepository;

use super::map_write_error;

/// MySQL implementation of [`ListingRepository`].
pub struct MySqlListingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlListingRepository {
    /// Create a new MySQL listing repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a [`Listing`] entity
    fn row_to_listing(row: &sqlx::mysql::MySqlRow) -> Result<Listing, DomainError> {
        let get_string = |column: &str| -> Result<String, DomainError> {
            row.try_get(column).map_err(|e| DomainError::Internal {
                message: format!("Failed to get {column}: {e}"),
            })
        };

        let id = get_string("id")?;
        let owner_id = get_string("owner_id")?;

        Ok(Listing {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid listing UUID: {e}"),
            })?,
            public_id: get_string("public_id")?,
            owner_id: Uuid::parse_str(&owner_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid owner UUID: {e}"),
            })?,
            name: get_string("name")?,
            description: get_string("description")?,
            price_per_day: get_string("price_per_day")?,
            category: get_string("category")?,
            contact_number: get_string("contact_number")?,
            image_url: get_string("image_url")?,
            image_ref: get_string("image_ref")?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {e}"),
                })?,
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, public_id, owner_id, name, description, price_per_day,
           category, contact_number, image_url, image_ref, created_at
    FROM listings
"#;

#[async_trait]
impl ListingRepository for MySqlListingRepository {
    async fn insert(&self, listing: Listing) -> Result<Listing, DomainError> {
        let query = r#"
            INSERT INTO listings (
                id, public_id, owner_id, name, description, price_per_day,
                category, contact_number, image_url, image_ref, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(listing.id.to_string())
            .bind(&listing.public_id)
            .bind(listing.owner_id.to_string())
            .bind(&listing.name)
            .bind(&listing.description)
            .bind(&listing.price_per_day)
            .bind(&listing.category)
            .bind(&listing.contact_number)
            .bind(&listing.image_url)
            .bind(&listing.image_ref)
            .bind(listing.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "listing"))?;

        Ok(listing)
    }

    async fn find_all(&self) -> Result<Vec<Listing>, DomainError> {
        let rows = sqlx::query(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to fetch listings: {e}"),
            })?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Listing>, DomainError> {
        let query = format!("{SELECT_COLUMNS} WHERE id = ? LIMIT 1");

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find listing by id: {e}"),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_listing(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM listings WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete listing: {e}"),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
