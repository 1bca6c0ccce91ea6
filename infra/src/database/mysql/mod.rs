//! MySQL repository implementations

pub mod listing_repository_impl;
pub mod user_repository_impl;

pub use listing_repository_impl::MySqlListingRepository;
pub use user_repository_impl::MySqlUserRepository;

use ct_core::errors::DomainError;

/// MySQL error number raised on a duplicate key
const ER_DUP_ENTRY: u16 = 1062;

/// Map a sqlx insert/update failure into the domain taxonomy.
///
/// Duplicate-key violations become `Conflict` so a race on a unique column
/// surfaces as a client error instead of a 500; everything else is
/// `Internal`.
pub(crate) fn map_write_error(err: sqlx::Error, conflict_field: &str) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(mysql_err) = db_err.try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>() {
            if mysql_err.number() == ER_DUP_ENTRY {
                return DomainError::Conflict {
                    field: conflict_field.to_string(),
                };
            }
        }
    }
    DomainError::Internal {
        message: format!("Database write failed: {err}"),
    }
}
