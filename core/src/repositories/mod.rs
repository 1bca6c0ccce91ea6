//! Repository traits for persistence operations.
//!
//! The traits here define the contract between the domain services and the
//! storage layer. Production implementations live in the infrastructure
//! crate; in-memory mocks live beside the traits for use in tests.

pub mod listing;
pub mod user;

pub use listing::{ListingRepository, MockListingRepository};
pub use user::{MockUserRepository, UserRepository};
