//! Domain entities

pub mod listing;
pub mod token;
pub mod user;

pub use listing::{Listing, NewListing};
pub use token::{Claims, TokenPair};
pub use user::User;
