//! Request and response data transfer objects

pub mod auth;
pub mod listing;

pub use ct_shared::types::ErrorResponse;
