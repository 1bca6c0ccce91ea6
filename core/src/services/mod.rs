//! Domain services.
//!
//! - [`token`]: stateless dual-secret JWT issuing and verification
//! - [`auth`]: signup, login, and credential updates
//! - [`listing`]: the upload-then-persist listing ingestion pipeline
//! - [`storage`]: the image store port the pipeline talks to

pub mod auth;
pub mod listing;
pub mod storage;
pub mod token;

pub use auth::AuthService;
pub use listing::ListingService;
pub use storage::{ImageStore, StoredImage};
pub use token::TokenService;
