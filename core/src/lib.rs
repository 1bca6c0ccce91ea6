//! # Core Domain Layer
//!
//! Business logic for the CampusTrade backend, independent of any web
//! framework or database driver:
//!
//! - **Entities**: users, listings, and token claims
//! - **Repositories**: persistence traits plus in-memory mocks for tests
//! - **Services**: token issuing/verification, credential lifecycle, and
//!   the listing ingestion pipeline
//!
//! Infrastructure concerns (MySQL, the image store HTTP client) implement
//! the traits defined here; the API layer drives the services.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
