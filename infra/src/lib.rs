//! # Infrastructure Layer
//!
//! Concrete implementations of the persistence and storage ports defined
//! in `ct_core`:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Storage**: Cloudinary image store over HTTP
//!
//! Everything here maps its driver-level failures into `DomainError` at
//! the boundary; no sqlx or reqwest types leak upward.

pub mod database;
pub mod storage;
