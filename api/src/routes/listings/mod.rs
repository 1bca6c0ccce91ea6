//! Listing routes

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
