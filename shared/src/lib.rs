//! # Shared Module
//!
//! Cross-cutting types used by every layer of the CampusTrade backend:
//! environment-driven configuration, common response envelopes, and
//! validation utilities. This crate carries no domain logic.

pub mod config;
pub mod types;
pub mod utils;
