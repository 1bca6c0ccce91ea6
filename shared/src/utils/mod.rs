//! Common utilities

pub mod validation;
