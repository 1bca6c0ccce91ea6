//! # API Layer
//!
//! actix-web surface of the CampusTrade backend. Route handlers stay thin:
//! they parse the request, call a domain service, and map the result (or
//! `DomainError`) to the wire contract. The JWT guard in
//! [`middleware::auth`] is the single authentication path for every
//! protected route.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
