//! Domain model for the CampusTrade backend

pub mod entities;
