//! Storage module - image store implementations

pub mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryStore};
