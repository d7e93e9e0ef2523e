//! `pethouse-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog
//! crates (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
