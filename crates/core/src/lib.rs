//! `storefront-core` — catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the catalog and the
//! browser frontend (no IO, no DOM).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult};
pub use id::ProductId;
