//! Products catalog module.
//!
//! This crate contains the product read model, the immutable catalog built from
//! the JSON document, and the filter engine. Everything here is deterministic
//! (no IO, no DOM) so the browser frontend stays a thin shell.

pub mod catalog;
pub mod filter;
pub mod product;
mod serde_helpers;

pub use catalog::{Catalog, CatalogDocument};
pub use filter::{CategoryFilter, FilterQuery, filter_products};
pub use product::{Product, Usage};
pub use storefront_core::ProductId;
