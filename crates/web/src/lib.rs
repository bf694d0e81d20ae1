//! `storefront-web`
//!
//! **Responsibility:** the browser catalog page.
//!
//! This crate provides:
//! - Page configuration read from the host document
//! - Typed view models for grid cards and the detail modal
//! - The owned page session (load phase, applied filter, open product)
//! - The Leptos frontend (WASM only) that renders all of the above
//!
//! Everything outside `frontend` is plain Rust and runs in native tests.

pub mod config;
pub mod error;
pub mod gallery;
pub mod session;
pub mod view_model;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::CatalogConfig;
pub use error::{ConfigError, LoadError};
pub use gallery::Gallery;
pub use session::{Session, ViewState};
pub use view_model::{ProductCard, ProductDetail, SpecRow};
