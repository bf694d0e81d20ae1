//! Errors raised at the browser boundary.

use storefront_core::CatalogError;
use thiserror::Error;

/// Why the one-shot catalog fetch produced no catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no window object available")]
    NoWindow,
    #[error("catalog request failed: {0}")]
    Network(String),
    #[error("catalog request to {url} returned HTTP {status}")]
    Status { status: u16, url: String },
    #[error("catalog body could not be decoded: {0}")]
    Decode(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A page setting that was present but unusable; the default is kept instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}
