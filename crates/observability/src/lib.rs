//! Tracing/logging setup shared by the storefront crates.

/// Initialize process-wide tracing with an explicit fallback level (used
/// when `RUST_LOG` is not available, which is always the case in the browser).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with_level(level: &str) {
    tracing::init(level);
}

/// Tracing configuration (filters, layers, writers).
pub mod tracing;
