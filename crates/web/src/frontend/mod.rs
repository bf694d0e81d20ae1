//! Leptos frontend for the catalog page.

pub mod api;
pub mod app;
mod detail;
mod filter_bar;
mod grid;

use leptos::{mount_to_body, view};
use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::CatalogConfig;
use app::App;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, rejected) = CatalogConfig::from_lookup(api::meta_content);
    storefront_observability::init_with_level(&config.log_level);
    for err in rejected {
        tracing::warn!(error = %err, "ignoring page setting");
    }

    mount_to_body(move || view! { <App config=config/> });
}
