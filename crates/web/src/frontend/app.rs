//! Leptos application root.

use leptos::*;

use storefront_core::ProductId;
use storefront_products::FilterQuery;

use crate::config::CatalogConfig;
use crate::frontend::api;
use crate::frontend::detail::ProductModal;
use crate::frontend::filter_bar::FilterBar;
use crate::frontend::grid::ProductGrid;
use crate::session::Session;

/// Handle on the page session, passed explicitly to every component.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: RwSignal<Session>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: create_rw_signal(Session::new()),
        }
    }

    pub fn apply_filter(self, query: FilterQuery) {
        self.session.update(|session| session.apply_filter(query));
    }

    pub fn show_details(self, id: ProductId) {
        self.session.update(|session| {
            session.show_details(id);
        });
    }

    pub fn close_details(self) {
        self.session.update(Session::close_details);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main application component.
#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let url = config.catalog_url.clone();
    let config = store_value(config);
    let state = AppState::new();

    // Fire-once load; no retry, no timeout.
    spawn_local(async move {
        match api::load_catalog(&url).await {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), url = %url, "catalog loaded");
                state.session.update(|session| session.load_succeeded(catalog));
            }
            Err(err) => {
                tracing::error!(error = %err, url = %url, "error loading products");
                state.session.update(Session::load_failed);
            }
        }
    });

    view! {
        <div class="container py-4">
            <FilterBar state=state/>
            <ProductGrid state=state config=config/>
            <ProductModal state=state config=config/>
        </div>
    }
}
