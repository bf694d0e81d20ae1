//! Page session: the one owned state object behind the catalog page.
//!
//! Load phase:
//! `Unloaded → Loaded` (fetch succeeded) or `Unloaded → Failed` (fetch failed).
//! Once loaded, filter actions move between the full and the filtered view.
//! The open product (detail modal) is tracked independently of both.

use storefront_core::ProductId;
use storefront_products::{Catalog, FilterQuery, Product, filter_products};

use crate::config::CatalogConfig;
use crate::view_model::{ProductCard, ProductDetail};

#[derive(Debug, Default)]
enum LoadPhase {
    #[default]
    Unloaded,
    Loaded(Catalog),
    Failed,
}

/// What the grid is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Unloaded,
    Failed,
    Full,
    Filtered,
}

impl ViewState {
    pub fn is_loaded(self) -> bool {
        matches!(self, Self::Full | Self::Filtered)
    }
}

#[derive(Debug, Default)]
pub struct Session {
    phase: LoadPhase,
    filter: FilterQuery,
    selected: Option<ProductId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the fetched catalog. The fetch fires once; later calls are ignored.
    pub fn load_succeeded(&mut self, catalog: Catalog) {
        if !matches!(self.phase, LoadPhase::Unloaded) {
            tracing::warn!("catalog already settled; ignoring second load");
            return;
        }
        self.phase = LoadPhase::Loaded(catalog);
    }

    /// Record a failed fetch. The grid stays empty for the rest of the session.
    pub fn load_failed(&mut self) {
        if matches!(self.phase, LoadPhase::Unloaded) {
            self.phase = LoadPhase::Failed;
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.phase {
            LoadPhase::Loaded(catalog) => Some(catalog),
            LoadPhase::Unloaded | LoadPhase::Failed => None,
        }
    }

    pub fn view_state(&self) -> ViewState {
        match self.phase {
            LoadPhase::Unloaded => ViewState::Unloaded,
            LoadPhase::Failed => ViewState::Failed,
            LoadPhase::Loaded(_) if self.filter.is_unfiltered() => ViewState::Full,
            LoadPhase::Loaded(_) => ViewState::Filtered,
        }
    }

    /// Replace the applied filter. Filter controls are inert until the catalog
    /// has loaded, so this is a no-op before then.
    pub fn apply_filter(&mut self, query: FilterQuery) {
        let Some(catalog) = self.catalog() else {
            tracing::debug!("filter action before catalog load; ignored");
            return;
        };
        let matches = filter_products(catalog.products(), &query).len();
        tracing::debug!(
            text = query.text(),
            category = query.category.as_token(),
            matches,
            "filter applied"
        );
        self.filter = query;
    }

    pub fn filter(&self) -> &FilterQuery {
        &self.filter
    }

    /// Products on screen, recomputed from the full catalog on every call.
    pub fn visible(&self) -> Vec<&Product> {
        match self.catalog() {
            Some(catalog) => filter_products(catalog.products(), &self.filter),
            None => Vec::new(),
        }
    }

    pub fn cards(&self, config: &CatalogConfig) -> Vec<ProductCard> {
        self.visible()
            .into_iter()
            .map(|product| ProductCard::new(product, config))
            .collect()
    }

    /// Category tokens for the selector, empty until loaded.
    pub fn categories(&self) -> Vec<String> {
        self.catalog()
            .map(|catalog| catalog.categories().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Open the detail view for `id`.
    ///
    /// The id is resolved against the full catalog, never the filtered view:
    /// ids are unique and stable, so the full list is the authority. An unknown
    /// id leaves the session unchanged and returns `false`.
    pub fn show_details(&mut self, id: ProductId) -> bool {
        let found = self.catalog().is_some_and(|catalog| catalog.get(id).is_some());
        if !found {
            tracing::debug!(%id, "details requested for unknown product; ignored");
            return false;
        }
        self.selected = Some(id);
        true
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<ProductId> {
        self.selected
    }

    /// Detail view model for the open product, if any.
    pub fn detail(&self, config: &CatalogConfig) -> Option<ProductDetail> {
        let id = self.selected?;
        let product = self.catalog()?.get(id)?;
        Some(ProductDetail::new(product, config))
    }
}
