//! Filter engine: free-text query plus category selector.
//!
//! Pure and order preserving. The result is a transient projection over the
//! catalog; nothing here is stored between filter actions.

use crate::product::Product;

/// Category token carried by the "All Categories" option.
pub const ALL_CATEGORIES: &str = "all";

/// Category selector value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact (case-sensitive) match on `Product::category`.
    Only(String),
}

impl CategoryFilter {
    /// Interpret a selector token; only the literal sentinel means "all".
    pub fn from_token(token: &str) -> Self {
        if token == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(token.to_string())
        }
    }

    pub fn as_token(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }
}

/// One filter action: the search box text and the selected category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterQuery {
    needle: String,
    pub category: CategoryFilter,
}

impl FilterQuery {
    pub fn new(text: &str, category: CategoryFilter) -> Self {
        Self {
            needle: text.to_lowercase(),
            category,
        }
    }

    /// The lowercased search text. Not trimmed: whitespace is matched literally.
    pub fn text(&self) -> &str {
        &self.needle
    }

    /// True when every product passes, i.e. the view is the full catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.needle.is_empty() && self.category == CategoryFilter::All
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product) && product.matches_text(&self.needle)
    }
}

/// Products passing `query`, in input order.
pub fn filter_products<'a>(products: &'a [Product], query: &FilterQuery) -> Vec<&'a Product> {
    products.iter().filter(|product| query.matches(product)).collect()
}
