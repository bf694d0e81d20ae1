//! Immutable catalog built once from the catalog document.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

use storefront_core::{CatalogError, CatalogResult, Entity, ProductId};

use crate::product::Product;

/// Wire shape of the catalog resource: `{ "products": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub products: Vec<Product>,
}

impl CatalogDocument {
    pub fn from_json(text: &str) -> CatalogResult<Self> {
        serde_json::from_str(text).map_err(|e| CatalogError::malformed(e.to_string()))
    }
}

/// The full product list for one page session.
///
/// Never mutated after construction. Lookups by id always go through this
/// authoritative list, whatever filtered view is currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build the catalog and its id index.
    ///
    /// Every record is kept for display. When an id repeats, lookups resolve
    /// to its first occurrence and the repeat is reported with a warning.
    pub fn from_document(document: CatalogDocument) -> CatalogResult<Self> {
        let products = document.products;
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            match index.entry(product.id()) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(first) => {
                    tracing::warn!(
                        id = %product.id(),
                        first = *first.get(),
                        repeat = position,
                        "duplicate product id; details resolve to the first record"
                    );
                }
            }
        }

        tracing::debug!(products = products.len(), "catalog built");
        Ok(Self { products, index })
    }

    pub fn from_json(text: &str) -> CatalogResult<Self> {
        Self::from_document(CatalogDocument::from_json(text)?)
    }

    /// All products in document order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Distinct non-empty categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            let category = product.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "products": [
            { "id": 1, "name": "Neem Oil", "category": "pesticides" },
            { "id": 2, "name": "Vermicompost", "category": "fertilizers" },
            { "id": 3, "name": "Seaweed Extract", "category": "fertilizers", "thumbnails": ["a", "b"] },
            { "id": 5, "name": "Unsorted" }
        ]
    }"#;

    #[test]
    fn parses_and_keeps_document_order() {
        let catalog = Catalog::from_json(DOCUMENT).unwrap();

        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 5]);
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::from_json(DOCUMENT).unwrap();

        assert_eq!(catalog.get(ProductId::new(3)).unwrap().name, "Seaweed Extract");
        assert!(catalog.get(ProductId::new(4)).is_none());
    }

    #[test]
    fn duplicate_ids_keep_every_card_and_resolve_to_first() {
        let catalog = Catalog::from_json(
            r#"{ "products": [ { "id": 1, "name": "A" }, { "id": 2, "name": "B" }, { "id": 1, "name": "C" } ] }"#,
        )
        .unwrap();

        let names: Vec<&str> = catalog.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(catalog.get(ProductId::new(1)).unwrap().name, "A");
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "B");
    }

    #[test]
    fn one_badly_typed_record_does_not_blank_its_neighbours() {
        let documents = [
            r#"{ "products": [ { "id": 1, "name": "Good", "price": 120 }, { "id": 2, "name": "Text price", "price": "499" } ] }"#,
            r#"{ "products": [ { "id": 1, "name": "Good", "price": 120 }, { "id": 2, "name": "Null rating", "rating": null } ] }"#,
            r#"{ "products": [ { "id": 1, "name": "Good", "price": 120 }, { "id": 2, "name": "Null thumbs", "thumbnails": null } ] }"#,
        ];

        for document in documents {
            let catalog = Catalog::from_json(document).unwrap();
            assert_eq!(catalog.len(), 2);
            assert_eq!(catalog.get(ProductId::new(1)).unwrap().price, 120.0);
            assert!(catalog.get(ProductId::new(2)).is_some());
        }

        let catalog = Catalog::from_json(documents[0]).unwrap();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().price, 499.0);
    }

    #[test]
    fn record_with_unusable_id_fails_the_document() {
        let result = Catalog::from_json(r#"{ "products": [ { "id": "one", "name": "A" } ] }"#);
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn rejects_documents_without_products_field() {
        let result = Catalog::from_json(r#"{ "items": [] }"#);
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn rejects_non_json_bodies() {
        let result = Catalog::from_json("<html>404</html>");
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn empty_product_list_is_valid() {
        let catalog = Catalog::from_json(r#"{ "products": [] }"#).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let catalog = Catalog::from_json(DOCUMENT).unwrap();
        assert_eq!(catalog.categories(), vec!["pesticides", "fertilizers"]);
    }
}
