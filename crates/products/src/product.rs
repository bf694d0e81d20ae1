use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

use crate::serde_helpers;

/// Usage instructions printed in the detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Application rate, e.g. "5 ml per litre of water".
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub rate: String,
    /// Application method, e.g. "Foliar spray".
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub method: String,
}

/// Product read model, field names as they appear in the catalog document.
///
/// Only `id` is required. A display field that is missing, `null` or of the
/// wrong type still loads and renders empty instead of failing the whole
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub description: String,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub full_description: String,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub image: String,
    #[serde(default, deserialize_with = "serde_helpers::text_list")]
    pub thumbnails: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub size: String,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub category: String,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub brand: String,
    #[serde(default, deserialize_with = "serde_helpers::text", rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub suitable_for: String,
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub form: String,
    #[serde(default, deserialize_with = "serde_helpers::number")]
    pub rating: f64,
    #[serde(default, deserialize_with = "serde_helpers::count")]
    pub reviews: u32,
    #[serde(default, deserialize_with = "serde_helpers::text_list")]
    pub benefits: Vec<String>,
    #[serde(default, deserialize_with = "serde_helpers::or_default")]
    pub usage: Usage,
}

impl Product {
    /// Case-insensitive substring match against name or description.
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_document_field_names() {
        let product: Product = serde_json::from_value(json!({
            "id": 3,
            "name": "Neem Oil",
            "description": "Cold pressed neem oil",
            "fullDescription": "Pure cold pressed neem oil for organic pest control.",
            "image": "img/neem.jpg",
            "thumbnails": ["img/neem-1.jpg", "img/neem-2.jpg"],
            "price": 349.5,
            "size": "500 ml",
            "category": "pesticides",
            "brand": "GreenLeaf",
            "type": "Organic",
            "suitableFor": "All crops",
            "form": "Liquid",
            "rating": 4.5,
            "reviews": 128,
            "benefits": ["Repels pests", "Safe for bees"],
            "usage": { "rate": "5 ml per litre", "method": "Foliar spray" }
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.full_description, "Pure cold pressed neem oil for organic pest control.");
        assert_eq!(product.kind, "Organic");
        assert_eq!(product.suitable_for, "All crops");
        assert_eq!(product.reviews, 128);
        assert_eq!(product.usage.method, "Foliar spray");
        assert_eq!(product.benefits.len(), 2);
    }

    #[test]
    fn missing_display_fields_default_to_empty() {
        let product: Product = serde_json::from_value(json!({ "id": 9, "name": "Bare" })).unwrap();

        assert!(product.thumbnails.is_empty());
        assert!(product.benefits.is_empty());
        assert_eq!(product.brand, "");
        assert_eq!(product.usage, Usage::default());
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn id_is_required() {
        let result = serde_json::from_value::<Product>(json!({ "name": "No id" }));
        assert!(result.is_err());
    }

    #[test]
    fn wrong_typed_display_fields_fall_back_to_empty() {
        let product: Product = serde_json::from_value(json!({
            "id": 4,
            "name": null,
            "description": ["not", "text"],
            "thumbnails": null,
            "rating": null,
            "reviews": "many",
            "benefits": "Repels pests",
            "usage": "spray it"
        }))
        .unwrap();

        assert_eq!(product.name, "");
        assert_eq!(product.description, "");
        assert!(product.thumbnails.is_empty());
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.reviews, 0);
        assert!(product.benefits.is_empty());
        assert_eq!(product.usage, Usage::default());
    }

    #[test]
    fn numbers_written_as_text_are_still_numbers() {
        let product: Product = serde_json::from_value(json!({
            "id": 5,
            "price": "499",
            "rating": " 4.5 ",
            "reviews": "128",
            "size": 500,
            "usage": { "rate": 5, "method": null }
        }))
        .unwrap();

        assert_eq!(product.price, 499.0);
        assert_eq!(product.rating, 4.5);
        assert_eq!(product.reviews, 128);
        assert_eq!(product.size, "500");
        assert_eq!(product.usage.rate, "5");
        assert_eq!(product.usage.method, "");
    }

    #[test]
    fn list_items_that_are_not_text_are_dropped() {
        let product: Product = serde_json::from_value(json!({
            "id": 6,
            "thumbnails": ["a.jpg", null, { "src": "b.jpg" }, "c.jpg"],
            "benefits": ["Safe", 2]
        }))
        .unwrap();

        assert_eq!(product.thumbnails, vec!["a.jpg", "c.jpg"]);
        assert_eq!(product.benefits, vec!["Safe", "2"]);
    }

    #[test]
    fn fractional_or_negative_review_counts_are_zero() {
        let product: Product =
            serde_json::from_value(json!({ "id": 7, "reviews": -3 })).unwrap();
        assert_eq!(product.reviews, 0);

        let product: Product =
            serde_json::from_value(json!({ "id": 7, "reviews": 2.5 })).unwrap();
        assert_eq!(product.reviews, 0);
    }

    #[test]
    fn text_match_checks_name_and_description() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "name": "Neem Oil",
            "description": "Organic Pest Repellent"
        }))
        .unwrap();

        assert!(product.matches_text("neem"));
        assert!(product.matches_text("pest rep"));
        assert!(product.matches_text(""));
        assert!(!product.matches_text("urea"));
    }
}
