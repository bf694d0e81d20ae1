//! Typed view models: everything a component prints, already formatted.
//!
//! Components render these through Leptos text nodes and attributes, so
//! catalog text is never spliced into markup.

use storefront_core::ProductId;
use storefront_products::Product;

use crate::config::CatalogConfig;
use crate::gallery::Gallery;

/// One grid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub image: String,
    pub name: String,
    pub summary: String,
    pub price_label: String,
    pub size: String,
}

impl ProductCard {
    pub fn new(product: &Product, config: &CatalogConfig) -> Self {
        Self {
            id: product.id,
            image: product.image.clone(),
            name: product.name.clone(),
            summary: summarize(&product.description, config.summary_chars),
            price_label: format_price(&config.currency_prefix, product.price),
            size: product.size.clone(),
        }
    }
}

/// One row of the fixed specification table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

/// Content of the detail modal for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub title: String,
    pub gallery: Gallery,
    pub rating_badge: String,
    pub price_label: String,
    pub full_description: String,
    pub specs: Vec<SpecRow>,
    pub benefits: Vec<String>,
    pub usage_rate: String,
    pub usage_method: String,
}

impl ProductDetail {
    pub fn new(product: &Product, config: &CatalogConfig) -> Self {
        Self {
            title: product.name.clone(),
            gallery: Gallery::for_product(product),
            rating_badge: format!("{} ★ ({})", product.rating, product.reviews),
            price_label: format_price(&config.currency_prefix, product.price),
            full_description: product.full_description.clone(),
            specs: spec_rows(product),
            benefits: product.benefits.clone(),
            usage_rate: product.usage.rate.clone(),
            usage_method: product.usage.method.clone(),
        }
    }
}

fn spec_rows(product: &Product) -> Vec<SpecRow> {
    [
        ("Brand", &product.brand),
        ("Type", &product.kind),
        ("Suitable For", &product.suitable_for),
        ("Form", &product.form),
        ("Size", &product.size),
    ]
    .into_iter()
    .map(|(label, value)| SpecRow {
        label,
        value: value.clone(),
    })
    .collect()
}

/// Fixed prefix plus the shortest decimal form of the price (`₹499`, `₹349.5`).
pub fn format_price(prefix: &str, price: f64) -> String {
    format!("{prefix}{price}")
}

/// Text of the alert shown by the "Enquire Now" button.
pub fn enquiry_message(product_name: &str) -> String {
    format!("Enquiry about {product_name}")
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn summarize(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}

/// Display label for a category token: `organic-pesticides` → `Organic Pesticides`.
pub fn category_label(token: &str) -> String {
    token
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn neem() -> Product {
        serde_json::from_value(json!({
            "id": 3,
            "name": "Neem Oil",
            "description": "Cold pressed neem oil for organic pest control in vegetables, fruits and ornamental plants of all kinds",
            "fullDescription": "Pure cold pressed neem oil.",
            "image": "img/neem.jpg",
            "thumbnails": ["a", "b"],
            "price": 349.5,
            "size": "500 ml",
            "category": "organic-pesticides",
            "brand": "GreenLeaf",
            "type": "Organic",
            "suitableFor": "All crops",
            "form": "Liquid",
            "rating": 4.5,
            "reviews": 128,
            "benefits": ["Repels pests", "Safe for bees"],
            "usage": { "rate": "5 ml per litre", "method": "Foliar spray" }
        }))
        .unwrap()
    }

    #[test]
    fn prices_use_shortest_form() {
        assert_eq!(format_price("₹", 499.0), "₹499");
        assert_eq!(format_price("₹", 349.5), "₹349.5");
        assert_eq!(format_price("", 12.25), "12.25");
    }

    #[test]
    fn summaries_cut_on_char_boundaries() {
        assert_eq!(summarize("short", 10), "short");
        assert_eq!(summarize("exactly10!", 10), "exactly10!");
        assert_eq!(summarize("hello world again", 6), "hello…");
        assert_eq!(summarize("नीम का तेल", 3), "नीम…");
    }

    #[test]
    fn card_carries_formatted_fields() {
        let config = CatalogConfig {
            summary_chars: 20,
            ..CatalogConfig::default()
        };
        let card = ProductCard::new(&neem(), &config);

        assert_eq!(card.id, ProductId::new(3));
        assert_eq!(card.name, "Neem Oil");
        assert_eq!(card.summary, "Cold pressed neem oi…");
        assert_eq!(card.price_label, "₹349.5");
        assert_eq!(card.size, "500 ml");
        assert_eq!(card.image, "img/neem.jpg");
    }

    #[test]
    fn detail_has_fixed_spec_schema_and_gallery() {
        let detail = ProductDetail::new(&neem(), &CatalogConfig::default());

        let labels: Vec<&str> = detail.specs.iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["Brand", "Type", "Suitable For", "Form", "Size"]);
        assert_eq!(detail.specs[1].value, "Organic");
        assert_eq!(detail.specs[4].value, "500 ml");

        assert_eq!(detail.gallery.images().len(), 3);
        assert!(detail.gallery.is_active(0));
        assert_eq!(detail.rating_badge, "4.5 ★ (128)");
        assert_eq!(detail.benefits, vec!["Repels pests", "Safe for bees"]);
        assert_eq!(detail.usage_rate, "5 ml per litre");
        assert_eq!(detail.usage_method, "Foliar spray");
    }

    #[test]
    fn markup_in_data_stays_plain_text() {
        let mut product = neem();
        product.name = "<script>alert(1)</script>".to_string();
        let card = ProductCard::new(&product, &CatalogConfig::default());

        assert_eq!(card.name, "<script>alert(1)</script>");
    }

    #[test]
    fn enquiry_names_the_product() {
        assert_eq!(enquiry_message("Neem Oil"), "Enquiry about Neem Oil");
        assert_eq!(enquiry_message(""), "Enquiry about ");
    }

    #[test]
    fn category_labels_are_title_cased() {
        assert_eq!(category_label("organic-pesticides"), "Organic Pesticides");
        assert_eq!(category_label("seeds"), "Seeds");
        assert_eq!(category_label("bio_fertilizers"), "Bio Fertilizers");
        assert_eq!(category_label(""), "");
    }
}
