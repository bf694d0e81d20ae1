//! Image gallery state for the detail view: one main image and a thumbnail
//! strip with exactly one active thumbnail.

use storefront_products::Product;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    active: usize,
}

impl Gallery {
    /// Primary image first (initially active), then the thumbnails in order.
    pub fn new(primary: impl Into<String>, thumbnails: &[String]) -> Self {
        let mut images = Vec::with_capacity(thumbnails.len() + 1);
        images.push(primary.into());
        images.extend(thumbnails.iter().cloned());
        Self { images, active: 0 }
    }

    pub fn for_product(product: &Product) -> Self {
        Self::new(product.image.as_str(), &product.thumbnails)
    }

    /// Every image in strip order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Source currently shown as the main image.
    pub fn main_image(&self) -> &str {
        &self.images[self.active]
    }

    /// Make `index` the only active thumbnail and show it as the main image.
    ///
    /// Out-of-range indices leave the gallery untouched and return `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.active = index;
        true
    }
}
