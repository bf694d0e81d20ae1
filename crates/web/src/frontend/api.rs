//! Browser bindings: the catalog fetch, page settings, and the enquiry alert.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, window};

use storefront_products::{Catalog, CatalogDocument};

use crate::config::META_PREFIX;
use crate::error::LoadError;
use crate::view_model::enquiry_message;

/// Fetch and parse the catalog document. Called once per page load.
pub async fn load_catalog(url: &str) -> Result<Catalog, LoadError> {
    let window = window().ok_or(LoadError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| LoadError::Network(describe(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| LoadError::Network(describe(&e)))?;

    if !response.ok() {
        return Err(LoadError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let body = response.json().map_err(|e| LoadError::Decode(describe(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Decode(describe(&e)))?;

    let document: CatalogDocument = serde_wasm_bindgen::from_value(body)
        .map_err(|e| LoadError::Decode(e.to_string()))?;

    Ok(Catalog::from_document(document)?)
}

/// Content of `<meta name="storefront:<key>">`, if the page has one.
pub fn meta_content(key: &str) -> Option<String> {
    let document = window()?.document()?;
    let selector = format!("meta[name=\"{META_PREFIX}{key}\"]");
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

/// Show the enquiry prompt for a product.
pub fn enquire(product_name: &str) {
    tracing::info!(product = product_name, "enquiry requested");
    if let Some(w) = window() {
        let _ = w.alert_with_message(&enquiry_message(product_name));
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
