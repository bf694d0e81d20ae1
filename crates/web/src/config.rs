//! Page configuration.
//!
//! Every setting has a default. The host page may override any of them with a
//! `<meta name="storefront:<key>" content="...">` tag.

use crate::error::ConfigError;

/// Prefix of the meta tag names the page reads settings from.
pub const META_PREFIX: &str = "storefront:";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Where the catalog document is fetched from (relative to the page).
    pub catalog_url: String,
    /// Literal printed before every price.
    pub currency_prefix: String,
    /// Card descriptions longer than this many characters are cut short.
    pub summary_chars: usize,
    /// Fallback tracing filter.
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_url: "data/products.json".to_string(),
            currency_prefix: "₹".to_string(),
            summary_chars: 100,
            log_level: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Build the config from a key lookup (the meta tags in the browser).
    ///
    /// Invalid values are skipped and reported back so they can be logged once
    /// tracing is up; the config itself is always usable.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut rejected = Vec::new();

        if let Some(url) = lookup("catalog-url") {
            let url = url.trim();
            if url.is_empty() {
                rejected.push(invalid("catalog-url", url, "must not be empty"));
            } else {
                config.catalog_url = url.to_string();
            }
        }

        // Empty is a legitimate prefix (bare numbers).
        if let Some(prefix) = lookup("currency-prefix") {
            config.currency_prefix = prefix;
        }

        if let Some(raw) = lookup("summary-chars") {
            match raw.trim().parse::<usize>() {
                Ok(chars) if chars > 0 => config.summary_chars = chars,
                Ok(_) => rejected.push(invalid("summary-chars", &raw, "must be at least 1")),
                Err(_) => rejected.push(invalid("summary-chars", &raw, "not a number")),
            }
        }

        if let Some(raw) = lookup("log-level") {
            let level = raw.trim().to_lowercase();
            if LOG_LEVELS.contains(&level.as_str()) {
                config.log_level = level;
            } else {
                rejected.push(invalid("log-level", &raw, "unknown level"));
            }
        }

        (config, rejected)
    }
}

fn invalid(key: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason,
    }
}
