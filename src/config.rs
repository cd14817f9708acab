//! Backend endpoint configuration.
//!
//! The back office talks to a gateway that fronts several services; each
//! collection lives under its own service path prefix. Defaults match the
//! development gateway, and `BACKOFFICE_API_URL` overrides the base URL.

use std::env;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::catalog::Collection;
use crate::error::{BackofficeError, Result};

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV: &str = "BACKOFFICE_API_URL";

/// Backend host and per-service path prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the API gateway
    pub base_url: String,
    /// Path prefix of the user service
    pub user_path: String,
    /// Path prefix of the product service
    pub product_path: String,
    /// Path prefix of the category endpoints (product service)
    pub category_path: String,
    /// Path prefix of the ordering service
    pub order_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            user_path: "/user-service/user".to_string(),
            product_path: "/product-service/product".to_string(),
            category_path: "/product-service/category".to_string(),
            order_path: "/ordering-service/orders".to_string(),
        }
    }
}

impl Config {
    /// Create a config pointing at the given base URL, with default paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Path prefix for a collection's service.
    pub fn path_for(&self, collection: Collection) -> &str {
        match collection {
            Collection::Product => &self.product_path,
            Collection::Category => &self.category_path,
            Collection::Order => &self.order_path,
            Collection::Member => &self.user_path,
        }
    }

    /// Absolute URL of a collection's list endpoint.
    ///
    /// Any path prefix on `base_url` (a gateway mount point) is kept in
    /// front of the service path.
    pub fn list_url(&self, collection: Collection) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| BackofficeError::Config(format!("invalid base URL '{}': {}", self.base_url, e)))?;
        let path = format!(
            "{}{}/list",
            url.path().trim_end_matches('/'),
            self.path_for(collection)
        );
        url.set_path(&path);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.path_for(Collection::Product), "/product-service/product");
        assert_eq!(config.path_for(Collection::Category), "/product-service/category");
        assert_eq!(config.path_for(Collection::Order), "/ordering-service/orders");
        assert_eq!(config.path_for(Collection::Member), "/user-service/user");
    }

    #[test]
    fn test_list_url() {
        let config = Config::new("http://localhost:8000");
        let url = config.list_url(Collection::Product).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/product-service/product/list");
    }

    #[test]
    fn test_list_url_keeps_gateway_prefix() {
        let config = Config::new("http://api.example.com/gw");
        let url = config.list_url(Collection::Category).unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.example.com/gw/product-service/category/list"
        );
    }

    #[test]
    fn test_list_url_invalid_base() {
        let config = Config::new("not a url");
        assert!(config.list_url(Collection::Product).is_err());
    }
}
