//! Build-time client configuration.
//!
//! The WASM bundle cannot read process environment at runtime, so the
//! catalog source is chosen when the crate is compiled:
//!
//! - `HFURNITURE_PRODUCTS_ENDPOINT`: fetch products from this URL
//!   (e.g. `/api/products` or `http://localhost:8000/products`).
//! - unset: serve the built-in furniture fixture.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::api::DEFAULT_PRODUCTS_ENDPOINT;

/// Client settings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Products endpoint used when `use_fixture` is false.
    pub products_endpoint: String,
    /// Serve the static fixture instead of fetching.
    pub use_fixture: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { products_endpoint: DEFAULT_PRODUCTS_ENDPOINT.to_owned(), use_fixture: true }
    }
}

impl ClientConfig {
    /// Read the compile-time `HFURNITURE_PRODUCTS_ENDPOINT` override.
    pub fn from_build_env() -> Self {
        Self::from_endpoint(option_env!("HFURNITURE_PRODUCTS_ENDPOINT"))
    }

    fn from_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(endpoint) => Self { products_endpoint: endpoint.to_owned(), use_fixture: false },
            None => Self::default(),
        }
    }
}
