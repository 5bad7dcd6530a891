//! REST helpers for the products endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `CatalogError::Unavailable`, since the
//! remote catalog is only fetched from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes a typed `CatalogError` so pages can render a
//! fallback message instead of unwinding through hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Product;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ProductServer;

/// Default endpoint served by the storefront's own server crate.
pub const DEFAULT_PRODUCTS_ENDPOINT: &str = "/api/products";

/// Why a catalog fetch produced no products.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The request never completed (DNS, CORS, connection refused, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body was not a JSON array of products.
    #[error("invalid products payload: {0}")]
    Decode(String),
    /// Remote fetching is not possible in this build (SSR / native).
    #[error("remote catalog is not available outside the browser")]
    Unavailable,
}

impl CatalogError {
    /// Short hint rendered under the error message on catalog pages.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Network(_) => "Check that the products server is running and reachable.",
            Self::Status(status) if *status >= 500 => "The products server failed; try again later.",
            Self::Status(_) => "The products endpoint rejected the request.",
            Self::Decode(_) => "The products endpoint returned an unexpected format.",
            Self::Unavailable => "Products are loaded once the page runs in the browser.",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(endpoint: &str, id: super::types::ProductId) -> String {
    format!("{}/{id}", endpoint.trim_end_matches('/'))
}

/// Decode a products array body and normalize every entry.
#[cfg(any(test, feature = "hydrate"))]
fn parse_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    let raw: Vec<ProductServer> = serde_json::from_str(body).map_err(|e| CatalogError::Decode(e.to_string()))?;
    Ok(raw.into_iter().map(Product::normalize).collect())
}

/// Fetch the full product list from `endpoint`.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the request fails, the status is not 2xx,
/// or the body is not a products array.
pub async fn fetch_products(endpoint: &str) -> Result<Vec<Product>, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(CatalogError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| CatalogError::Network(e.to_string()))?;
        let products = parse_products(&body)?;
        leptos::logging::log!("products loaded: {}", products.len());
        Ok(products)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(CatalogError::Unavailable)
    }
}

/// Fetch a single product from `{endpoint}/{id}`.
/// Returns `Ok(None)` when the server answers `404`.
///
/// # Errors
///
/// Returns a [`CatalogError`] for transport failures, other non-2xx statuses,
/// or an undecodable body.
pub async fn fetch_product(endpoint: &str, id: super::types::ProductId) -> Result<Option<Product>, CatalogError> {
    #[cfg(feature = "hydrate")]
    {
        let url = product_endpoint(endpoint, id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(CatalogError::Status(resp.status()));
        }
        let raw: ProductServer = resp.json().await.map_err(|e| CatalogError::Decode(e.to_string()))?;
        Ok(Some(Product::normalize(raw)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, id);
        Err(CatalogError::Unavailable)
    }
}
