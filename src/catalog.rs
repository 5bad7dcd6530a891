//! Product catalog served by the HTTP API.
//!
//! DESIGN
//! ======
//! The catalog is loaded once at start-up and is read-only afterwards. A
//! JSON file in the products wire shape replaces the built-in fixture when
//! configured; entries go through the same normalization the client applies.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use client::net::types::{Product, ProductId, ProductServer};
use client::state::catalog::mock_products;

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Built-in furniture fixture.
    pub fn fixture() -> Self {
        Self { products: mock_products() }
    }

    /// Load from `path`, or the fixture when no path is configured.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogLoadError`] when the file cannot be read, is not a
    /// JSON product array, or repeats a product id.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogLoadError> {
        let Some(path) = path else {
            return Ok(Self::fixture());
        };
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read { path: path.to_owned(), source })?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self, CatalogLoadError> {
        let items: Vec<ProductServer> =
            serde_json::from_str(raw).map_err(|source| CatalogLoadError::Parse { path: path.to_owned(), source })?;
        Self::from_products(items.into_iter().map(Product::normalize).collect())
    }

    /// # Errors
    ///
    /// Returns [`CatalogLoadError::DuplicateId`] for the first repeated id.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogLoadError> {
        let mut seen = HashSet::new();
        if let Some(dup) = products.iter().find(|p| !seen.insert(p.id)) {
            return Err(CatalogLoadError::DuplicateId(dup.id));
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
