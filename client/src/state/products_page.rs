//! Page-local product list for the catalog listing route.
//!
//! DESIGN
//! ======
//! Created by `ProductsListPage` through `use_local_store` and torn down
//! with it. Fetches replace the list wholesale; a failed fetch records the
//! error and leaves the last good list in place.

#[cfg(test)]
#[path = "products_page_test.rs"]
mod products_page_test;

use super::catalog::{CatalogSnapshot, CatalogSource};
use super::local::LocalStore;
use crate::net::api::CatalogError;
use crate::net::types::{Product, ProductId};

/// Listing-page store: the current product snapshot and its fetch status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsPageState {
    catalog: CatalogSnapshot,
}

impl ProductsPageState {
    /// Current snapshot; empty until the first fetch resolves.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn loading(&self) -> bool {
        self.catalog.loading()
    }

    pub fn error(&self) -> Option<&CatalogError> {
        self.catalog.error()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.catalog.find(id)
    }

    pub fn begin_fetch(&mut self) {
        self.catalog.begin_fetch();
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<Product>, CatalogError>) {
        self.catalog.finish_fetch(result);
    }

    /// Fetch from `source` and replace the held list.
    pub async fn fetch_products(&mut self, source: &CatalogSource) {
        self.begin_fetch();
        let result = source.fetch_products().await;
        self.finish_fetch(result);
    }
}

impl LocalStore for ProductsPageState {
    fn destroy(&mut self) {
        self.catalog.clear();
    }
}
