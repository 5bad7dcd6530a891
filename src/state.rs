//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is immutable after start-up, so it is shared behind an `Arc`
//! without a lock.

use std::sync::Arc;

use crate::catalog::ProductCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProductCatalog>,
}

impl AppState {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self { catalog: Arc::new(catalog) }
    }
}
