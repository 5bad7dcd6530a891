//! Product catalog endpoints.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use client::net::types::{Product, ProductId};

use crate::state::AppState;

/// `GET /api/products`
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// `GET /api/products/{id}`
pub async fn get_product(State(state): State<AppState>, Path(id): Path<ProductId>) -> Result<Json<Product>, StatusCode> {
    match state.catalog.find(id) {
        Some(product) => Ok(Json(product.clone())),
        None => {
            tracing::debug!(%id, "product not found");
            Err(StatusCode::NOT_FOUND)
        }
    }
}
