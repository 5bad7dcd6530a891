//! Favourites registry: the user's favourited product ids, persisted to
//! `localStorage`, and the catalog snapshot they are resolved against.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds exactly one empty `FavouritesState` and provides it as
//! `RwSignal<FavouritesState>` context; stored ids are loaded after mount so
//! the hydrating DOM matches the server render. Cards, the header
//! badge, the detail page and the favourites page all read and mutate that
//! one signal, so every view re-renders from the same id set.
//!
//! DESIGN
//! ======
//! The id set and the catalog snapshot change independently and are only
//! combined when `favourite_products` is read. Ids with no matching product
//! (orphans) are kept in the set and simply filtered out of the view.
//!
//! ERROR HANDLING
//! ==============
//! Persistence goes through `LocalStorageModel`, which contains and logs all
//! storage failures. Mutators therefore cannot fail; the in-memory set stays
//! authoritative and the next successful write re-serializes the whole set.

#[cfg(test)]
#[path = "favourites_test.rs"]
mod favourites_test;

use std::collections::BTreeSet;

use super::catalog::CatalogSource;
use crate::net::api::CatalogError;
use crate::net::types::{Product, ProductId};
use crate::util::storage::{BrowserStorage, LocalStorageModel, StorageArea};

/// Storage key holding the JSON array of favourited ids.
pub const STORAGE_KEY: &str = "favouriteProductIds";

/// Process-wide favourites registry.
#[derive(Debug)]
pub struct FavouritesState<S = BrowserStorage> {
    ids: BTreeSet<ProductId>,
    products: Vec<Product>,
    storage: LocalStorageModel<Vec<ProductId>, S>,
}

impl FavouritesState<BrowserStorage> {
    /// Empty registry backed by the browser's `localStorage`; nothing is read
    /// until [`FavouritesState::reload_from_storage`].
    pub fn browser() -> Self {
        Self::unloaded(BrowserStorage)
    }
}

impl<S: StorageArea> FavouritesState<S> {
    /// Registry over `area` with an empty id set. Storage is not read.
    pub fn unloaded(area: S) -> Self {
        Self { ids: BTreeSet::new(), products: Vec::new(), storage: LocalStorageModel::new(STORAGE_KEY, area) }
    }

    /// Build the registry and load any persisted id set from `area`.
    /// Missing or corrupt records start an empty set.
    pub fn restore(area: S) -> Self {
        let mut state = Self::unloaded(area);
        state.reload_from_storage();
        state
    }

    /// Replace the id set with the persisted one. Missing or corrupt records
    /// yield an empty set. The catalog snapshot is kept.
    pub fn reload_from_storage(&mut self) {
        self.ids = self.storage.get().map(|stored: Vec<ProductId>| stored.into_iter().collect()).unwrap_or_default();
    }

    pub fn is_favourite(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    /// Insert `product_id`; persists only when the set changed.
    pub fn add_favourite(&mut self, product_id: ProductId) {
        if self.ids.insert(product_id) {
            self.save();
        }
    }

    /// Delete `product_id`; persists only when the set changed.
    pub fn remove_favourite(&mut self, product_id: ProductId) {
        if self.ids.remove(&product_id) {
            self.save();
        }
    }

    pub fn toggle_favourite(&mut self, product_id: ProductId) {
        if self.is_favourite(product_id) {
            self.remove_favourite(product_id);
        } else {
            self.add_favourite(product_id);
        }
    }

    /// Empty the set and delete the persisted record outright.
    pub fn clear_favourites(&mut self) {
        self.ids.clear();
        self.storage.remove();
    }

    /// Catalog products whose id is favourited, in catalog order.
    /// Recomputed on every call.
    pub fn favourite_products(&self) -> Vec<Product> {
        self.products.iter().filter(|p| self.ids.contains(&p.id)).cloned().collect()
    }

    /// Favourited ids in ascending order, including orphans.
    pub fn favourite_ids(&self) -> Vec<ProductId> {
        self.ids.iter().copied().collect()
    }

    /// True when no favourited id resolves to a catalog product.
    pub fn has_no_favourite_products(&self) -> bool {
        !self.products.iter().any(|p| self.ids.contains(&p.id))
    }

    pub fn favourite_count(&self) -> usize {
        self.ids.len()
    }

    /// Replace the catalog snapshot the derived view filters against.
    pub fn replace_catalog(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Apply a settled catalog fetch; failures keep the current snapshot.
    pub fn apply_catalog_result(&mut self, result: Result<Vec<Product>, CatalogError>) {
        match result {
            Ok(products) => self.replace_catalog(products),
            Err(e) => leptos::logging::warn!("Failed to fetch favourite products: {e}"),
        }
    }

    /// (Re)load the catalog snapshot from `source`.
    pub async fn fetch_favourite_products(&mut self, source: &CatalogSource) {
        let result = source.fetch_products().await;
        self.apply_catalog_result(result);
    }

    fn save(&self) {
        self.storage.set(&self.favourite_ids());
    }
}
