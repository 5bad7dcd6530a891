use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::executor::block_on;

use super::*;
use crate::net::types::Price;
use crate::util::storage::{MemoryStorage, StorageError};

// =============================================================
// Helpers
// =============================================================

fn product(id: ProductId) -> Product {
    Product {
        id,
        title: format!("Item {id}"),
        description: String::new(),
        price: Price::Text("1 000 р".to_owned()),
        image_url: None,
        image_placeholder: Some("item".to_owned()),
    }
}

fn stored(storage: &MemoryStorage) -> Option<String> {
    storage.get_item(STORAGE_KEY).unwrap()
}

/// Memory backend that counts writes.
#[derive(Clone, Debug, Default)]
struct CountingStorage {
    inner: MemoryStorage,
    writes: Arc<AtomicUsize>,
}

impl StorageArea for CountingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

/// Backend that rejects every write, like an exhausted quota.
#[derive(Clone, Copy, Debug, Default)]
struct ReadOnlyStorage;

impl StorageArea for ReadOnlyStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("QuotaExceededError".to_owned()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("QuotaExceededError".to_owned()))
    }
}

// =============================================================
// Membership
// =============================================================

#[test]
fn add_then_is_favourite() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.add_favourite(4);
    assert!(favs.is_favourite(4));
    assert!(!favs.is_favourite(5));
}

#[test]
fn remove_then_not_favourite() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.add_favourite(4);
    favs.remove_favourite(4);
    assert!(!favs.is_favourite(4));
    favs.remove_favourite(4);
    assert!(!favs.is_favourite(4));
}

#[test]
fn toggle_parity_matches_odd_count() {
    for initially in [false, true] {
        for toggles in 0..7 {
            let mut favs = FavouritesState::restore(MemoryStorage::new());
            if initially {
                favs.add_favourite(3);
            }
            for _ in 0..toggles {
                favs.toggle_favourite(3);
            }
            assert_eq!(favs.is_favourite(3), initially ^ (toggles % 2 == 1), "initial={initially} toggles={toggles}");
        }
    }
}

#[test]
fn toggle_only_affects_its_own_id() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.add_favourite(1);
    favs.toggle_favourite(2);
    favs.toggle_favourite(1);
    assert_eq!(favs.favourite_ids(), vec![2]);
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn mutations_persist_full_sorted_set() {
    let storage = MemoryStorage::new();
    let mut favs = FavouritesState::restore(storage.clone());
    favs.add_favourite(7);
    favs.add_favourite(1);
    favs.add_favourite(3);
    assert_eq!(stored(&storage).as_deref(), Some("[1,3,7]"));
    favs.remove_favourite(3);
    assert_eq!(stored(&storage).as_deref(), Some("[1,7]"));
}

#[test]
fn redundant_add_and_remove_do_not_write() {
    let storage = CountingStorage::default();
    let mut favs = FavouritesState::restore(storage.clone());
    favs.add_favourite(1);
    favs.add_favourite(1);
    favs.remove_favourite(2);
    assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    favs.toggle_favourite(1);
    assert_eq!(storage.writes.load(Ordering::SeqCst), 2);
}

#[test]
fn restore_round_trips_through_shared_storage() {
    let storage = MemoryStorage::new();
    {
        let mut favs = FavouritesState::restore(storage.clone());
        for id in [2, 5, 9] {
            favs.add_favourite(id);
        }
    }

    let restored = FavouritesState::restore(storage);
    for id in -2..12 {
        assert_eq!(restored.is_favourite(id), [2, 5, 9].contains(&id), "id {id}");
    }
}

#[test]
fn restore_collapses_duplicate_ids() {
    let storage = MemoryStorage::new();
    storage.set_item(STORAGE_KEY, "[4,4,1]").unwrap();
    let favs = FavouritesState::restore(storage);
    assert_eq!(favs.favourite_ids(), vec![1, 4]);
    assert_eq!(favs.favourite_count(), 2);
}

#[test]
fn restore_from_corrupt_record_starts_empty() {
    let storage = MemoryStorage::new();
    storage.set_item(STORAGE_KEY, "{{definitely not json").unwrap();
    let mut favs = FavouritesState::restore(storage.clone());
    assert_eq!(favs.favourite_count(), 0);

    favs.add_favourite(8);
    assert_eq!(stored(&storage).as_deref(), Some("[8]"));
}

#[test]
fn clear_removes_record_entirely() {
    let storage = MemoryStorage::new();
    let mut favs = FavouritesState::restore(storage.clone());
    favs.replace_catalog(vec![product(1), product(2)]);
    favs.add_favourite(1);
    favs.add_favourite(2);

    favs.clear_favourites();
    assert!(favs.favourite_products().is_empty());
    assert_eq!(favs.favourite_count(), 0);
    assert_eq!(stored(&storage), None);
}

#[test]
fn write_failures_leave_memory_authoritative() {
    let mut favs = FavouritesState::restore(ReadOnlyStorage);
    favs.add_favourite(1);
    favs.toggle_favourite(2);
    assert_eq!(favs.favourite_ids(), vec![1, 2]);
    favs.clear_favourites();
    assert_eq!(favs.favourite_count(), 0);
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn browser_registry_starts_empty_without_storage() {
    let mut favs = FavouritesState::browser();
    favs.reload_from_storage();
    assert_eq!(favs.favourite_count(), 0);
    favs.add_favourite(1);
    assert!(favs.is_favourite(1));
}

#[test]
fn unloaded_registry_ignores_storage_until_reload() {
    let storage = MemoryStorage::new();
    storage.set_item(STORAGE_KEY, "[4,2]").unwrap();

    let mut favs = FavouritesState::unloaded(storage.clone());
    assert_eq!(favs.favourite_count(), 0);
    assert!(!favs.is_favourite(2));

    favs.reload_from_storage();
    assert_eq!(favs.favourite_ids(), vec![2, 4]);
}

#[test]
fn reload_replaces_ids_and_keeps_catalog() {
    let storage = MemoryStorage::new();
    let mut favs = FavouritesState::unloaded(storage.clone());
    favs.replace_catalog(vec![product(1), product(2)]);
    favs.add_favourite(1);

    storage.set_item(STORAGE_KEY, "[2]").unwrap();
    favs.reload_from_storage();
    assert_eq!(favs.favourite_ids(), vec![2]);
    assert_eq!(favs.favourite_products(), vec![product(2)]);
}

#[test]
fn reload_from_corrupt_record_clears_ids() {
    let storage = MemoryStorage::new();
    let mut favs = FavouritesState::unloaded(storage.clone());
    favs.add_favourite(5);
    storage.set_item(STORAGE_KEY, "{broken").unwrap();
    favs.reload_from_storage();
    assert_eq!(favs.favourite_count(), 0);
}

// =============================================================
// Derived favourite products
// =============================================================

#[test]
fn orphan_only_favourites_have_no_products() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.replace_catalog(vec![product(1)]);
    favs.add_favourite(42);
    assert_eq!(favs.favourite_count(), 1);
    assert!(favs.has_no_favourite_products());

    favs.add_favourite(1);
    assert!(!favs.has_no_favourite_products());
}

#[test]
fn no_products_before_catalog_snapshot_loads() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.add_favourite(1);
    assert!(favs.has_no_favourite_products());
}

#[test]
fn favourite_products_filters_catalog_in_catalog_order() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.replace_catalog(vec![product(3), product(1), product(2)]);
    favs.add_favourite(1);
    favs.add_favourite(3);
    let ids: Vec<ProductId> = favs.favourite_products().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn favourite_products_excludes_orphans_but_keeps_them_in_set() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.add_favourite(1);
    favs.add_favourite(42);
    favs.replace_catalog(vec![product(1), product(2)]);

    let products = favs.favourite_products();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
    assert!(favs.is_favourite(42));
}

#[test]
fn favourite_products_reflects_latest_catalog() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.add_favourite(2);
    assert!(favs.favourite_products().is_empty());

    favs.replace_catalog(vec![product(2)]);
    assert_eq!(favs.favourite_products().len(), 1);

    favs.replace_catalog(Vec::new());
    assert!(favs.favourite_products().is_empty());
    assert!(favs.is_favourite(2));
}

#[test]
fn fetch_favourite_products_loads_fixture_catalog() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.add_favourite(2);
    favs.add_favourite(999);
    block_on(favs.fetch_favourite_products(&CatalogSource::Fixture));
    let products = favs.favourite_products();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 2);
}

#[test]
fn failed_catalog_fetch_keeps_previous_snapshot() {
    let mut favs = FavouritesState::restore(MemoryStorage::new());
    favs.replace_catalog(vec![product(1)]);
    favs.add_favourite(1);
    favs.apply_catalog_result(Err(CatalogError::Status(500)));
    assert_eq!(favs.favourite_products().len(), 1);
}
