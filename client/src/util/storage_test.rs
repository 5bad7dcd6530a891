use super::*;

/// Backend whose every operation fails, as with disabled storage or an
/// exhausted quota.
#[derive(Clone, Copy, Debug, Default)]
struct FailingStorage;

impl StorageArea for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Access("SecurityError".to_owned()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("QuotaExceededError".to_owned()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_clones_share_items() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item("k", "v").unwrap();
    assert_eq!(b.get_item("k").unwrap().as_deref(), Some("v"));
    b.remove_item("k").unwrap();
    assert_eq!(a.get_item("k").unwrap(), None);
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove_item("missing").is_ok());
}

// =============================================================
// LocalStorageModel
// =============================================================

#[test]
fn get_returns_none_when_key_absent() {
    let model = LocalStorageModel::<Vec<i64>, _>::new("ids", MemoryStorage::new());
    assert_eq!(model.get(), None);
}

#[test]
fn set_then_get_round_trips_json() {
    let storage = MemoryStorage::new();
    let model = LocalStorageModel::<Vec<i64>, _>::new("ids", storage.clone());
    model.set(&vec![1, 3, 7]);
    assert_eq!(storage.get_item("ids").unwrap().as_deref(), Some("[1,3,7]"));
    assert_eq!(model.get(), Some(vec![1, 3, 7]));
}

#[test]
fn get_returns_none_for_corrupt_payload() {
    let storage = MemoryStorage::new();
    storage.set_item("ids", "not json{").unwrap();
    let model = LocalStorageModel::<Vec<i64>, _>::new("ids", storage);
    assert_eq!(model.get(), None);
}

#[test]
fn get_returns_none_for_wrong_shape() {
    let storage = MemoryStorage::new();
    storage.set_item("ids", r#"{"a": 1}"#).unwrap();
    let model = LocalStorageModel::<Vec<i64>, _>::new("ids", storage);
    assert_eq!(model.get(), None);
}

#[test]
fn get_returns_none_for_empty_string() {
    let storage = MemoryStorage::new();
    storage.set_item("ids", "").unwrap();
    let model = LocalStorageModel::<Vec<i64>, _>::new("ids", storage);
    assert_eq!(model.get(), None);
}

#[test]
fn remove_deletes_key() {
    let storage = MemoryStorage::new();
    let model = LocalStorageModel::<Vec<i64>, _>::new("ids", storage.clone());
    model.set(&vec![2]);
    model.remove();
    assert_eq!(storage.get_item("ids").unwrap(), None);
    model.remove();
}

#[test]
fn failing_backend_is_contained() {
    let model = LocalStorageModel::<Vec<i64>, _>::new("ids", FailingStorage);
    model.set(&vec![1]);
    model.remove();
    assert_eq!(model.get(), None);
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn browser_storage_is_unavailable_natively() {
    let model = LocalStorageModel::<Vec<i64>, _>::browser("ids");
    assert_eq!(model.key(), "ids");
    assert_eq!(model.get(), None);
    assert!(matches!(BrowserStorage.get_item("ids"), Err(StorageError::Unavailable)));
}

#[test]
fn decode_error_names_key() {
    let source = serde_json::from_str::<Vec<i64>>("nope").unwrap_err();
    let err = StorageError::Decode { key: "favouriteProductIds".to_owned(), source };
    assert!(err.to_string().contains("\"favouriteProductIds\""));
}
