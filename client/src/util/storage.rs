//! Durable key-value storage bridge (`localStorage`) with JSON encoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules persist small records (the favourites id set) through
//! [`LocalStorageModel`], which binds one fixed key to a [`StorageArea`]
//! backend. The browser backend only exists under `hydrate`; SSR and native
//! tests either see an unavailable store or use [`MemoryStorage`].
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort. Every backend failure is logged and contained
//! here: reads degrade to `None`, writes and removals are dropped. In-memory
//! state stays canonical for the session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure reported by a storage backend or by JSON encoding.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage medium (no window, storage disabled, SSR).
    #[error("storage unavailable")]
    Unavailable,
    /// The medium rejected the operation (quota exceeded, security error).
    #[error("storage access failed: {0}")]
    Access(String),
    /// The value could not be serialized.
    #[error("encode failed: {0}")]
    Encode(#[source] serde_json::Error),
    /// The stored payload is not valid JSON for the expected type.
    #[error("decode failed for key {key:?}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw string key-value medium.
pub trait StorageArea {
    /// Read the raw value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the medium rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the medium cannot be modified.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, shared by every tab of the same origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

impl StorageArea for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Access(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local storage medium. Clones share the same map, so two models
/// built over clones observe each other's writes like two page loads over
/// one `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.items.lock().map_err(|_| StorageError::Access("memory storage poisoned".to_owned()))
    }
}

impl StorageArea for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Typed JSON record bound to one storage key.
#[derive(Debug)]
pub struct LocalStorageModel<T, S = BrowserStorage> {
    key: String,
    area: S,
    _value: PhantomData<fn() -> T>,
}

impl<T, S: Clone> Clone for LocalStorageModel<T, S> {
    fn clone(&self) -> Self {
        Self { key: self.key.clone(), area: self.area.clone(), _value: PhantomData }
    }
}

impl<T: Serialize + DeserializeOwned> LocalStorageModel<T, BrowserStorage> {
    /// Model over the browser's `localStorage`.
    pub fn browser(key: impl Into<String>) -> Self {
        Self::new(key, BrowserStorage)
    }
}

impl<T, S> LocalStorageModel<T, S>
where
    T: Serialize + DeserializeOwned,
    S: StorageArea,
{
    pub fn new(key: impl Into<String>, area: S) -> Self {
        Self { key: key.into(), area, _value: PhantomData }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load and decode the record. Missing, empty, corrupt, or unreadable
    /// records all yield `None`.
    pub fn get(&self) -> Option<T> {
        match self.try_get() {
            Ok(value) => value,
            // Server render has no browser storage; only surface this in debug builds.
            Err(StorageError::Unavailable) => {
                leptos::logging::debug_warn!("localStorage unavailable; key \"{}\" reads as empty", self.key);
                None
            }
            Err(e) => {
                leptos::logging::warn!("Error reading from localStorage key \"{}\": {e}", self.key);
                None
            }
        }
    }

    /// Encode and store the record; failures are logged and dropped.
    pub fn set(&self, value: &T) {
        let result =
            serde_json::to_string(value).map_err(StorageError::Encode).and_then(|raw| self.area.set_item(&self.key, &raw));
        if let Err(e) = result {
            leptos::logging::warn!("Error writing to localStorage key \"{}\": {e}", self.key);
        }
    }

    /// Delete the record; an absent key is not an error.
    pub fn remove(&self) {
        if let Err(e) = self.area.remove_item(&self.key) {
            leptos::logging::warn!("Error removing localStorage key \"{}\": {e}", self.key);
        }
    }

    fn try_get(&self) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.area.get_item(&self.key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode { key: self.key.clone(), source })
    }
}
