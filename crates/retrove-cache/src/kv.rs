//! Key-value store wrapper with automatic serialization.

use crate::store::{FileStore, KvStore, MemoryStore};
use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;

/// Type-safe cache over a [`KvStore`].
///
/// Values are stored as JSON, so anything that implements `Serialize` and
/// `DeserializeOwned` can go in.
#[derive(Debug, Clone)]
pub struct Cache<S = MemoryStore> {
    store: S,
}

impl Cache<MemoryStore> {
    /// Open an empty in-memory cache.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl Cache<FileStore> {
    /// Open a cache persisted to a JSON file.
    ///
    /// ```rust,ignore
    /// let cache = Cache::open_file(".retrove/storage.json")?;
    /// ```
    pub fn open_file(path: impl Into<PathBuf>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(path)?))
    }
}

impl<S: KvStore> Cache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    ///
    /// ```rust,ignore
    /// let cart: Option<Vec<Product>> = cache.get("retroveCart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&mut self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl Default for Cache<MemoryStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Item {
        id: u64,
        name: String,
    }

    #[test]
    fn test_typed_get_set() {
        let mut cache = Cache::in_memory();
        let items = vec![Item { id: 1, name: "Jaket".to_string() }];

        cache.set("cart", &items).unwrap();
        let loaded: Option<Vec<Item>> = cache.get("cart").unwrap();
        assert_eq!(loaded, Some(items));
        assert!(cache.exists("cart").unwrap());

        cache.delete("cart").unwrap();
        let loaded: Option<Vec<Item>> = cache.get("cart").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let mut cache = Cache::in_memory();
        cache.set("cart", "not a list").unwrap();

        let result: Result<Option<Vec<Item>>, _> = cache.get("cart");
        assert!(matches!(result, Err(CacheError::SerializeError(_))));
    }

    #[test]
    fn test_keys() {
        let mut cache = Cache::default();
        cache.set("b", &1).unwrap();
        cache.set("a", &2).unwrap();
        assert_eq!(cache.keys().unwrap(), vec!["a", "b"]);
    }
}
