//! Mirrors the cart to a key-value store.

use retrove_cache::{Cache, CacheError, FileStore, KvStore, MemoryStore};
use retrove_commerce::cart::Cart;
use retrove_commerce::catalog::Product;
use retrove_commerce::Currency;
use tracing::{debug, warn};

use crate::config::CartConfig;

/// Cart persistence over any [`KvStore`].
///
/// Failures never reach the caller: a failed read starts an empty cart and
/// a failed write is logged and dropped.
pub struct CartPersistence {
    cache: Cache<Box<dyn KvStore>>,
    key: String,
}

impl CartPersistence {
    pub fn new(store: Box<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
        }
    }

    /// Persistence that only lives as long as the process.
    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::new(Box::new(MemoryStore::new()), key)
    }

    /// Open persistence as configured: a JSON file when one is set,
    /// memory otherwise.
    pub fn from_config(config: &CartConfig) -> Result<Self, CacheError> {
        match &config.file {
            Some(path) => Ok(Self::new(Box::new(FileStore::open(path)?), config.key.clone())),
            None => Ok(Self::in_memory(config.key.clone())),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored cart. Missing, unreadable or corrupt entries yield an
    /// empty cart, as does a snapshot priced in another currency.
    pub fn load(&self, currency: Currency) -> Cart {
        match self.cache.get::<Vec<Product>>(&self.key) {
            Ok(Some(items)) => {
                if let Some(item) = items.iter().find(|p| p.price.currency != currency) {
                    warn!(
                        key = %self.key,
                        expected = %currency,
                        found = %item.price.currency,
                        "Dropping persisted cart in another currency"
                    );
                    return Cart::new();
                }
                debug!(key = %self.key, items = items.len(), "Loaded persisted cart");
                Cart::from_items(items)
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "Ignoring unreadable persisted cart");
                Cart::new()
            }
        }
    }

    /// Write the cart.
    pub fn save(&mut self, cart: &Cart) {
        if let Err(e) = self.cache.set(&self.key, cart.items()) {
            warn!(key = %self.key, error = %e, "Failed to persist cart");
        }
    }

    /// Borrow the underlying cache.
    pub fn cache(&self) -> &Cache<Box<dyn KvStore>> {
        &self.cache
    }
}

impl std::fmt::Debug for CartPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartPersistence")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
