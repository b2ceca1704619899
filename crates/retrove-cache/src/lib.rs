//! Typed key-value cache for the Retrove storefront.
//!
//! A small JSON-serializing layer over a pluggable byte store: an in-memory
//! map for tests and one-shot runs, or a single JSON file that plays the
//! role of the browser's local storage.
//!
//! # Example
//!
//! ```rust
//! use retrove_cache::Cache;
//!
//! let mut cache = Cache::in_memory();
//! cache.set("retroveCart", &vec![1u64, 2, 3]).unwrap();
//!
//! let ids: Option<Vec<u64>> = cache.get("retroveCart").unwrap();
//! assert_eq!(ids, Some(vec![1, 2, 3]));
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
