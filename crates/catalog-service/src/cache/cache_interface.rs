//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use catalog_core::CatalogResult;
use shaku::Interface;

/// Cache interface for storing and retrieving cached data.
///
/// Entries have no expiry; they live until evicted or overwritten.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>>;

    /// Store a raw JSON value, replacing any previous value.
    async fn put_raw(&self, key: &str, value: &str) -> CatalogResult<()>;

    /// Remove a value from the cache.
    ///
    /// Returns `true` if the key existed and was removed.
    async fn evict(&self, key: &str) -> CatalogResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/put methods that work with any serializable type.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> CatalogResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Put a typed value in the cache.
    async fn put<T: serde::Serialize + Send + Sync>(&self, key: &str, value: &T) -> CatalogResult<()> {
        let json = serde_json::to_string(value)?;
        self.put_raw(key, &json).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
