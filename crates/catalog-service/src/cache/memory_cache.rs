//! In-process cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use catalog_core::CatalogResult;
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use tracing::debug;

/// Cache backed by a process-local map.
///
/// Entries are never expired; they are replaced by `put_raw` or removed by
/// `evict`.
#[derive(Component, Debug, Default)]
#[shaku(interface = CacheInterface)]
pub struct InMemoryCacheService {
    #[shaku(default)]
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryCacheService {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `key` currently holds a value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

#[async_trait]
impl CacheInterface for InMemoryCacheService {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        let value = self.entries.read().get(key).cloned();

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn put_raw(&self, key: &str, value: &str) -> CatalogResult<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        debug!("Cached key '{}'", key);
        Ok(())
    }

    async fn evict(&self, key: &str) -> CatalogResult<bool> {
        let existed = self.entries.write().remove(key).is_some();
        debug!("Evicted key '{}': {}", key, existed);
        Ok(existed)
    }
}
