//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult};
use deadpool_redis::{redis::AsyncCommands, Config, Pool, Runtime};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Redis-based cache service.
///
/// Without a pool the service is a no-op: reads miss and writes are dropped.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache service (for when caching is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Build a connection pool for the given Redis URL.
    pub fn create_pool(url: &str, max_size: usize) -> CatalogResult<Arc<Pool>> {
        info!("Creating Redis connection pool (max size {})", max_size);

        let pool = Config::from_url(url)
            .builder()
            .map_err(|e| CatalogError::Cache(format!("Invalid Redis configuration: {}", e)))?
            .max_size(max_size)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| CatalogError::Cache(format!("Failed to create Redis pool: {}", e)))?;

        Ok(Arc::new(pool))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> CatalogResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                CatalogError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(CatalogError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            CatalogError::Cache(format!("Failed to get key '{}': {}", key, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn put_raw(&self, key: &str, value: &str) -> CatalogResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            CatalogError::Cache(format!("Failed to set key '{}': {}", key, e))
        })?;

        debug!("Cached key '{}'", key);
        Ok(())
    }

    async fn evict(&self, key: &str) -> CatalogResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn.del(key).await.map_err(|e| {
            CatalogError::Cache(format!("Failed to delete key '{}': {}", key, e))
        })?;

        debug!("Evicted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_cache() {
        let cache = RedisCacheService::disabled();
        assert!(!cache.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_cache_is_a_noop() {
        let cache = RedisCacheService::disabled();

        cache.put_raw("k", "v").await.unwrap();
        assert_eq!(cache.get_raw("k").await.unwrap(), None);
        assert!(!cache.evict("k").await.unwrap());
    }

    #[test]
    fn test_create_pool_rejects_bad_url() {
        assert!(RedisCacheService::create_pool("not a url", 4).is_err());
    }

    #[tokio::test]
    async fn test_unreachable_redis_surfaces_cache_error() {
        // Nothing listens on port 1; the pool is built lazily so creation succeeds.
        let pool = RedisCacheService::create_pool("redis://127.0.0.1:1", 1).unwrap();
        let cache = RedisCacheService::new(pool);

        match cache.get_raw("k").await {
            Err(CatalogError::Cache(_)) => {}
            other => panic!("Expected cache error, got {:?}", other),
        }
    }
}
