//! Dependency injection module using Shaku.
//!
//! This module defines Shaku modules for the supported cache backends:
//! - `RedisCachedModule`: MySQL store with a Redis cache (or no cache at all)
//! - `LocalCachedModule`: MySQL store with an in-process cache
//! - `InMemoryModule`: In-process store and cache, for tests and local demos

use catalog_config::{CacheBackend, CacheConfig};
use catalog_core::{module, CatalogResult, HasComponent};
use catalog_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, InMemoryProductRepository,
    MySqlProductRepository, ProductRepository,
};
use catalog_service::{
    CacheInterface, InMemoryCacheService, ProductService, ProductServiceImpl, RedisCacheService,
    RedisCacheServiceParameters,
};
use sqlx::MySqlPool;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// Shaku Module Definitions
// ============================================================================

// MySQL-backed module with a shared Redis cache.
// With no Redis pool the cache component is a no-op, which is how the
// `none` backend is wired.
module! {
    pub RedisCachedModule {
        components = [
            DatabasePool,
            MySqlProductRepository,
            RedisCacheService,
            ProductServiceImpl,
        ],
        providers = [],
    }
}

// MySQL-backed module with a process-local cache.
module! {
    pub LocalCachedModule {
        components = [
            DatabasePool,
            MySqlProductRepository,
            InMemoryCacheService,
            ProductServiceImpl,
        ],
        providers = [],
    }
}

// Fully in-process module. Nothing survives a restart.
module! {
    pub InMemoryModule {
        components = [
            InMemoryProductRepository,
            InMemoryCacheService,
            ProductServiceImpl,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builders
// ============================================================================

/// The module selected for a running server.
pub enum AppModule {
    Redis(Arc<RedisCachedModule>),
    Local(Arc<LocalCachedModule>),
}

/// Builds the application module for the configured cache backend.
///
/// For the `redis` backend a Redis pool is created here; its connections are
/// opened lazily on first use.
pub fn build_app_module(db_pool: MySqlPool, cache_config: &CacheConfig) -> CatalogResult<AppModule> {
    info!("Building application module (cache backend: {})", cache_config.backend);

    let module = match cache_config.backend {
        CacheBackend::Redis => {
            let redis_pool = RedisCacheService::create_pool(
                &cache_config.redis_url,
                cache_config.pool_size as usize,
            )?;
            AppModule::Redis(build_redis_cached_module(db_pool, Some(redis_pool)))
        }
        CacheBackend::None => AppModule::Redis(build_redis_cached_module(db_pool, None)),
        CacheBackend::Memory => AppModule::Local(build_local_cached_module(db_pool)),
    };

    Ok(module)
}

/// Builds a MySQL module with a Redis cache, or with caching disabled when
/// `redis_pool` is `None`.
pub fn build_redis_cached_module(
    db_pool: MySqlPool,
    redis_pool: Option<Arc<deadpool_redis::Pool>>,
) -> Arc<RedisCachedModule> {
    let module = RedisCachedModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool: db_pool })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: redis_pool,
        })
        .build();

    Arc::new(module)
}

/// Builds a MySQL module with an in-process cache.
pub fn build_local_cached_module(db_pool: MySqlPool) -> Arc<LocalCachedModule> {
    let module = LocalCachedModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool: db_pool })
        .build();

    Arc::new(module)
}

/// Builds a fully in-process module.
#[must_use]
pub fn build_in_memory_module() -> Arc<InMemoryModule> {
    Arc::new(InMemoryModule::builder().build())
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Trait for resolving the product service from any module.
pub trait ServiceResolver {
    /// Resolves the product service from the module.
    fn product_service(&self) -> Arc<dyn ProductService>;
}

impl ServiceResolver for RedisCachedModule {
    fn product_service(&self) -> Arc<dyn ProductService> {
        self.resolve()
    }
}

impl ServiceResolver for LocalCachedModule {
    fn product_service(&self) -> Arc<dyn ProductService> {
        self.resolve()
    }
}

impl ServiceResolver for InMemoryModule {
    fn product_service(&self) -> Arc<dyn ProductService> {
        self.resolve()
    }
}

impl ServiceResolver for AppModule {
    fn product_service(&self) -> Arc<dyn ProductService> {
        match self {
            Self::Redis(module) => module.product_service(),
            Self::Local(module) => module.product_service(),
        }
    }
}

/// Trait for resolving the database pool from modules that have it.
pub trait DatabaseResolver {
    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for RedisCachedModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

impl DatabaseResolver for LocalCachedModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

impl DatabaseResolver for AppModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        match self {
            Self::Redis(module) => module.database_pool(),
            Self::Local(module) => module.database_pool(),
        }
    }
}

/// Trait for resolving store and cache components.
pub trait StorageResolver {
    /// Resolves the product repository from the module.
    fn product_repository(&self) -> Arc<dyn ProductRepository>;

    /// Resolves the cache from the module.
    fn cache(&self) -> Arc<dyn CacheInterface>;
}

impl StorageResolver for RedisCachedModule {
    fn product_repository(&self) -> Arc<dyn ProductRepository> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}

impl StorageResolver for LocalCachedModule {
    fn product_repository(&self) -> Arc<dyn ProductRepository> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}

impl StorageResolver for InMemoryModule {
    fn product_repository(&self) -> Arc<dyn ProductRepository> {
        self.resolve()
    }

    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}
