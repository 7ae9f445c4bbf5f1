//! Caching infrastructure for the service layer.
//!
//! A key-value cache abstraction with Redis and in-process implementations.
//! Values are stored as JSON so the interface stays object safe.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::{InMemoryCacheService, InMemoryCacheServiceParameters};
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters};
