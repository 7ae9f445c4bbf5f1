//! Cache key generators for consistent key naming.

use catalog_core::ProductId;

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "catalog:cache";

/// Generate a cache key for a single product.
#[must_use]
pub fn product_by_id(id: ProductId) -> String {
    format!("{}:product:id:{}", CACHE_PREFIX, id)
}

/// Key holding the full product list.
#[must_use]
pub fn all_products() -> String {
    format!("{}:product:all", CACHE_PREFIX)
}
