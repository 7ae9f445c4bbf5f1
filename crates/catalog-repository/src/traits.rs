//! Repository trait definitions.

use catalog_core::{CatalogResult, Interface, Product, ProductId};
use async_trait::async_trait;

/// Entity store for products.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Persists a product.
    ///
    /// A product without an id is inserted and comes back with the id the
    /// store assigned. A product with an id replaces the stored name and price.
    async fn save(&self, product: &Product) -> CatalogResult<Product>;

    /// Finds a product by ID.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Returns every product, ordered by id.
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Deletes a product by ID. Returns false if nothing was deleted.
    async fn delete_by_id(&self, id: ProductId) -> CatalogResult<bool>;
}
