//! Product service trait definition.

use crate::dto::ProductDto;
use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, ProductId};

/// Product service trait.
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Creates a product. Any id on the input is ignored.
    async fn create_product(&self, dto: ProductDto) -> CatalogResult<ProductDto>;

    /// Gets a product by ID.
    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductDto>;

    /// Lists all products, ordered by id.
    async fn list_products(&self) -> CatalogResult<Vec<ProductDto>>;

    /// Replaces name and price of the product identified by `dto.product_id`.
    async fn update_product(&self, dto: ProductDto) -> CatalogResult<ProductDto>;

    /// Deletes a product. Deleting an unknown id is not an error.
    async fn delete_product(&self, id: ProductId) -> CatalogResult<()>;
}
