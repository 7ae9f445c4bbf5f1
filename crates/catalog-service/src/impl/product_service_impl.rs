//! Product service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::dto::ProductDto;
use crate::product_service::ProductService;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, Product, ProductId, ValidateExt};
use catalog_repository::ProductRepository;
use serde::{de::DeserializeOwned, Serialize};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Product service backed by an entity store and a read-through cache.
///
/// Cache failures never fail a request: a failed read counts as a miss and a
/// failed write or eviction is logged. Store failures propagate.
#[derive(Component)]
#[shaku(interface = ProductService)]
pub struct ProductServiceImpl {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
}

impl ProductServiceImpl {
    /// Creates a new product service.
    pub fn new(product_repository: Arc<dyn ProductRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            product_repository,
            cache,
        }
    }

    async fn cached<T: DeserializeOwned + Send>(&self, key: &str) -> Option<T> {
        match self.cache.get::<T>(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Cache read failed for '{}', treating as miss: {}", key, e);
                None
            }
        }
    }

    async fn cache_put<T: Serialize + Send + Sync>(&self, key: &str, value: &T) {
        if let Err(e) = self.cache.put(key, value).await {
            warn!("Cache write failed for '{}': {}", key, e);
        }
    }

    async fn cache_evict(&self, key: &str) {
        if let Err(e) = self.cache.evict(key).await {
            warn!("Cache eviction failed for '{}': {}", key, e);
        }
    }

    fn assigned_id(product: &Product) -> CatalogResult<ProductId> {
        product
            .id
            .ok_or_else(|| CatalogError::internal("Entity store returned a product without an id"))
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn create_product(&self, dto: ProductDto) -> CatalogResult<ProductDto> {
        debug!("Creating product: {}", dto.name);

        dto.validate_request()?;

        let saved = self
            .product_repository
            .save(&Product::new(dto.name, dto.price))
            .await?;
        let id = Self::assigned_id(&saved)?;
        let response = ProductDto::from(saved);

        self.cache_put(&cache_keys::product_by_id(id), &response).await;
        self.cache_evict(&cache_keys::all_products()).await;

        info!("Product created: {}", id);
        Ok(response)
    }

    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductDto> {
        debug!("Getting product: {}", id);

        let cache_key = cache_keys::product_by_id(id);

        if let Some(cached) = self.cached::<ProductDto>(&cache_key).await {
            debug!("Cache hit for product: {}", id);
            return Ok(cached);
        }

        let product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        let response = ProductDto::from(product);
        self.cache_put(&cache_key, &response).await;

        Ok(response)
    }

    async fn list_products(&self) -> CatalogResult<Vec<ProductDto>> {
        debug!("Listing products");

        let cache_key = cache_keys::all_products();

        if let Some(cached) = self.cached::<Vec<ProductDto>>(&cache_key).await {
            debug!("Cache hit for product list");
            return Ok(cached);
        }

        let products: Vec<ProductDto> = self
            .product_repository
            .find_all()
            .await?
            .into_iter()
            .map(ProductDto::from)
            .collect();

        self.cache_put(&cache_key, &products).await;

        Ok(products)
    }

    async fn update_product(&self, dto: ProductDto) -> CatalogResult<ProductDto> {
        debug!("Updating product: {:?}", dto.product_id);

        dto.validate_request()?;

        let id = dto
            .product_id
            .ok_or_else(|| CatalogError::validation("productId: Product id is required for update"))?;

        let mut product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        product.replace_details(dto.name, dto.price);

        let updated = self.product_repository.save(&product).await?;
        let response = ProductDto::from(updated);

        self.cache_put(&cache_keys::product_by_id(id), &response).await;
        self.cache_evict(&cache_keys::all_products()).await;

        info!("Product updated: {}", id);
        Ok(response)
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        debug!("Deleting product: {}", id);

        let deleted = self.product_repository.delete_by_id(id).await?;

        self.cache_evict(&cache_keys::product_by_id(id)).await;
        self.cache_evict(&cache_keys::all_products()).await;

        if deleted {
            info!("Product deleted: {}", id);
        } else {
            debug!("Delete of unknown product {} ignored", id);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ProductServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl").finish_non_exhaustive()
    }
}
