//! MySQL product repository implementation.

use crate::{traits::ProductRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, Product, ProductId};
use rust_decimal::Decimal;
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct MySqlProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductRepository {
    /// Creates a new MySQL product repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::with_id(ProductId::new(row.id), row.name, row.price)
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn save(&self, product: &Product) -> CatalogResult<Product> {
        if let Some(id) = product.id {
            debug!("Updating product: {}", id);

            sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
                .bind(&product.name)
                .bind(product.price)
                .bind(id.into_inner())
                .execute(self.pool.inner())
                .await?;

            return Ok(product.clone());
        }

        debug!("Inserting product: {}", product.name);

        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
            .bind(&product.name)
            .bind(product.price)
            .execute(self.pool.inner())
            .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| CatalogError::internal("Assigned product id out of range"))?;

        Ok(Product::with_id(
            ProductId::new(id),
            product.name.clone(),
            product.price,
        ))
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        debug!("Finding all products");

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn delete_by_id(&self, id: ProductId) -> CatalogResult<bool> {
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
