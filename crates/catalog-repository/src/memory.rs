//! In-memory product repository.
//!
//! Assigns ids from a counter starting at 1, the way an auto-increment
//! column does. Used by tests and by local runs that have no database.

use crate::traits::ProductRepository;
use async_trait::async_trait;
use catalog_core::{CatalogResult, Product, ProductId};
use parking_lot::Mutex;
use shaku::Component;
use std::collections::BTreeMap;

#[derive(Debug)]
struct Store {
    rows: BTreeMap<ProductId, Product>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// Process-local product store.
#[derive(Component, Debug, Default)]
#[shaku(interface = ProductRepository)]
pub struct InMemoryProductRepository {
    #[shaku(default)]
    store: Mutex<Store>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.lock().rows.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: &Product) -> CatalogResult<Product> {
        let mut store = self.store.lock();

        let saved = if product.is_new() {
            let id = ProductId::new(store.next_id);
            store.next_id += 1;
            Product::with_id(id, product.name.clone(), product.price)
        } else {
            product.clone()
        };

        if let Some(id) = saved.id {
            store.rows.insert(id, saved.clone());
        }
        Ok(saved)
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.store.lock().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.store.lock().rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ProductId) -> CatalogResult<bool> {
        Ok(self.store.lock().rows.remove(&id).is_some())
    }
}
