//! Product entity.

use crate::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity as held by the entity store.
///
/// `id` is `None` until the store has assigned one on first save; after that
/// it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: Option<ProductId>,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Decimal,
}

impl Product {
    /// Creates a product that has not been persisted yet.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }

    /// Creates a product with a known identifier.
    #[must_use]
    pub fn with_id(id: ProductId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            price,
        }
    }

    /// Returns true if the store has not assigned an id yet.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Replaces name and price. The id is left untouched.
    pub fn replace_details(&mut self, name: impl Into<String>, price: Decimal) {
        self.name = name.into();
        self.price = price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_has_no_id() {
        let product = Product::new("Desk Lamp", Decimal::new(2499, 2));
        assert!(product.is_new());
        assert_eq!(product.name, "Desk Lamp");
    }

    #[test]
    fn test_replace_details_keeps_id() {
        let mut product = Product::with_id(ProductId::new(3), "Old", Decimal::ONE);
        product.replace_details("New", Decimal::new(1200, 2));

        assert_eq!(product.id, Some(ProductId::new(3)));
        assert_eq!(product.name, "New");
        assert_eq!(product.price, Decimal::new(12, 0));
    }
}
