//! Product DTOs.

use catalog_core::rules::{digits, not_blank, positive};
use catalog_core::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Digits before and after the point that `products.price` (`DECIMAL(19,2)`) holds.
pub const PRICE_INTEGER_DIGITS: u32 = 17;
pub const PRICE_SCALE: u32 = 2;

/// Product as exchanged over the API and stored in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Absent on create; taken from the path on update.
    #[serde(default)]
    #[schema(value_type = Option<i64>, example = 1)]
    pub product_id: Option<ProductId>,

    #[validate(
        custom(function = "not_blank", message = "Product name cannot be blank"),
        length(max = 255, message = "Product name must be at most 255 characters")
    )]
    #[schema(example = "Test Product", max_length = 255)]
    pub name: String,

    /// Serialized as a JSON number carrying the exact decimal digits.
    #[validate(custom(function = "valid_price"))]
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 10.0)]
    pub price: Decimal,
}

impl ProductDto {
    /// Creates a DTO without an id.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            product_id: None,
            name: name.into(),
            price,
        }
    }

    /// Returns this DTO carrying `id`.
    #[must_use]
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.product_id = Some(id);
        self
    }
}

fn valid_price(price: &Decimal) -> Result<(), ValidationError> {
    positive(price).map_err(|e| e.with_message(Cow::Borrowed("Product price must be positive")))?;
    digits(price, PRICE_INTEGER_DIGITS, PRICE_SCALE).map_err(|e| {
        e.with_message(Cow::Borrowed(
            "Product price must have at most 17 integer digits and 2 decimal places",
        ))
    })
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
