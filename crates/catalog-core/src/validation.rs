//! Validation utilities.

use crate::{CatalogError, FieldError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `CatalogError` on failure.
    fn validate_request(&self) -> Result<(), CatalogError> {
        self.validate().map_err(|e| validation_errors_to_catalog_error(&e))
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors, sorted by field name.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();

    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Converts `validator::ValidationErrors` to `CatalogError`.
#[must_use]
pub fn validation_errors_to_catalog_error(errors: &ValidationErrors) -> CatalogError {
    let message = field_errors(errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    CatalogError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use rust_decimal::Decimal;
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that a decimal is strictly greater than zero.
    pub fn positive(value: &Decimal) -> Result<(), ValidationError> {
        if value.is_sign_negative() || value.is_zero() {
            return Err(ValidationError::new("positive"));
        }
        Ok(())
    }

    /// Validates that a decimal fits `integer_digits` digits before the point
    /// and `scale` digits after it, ignoring trailing zeros.
    pub fn digits(value: &Decimal, integer_digits: u32, scale: u32) -> Result<(), ValidationError> {
        let normalized = value.normalize();
        if normalized.scale() > scale {
            return Err(ValidationError::new("digits"));
        }
        if let Some(limit) = 10u64.checked_pow(integer_digits) {
            if normalized.abs().trunc() >= Decimal::from(limit) {
                return Err(ValidationError::new("digits"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use rust_decimal::Decimal;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct PricedItem {
        #[validate(custom(function = "not_blank", message = "Name cannot be blank"))]
        name: String,
        #[validate(custom(function = "positive", message = "Price must be positive"))]
        price: Decimal,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_positive() {
        assert!(positive(&Decimal::new(1, 2)).is_ok());
        assert!(positive(&Decimal::ZERO).is_err());
        assert!(positive(&Decimal::new(-1000, 2)).is_err());
    }

    #[test]
    fn test_digits() {
        assert!(digits(&Decimal::new(1000, 2), 17, 2).is_ok());
        assert!(digits(&Decimal::new(10500, 3), 17, 2).is_ok());
        assert!(digits(&Decimal::new(10005, 3), 17, 2).is_err());
        assert!(digits(&"99999999999999999.99".parse().unwrap(), 17, 2).is_ok());
        assert!(digits(&"100000000000000000".parse().unwrap(), 17, 2).is_err());
        assert!(digits(&Decimal::new(-10005, 3), 17, 2).is_err());
    }

    #[test]
    fn test_field_errors_are_sorted_and_carry_messages() {
        let item = PricedItem {
            name: " ".to_string(),
            price: Decimal::new(-1, 0),
        };

        let errors = item.validate().unwrap_err();
        let fields = field_errors(&errors);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, "name");
        assert_eq!(fields[0].message, "Name cannot be blank");
        assert_eq!(fields[1].field, "price");
        assert_eq!(fields[1].code, "positive");
    }

    #[test]
    fn test_validate_request_maps_to_validation_error() {
        let item = PricedItem {
            name: String::new(),
            price: Decimal::ONE,
        };

        match item.validate_request() {
            Err(CatalogError::Validation(msg)) => assert_eq!(msg, "name: Name cannot be blank"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}
