//! # Validation Module
//!
//! Input validation for products and discount policy.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Product::new ───────► name, price, stock (construction)               │
//! │                                                                         │
//! │  OrderProcessor::new ► discount rates, bulk threshold                  │
//! │                                                                         │
//! │  process_order ──────► price, stock again per line (fields are pub,    │
//! │                        a failure becomes that line's error message)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Requested quantities are NOT validated here: a non-positive quantity is
//! an expected input that the processor reports as a message.

use crate::error::ValidationError;
use crate::MAX_PRODUCT_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use store_core::validation::validate_product_name;
///
/// assert!(validate_product_name("T-Shirt").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use store_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(5000).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock level. Zero is allowed (sold out).
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points (0 to 10000).
pub fn validate_discount_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > 10_000 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: 10_000,
        });
    }

    Ok(())
}

/// Validates the quantity threshold for the bulk discount.
///
/// A threshold of 0 or below would discount lines that were clamped to
/// nothing, so it must be positive.
pub fn validate_bulk_threshold(threshold: i64) -> ValidationResult<()> {
    if threshold <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "bulk threshold".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("T-Shirt").is_ok());
        assert!(validate_product_name("Calça").is_ok());

        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
        assert!(validate_product_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(12000).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(20).is_ok());
        assert_eq!(
            validate_stock(-3),
            Err(ValidationError::OutOfRange {
                field: "stock".to_string(),
                min: 0,
                max: i64::MAX,
            })
        );
    }

    #[test]
    fn test_validate_discount_bps() {
        assert!(validate_discount_bps("vip discount", 0).is_ok());
        assert!(validate_discount_bps("vip discount", 1000).is_ok());
        assert!(validate_discount_bps("vip discount", 10_000).is_ok());
        assert!(validate_discount_bps("vip discount", 10_001).is_err());
    }

    #[test]
    fn test_validate_bulk_threshold() {
        assert!(validate_bulk_threshold(1).is_ok());
        assert!(validate_bulk_threshold(10).is_ok());
        assert!(validate_bulk_threshold(0).is_err());
        assert!(validate_bulk_threshold(-5).is_err());
    }
}
