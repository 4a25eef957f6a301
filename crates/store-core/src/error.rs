//! # Error Types
//!
//! Domain-specific error types for store-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  store-core errors (this file)                                         │
//! │  ├── CoreError        - Order processing failures                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  store-demo errors (app)                                               │
//! │  └── DemoError        - Config + core errors at the binary boundary    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DemoError → stderr                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fatal vs. Per-Line
//! [`CoreError::MissingOrder`] and policy validation failures reach the
//! caller. The remaining variants are raised while pricing a single line and
//! are folded into that line's `LineFailed` message.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The order itself was absent (as opposed to empty).
    #[error("Order is missing")]
    MissingOrder,

    /// Price × quantity (or the running total) no longer fits in i64 cents.
    ///
    /// The display omits `product`: the `LineFailed` message around it
    /// already names the line.
    #[error("Amount exceeds the representable range")]
    AmountOverflow { product: String },

    /// A product's fields violate their invariants.
    ///
    /// ## When This Occurs
    /// Product fields are public, so a caller can set a negative price or
    /// stock after construction. The processor re-checks before pricing.
    #[error("Invalid product data: {reason}")]
    InvalidProduct { product: String, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::AmountOverflow {
            product: "T-Shirt".to_string(),
        };
        assert_eq!(err.to_string(), "Amount exceeds the representable range");

        let err = CoreError::InvalidProduct {
            product: "Trousers".to_string(),
            reason: "stock must be between 0 and 9223372036854775807".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid product data: stock must be between 0 and 9223372036854775807"
        );

        assert_eq!(CoreError::MissingOrder.to_string(), "Order is missing");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "threshold".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
