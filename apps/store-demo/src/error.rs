//! # Demo Error Type
//!
//! Everything that can stop the demo before it prints a result.
//! Per-line pricing problems never show up here; they are messages inside
//! the `OrderResult`.

use store_core::{CoreError, ValidationError};
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog construction failed.
    #[error("Invalid product: {0}")]
    Product(#[from] ValidationError),

    /// Processor rejected the policy or the order was missing.
    #[error("Order processing failed: {0}")]
    Core(#[from] CoreError),

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: DemoError = ConfigError::InvalidValue("STORE_VIP".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for STORE_VIP"
        );

        let err: DemoError = CoreError::MissingOrder.into();
        assert_eq!(err.to_string(), "Order processing failed: Order is missing");
    }
}
