//! # store-core: Order Pricing for the Store
//!
//! Pure business logic for pricing a customer order against the products
//! it references. No I/O happens here: the only side effect is the stock
//! decrement on the products the caller lends to an [`Order`].
//!
//! ## Pricing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    OrderProcessor::process_order                       │
//! │                                                                         │
//! │  for each OrderLine (insertion order):                                 │
//! │                                                                         │
//! │    qty <= 0 ──────────────► InvalidQuantity (line skipped)             │
//! │        │                                                                │
//! │    qty > stock ───────────► InsufficientStock, qty = stock             │
//! │        │                                                                │
//! │    price × qty                                                          │
//! │        │                                                                │
//! │    VIP? ──────────────────► -10%, VipDiscountApplied                   │
//! │        │                                                                │
//! │    qty >= 10? ────────────► -5%,  QuantityDiscountApplied              │
//! │        │                                                                │
//! │    total += line, stock -= qty                                         │
//! │                                                                         │
//! │  total rounded to cents once, half-up                                  │
//! │                                                                         │
//! │  total == 0 ──────────────► OrderNotProcessed                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money, sub-cent [`ExactAmount`] and [`DiscountRate`]
//! - [`types`] - Domain types (Product, Order, OrderResult, messages)
//! - [`order`] - The order processor and discount policy
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use store_core::{process_order, Money, Order, Product};
//!
//! let mut shirt = Product::new("T-Shirt", Money::from_cents(5000), 20).unwrap();
//!
//! let mut order = Order::new();
//! order.add_line(&mut shirt, 12);
//!
//! let result = process_order(Some(&mut order), true).unwrap();
//! drop(order);
//!
//! // 50.00 × 12 × 0.90 × 0.95
//! assert_eq!(result.total().cents(), 51300);
//! assert_eq!(shirt.stock, 8);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{DiscountRate, ExactAmount, Money};
pub use order::{process_order, DiscountPolicy, LineOutcome, OrderProcessor};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Applied quantity at which the quantity discount kicks in.
pub const DEFAULT_BULK_THRESHOLD: i64 = 10;

/// VIP discount in basis points (10%).
pub const DEFAULT_VIP_DISCOUNT_BPS: u32 = 1000;

/// Quantity discount in basis points (5%).
pub const DEFAULT_BULK_DISCOUNT_BPS: u32 = 500;
