//! # Domain Types
//!
//! Core domain types for order pricing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │◄──│   OrderLine     │   │  OrderResult    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  &mut Product   │   │  total (Money)  │       │
//! │  │  name (business)│   │  quantity       │   │  messages       │       │
//! │  │  price_cents    │   └────────┬────────┘   └────────┬────────┘       │
//! │  │  stock          │            │ Vec                 │ Vec            │
//! │  └─────────────────┘   ┌────────▼────────┐   ┌────────▼────────┐       │
//! │                        │     Order       │   │  OrderMessage   │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Products are owned by the caller. An [`Order`] only borrows them mutably
//! for its lifetime, so the processor can decrement stock in place and the
//! borrow checker rules out two lines for the same product.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::money::Money;
use crate::validation::{
    validate_price_cents, validate_product_name, validate_stock, ValidationResult,
};

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name, unique within a catalog. Used in every message.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Units currently available. Decremented by order processing.
    pub stock: i64,
}

impl Product {
    /// Creates a validated product with a fresh id.
    ///
    /// ## Example
    /// ```rust
    /// use store_core::{Money, Product};
    ///
    /// let trousers = Product::new("Trousers", Money::from_cents(12000), 5).unwrap();
    /// assert_eq!(trousers.stock, 5);
    /// assert!(Product::new("", Money::from_cents(100), 1).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, stock: i64) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price_cents(price.cents())?;
        validate_stock(stock)?;

        Ok(Product {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            price_cents: price.cents(),
            stock,
        })
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Re-checks the numeric invariants (fields are public and may drift).
    pub fn validate(&self) -> ValidationResult<()> {
        validate_price_cents(self.price_cents)?;
        validate_stock(self.stock)
    }
}

// =============================================================================
// Order
// =============================================================================

/// One requested product in an order.
///
/// The quantity is taken as-is: zero, negative or above stock are all
/// legal inputs that the processor reports on.
#[derive(Debug)]
pub struct OrderLine<'a> {
    pub product: &'a mut Product,
    pub quantity: i64,
}

/// An ordered list of lines. Messages follow insertion order.
#[derive(Debug, Default)]
pub struct Order<'a> {
    lines: Vec<OrderLine<'a>>,
}

impl<'a> Order<'a> {
    pub fn new() -> Self {
        Order { lines: Vec::new() }
    }

    /// Appends a line for `product`.
    pub fn add_line(&mut self, product: &'a mut Product, quantity: i64) {
        self.lines.push(OrderLine { product, quantity });
    }

    /// Builder form of [`Order::add_line`].
    pub fn with_line(mut self, product: &'a mut Product, quantity: i64) -> Self {
        self.add_line(product, quantity);
        self
    }

    pub fn lines(&self) -> &[OrderLine<'a>] {
        &self.lines
    }

    pub fn lines_mut(&mut self) -> &mut [OrderLine<'a>] {
        &mut self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> FromIterator<(&'a mut Product, i64)> for Order<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a mut Product, i64)>>(iter: I) -> Self {
        Order {
            lines: iter
                .into_iter()
                .map(|(product, quantity)| OrderLine { product, quantity })
                .collect(),
        }
    }
}

// =============================================================================
// Order Message
// =============================================================================

/// A diagnostic produced while processing an order.
///
/// `Display` gives the human-readable text shown to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderMessage {
    /// Requested quantity was zero or negative; the line was skipped.
    InvalidQuantity { product: String },
    /// Requested quantity exceeded stock; the line was clamped.
    InsufficientStock { product: String },
    VipDiscountApplied { product: String },
    QuantityDiscountApplied { product: String },
    /// The line could not be priced; nothing was applied for it.
    LineFailed { product: String, reason: String },
    /// The order total came out as exactly zero.
    OrderNotProcessed,
}

impl OrderMessage {
    /// Name of the product the message is about, if any.
    pub fn product(&self) -> Option<&str> {
        match self {
            OrderMessage::InvalidQuantity { product }
            | OrderMessage::InsufficientStock { product }
            | OrderMessage::VipDiscountApplied { product }
            | OrderMessage::QuantityDiscountApplied { product }
            | OrderMessage::LineFailed { product, .. } => Some(product),
            OrderMessage::OrderNotProcessed => None,
        }
    }
}

impl fmt::Display for OrderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderMessage::InvalidQuantity { product } => {
                write!(f, "Invalid quantity for product: {product}")
            }
            OrderMessage::InsufficientStock { product } => {
                write!(f, "Insufficient stock for product: {product}")
            }
            OrderMessage::VipDiscountApplied { product } => {
                write!(f, "VIP discount applied to {product}")
            }
            OrderMessage::QuantityDiscountApplied { product } => {
                write!(f, "Quantity discount applied to {product}")
            }
            OrderMessage::LineFailed { product, reason } => {
                write!(f, "Error processing product {product}: {reason}")
            }
            OrderMessage::OrderNotProcessed => write!(f, "Order could not be processed."),
        }
    }
}

// =============================================================================
// Order Result
// =============================================================================

/// Outcome of processing an order: the total and every message, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    total: Money,
    messages: Vec<OrderMessage>,
}

impl OrderResult {
    pub fn new(total: Money, messages: Vec<OrderMessage>) -> Self {
        OrderResult { total, messages }
    }

    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn messages(&self) -> &[OrderMessage] {
        &self.messages
    }

    /// Messages rendered to text, in order.
    pub fn message_strings(&self) -> Vec<String> {
        self.messages.iter().map(ToString::to_string).collect()
    }

    pub fn contains(&self, message: &OrderMessage) -> bool {
        self.messages.contains(message)
    }

    /// False when the total is zero (the order carries `OrderNotProcessed`).
    pub fn is_processed(&self) -> bool {
        !self.total.is_zero()
    }

    pub fn into_parts(self) -> (Money, Vec<OrderMessage>) {
        (self.total, self.messages)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new() {
        let shirt = Product::new("  T-Shirt ", Money::from_cents(5000), 20).unwrap();
        assert_eq!(shirt.name, "T-Shirt");
        assert_eq!(shirt.price(), Money::from_cents(5000));
        assert_eq!(shirt.stock, 20);
        assert!(Uuid::parse_str(&shirt.id).is_ok());
    }

    #[test]
    fn test_product_ids_are_unique() {
        let a = Product::new("A", Money::from_cents(100), 1).unwrap();
        let b = Product::new("A", Money::from_cents(100), 1).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_product_new_rejects_bad_input() {
        assert!(Product::new("", Money::from_cents(100), 1).is_err());
        assert!(Product::new("Mug", Money::from_cents(-1), 1).is_err());
        assert!(Product::new("Mug", Money::from_cents(100), -1).is_err());
        assert!(Product::new("Free sample", Money::zero(), 0).is_ok());
    }

    #[test]
    fn test_product_validate_catches_drift() {
        let mut mug = Product::new("Mug", Money::from_cents(800), 3).unwrap();
        assert!(mug.validate().is_ok());
        mug.stock = -2;
        assert!(mug.validate().is_err());
    }

    #[test]
    fn test_order_keeps_insertion_order() {
        let mut a = Product::new("A", Money::from_cents(100), 1).unwrap();
        let mut b = Product::new("B", Money::from_cents(100), 1).unwrap();

        let order = Order::new().with_line(&mut b, 2).with_line(&mut a, 1);
        let names: Vec<&str> = order.lines().iter().map(|l| l.product.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(order.len(), 2);
        assert!(!order.is_empty());
    }

    #[test]
    fn test_order_from_iter() {
        let mut products = vec![
            Product::new("A", Money::from_cents(100), 1).unwrap(),
            Product::new("B", Money::from_cents(200), 2).unwrap(),
        ];
        let order: Order = products.iter_mut().zip([3_i64, 4]).collect();
        assert_eq!(order.lines()[1].quantity, 4);
    }

    #[test]
    fn test_message_text() {
        let product = "Trousers".to_string();
        assert_eq!(
            OrderMessage::InvalidQuantity { product: product.clone() }.to_string(),
            "Invalid quantity for product: Trousers"
        );
        assert_eq!(
            OrderMessage::InsufficientStock { product: product.clone() }.to_string(),
            "Insufficient stock for product: Trousers"
        );
        assert_eq!(
            OrderMessage::VipDiscountApplied { product: product.clone() }.to_string(),
            "VIP discount applied to Trousers"
        );
        assert_eq!(
            OrderMessage::QuantityDiscountApplied { product: product.clone() }.to_string(),
            "Quantity discount applied to Trousers"
        );
        assert_eq!(
            OrderMessage::LineFailed {
                product,
                reason: "boom".to_string()
            }
            .to_string(),
            "Error processing product Trousers: boom"
        );
        assert_eq!(
            OrderMessage::OrderNotProcessed.to_string(),
            "Order could not be processed."
        );
    }

    #[test]
    fn test_message_product() {
        let msg = OrderMessage::VipDiscountApplied {
            product: "Mug".to_string(),
        };
        assert_eq!(msg.product(), Some("Mug"));
        assert_eq!(OrderMessage::OrderNotProcessed.product(), None);
    }

    #[test]
    fn test_order_result_helpers() {
        let result = OrderResult::new(Money::zero(), vec![OrderMessage::OrderNotProcessed]);
        assert!(!result.is_processed());
        assert!(result.contains(&OrderMessage::OrderNotProcessed));
        assert_eq!(result.message_strings(), vec!["Order could not be processed."]);

        let (total, messages) = result.into_parts();
        assert!(total.is_zero());
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_message_serializes_tagged() {
        let msg = OrderMessage::InsufficientStock {
            product: "Trousers".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"kind":"insufficient_stock","product":"Trousers"}"#);
    }
}
