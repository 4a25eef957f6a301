//! # Order Processing
//!
//! Prices an [`Order`], applies discounts, and decrements stock.
//!
//! ## Line Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  OrderLine ──► price_line() ──┬── Ok(Rejected)  ──► message only        │
//! │  (&mut Product,  (pure)       │                                         │
//! │   quantity)                   ├── Ok(Priced)    ──► settle: total +=,   │
//! │                               │                     stock -=, messages  │
//! │                               │                                         │
//! │                               └── Err(CoreError) ─► LineFailed message  │
//! │                                                                         │
//! │  Nothing is written to the product until the line has fully priced,    │
//! │  so a failed line leaves stock untouched.                              │
//! │                                                                         │
//! │  Line totals and the running total are ExactAmounts. The order total    │
//! │  is rounded to cents once, not per line.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::{DiscountRate, ExactAmount, Money};
use crate::types::{Order, OrderLine, OrderMessage, OrderResult, Product};
use crate::validation::{validate_bulk_threshold, validate_discount_bps};
use crate::{DEFAULT_BULK_DISCOUNT_BPS, DEFAULT_BULK_THRESHOLD, DEFAULT_VIP_DISCOUNT_BPS};

// =============================================================================
// Discount Policy
// =============================================================================

/// The discount rules applied to every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountPolicy {
    /// Applied to every priced line of a VIP order.
    pub vip_discount: DiscountRate,

    /// Applied on top when the applied quantity reaches `bulk_threshold`.
    pub bulk_discount: DiscountRate,

    /// Minimum applied (post-clamp) quantity for the bulk discount.
    pub bulk_threshold: i64,
}

impl DiscountPolicy {
    pub fn validate(&self) -> CoreResult<()> {
        validate_discount_bps("vip discount", self.vip_discount.bps())?;
        validate_discount_bps("bulk discount", self.bulk_discount.bps())?;
        validate_bulk_threshold(self.bulk_threshold)?;
        Ok(())
    }
}

impl Default for DiscountPolicy {
    /// 10% VIP, 5% from 10 units.
    fn default() -> Self {
        DiscountPolicy {
            vip_discount: DiscountRate::from_bps(DEFAULT_VIP_DISCOUNT_BPS),
            bulk_discount: DiscountRate::from_bps(DEFAULT_BULK_DISCOUNT_BPS),
            bulk_threshold: DEFAULT_BULK_THRESHOLD,
        }
    }
}

// =============================================================================
// Line Outcome
// =============================================================================

/// Result of pricing a single line, before anything is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was skipped; the message says why.
    Rejected(OrderMessage),

    /// The line can be applied.
    Priced {
        /// Quantity to take from stock (requested, clamped to stock).
        applied: i64,
        /// Line price after discounts, not yet rounded to cents.
        line_total: ExactAmount,
        /// Messages for this line, in emission order.
        messages: Vec<OrderMessage>,
    },
}

// =============================================================================
// Order Processor
// =============================================================================

/// Prices orders under a fixed [`DiscountPolicy`].
///
/// ## Example
/// ```rust
/// use store_core::{Money, Order, OrderMessage, OrderProcessor, Product};
///
/// let processor = OrderProcessor::default();
/// let mut trousers = Product::new("Trousers", Money::from_cents(12000), 5).unwrap();
///
/// let mut order = Order::new().with_line(&mut trousers, 10);
/// let result = processor.process_order(Some(&mut order), false).unwrap();
/// drop(order);
///
/// assert_eq!(result.total().cents(), 60000);
/// assert!(result.contains(&OrderMessage::InsufficientStock {
///     product: "Trousers".to_string(),
/// }));
/// assert_eq!(trousers.stock, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderProcessor {
    policy: DiscountPolicy,
}

impl OrderProcessor {
    /// Creates a processor, rejecting out-of-range policies.
    pub fn new(policy: DiscountPolicy) -> CoreResult<Self> {
        policy.validate()?;
        Ok(OrderProcessor { policy })
    }

    pub fn policy(&self) -> &DiscountPolicy {
        &self.policy
    }

    /// Processes every line of `order` and returns the total and messages.
    ///
    /// ## Errors
    /// [`CoreError::MissingOrder`] when `order` is `None`. Everything that
    /// goes wrong on a single line is reported as a message instead.
    ///
    /// ## Side Effects
    /// Each successfully priced line decrements its product's stock by the
    /// applied quantity.
    pub fn process_order(
        &self,
        order: Option<&mut Order<'_>>,
        is_vip: bool,
    ) -> CoreResult<OrderResult> {
        let order = order.ok_or(CoreError::MissingOrder)?;

        let mut exact_total = ExactAmount::zero();
        let mut total = Money::zero();
        let mut messages = Vec::new();

        for line in order.lines_mut() {
            if let Err(err) =
                self.apply_line(line, is_vip, &mut exact_total, &mut total, &mut messages)
            {
                warn!(product = %line.product.name, error = %err, "Order line failed");
                messages.push(OrderMessage::LineFailed {
                    product: line.product.name.clone(),
                    reason: err.to_string(),
                });
            }
        }

        if total.is_zero() {
            messages.push(OrderMessage::OrderNotProcessed);
        }

        debug!(
            lines = order.len(),
            is_vip,
            total = %total,
            messages = messages.len(),
            "Order processed"
        );

        Ok(OrderResult::new(total, messages))
    }

    /// Prices one line without touching the product.
    ///
    /// Steps, in order: reject non-positive quantities, clamp to stock,
    /// multiply by unit price, VIP discount, bulk discount.
    pub fn price_line(
        &self,
        product: &Product,
        requested: i64,
        is_vip: bool,
    ) -> CoreResult<LineOutcome> {
        if requested <= 0 {
            return Ok(LineOutcome::Rejected(OrderMessage::InvalidQuantity {
                product: product.name.clone(),
            }));
        }

        product.validate().map_err(|err| CoreError::InvalidProduct {
            product: product.name.clone(),
            reason: err.to_string(),
        })?;

        let mut messages = Vec::new();

        let applied = if requested > product.stock {
            messages.push(OrderMessage::InsufficientStock {
                product: product.name.clone(),
            });
            product.stock
        } else {
            requested
        };

        let base = product
            .price()
            .checked_multiply_quantity(applied)
            .ok_or_else(|| CoreError::AmountOverflow {
                product: product.name.clone(),
            })?;
        let mut line_total = ExactAmount::from_money(base);

        if is_vip {
            line_total = line_total.apply_discount(self.policy.vip_discount);
            messages.push(OrderMessage::VipDiscountApplied {
                product: product.name.clone(),
            });
        }

        if applied >= self.policy.bulk_threshold {
            line_total = line_total.apply_discount(self.policy.bulk_discount);
            messages.push(OrderMessage::QuantityDiscountApplied {
                product: product.name.clone(),
            });
        }

        Ok(LineOutcome::Priced {
            applied,
            line_total,
            messages,
        })
    }

    /// Prices a line and, only if every step succeeds, commits it.
    ///
    /// `total` is `exact_total` rounded half-up to cents. It is recomputed
    /// from the exact sum so rounding never accumulates across lines.
    fn apply_line(
        &self,
        line: &mut OrderLine<'_>,
        is_vip: bool,
        exact_total: &mut ExactAmount,
        total: &mut Money,
        messages: &mut Vec<OrderMessage>,
    ) -> CoreResult<()> {
        match self.price_line(line.product, line.quantity, is_vip)? {
            LineOutcome::Rejected(message) => {
                debug!(product = %line.product.name, requested = line.quantity, "Order line rejected");
                messages.push(message);
            }
            LineOutcome::Priced {
                applied,
                line_total,
                messages: line_messages,
            } => {
                let overflow = || CoreError::AmountOverflow {
                    product: line.product.name.clone(),
                };
                let new_exact = exact_total.checked_add(line_total).ok_or_else(overflow)?;
                let new_total = new_exact.round_to_cents().ok_or_else(overflow)?;

                debug!(
                    product = %line.product.name,
                    requested = line.quantity,
                    applied,
                    line_sub_cents = %line_total.sub_cents(),
                    "Order line priced"
                );

                *exact_total = new_exact;
                *total = new_total;
                line.product.stock -= applied;
                messages.extend(line_messages);
            }
        }

        Ok(())
    }
}

/// Processes `order` with the default [`DiscountPolicy`].
pub fn process_order(order: Option<&mut Order<'_>>, is_vip: bool) -> CoreResult<OrderResult> {
    OrderProcessor::default().process_order(order, is_vip)
}

// =============================================================================
// Unit Tests
// =============================================================================
