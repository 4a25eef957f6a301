//! # Money Module
//!
//! Provides the `Money` type for monetary values, `ExactAmount` for
//! discounted amounts below the cent, and `DiscountRate` for percentage
//! reductions.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │    0.1 + 0.2 = 0.30000000000000004  (f64)                               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    Money        5 cents                                                 │
//! │    ExactAmount  5 × 10⁸          (units of 10⁻⁸ cent)                   │
//! │    VIP -10%     4.5 × 10⁸        exact, no rounding                     │
//! │    10 lines     45 × 10⁸  ──►  round once, half-up  ──►  45 cents       │
//! │                                                                         │
//! │  Rounding each line first would give 10 × 5 = 50 (or 40 rounding the    │
//! │  discount up), drifting further with every line.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use store_core::money::{DiscountRate, ExactAmount, Money};
//!
//! let price = Money::from_cents(5000); // 50.00
//! let line = price.checked_multiply_quantity(12).unwrap();
//! let vip = ExactAmount::from_money(line).apply_discount(DiscountRate::from_bps(1000));
//! assert_eq!(vip.round_to_cents(), Some(Money::from_cents(54000)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Basis points in 100%.
const BPS_SCALE: i128 = 10_000;

/// Sub-cent units per cent in [`ExactAmount`]: one `BPS_SCALE` per discount.
const EXACT_SCALE: i128 = BPS_SCALE * BPS_SCALE;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the product fields; pricing itself never
///   produces a negative amount
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::Money;
    ///
    /// let price = Money::from_cents(12000); // 120.00
    /// assert_eq!(price.cents(), 12000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::Money;
    ///
    /// let unit = Money::from_cents(12000);
    /// assert_eq!(unit.checked_multiply_quantity(5).unwrap().cents(), 60000);
    /// assert!(Money::from_cents(i64::MAX).checked_multiply_quantity(2).is_none());
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Money> {
        self.0.checked_mul(qty).map(Money)
    }
}

/// Plain `major.minor` rendering for logs and the demo output.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

// =============================================================================
// Exact Amount
// =============================================================================

/// An amount in units of 10⁻⁸ cent, used while lines are discounted and summed.
///
/// A whole-cent amount stays exact through two basis-point discounts (VIP
/// and bulk), so line totals and the order total carry no rounding error
/// until [`ExactAmount::round_to_cents`] is called once at the end.
///
/// ## Range
/// i128 holds any i64 cent amount scaled by 10⁸ with room for roughly
/// 10¹¹ such lines before `checked_add` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExactAmount(i128);

impl ExactAmount {
    #[inline]
    pub const fn zero() -> Self {
        ExactAmount(0)
    }

    #[inline]
    pub const fn from_money(money: Money) -> Self {
        ExactAmount(money.0 as i128 * EXACT_SCALE)
    }

    /// Multiplies by `(10000 - bps) / 10000`.
    ///
    /// Exact for up to two discounts applied to an amount built with
    /// [`ExactAmount::from_money`]. Rates above 100% are rejected by
    /// `DiscountPolicy::validate` before they reach here.
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::{DiscountRate, ExactAmount, Money};
    ///
    /// // 0.05 × 0.90 = 0.045, kept exactly
    /// let line = ExactAmount::from_money(Money::from_cents(5))
    ///     .apply_discount(DiscountRate::from_bps(1000));
    /// assert_eq!(line.sub_cents(), 450_000_000);
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> ExactAmount {
        ExactAmount(self.0 * (BPS_SCALE - rate.bps() as i128) / BPS_SCALE)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: ExactAmount) -> Option<ExactAmount> {
        self.0.checked_add(other.0).map(ExactAmount)
    }

    /// Rounds half-up to whole cents.
    ///
    /// Returns `None` when the rounded value does not fit in [`Money`].
    pub fn round_to_cents(&self) -> Option<Money> {
        let cents = (self.0 + EXACT_SCALE / 2).div_euclid(EXACT_SCALE);
        i64::try_from(cents).ok().map(Money)
    }

    /// Raw value in units of 10⁻⁸ cent.
    #[inline]
    pub const fn sub_cents(&self) -> i128 {
        self.0
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// A percentage reduction in basis points.
///
/// 1 basis point = 0.01%, so 1000 bps = 10% and 500 bps = 5%.
/// Rates above 10000 are rejected by `DiscountPolicy::validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
