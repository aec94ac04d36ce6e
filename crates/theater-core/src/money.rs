//! # Money Module
//!
//! Provides the `Money` type used for every charge on a statement.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing ticket charges in floating point:                              │
//! │    650.00 + 580.00 + 0.10 + 0.20 = 1230.3000000000002  ❌ WRONG!        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    65000 + 58000 + 10 + 20 = 123030 cents = $1,230.30                   │
//! │    Pricing rules are whole cents per seat, so nothing is ever lost      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use theater_core::money::Money;
//!
//! let base = Money::from_cents(40_000);                    // $400.00
//! let overage = Money::from_cents(1_000).checked_for_seats(25); // 25 seats at $10.00
//! let total = overage.and_then(|o| base.checked_add(o));
//! assert_eq!(total.map(|m| m.to_string()).as_deref(), Some("$650.00"));
//! ```
//!
//! ## Overflow
//! Charges come from rule tables the operator can replace, so every
//! operation that can grow a value is checked and returns `None` on
//! overflow. There are no panicking `+` or `*` operators on `Money`.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  PricingRule.base_amount ──┐                                            │
/// │  PricingRule.overage_* ────┼──► amount_for() ──► LineResult.amount      │
/// │  PricingRule.per_seat ─────┘                          │                 │
/// │                                                       ▼                 │
/// │                              StatementTotals.total_amount (Σ lines)     │
/// │                                                       │                 │
/// │                                                       ▼                 │
/// │                               "Amount owed is $1,230.00"                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// let price = Money::from_cents(65_000);
    /// assert_eq!(price.cents(), 65_000);
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

    /// Returns the whole-dollar portion (truncated toward zero).
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies a per-seat price by a head count, `None` on overflow.
    ///
    /// ```rust
    /// use theater_core::money::Money;
    ///
    /// let per_seat = Money::from_cents(300);
    /// assert_eq!(per_seat.checked_for_seats(35), Some(Money::from_cents(10_500)));
    /// assert_eq!(Money::from_cents(i64::MAX / 2).checked_for_seats(55), None);
    /// ```
    #[inline]
    pub const fn checked_for_seats(&self, seats: u32) -> Option<Self> {
        match self.0.checked_mul(seats as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// US currency display: `$1,230.00`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.dollars().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}${}.{:02}", sign, grouped, self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(65_099);
        assert_eq!(money.cents(), 65_099);
        assert_eq!(money.dollars(), 650);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(65_000).to_string(), "$650.00");
        assert_eq!(Money::from_cents(123_000).to_string(), "$1,230.00");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::from_cents(123_456_789).to_string(), "$1,234,567.89");
        assert_eq!(Money::from_cents(100_000_000).to_string(), "$1,000,000.00");
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(65_000);
        let b = Money::from_cents(58_000);
        assert_eq!(a.checked_add(b), Some(Money::from_cents(123_000)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
    }

    #[test]
    fn test_checked_for_seats() {
        let per_seat = Money::from_cents(300);
        assert_eq!(per_seat.checked_for_seats(35), Some(Money::from_cents(10_500)));
        assert_eq!(per_seat.checked_for_seats(0), Some(Money::zero()));
        assert_eq!(Money::from_cents(i64::MAX / 2).checked_for_seats(55), None);
    }

    #[test]
    fn test_serializes_as_plain_cents() {
        let json = serde_json::to_string(&Money::from_cents(58_000)).unwrap();
        assert_eq!(json, "58000");
        let back: Money = serde_json::from_str("58000").unwrap();
        assert_eq!(back, Money::from_cents(58_000));
    }
}
