//! # Performance Pricing Engine
//!
//! Prices a single performance of a resolved play.
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  (Performance, Play)                                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  match play.play_type                                                   │
//! │    ├── Tragedy  ──► table.tragedy  ─┐                                   │
//! │    ├── Comedy   ──► table.comedy   ─┤                                   │
//! │    ├── History  ──► table.history  ─┼──► amount / volume credits        │
//! │    ├── Pastoral ──► table.pastoral ─┘                                   │
//! │    └── Unknown  ──► Err(UnknownPlayType(tag))                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The free functions price against [`RuleTable::STANDARD`]; the methods on
//! [`RuleTable`] price against any other table.
//!
//! ## Example
//! ```rust
//! use theater_core::pricing::{amount_for, volume_credits_for};
//! use theater_core::types::{Performance, Play};
//!
//! let play = Play::new("As You Like It", "comedy");
//! let performance = Performance::new("as-like", 35);
//!
//! assert_eq!(amount_for(&performance, &play).unwrap().cents(), 58_000);
//! assert_eq!(volume_credits_for(&performance, &play).unwrap(), 12);
//! ```

use crate::error::PricingResult;
use crate::money::Money;
use crate::rules::RuleTable;
use crate::types::{Performance, Play};

/// Charge for one performance under the standard rule table.
///
/// ## Errors
/// [`UnknownPlayType`](crate::error::PricingError::UnknownPlayType) when the
/// play's type has no pricing rule.
pub fn amount_for(performance: &Performance, play: &Play) -> PricingResult<Money> {
    RuleTable::STANDARD.amount_for(performance, play)
}

/// Volume credits for one performance under the standard rule table.
///
/// ## Errors
/// [`UnknownPlayType`](crate::error::PricingError::UnknownPlayType), same as
/// [`amount_for`].
pub fn volume_credits_for(performance: &Performance, play: &Play) -> PricingResult<u64> {
    RuleTable::STANDARD.volume_credits_for(performance, play)
}

impl RuleTable {
    pub fn amount_for(&self, performance: &Performance, play: &Play) -> PricingResult<Money> {
        self.rule_for(&play.play_type)?
            .amount(performance.audience)
    }

    pub fn volume_credits_for(&self, performance: &Performance, play: &Play) -> PricingResult<u64> {
        let rule = self.rule_for(&play.play_type)?;
        Ok(rule.volume_credits(performance.audience))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    fn tragedy() -> Play {
        Play::new("Hamlet", "tragedy")
    }

    fn comedy() -> Play {
        Play::new("As You Like It", "comedy")
    }

    fn history() -> Play {
        Play::new("Henry V", "history")
    }

    fn pastoral() -> Play {
        Play::new("The Winter's Tale", "pastoral")
    }

    fn seats(audience: u32) -> Performance {
        Performance::new("any", audience)
    }

    #[test]
    fn test_tragedy_no_overage_at_or_below_threshold() {
        for audience in 0..=30 {
            assert_eq!(
                amount_for(&seats(audience), &tragedy()).unwrap().cents(),
                40_000,
                "audience {audience}"
            );
        }
    }

    #[test]
    fn test_tragedy_overage_above_threshold() {
        for audience in 31..=200u32 {
            let expected = 40_000 + 1_000 * (audience as i64 - 30);
            assert_eq!(
                amount_for(&seats(audience), &tragedy()).unwrap().cents(),
                expected,
                "audience {audience}"
            );
        }
    }

    #[test]
    fn test_comedy_strictly_increasing() {
        let mut previous = amount_for(&seats(0), &comedy()).unwrap();
        for audience in 1..=500 {
            let current = amount_for(&seats(audience), &comedy()).unwrap();
            assert!(current > previous, "audience {audience}");
            previous = current;
        }
    }

    #[test]
    fn test_comedy_amount_breakdown() {
        // 30000 + 10000 + 500 × 15 + 300 × 35
        assert_eq!(amount_for(&seats(35), &comedy()).unwrap().cents(), 58_000);
        // Per-seat charge applies below the threshold too.
        assert_eq!(amount_for(&seats(10), &comedy()).unwrap().cents(), 33_000);
    }

    #[test]
    fn test_comedy_volume_credits_formula() {
        for audience in 0..=500u32 {
            let expected = audience.saturating_sub(30) as u64 + (audience / 5) as u64;
            assert_eq!(
                volume_credits_for(&seats(audience), &comedy()).unwrap(),
                expected,
                "audience {audience}"
            );
        }
    }

    #[test]
    fn test_tragedy_and_history_have_no_bonus() {
        assert_eq!(volume_credits_for(&seats(55), &tragedy()).unwrap(), 25);
        assert_eq!(volume_credits_for(&seats(30), &tragedy()).unwrap(), 0);
        assert_eq!(volume_credits_for(&seats(55), &history()).unwrap(), 35);
        assert_eq!(volume_credits_for(&seats(20), &history()).unwrap(), 0);
    }

    #[test]
    fn test_history_amount() {
        assert_eq!(amount_for(&seats(20), &history()).unwrap().cents(), 20_000);
        assert_eq!(amount_for(&seats(21), &history()).unwrap().cents(), 21_000);
        assert_eq!(amount_for(&seats(25), &history()).unwrap().cents(), 25_000);
    }

    #[test]
    fn test_pastoral_amount_and_credits() {
        assert_eq!(amount_for(&seats(20), &pastoral()).unwrap().cents(), 40_000);
        assert_eq!(amount_for(&seats(21), &pastoral()).unwrap().cents(), 42_500);
        // 40000 + 2500 × 40
        assert_eq!(amount_for(&seats(60), &pastoral()).unwrap().cents(), 140_000);
        // max(60 − 50, 0) + 60 / 2
        assert_eq!(volume_credits_for(&seats(60), &pastoral()).unwrap(), 40);
        // below the credit threshold only the bonus counts: 7 / 2
        assert_eq!(volume_credits_for(&seats(7), &pastoral()).unwrap(), 3);
    }

    #[test]
    fn test_unknown_type_fails_both_functions() {
        let opera = Play::new("Tosca", "opera");
        let expected = PricingError::UnknownPlayType("opera".to_string());

        assert_eq!(amount_for(&seats(40), &opera).unwrap_err(), expected);
        assert_eq!(volume_credits_for(&seats(40), &opera).unwrap_err(), expected);
    }

    #[test]
    fn test_custom_table() {
        let mut table = RuleTable::STANDARD;
        table.tragedy.base_amount = Money::from_cents(50_000);
        table.tragedy.credit_threshold = 10;

        assert_eq!(table.amount_for(&seats(10), &tragedy()).unwrap().cents(), 50_000);
        assert_eq!(table.volume_credits_for(&seats(15), &tragedy()).unwrap(), 5);
    }

    #[test]
    fn test_deterministic() {
        let performance = seats(47);
        let play = comedy();
        assert_eq!(
            amount_for(&performance, &play).unwrap(),
            amount_for(&performance, &play).unwrap()
        );
    }
}
