//! # Pricing Rule Table
//!
//! Per-type constants that drive the pricing engine.
//!
//! ## Rule Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount(a) = base                                                       │
//! │            + (overage_flat + overage_per_seat × (a − threshold))        │
//! │                  only when a > threshold (strict)                       │
//! │            + per_seat × a                  (always)                     │
//! │                                                                         │
//! │  credits(a) = max(a − credit_threshold, 0)                              │
//! │             + a ÷ credit_bonus_divisor     (integer division, if set)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Standard Table (cents)
//! ```text
//! ┌──────────┬───────┬───────────┬──────────┬──────┬──────────┬────────┬───────┐
//! │ Type     │ Base  │ Threshold │ Flat     │ Rate │ Per seat │ Credit │ Bonus │
//! ├──────────┼───────┼───────────┼──────────┼──────┼──────────┼────────┼───────┤
//! │ Tragedy  │ 40000 │ 30        │ 0        │ 1000 │ 0        │ 30     │ -     │
//! │ Comedy   │ 30000 │ 20        │ 10000    │ 500  │ 300      │ 30     │ ÷5    │
//! │ History  │ 20000 │ 20        │ 0        │ 1000 │ 0        │ 20     │ -     │
//! │ Pastoral │ 40000 │ 20        │ 0        │ 2500 │ 0        │ 50     │ ÷2    │
//! └──────────┴───────┴───────────┴──────────┴──────┴──────────┴────────┴───────┘
//! ```
//! Tragedy and Comedy share the base credit threshold; History and Pastoral
//! each carry their own. Keep it that way.

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult, ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::PlayType;

// =============================================================================
// Constants
// =============================================================================

/// Credit threshold shared by tragedies and comedies.
pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;

/// Comedy volume-credit bonus: one credit per this many seats.
pub const COMEDY_EXTRA_VOLUME_FACTOR: u32 = 5;

/// Pastoral volume-credit bonus: one credit per this many seats.
pub const PASTORAL_EXTRA_VOLUME_FACTOR: u32 = 2;

/// Largest charge a validated rule may carry in any field ($1,000,000).
///
/// At [`MAX_AUDIENCE`](crate::MAX_AUDIENCE) seats one line stays under
/// 2.1 × 10¹³ cents, leaving room for hundreds of thousands of lines
/// before an `i64` total could overflow.
pub const MAX_RULE_CHARGE: Money = Money::from_cents(100_000_000);

// =============================================================================
// Pricing Rule
// =============================================================================

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PricingRule {
    /// Charged for every performance.
    pub base_amount: Money,

    /// Audience size above which overage applies.
    pub audience_threshold: u32,

    /// Flat charge added once when the audience exceeds the threshold.
    #[serde(default)]
    pub overage_flat: Money,

    /// Charge for each seat beyond the threshold.
    pub overage_per_seat: Money,

    /// Charge for every seat, regardless of threshold.
    #[serde(default)]
    pub per_seat: Money,

    /// Seats above this earn one volume credit each.
    pub credit_threshold: u32,

    /// One bonus credit per this many seats; `None` for no bonus.
    #[serde(default)]
    pub credit_bonus_divisor: Option<u32>,
}

impl PricingRule {
    /// Charge for a performance with `audience` seats.
    ///
    /// ## Errors
    /// [`PricingError::AmountOverflow`] if the charge does not fit in
    /// `Money`. A rule that passed [`RuleTable::validate`] never overflows
    /// for audiences up to `MAX_AUDIENCE`.
    pub fn amount(&self, audience: u32) -> PricingResult<Money> {
        self.checked_amount(audience)
            .ok_or(PricingError::AmountOverflow { audience })
    }

    fn checked_amount(&self, audience: u32) -> Option<Money> {
        let mut amount = self.base_amount;

        if audience > self.audience_threshold {
            let overage = self
                .overage_per_seat
                .checked_for_seats(audience - self.audience_threshold)?;
            amount = amount
                .checked_add(self.overage_flat)?
                .checked_add(overage)?;
        }

        amount.checked_add(self.per_seat.checked_for_seats(audience)?)
    }

    /// Volume credits earned by a performance with `audience` seats.
    pub fn volume_credits(&self, audience: u32) -> u64 {
        let base = audience.saturating_sub(self.credit_threshold) as u64;
        let bonus = self
            .credit_bonus_divisor
            .and_then(|divisor| audience.checked_div(divisor))
            .unwrap_or(0) as u64;

        base + bonus
    }

    fn validate(&self, field: &str) -> ValidationResult<()> {
        let amounts = [
            ("baseAmount", self.base_amount),
            ("overageFlat", self.overage_flat),
            ("overagePerSeat", self.overage_per_seat),
            ("perSeat", self.per_seat),
        ];
        for (name, value) in amounts {
            if value.is_negative() || value > MAX_RULE_CHARGE {
                return Err(ValidationError::OutOfRange {
                    field: format!("{field}.{name}"),
                    min: 0,
                    max: MAX_RULE_CHARGE.cents(),
                });
            }
        }

        if self.credit_bonus_divisor == Some(0) {
            return Err(ValidationError::OutOfRange {
                field: format!("{field}.creditBonusDivisor"),
                min: 1,
                max: u32::MAX as i64,
            });
        }

        Ok(())
    }
}

// =============================================================================
// Rule Table
// =============================================================================

/// The full rule set, one row per known play type.
///
/// A table loaded from JSON must name all four types; a missing row is a
/// deserialization error rather than a silently free play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleTable {
    pub tragedy: PricingRule,
    pub comedy: PricingRule,
    pub history: PricingRule,
    pub pastoral: PricingRule,
}

impl RuleTable {
    /// The house rule set.
    pub const STANDARD: RuleTable = RuleTable {
        tragedy: PricingRule {
            base_amount: Money::from_cents(40_000),
            audience_threshold: 30,
            overage_flat: Money::zero(),
            overage_per_seat: Money::from_cents(1_000),
            per_seat: Money::zero(),
            credit_threshold: BASE_VOLUME_CREDIT_THRESHOLD,
            credit_bonus_divisor: None,
        },
        comedy: PricingRule {
            base_amount: Money::from_cents(30_000),
            audience_threshold: 20,
            overage_flat: Money::from_cents(10_000),
            overage_per_seat: Money::from_cents(500),
            per_seat: Money::from_cents(300),
            credit_threshold: BASE_VOLUME_CREDIT_THRESHOLD,
            credit_bonus_divisor: Some(COMEDY_EXTRA_VOLUME_FACTOR),
        },
        history: PricingRule {
            base_amount: Money::from_cents(20_000),
            audience_threshold: 20,
            overage_flat: Money::zero(),
            overage_per_seat: Money::from_cents(1_000),
            per_seat: Money::zero(),
            credit_threshold: 20,
            credit_bonus_divisor: None,
        },
        pastoral: PricingRule {
            base_amount: Money::from_cents(40_000),
            audience_threshold: 20,
            overage_flat: Money::zero(),
            overage_per_seat: Money::from_cents(2_500),
            per_seat: Money::zero(),
            credit_threshold: 50,
            credit_bonus_divisor: Some(PASTORAL_EXTRA_VOLUME_FACTOR),
        },
    };

    /// Selects the row for a play type.
    ///
    /// ```rust
    /// use theater_core::rules::RuleTable;
    /// use theater_core::types::PlayType;
    ///
    /// let rule = RuleTable::STANDARD.rule_for(&PlayType::Comedy).unwrap();
    /// assert_eq!(rule.audience_threshold, 20);
    ///
    /// assert!(RuleTable::STANDARD.rule_for(&PlayType::from("opera")).is_err());
    /// ```
    pub fn rule_for(&self, play_type: &PlayType) -> PricingResult<&PricingRule> {
        match play_type {
            PlayType::Tragedy => Ok(&self.tragedy),
            PlayType::Comedy => Ok(&self.comedy),
            PlayType::History => Ok(&self.history),
            PlayType::Pastoral => Ok(&self.pastoral),
            PlayType::Unknown(tag) => Err(PricingError::UnknownPlayType(tag.clone())),
        }
    }

    /// Rejects charges outside `0..=MAX_RULE_CHARGE` and zero bonus divisors.
    pub fn validate(&self) -> ValidationResult<()> {
        self.tragedy.validate("tragedy")?;
        self.comedy.validate("comedy")?;
        self.history.validate("history")?;
        self.pastoral.validate("pastoral")?;
        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::STANDARD
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
