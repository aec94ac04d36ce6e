//! # Domain Types
//!
//! Core domain types for theater billing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUTS (caller-owned, read-only)        DERIVED (rebuilt every run)    │
//! │                                                                         │
//! │  ┌─────────────────┐                    ┌─────────────────┐             │
//! │  │    Invoice      │                    │   LineResult    │             │
//! │  │  ─────────────  │                    │  ─────────────  │             │
//! │  │  customer       │                    │  play           │             │
//! │  │  performances ──┼──┐                 │  performance    │             │
//! │  └─────────────────┘  │                 │  amount (cents) │             │
//! │                       ▼                 │  volume_credits │             │
//! │  ┌─────────────────┐   ┌──────────────┐ └────────┬────────┘             │
//! │  │  Performance    │   │    Play      │          │ fold                 │
//! │  │  ─────────────  │   │  ──────────  │          ▼                      │
//! │  │  play_id (FK) ──┼──►│  name        │ ┌─────────────────┐             │
//! │  │  audience (u32) │   │  play_type   │ │ StatementTotals │             │
//! │  └─────────────────┘   └──────────────┘ └─────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{StatementError, StatementResult};
use crate::money::Money;

// =============================================================================
// Play Type
// =============================================================================

/// The category of a play, which selects its pricing and credit formulas.
///
/// ## Unknown Tags
/// Catalog data is free text, so a play may declare a type the rule table
/// has never heard of. That is not rejected here: the raw tag is kept in
/// [`PlayType::Unknown`] and the pricing engine reports it as
/// [`UnknownPlayType`](crate::error::PricingError::UnknownPlayType) when the
/// play is actually priced.
///
/// Serialized as its lowercase tag (`"tragedy"`, `"comedy"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayType {
    Tragedy,
    Comedy,
    History,
    Pastoral,
    /// A tag with no pricing rule.
    Unknown(String),
}

impl PlayType {
    /// Returns the lowercase tag used in catalog data.
    pub fn as_str(&self) -> &str {
        match self {
            PlayType::Tragedy => "tragedy",
            PlayType::Comedy => "comedy",
            PlayType::History => "history",
            PlayType::Pastoral => "pastoral",
            PlayType::Unknown(tag) => tag,
        }
    }
}

impl From<&str> for PlayType {
    fn from(tag: &str) -> Self {
        match tag {
            "tragedy" => PlayType::Tragedy,
            "comedy" => PlayType::Comedy,
            "history" => PlayType::History,
            "pastoral" => PlayType::Pastoral,
            other => PlayType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for PlayType {
    fn from(tag: String) -> Self {
        PlayType::from(tag.as_str())
    }
}

impl From<PlayType> for String {
    fn from(play_type: PlayType) -> Self {
        play_type.as_str().to_string()
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Play
// =============================================================================

/// A play in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Play {
    /// Display name printed on the statement.
    pub name: String,

    /// Category tag; `"type"` in catalog JSON.
    #[serde(rename = "type")]
    #[ts(as = "String")]
    pub play_type: PlayType,
}

impl Play {
    pub fn new(name: impl Into<String>, play_type: impl Into<PlayType>) -> Self {
        Play {
            name: name.into(),
            play_type: play_type.into(),
        }
    }
}

// =============================================================================
// Performance
// =============================================================================

/// One performance billed on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Foreign key into the play catalog.
    #[serde(alias = "playID")]
    pub play_id: String,

    /// Number of seats sold. Negative head counts fail to deserialize.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Performance {
            play_id: play_id.into(),
            audience,
        }
    }
}

// =============================================================================
// Invoice
// =============================================================================

/// A customer's invoice. Performance order is the rendered line order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Invoice {
            customer: customer.into(),
            performances,
        }
    }
}

// =============================================================================
// Line Result
// =============================================================================

/// One performance's computed charge and credits.
///
/// Snapshot pattern: the resolved play is copied in, so a line can be
/// rendered without going back to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineResult {
    pub play: Play,
    pub performance: Performance,
    pub amount: Money,
    pub volume_credits: u64,
}

// =============================================================================
// Statement Totals
// =============================================================================

/// The aggregated statement for one invoice.
///
/// ## Invariant
/// `total_amount == Σ line.amount` and
/// `total_volume_credits == Σ line.volume_credits`.
/// The only constructor is [`StatementTotals::from_lines`], which computes
/// both totals by folding the lines, and the fields are read-only. A fold
/// that would overflow yields no totals at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StatementTotals {
    total_amount: Money,
    total_volume_credits: u64,
    lines: Vec<LineResult>,
}

impl StatementTotals {
    /// Folds priced lines into totals.
    ///
    /// ## Errors
    /// [`StatementError::TotalOverflow`] if either sum overflows.
    pub fn from_lines(lines: Vec<LineResult>) -> StatementResult<Self> {
        let (total_amount, total_volume_credits) = lines
            .iter()
            .try_fold((Money::zero(), 0u64), |(amount, credits), line| {
                Some((
                    amount.checked_add(line.amount)?,
                    credits.checked_add(line.volume_credits)?,
                ))
            })
            .ok_or(StatementError::TotalOverflow)?;

        Ok(StatementTotals {
            total_amount,
            total_volume_credits,
            lines,
        })
    }

    #[inline]
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    #[inline]
    pub fn total_volume_credits(&self) -> u64 {
        self.total_volume_credits
    }

    /// Lines in invoice order.
    #[inline]
    pub fn lines(&self) -> &[LineResult] {
        &self.lines
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
