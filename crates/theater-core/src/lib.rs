//! # theater-core: Pure Billing Logic for Theater Statements
//!
//! This crate prices performances and folds them into customer statements.
//! Everything here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Theater Billing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    statement-cli (apps/)                        │   │
//! │  │    env config ──► read JSON ──► validate ──► print statements   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ theater-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   rules   │  │  pricing  │  │ statement │  │  format   │  │   │
//! │  │   │ RuleTable │─►│ amount_for│─►│ aggregate │─►│render_text│  │   │
//! │  │   │           │  │ credits   │  │ totals    │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └─────▲─────┘  └───────────┘  │   │
//! │  │                                       │                         │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌─────┴─────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   types   │  │  catalog  │  │ validation│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic
//! - [`types`] - Play, Performance, Invoice, LineResult, StatementTotals
//! - [`rules`] - Pricing rule table
//! - [`pricing`] - Per-performance amount and volume credits
//! - [`catalog`] - Play lookup trait
//! - [`statement`] - Invoice aggregation
//! - [`format`] - Plain-text statement rendering
//! - [`validation`] - Boundary checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same invoice + catalog = same statement
//! 2. **Integer Money**: all amounts are cents (i64)
//! 3. **All-or-Nothing**: a statement either prices every line or fails
//! 4. **Explicit Errors**: unknown types and missing plays are typed errors
//!
//! ## Example Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use theater_core::{render_text, compute_statement, Invoice, Performance, Play};
//!
//! let mut plays = HashMap::new();
//! plays.insert("hamlet".to_string(), Play::new("Hamlet", "tragedy"));
//! plays.insert("as-like".to_string(), Play::new("As You Like It", "comedy"));
//!
//! let invoice = Invoice::new(
//!     "BigCo",
//!     vec![Performance::new("hamlet", 55), Performance::new("as-like", 35)],
//! );
//!
//! let totals = compute_statement(&invoice, &plays).unwrap();
//! assert_eq!(totals.total_amount().to_string(), "$1,230.00");
//!
//! let text = render_text(&invoice.customer, &totals);
//! assert!(text.starts_with("Statement for BigCo\n"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod format;
pub mod money;
pub mod pricing;
pub mod rules;
pub mod statement;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::PlayCatalog;
pub use error::{PricingError, StatementError, ValidationError};
pub use format::{render_statement, render_text};
pub use money::Money;
pub use pricing::{amount_for, volume_credits_for};
pub use rules::{PricingRule, RuleTable, MAX_RULE_CHARGE};
pub use statement::{compute_statement, compute_statement_with};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest audience accepted at the boundary.
///
/// Well above any real venue; keeps `rate × seats` far from `i64` limits
/// even under custom rule tables.
pub const MAX_AUDIENCE: u32 = 100_000;

/// Maximum length of a play id.
pub const MAX_PLAY_ID_LEN: usize = 64;

/// Maximum length of a play name or customer name.
pub const MAX_NAME_LEN: usize = 200;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_core_types_are_send_sync() {
        assert_send_sync::<Invoice>();
        assert_send_sync::<Play>();
        assert_send_sync::<StatementTotals>();
        assert_send_sync::<RuleTable>();
        assert_send_sync::<StatementError>();
    }
}
