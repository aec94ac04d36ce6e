//! # Statement Aggregator
//!
//! Folds the pricing engine over every performance on an invoice.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Invoice.performances (in order)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.play(play_id) ── None ──► Err(PlayNotFound)        ─┐          │
//! │       │ Some(play)                                            │          │
//! │       ▼                                                       │ abort,  │
//! │  amount_for / volume_credits_for ── Err ──► Err(Pricing(..)) ─┤ no      │
//! │       │ Ok                                                    │ partial │
//! │       ▼                                                       │ totals  │
//! │  LineResult ──► collect ──► StatementTotals::from_lines      ─┘          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All-or-nothing: the first failing line aborts the statement.
//!
//! ## Example
//! ```rust
//! use std::collections::HashMap;
//! use theater_core::statement::compute_statement;
//! use theater_core::types::{Invoice, Performance, Play};
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
//! assert_eq!(totals.total_amount().cents(), 123_000);
//! assert_eq!(totals.total_volume_credits(), 37);
//! ```

use tracing::{debug, warn};

use crate::catalog::PlayCatalog;
use crate::error::{StatementError, StatementResult};
use crate::rules::RuleTable;
use crate::types::{Invoice, LineResult, Performance, StatementTotals};

/// Computes a statement under the standard rule table.
pub fn compute_statement<C>(invoice: &Invoice, catalog: &C) -> StatementResult<StatementTotals>
where
    C: PlayCatalog + ?Sized,
{
    compute_statement_with(&RuleTable::STANDARD, invoice, catalog)
}

/// Computes a statement under a caller-supplied rule table.
///
/// ## Errors
/// - [`StatementError::PlayNotFound`] if a performance's play id is missing
/// - [`StatementError::Pricing`] if a play's type has no rule or a line's
///   charge overflows
/// - [`StatementError::TotalOverflow`] if the lines do not sum
pub fn compute_statement_with<C>(
    rules: &RuleTable,
    invoice: &Invoice,
    catalog: &C,
) -> StatementResult<StatementTotals>
where
    C: PlayCatalog + ?Sized,
{
    let totals = invoice
        .performances
        .iter()
        .map(|performance| price_line(rules, performance, catalog))
        .collect::<StatementResult<Vec<_>>>()
        .and_then(StatementTotals::from_lines)
        .inspect_err(|e| {
            warn!(customer = %invoice.customer, error = %e, "Statement aborted");
        })?;

    debug!(
        customer = %invoice.customer,
        lines = totals.lines().len(),
        total_cents = totals.total_amount().cents(),
        credits = totals.total_volume_credits(),
        "Statement computed"
    );

    Ok(totals)
}

fn price_line<C>(
    rules: &RuleTable,
    performance: &Performance,
    catalog: &C,
) -> StatementResult<LineResult>
where
    C: PlayCatalog + ?Sized,
{
    let play = catalog
        .play(&performance.play_id)
        .ok_or_else(|| StatementError::PlayNotFound(performance.play_id.clone()))?;

    let amount = rules.amount_for(performance, play)?;
    let volume_credits = rules.volume_credits_for(performance, play)?;

    debug!(
        play_id = %performance.play_id,
        play_type = %play.play_type,
        audience = performance.audience,
        amount_cents = amount.cents(),
        volume_credits,
        "Priced performance"
    );

    Ok(LineResult {
        play: play.clone(),
        performance: performance.clone(),
        amount,
        volume_credits,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
