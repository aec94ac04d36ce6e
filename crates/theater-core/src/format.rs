//! # Statement Formatter
//!
//! Renders [`StatementTotals`] as the plain-text statement handed to the
//! customer.
//!
//! ## Layout
//! ```text
//! Statement for BigCo
//!   Hamlet: $650.00 (55 seats)
//!   As You Like It: $580.00 (35 seats)
//! Amount owed is $1,230.00
//! You earned 37 credits
//! ```

use crate::catalog::PlayCatalog;
use crate::error::StatementResult;
use crate::statement::compute_statement;
use crate::types::{Invoice, StatementTotals};

/// Renders computed totals for `customer`. Every line ends with `\n`.
pub fn render_text(customer: &str, totals: &StatementTotals) -> String {
    let mut out = format!("Statement for {customer}\n");
    for line in totals.lines() {
        out.push_str(&format!(
            "  {}: {} ({} seats)\n",
            line.play.name, line.amount, line.performance.audience
        ));
    }
    out.push_str(&format!("Amount owed is {}\n", totals.total_amount()));
    out.push_str(&format!(
        "You earned {} credits\n",
        totals.total_volume_credits()
    ));
    out
}

/// Computes and renders a statement in one call.
///
/// ```rust
/// use std::collections::HashMap;
/// use theater_core::format::render_statement;
/// use theater_core::types::{Invoice, Performance, Play};
///
/// let mut plays = HashMap::new();
/// plays.insert("hamlet".to_string(), Play::new("Hamlet", "tragedy"));
///
/// let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
/// let text = render_statement(&invoice, &plays).unwrap();
/// assert!(text.contains("Hamlet: $650.00 (55 seats)"));
/// ```
pub fn render_statement<C>(invoice: &Invoice, catalog: &C) -> StatementResult<String>
where
    C: PlayCatalog + ?Sized,
{
    let totals = compute_statement(invoice, catalog)?;
    Ok(render_text(&invoice.customer, &totals))
}
