//! # Theater Statement Printer
//!
//! Prints customer statements for every invoice in a JSON file.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  env + args ──► CliConfig                                               │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  plays.json ──► Catalog ─┐                                              │
//! │  rules.json ──► RuleTable├──► compute_statement_with ──► stdout         │
//! │  invoices.json ──► [Invoice] (one statement per invoice)                │
//! │                                                                         │
//! │  logs ──► stderr (RUST_LOG, default info)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p theater-statement-cli -- --plays data/plays.json --invoices data/invoices.json
//!
//! THEATER_OUTPUT=json cargo run -p theater-statement-cli
//! ```

mod config;
mod error;
mod input;

use std::env;
use std::process::ExitCode;

use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use theater_core::{compute_statement_with, render_text, Invoice, RuleTable, StatementTotals};

use crate::config::{CliConfig, Command, OutputFormat, USAGE};
use crate::error::{CliError, CliResult};
use crate::input::{load_catalog, load_invoices, load_rules, Catalog};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Statement run failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> CliResult<()> {
    let config = match CliConfig::load()?.apply_args(env::args().skip(1))? {
        Command::Run(config) => config,
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
    };
    info!(
        plays = %config.plays_path.display(),
        invoices = %config.invoices_path.display(),
        output = ?config.output,
        "Configuration loaded"
    );

    let rules = load_rules(config.rules_path.as_deref())?;
    let catalog = load_catalog(&config.plays_path)?;
    let invoices = load_invoices(&config.invoices_path)?;

    for invoice in &invoices {
        print!("{}", statement_for(&rules, &catalog, invoice, config.output)?);
    }

    info!(statements = invoices.len(), "All statements printed");
    Ok(())
}

/// JSON shape of one statement.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatementOutput<'a> {
    customer: &'a str,
    #[serde(flatten)]
    totals: &'a StatementTotals,
}

fn statement_for(
    rules: &RuleTable,
    catalog: &Catalog,
    invoice: &Invoice,
    output: OutputFormat,
) -> CliResult<String> {
    let totals =
        compute_statement_with(rules, invoice, catalog).map_err(|source| CliError::Statement {
            customer: invoice.customer.clone(),
            source,
        })?;

    match output {
        OutputFormat::Text => Ok(render_text(&invoice.customer, &totals)),
        OutputFormat::Json => {
            let doc = StatementOutput {
                customer: &invoice.customer,
                totals: &totals,
            };
            Ok(serde_json::to_string_pretty(&doc)? + "\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use theater_core::{Performance, Play, StatementError};

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert("hamlet".to_string(), Play::new("Hamlet", "tragedy"));
        catalog.insert("as-like".to_string(), Play::new("As You Like It", "comedy"));
        catalog
    }

    fn big_co() -> Invoice {
        Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
            ],
        )
    }

    #[test]
    fn test_text_statement() {
        let text =
            statement_for(&RuleTable::STANDARD, &catalog(), &big_co(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Statement for BigCo\n"));
        assert!(text.contains("Amount owed is $1,230.00\n"));
    }

    #[test]
    fn test_json_statement() {
        let json =
            statement_for(&RuleTable::STANDARD, &catalog(), &big_co(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["customer"], "BigCo");
        assert_eq!(value["totalAmount"], 123_000);
        assert_eq!(value["totalVolumeCredits"], 37);
        assert_eq!(value["lines"][0]["play"]["type"], "tragedy");
        assert_eq!(value["lines"][1]["volumeCredits"], 12);
        assert_eq!(value["lines"][1]["performance"]["playId"], "as-like");
    }

    #[test]
    fn test_failing_statement_prints_nothing() {
        let invoice = Invoice::new("Haunted", vec![Performance::new("ghost", 10)]);
        let err = statement_for(&RuleTable::STANDARD, &catalog(), &invoice, OutputFormat::Text)
            .unwrap_err();

        assert!(matches!(
            err,
            CliError::Statement { ref customer, source: StatementError::PlayNotFound(ref id) }
                if customer == "Haunted" && id == "ghost"
        ));
    }
}
