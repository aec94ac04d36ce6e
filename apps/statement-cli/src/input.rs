//! # Input Loading
//!
//! Reads the catalog, invoices and optional rule table from JSON files and
//! validates them before anything is priced.
//!
//! ## File Formats
//! ```text
//! plays.json     { "hamlet": { "name": "Hamlet", "type": "tragedy" }, ... }
//! invoices.json  [ { "customer": "BigCo",
//!                    "performances": [ { "playId": "hamlet", "audience": 55 } ] } ]
//! rules.json     { "tragedy": { "baseAmount": 40000, ... }, "comedy": ..., ... }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use theater_core::validation::{validate_invoice, validate_play};
use theater_core::{Invoice, Play, RuleTable};

use crate::error::{CliError, CliResult};

/// Play catalog keyed by play id, ordered for stable logs.
pub type Catalog = BTreeMap<String, Play>;

pub fn load_catalog(path: &Path) -> CliResult<Catalog> {
    let catalog = parse_catalog(&read(path)?, path)?;
    info!(path = %path.display(), plays = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

pub fn load_invoices(path: &Path) -> CliResult<Vec<Invoice>> {
    let invoices = parse_invoices(&read(path)?, path)?;
    info!(path = %path.display(), invoices = invoices.len(), "Invoices loaded");
    Ok(invoices)
}

/// Loads the rule table, or the standard table when no path is configured.
pub fn load_rules(path: Option<&Path>) -> CliResult<RuleTable> {
    match path {
        Some(path) => {
            let rules = parse_rules(&read(path)?, path)?;
            info!(path = %path.display(), "Custom rule table loaded");
            Ok(rules)
        }
        None => {
            debug!("Using standard rule table");
            Ok(RuleTable::STANDARD)
        }
    }
}

pub fn parse_catalog(json: &str, path: &Path) -> CliResult<Catalog> {
    let catalog: Catalog = parse(json, path)?;
    for (play_id, play) in &catalog {
        validate_play(play_id, play).map_err(|source| CliError::Validation {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(catalog)
}

pub fn parse_invoices(json: &str, path: &Path) -> CliResult<Vec<Invoice>> {
    let invoices: Vec<Invoice> = parse(json, path)?;
    for invoice in &invoices {
        validate_invoice(invoice).map_err(|source| CliError::Validation {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(invoices)
}

pub fn parse_rules(json: &str, path: &Path) -> CliResult<RuleTable> {
    let rules: RuleTable = parse(json, path)?;
    rules.validate().map_err(|source| CliError::Validation {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(rules)
}

fn read(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: DeserializeOwned>(json: &str, path: &Path) -> CliResult<T> {
    serde_json::from_str(json).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use theater_core::{Money, Performance, PlayType, ValidationError};

    fn path() -> &'static Path {
        Path::new("test.json")
    }

    #[test]
    fn test_parse_catalog() {
        let json = r#"{
            "hamlet": {"name": "Hamlet", "type": "tragedy"},
            "as-like": {"name": "As You Like It", "type": "comedy"},
            "tosca": {"name": "Tosca", "type": "opera"}
        }"#;

        let catalog = parse_catalog(json, path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog["hamlet"].play_type, PlayType::Tragedy);
        // Unknown types load fine; pricing reports them.
        assert_eq!(
            catalog["tosca"].play_type,
            PlayType::Unknown("opera".to_string())
        );
    }

    #[test]
    fn test_parse_catalog_rejects_blank_name() {
        let json = r#"{"hamlet": {"name": " ", "type": "tragedy"}}"#;
        assert!(matches!(
            parse_catalog(json, path()),
            Err(CliError::Validation { .. })
        ));
    }

    #[test]
    fn test_parse_invoices() {
        let json = r#"[
            {"customer": "BigCo", "performances": [
                {"playID": "hamlet", "audience": 55},
                {"playId": "as-like", "audience": 35}
            ]}
        ]"#;

        let invoices = parse_invoices(json, path()).unwrap();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].performances[0], Performance::new("hamlet", 55));
        assert_eq!(invoices[0].performances[1], Performance::new("as-like", 35));
    }

    #[test]
    fn test_parse_invoices_rejects_negative_audience() {
        let json = r#"[{"customer": "BigCo", "performances": [{"playId": "hamlet", "audience": -3}]}]"#;
        assert!(matches!(
            parse_invoices(json, path()),
            Err(CliError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_invoices_rejects_blank_customer() {
        let json = r#"[{"customer": "", "performances": []}]"#;
        assert!(matches!(
            parse_invoices(json, path()),
            Err(CliError::Validation { .. })
        ));
    }

    #[test]
    fn test_parse_rules() {
        let json = serde_json::to_string(&RuleTable::STANDARD).unwrap();
        assert_eq!(parse_rules(&json, path()).unwrap(), RuleTable::STANDARD);

        let mut bad = RuleTable::STANDARD;
        bad.pastoral.credit_bonus_divisor = Some(0);
        let json = serde_json::to_string(&bad).unwrap();
        assert!(matches!(
            parse_rules(&json, path()),
            Err(CliError::Validation { .. })
        ));
    }

    #[test]
    fn test_parse_rules_rejects_oversized_rate() {
        let mut huge = RuleTable::STANDARD;
        huge.tragedy.overage_per_seat = Money::from_cents(i64::MAX / 2);
        let json = serde_json::to_string(&huge).unwrap();

        let err = parse_rules(&json, path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Validation { source: ValidationError::OutOfRange { ref field, .. }, .. }
                if field == "tragedy.overagePerSeat"
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/plays.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/plays.json"));
    }

    #[test]
    fn test_shipped_data_files() {
        let rules = parse_rules(include_str!("../data/rules.json"), path()).unwrap();
        assert_eq!(rules, RuleTable::STANDARD);

        let catalog = parse_catalog(include_str!("../data/plays.json"), path()).unwrap();
        let invoices = parse_invoices(include_str!("../data/invoices.json"), path()).unwrap();
        assert_eq!(invoices.len(), 2);
        for invoice in &invoices {
            for performance in &invoice.performances {
                assert!(catalog.contains_key(&performance.play_id));
            }
        }
    }

    #[test]
    fn test_no_rules_path_uses_standard() {
        assert_eq!(load_rules(None).unwrap(), RuleTable::STANDARD);
    }
}
