//! Error types for the statement CLI.

use std::path::PathBuf;

use theater_core::{StatementError, ValidationError};

use crate::config::ConfigError;

/// Statement CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid data in {path}: {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("Statement for {customer} failed: {source}")]
    Statement {
        customer: String,
        #[source]
        source: StatementError,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_error_names_customer_and_cause() {
        let err = CliError::Statement {
            customer: "BigCo".to_string(),
            source: StatementError::PlayNotFound("ghost".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Statement for BigCo failed: play not found: ghost"
        );
    }
}
