//! Statement CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, then command-line flags override individual fields.
//!
//! ## Variables
//! ```text
//! THEATER_PLAYS_PATH      catalog JSON        (default: data/plays.json)
//! THEATER_INVOICES_PATH   invoices JSON       (default: data/invoices.json)
//! THEATER_RULES_PATH      rule table JSON     (optional, standard table if unset)
//! THEATER_OUTPUT          text | json         (default: text)
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// How statements are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The printed customer statement.
    #[default]
    Text,
    /// Structured totals, one JSON document per invoice.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("THEATER_OUTPUT".to_string())),
        }
    }
}

/// Statement CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Play catalog file
    pub plays_path: PathBuf,

    /// Invoices file
    pub invoices_path: PathBuf,

    /// Alternative pricing rules (optional)
    pub rules_path: Option<PathBuf>,

    /// Output format
    pub output: OutputFormat,
}

/// Result of parsing the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliConfig),
    Help,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn load_from<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CliConfig {
            plays_path: var("THEATER_PLAYS_PATH")
                .unwrap_or_else(|| "data/plays.json".to_string())
                .into(),

            invoices_path: var("THEATER_INVOICES_PATH")
                .unwrap_or_else(|| "data/invoices.json".to_string())
                .into(),

            rules_path: var("THEATER_RULES_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),

            output: match var("THEATER_OUTPUT") {
                Some(value) => value.parse()?,
                None => OutputFormat::default(),
            },
        };

        Ok(config)
    }

    /// Apply command-line flags on top of this configuration.
    ///
    /// `args` excludes the program name.
    pub fn apply_args<I>(mut self, args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--plays" | "-p" => {
                    self.plays_path = args.next().ok_or(ConfigError::MissingValue(arg))?.into();
                }
                "--invoices" | "-i" => {
                    self.invoices_path =
                        args.next().ok_or(ConfigError::MissingValue(arg))?.into();
                }
                "--rules" | "-r" => {
                    let path = args.next().ok_or(ConfigError::MissingValue(arg))?;
                    self.rules_path = Some(path.into());
                }
                "--json" => self.output = OutputFormat::Json,
                "--text" => self.output = OutputFormat::Text,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(Command::Run(self))
    }
}

pub const USAGE: &str = "\
Theater Statement Printer

Usage: statement [OPTIONS]

Options:
  -p, --plays <PATH>      Play catalog JSON (env: THEATER_PLAYS_PATH)
  -i, --invoices <PATH>   Invoices JSON (env: THEATER_INVOICES_PATH)
  -r, --rules <PATH>      Pricing rule table JSON (env: THEATER_RULES_PATH)
      --json              Print statement totals as JSON (env: THEATER_OUTPUT=json)
      --text              Print text statements (default)
  -h, --help              Show this help message
";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}
