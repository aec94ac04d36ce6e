//! # Error Types
//!
//! Domain-specific error types for theater-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  theater-core errors (this file)                                        │
//! │  ├── PricingError     - No rule for a play type, or amount overflow     │
//! │  ├── StatementError   - Statement could not be produced                 │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  statement-cli errors (separate crate)                                  │
//! │  └── CliError         - What the operator sees                          │
//! │                                                                         │
//! │  Flow: PricingError → StatementError → CliError → stderr                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending play type or play id in every message
//! 3. Nothing here is retryable: these are data-integrity errors
//! 4. Never downgrade an error to a zero amount

use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors raised by the pricing engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The play's declared type has no row in the rule table.
    ///
    /// ## When This Occurs
    /// - The catalog lists a play as `"opera"`, `"musical"`, etc.
    /// - A typo in the catalog (`"tradegy"`)
    #[error("unknown type: {0}")]
    UnknownPlayType(String),

    /// The charge for a line does not fit in `Money`.
    ///
    /// Only reachable with a rule table that was never validated.
    #[error("amount overflows for {audience} seats")]
    AmountOverflow { audience: u32 },
}

// =============================================================================
// Statement Error
// =============================================================================

/// Errors raised while aggregating an invoice into a statement.
///
/// Every variant is fatal to the whole statement; no partial totals are
/// ever returned alongside one of these.
///
/// ## User Workflow
/// ```text
/// Invoice "BigCo" (3 performances)
///      │
///      ▼
/// Line 1: hamlet  ──► priced ✔
/// Line 2: ghost   ──► catalog miss
///      │
///      ▼
/// PlayNotFound("ghost")  ← statement aborted, line 3 never priced
///      │
///      ▼
/// Operator sees: "play not found: ghost"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    /// A performance references a play id that is absent from the catalog.
    #[error("play not found: {0}")]
    PlayNotFound(String),

    /// The pricing engine rejected one of the lines.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// The lines priced, but their sum does not fit in `Money`.
    #[error("statement total overflows")]
    TotalOverflow,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised at the boundary before aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., whitespace inside a play id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

pub type PricingResult<T> = Result<T, PricingError>;

pub type StatementResult<T> = Result<T, StatementError>;

pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PricingError::UnknownPlayType("opera".to_string());
        assert_eq!(err.to_string(), "unknown type: opera");

        let err = StatementError::PlayNotFound("ghost".to_string());
        assert_eq!(err.to_string(), "play not found: ghost");

        let err = PricingError::AmountOverflow { audience: 55 };
        assert_eq!(err.to_string(), "amount overflows for 55 seats");
    }

    #[test]
    fn test_pricing_error_propagates_unchanged() {
        let pricing = PricingError::UnknownPlayType("opera".to_string());
        let statement: StatementError = pricing.clone().into();

        assert_eq!(statement.to_string(), pricing.to_string());
        assert_eq!(statement, StatementError::Pricing(pricing));
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "customer".to_string(),
        };
        assert_eq!(err.to_string(), "customer is required");

        let err = ValidationError::OutOfRange {
            field: "audience".to_string(),
            min: 0,
            max: 100_000,
        };
        assert_eq!(err.to_string(), "audience must be between 0 and 100000");
    }
}
