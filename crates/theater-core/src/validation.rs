//! # Validation Module
//!
//! Boundary checks for catalog and invoice data, run before aggregation.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                       │
//! │  ├── Shape of the JSON                                                  │
//! │  └── Negative audiences rejected by the u32 type                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Empty / oversized names and ids                                    │
//! │  └── Audience ceiling                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Aggregation                                                   │
//! │  ├── PlayNotFound (foreign key)                                         │
//! │  └── UnknownPlayType (no pricing rule)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Play types are deliberately NOT checked here; an unknown type is reported
//! by the pricing engine when the play is billed.
//!
//! ## Usage
//! ```rust
//! use theater_core::validation::{validate_audience, validate_play_id};
//!
//! assert!(validate_play_id("as-like").is_ok());
//! assert!(validate_audience(55).is_ok());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Invoice, Play};
use crate::{MAX_AUDIENCE, MAX_NAME_LEN, MAX_PLAY_ID_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a play id.
///
/// ## Rules
/// - Must not be empty
/// - At most `MAX_PLAY_ID_LEN` characters
/// - No whitespace (ids are lookup keys, not display text)
///
/// ```rust
/// use theater_core::validation::validate_play_id;
///
/// assert!(validate_play_id("hamlet").is_ok());
/// assert!(validate_play_id("").is_err());
/// assert!(validate_play_id("as like").is_err());
/// ```
pub fn validate_play_id(play_id: &str) -> ValidationResult<()> {
    if play_id.is_empty() {
        return Err(ValidationError::Required {
            field: "playId".to_string(),
        });
    }

    if play_id.chars().count() > MAX_PLAY_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "playId".to_string(),
            max: MAX_PLAY_ID_LEN,
        });
    }

    if play_id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "playId".to_string(),
            reason: "must not contain whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a play's display name.
pub fn validate_play_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name)
}

/// Validates an invoice's customer name.
pub fn validate_customer(customer: &str) -> ValidationResult<()> {
    validate_text("customer", customer)
}

fn validate_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an audience size.
///
/// ## Rules
/// - Zero is allowed (a performance nobody attended still pays the base)
/// - Must not exceed `MAX_AUDIENCE`
pub fn validate_audience(audience: u32) -> ValidationResult<()> {
    if audience > MAX_AUDIENCE {
        return Err(ValidationError::OutOfRange {
            field: "audience".to_string(),
            min: 0,
            max: MAX_AUDIENCE as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates a catalog entry.
pub fn validate_play(play_id: &str, play: &Play) -> ValidationResult<()> {
    validate_play_id(play_id)?;
    validate_play_name(&play.name)
}

/// Validates an invoice and every performance on it.
///
/// An invoice with no performances is valid and bills $0.00.
pub fn validate_invoice(invoice: &Invoice) -> ValidationResult<()> {
    validate_customer(&invoice.customer)?;

    for performance in &invoice.performances {
        validate_play_id(&performance.play_id)?;
        validate_audience(performance.audience)?;
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
