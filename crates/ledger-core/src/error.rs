//! # Error Types
//!
//! Domain-specific error types for ledger-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  ledger-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  ledger-db errors (separate crate)                                  │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  API errors (apps/api)                                              │
//! │  └── ApiError         - HTTP status + JSON envelope                 │
//! │                                                                     │
//! │  Flow: ValidationError / DbError → ApiError → HTTP response         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never bare Strings
//! 3. Each variant's Display text IS the user-facing message; the API layer
//!    forwards it verbatim in the JSON `message` field

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a request payload fails a business rule. The API layer
/// maps every variant to HTTP 400 and embeds the Display text in the
/// response body, so the wording here is part of the external contract.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Client name shorter than 2 characters after trimming.
    #[error("Client name must be at least 2 characters")]
    ClientNameTooShort,

    /// client_id missing, or not coercible to an integer.
    #[error("Invalid client id")]
    InvalidClientId,

    /// Invoice payload carried an empty (or absent) items list.
    #[error("At least one item is required")]
    ItemsRequired,

    /// invoice_date or due_date failed strict YYYY-MM-DD parsing.
    #[error("Invalid date format (use YYYY-MM-DD)")]
    InvalidDateFormat,

    /// An item's quantity, unit_price, or gst_percentage was non-numeric.
    #[error("Invalid item numeric values")]
    InvalidItemNumbers,
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_the_wire_contract() {
        assert_eq!(
            ValidationError::ClientNameTooShort.to_string(),
            "Client name must be at least 2 characters"
        );
        assert_eq!(ValidationError::InvalidClientId.to_string(), "Invalid client id");
        assert_eq!(
            ValidationError::ItemsRequired.to_string(),
            "At least one item is required"
        );
        assert_eq!(
            ValidationError::InvalidDateFormat.to_string(),
            "Invalid date format (use YYYY-MM-DD)"
        );
        assert_eq!(
            ValidationError::InvalidItemNumbers.to_string(),
            "Invalid item numeric values"
        );
    }
}
