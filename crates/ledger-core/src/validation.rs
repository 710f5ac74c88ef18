//! # Validation Module
//!
//! Input validation rules for the invoicing API.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Payload shaping (apps/api)                                │
//! │  ├── JSON parsing ("Invalid JSON payload")                          │
//! │  └── Field coercion (numeric strings, absent fields)                │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rules                              │
//! │  ├── Client name length                                             │
//! │  └── Strict calendar-date parsing                                   │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Application-level store checks (ledger-db callers)        │
//! │  ├── Case-insensitive duplicate client name                         │
//! │  └── client_id references an existing client                        │
//! │                                                                     │
//! │  The schema carries no UNIQUE or FK constraints; layer 3 is it.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};
use crate::MIN_CLIENT_NAME_LEN;

// =============================================================================
// Client Name
// =============================================================================

/// Validates and normalizes a client name.
///
/// ## Rules
/// - Surrounding whitespace is trimmed first; the trimmed form is what gets
///   stored and what the duplicate check runs against
/// - Minimum 2 characters after trimming
///
/// ## Example
/// ```rust
/// use ledger_core::validation::validate_client_name;
///
/// assert_eq!(validate_client_name(" ab ").unwrap(), "ab");
/// assert!(validate_client_name("a").is_err());
/// assert!(validate_client_name("   ").is_err());
/// ```
pub fn validate_client_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.chars().count() < MIN_CLIENT_NAME_LEN {
        return Err(ValidationError::ClientNameTooShort);
    }

    Ok(name.to_string())
}

// =============================================================================
// Calendar Dates
// =============================================================================

/// Parses an invoice date field strictly as `YYYY-MM-DD`.
///
/// Rejects impossible calendar dates (month 13, day 32) as well as any
/// other format. There is no cross-field check between invoice_date and
/// due_date; each is validated alone.
///
/// ## Example
/// ```rust
/// use ledger_core::validation::parse_date;
///
/// assert!(parse_date("2024-01-31").is_ok());
/// assert!(parse_date("2024-13-01").is_err()); // no month 13
/// assert!(parse_date("31/01/2024").is_err());
/// ```
pub fn parse_date(value: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDateFormat)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_name_is_trimmed() {
        assert_eq!(validate_client_name(" ab ").unwrap(), "ab");
        assert_eq!(validate_client_name("Acme Traders").unwrap(), "Acme Traders");
    }

    #[test]
    fn test_client_name_minimum_length() {
        assert!(matches!(
            validate_client_name("a"),
            Err(ValidationError::ClientNameTooShort)
        ));
        // Whitespace padding does not rescue a short name
        assert!(validate_client_name("  a  ").is_err());
        assert!(validate_client_name("").is_err());
        // Exactly two characters is accepted
        assert!(validate_client_name("ab").is_ok());
    }

    #[test]
    fn test_parse_date_accepts_iso_dates() {
        let date = parse_date("2024-02-29").unwrap(); // leap year
        assert_eq!(date.to_string(), "2024-02-29");
    }

    #[test]
    fn test_parse_date_rejects_bad_calendar_values() {
        assert!(matches!(
            parse_date("2024-13-01"),
            Err(ValidationError::InvalidDateFormat)
        ));
        assert!(parse_date("2023-02-29").is_err()); // not a leap year
        assert!(parse_date("2024-01-32").is_err());
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("01-15-2024").is_err());
        assert!(parse_date("2024/01/15").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("yesterday").is_err());
    }
}
