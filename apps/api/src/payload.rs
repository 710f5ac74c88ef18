//! Request payload parsing.
//!
//! The front end is lenient about types: numeric fields may arrive as JSON
//! numbers or as numeric strings, and optional fields may simply be absent.
//! Bodies are read as raw bytes and parsed here rather than through a typed
//! extractor, so a malformed body always yields the fixed
//! "Invalid JSON payload" response regardless of content-type headers.
//!
//! ## Coercion Rules
//! ```text
//! client_id:  integer | float (truncated) | integer string  → i64
//! quantity /
//! unit_price /
//! gst_percentage:  number | numeric string | ABSENT (→ 0)   → f64
//! status:     absent or empty → "Draft", then trimmed
//! billing_address:  trimmed, absent → ""
//! customer_email, notes:  absent or empty → None, otherwise VERBATIM
//! ```

use serde_json::Value;

use crate::error::ApiError;
use ledger_core::error::{ValidationError, ValidationResult};
use ledger_core::types::{NewInvoice, NewInvoiceItem};
use ledger_core::validation::parse_date;
use ledger_core::DEFAULT_INVOICE_STATUS;

/// Parses a raw request body as JSON.
pub fn parse_json(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::InvalidJson)
}

/// Extracts the raw client name from a payload; missing or non-string
/// values become the empty string (and fail length validation downstream).
pub fn client_name(payload: &Value) -> &str {
    payload.get("name").and_then(Value::as_str).unwrap_or("")
}

/// Shapes a raw invoice payload into a validated [`NewInvoice`].
///
/// Checks run in a fixed order so the first failing rule determines the
/// response message: client id, items present, dates, item numerics.
pub fn parse_new_invoice(payload: &Value) -> ValidationResult<NewInvoice> {
    let client_id = coerce_client_id(payload.get("client_id"))?;

    let raw_items = match payload.get("items") {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    };
    if raw_items.is_empty() {
        return Err(ValidationError::ItemsRequired);
    }

    let invoice_date = date_field(payload.get("invoice_date"))?;
    let due_date = date_field(payload.get("due_date"))?;

    // Status defaults only on absent/empty input and is trimmed afterwards,
    // so a whitespace-only status is stored as "" rather than "Draft"
    let status = payload
        .get("status")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_INVOICE_STATUS)
        .trim()
        .to_string();
    let billing_address = trimmed_field(payload, "billing_address").unwrap_or_default();
    let customer_email = verbatim_field(payload, "customer_email");
    let notes = verbatim_field(payload, "notes");

    let items = raw_items
        .iter()
        .map(parse_item)
        .collect::<ValidationResult<Vec<_>>>()?;

    Ok(NewInvoice {
        client_id,
        invoice_date,
        due_date,
        status,
        billing_address,
        customer_email,
        notes,
        items,
    })
}

fn parse_item(value: &Value) -> ValidationResult<NewInvoiceItem> {
    let description = value
        .get("description")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
        .to_string();

    Ok(NewInvoiceItem {
        description,
        quantity: numeric_field(value.get("quantity"))?,
        unit_price: numeric_field(value.get("unit_price"))?,
        gst_percentage: numeric_field(value.get("gst_percentage"))?,
    })
}

/// Trimmed string field; absent, non-string, or blank values become None.
fn trimmed_field(payload: &Value, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// String field stored exactly as provided; only absent, non-string, or
/// empty values become None. Surrounding whitespace is kept.
fn verbatim_field(payload: &Value, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn date_field(value: Option<&Value>) -> ValidationResult<chrono::NaiveDate> {
    match value {
        Some(Value::String(s)) => parse_date(s),
        _ => Err(ValidationError::InvalidDateFormat),
    }
}

fn coerce_client_id(value: Option<&Value>) -> ValidationResult<i64> {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                // Fractional ids truncate toward zero, mirroring the loose
                // integer coercion the front end has always relied on
                Ok(f as i64)
            } else {
                Err(ValidationError::InvalidClientId)
            }
        }
        Some(Value::String(s)) => s.trim().parse().map_err(|_| ValidationError::InvalidClientId),
        _ => Err(ValidationError::InvalidClientId),
    }
}

/// Numeric item field: number or numeric string; an ABSENT field counts as
/// zero, but an explicit null or other type is rejected.
fn numeric_field(value: Option<&Value>) -> ValidationResult<f64> {
    match value {
        None => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().ok_or(ValidationError::InvalidItemNumbers),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidItemNumbers),
        Some(_) => Err(ValidationError::InvalidItemNumbers),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_payload() -> Value {
        json!({
            "client_id": 1,
            "invoice_date": "2024-01-15",
            "due_date": "2024-02-15",
            "items": [
                {"description": "Widget", "quantity": 2, "unit_price": 100, "gst_percentage": 10}
            ]
        })
    }

    #[test]
    fn test_parse_json_rejects_malformed_bodies() {
        assert!(matches!(parse_json(b"{not json"), Err(ApiError::InvalidJson)));
        assert!(parse_json(b"{\"name\": \"ok\"}").is_ok());
    }

    #[test]
    fn test_happy_path() {
        let invoice = parse_new_invoice(&base_payload()).unwrap();
        assert_eq!(invoice.client_id, 1);
        assert_eq!(invoice.status, "Draft");
        assert_eq!(invoice.billing_address, "");
        assert_eq!(invoice.customer_email, None);
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].quantity, 2.0);
    }

    #[test]
    fn test_client_id_coercions() {
        let mut payload = base_payload();

        payload["client_id"] = json!("3");
        assert_eq!(parse_new_invoice(&payload).unwrap().client_id, 3);

        payload["client_id"] = json!(3.9);
        assert_eq!(parse_new_invoice(&payload).unwrap().client_id, 3);

        payload["client_id"] = json!("three");
        assert!(matches!(
            parse_new_invoice(&payload),
            Err(ValidationError::InvalidClientId)
        ));

        payload.as_object_mut().unwrap().remove("client_id");
        assert!(matches!(
            parse_new_invoice(&payload),
            Err(ValidationError::InvalidClientId)
        ));
    }

    #[test]
    fn test_items_must_be_non_empty() {
        let mut payload = base_payload();
        payload["items"] = json!([]);
        assert!(matches!(
            parse_new_invoice(&payload),
            Err(ValidationError::ItemsRequired)
        ));

        payload.as_object_mut().unwrap().remove("items");
        assert!(matches!(
            parse_new_invoice(&payload),
            Err(ValidationError::ItemsRequired)
        ));
    }

    #[test]
    fn test_dates_validated_strictly() {
        let mut payload = base_payload();
        payload["invoice_date"] = json!("2024-13-01");
        assert!(matches!(
            parse_new_invoice(&payload),
            Err(ValidationError::InvalidDateFormat)
        ));

        let mut payload = base_payload();
        payload.as_object_mut().unwrap().remove("due_date");
        assert!(parse_new_invoice(&payload).is_err());
    }

    #[test]
    fn test_item_numeric_coercions() {
        let mut payload = base_payload();
        payload["items"][0]["quantity"] = json!("2.5");
        assert_eq!(parse_new_invoice(&payload).unwrap().items[0].quantity, 2.5);

        // Absent numeric fields default to zero
        let mut payload = base_payload();
        payload["items"][0].as_object_mut().unwrap().remove("gst_percentage");
        assert_eq!(parse_new_invoice(&payload).unwrap().items[0].gst_percentage, 0.0);

        let mut payload = base_payload();
        payload["items"][0]["unit_price"] = json!("a lot");
        assert!(matches!(
            parse_new_invoice(&payload),
            Err(ValidationError::InvalidItemNumbers)
        ));

        let mut payload = base_payload();
        payload["items"][0]["quantity"] = json!(null);
        assert!(parse_new_invoice(&payload).is_err());
    }

    #[test]
    fn test_status_defaults_only_on_empty_then_trims() {
        let mut payload = base_payload();
        payload["status"] = json!("");
        assert_eq!(parse_new_invoice(&payload).unwrap().status, "Draft");

        payload["status"] = json!(" Sent ");
        assert_eq!(parse_new_invoice(&payload).unwrap().status, "Sent");

        // Whitespace-only is not empty: it survives the default and trims
        // down to an empty stored status
        payload["status"] = json!("  ");
        assert_eq!(parse_new_invoice(&payload).unwrap().status, "");
    }

    #[test]
    fn test_email_and_notes_stored_verbatim() {
        let mut payload = base_payload();
        payload["customer_email"] = json!("  user@example.com  ");
        payload["notes"] = json!(" ship friday ");

        let invoice = parse_new_invoice(&payload).unwrap();
        assert_eq!(
            invoice.customer_email.as_deref(),
            Some("  user@example.com  ")
        );
        assert_eq!(invoice.notes.as_deref(), Some(" ship friday "));

        payload["customer_email"] = json!("");
        let invoice = parse_new_invoice(&payload).unwrap();
        assert_eq!(invoice.customer_email, None);
    }

    #[test]
    fn test_client_name_extraction() {
        assert_eq!(client_name(&json!({"name": " ab "})), " ab ");
        assert_eq!(client_name(&json!({})), "");
        assert_eq!(client_name(&json!({"name": 42})), "");
    }
}
