//! # Domain Types
//!
//! Core domain types used throughout the Ledger invoicing service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────┐   ┌─────────────────┐   ┌──────────────────┐    │
//! │  │    Client     │   │     Invoice     │   │   InvoiceItem    │    │
//! │  │  ───────────  │   │  ─────────────  │   │  ──────────────  │    │
//! │  │  id           │◄──│  client_id      │──►│  (owned by the   │    │
//! │  │  name (CI     │   │  invoice_number │   │   invoice, dies  │    │
//! │  │   unique)     │   │  totals         │   │   with it)       │    │
//! │  └───────────────┘   └─────────────────┘   └──────────────────┘    │
//! │                                                                     │
//! │  NewInvoice / NewInvoiceItem: validated creation payloads           │
//! │  InvoiceSummary: the list view (invoice joined with client name)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Invoices have two identifiers:
//! - `id`: generated integer primary key, used for relations and URLs
//! - `invoice_number`: human-readable `INV-00001`, derived from `id` after
//!   insert and shown on the rendered document

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Client
// =============================================================================

/// A billable client.
///
/// Clients are create-only in this API: never updated, never deleted,
/// referenced by invoices without cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Client {
    /// Generated integer identifier.
    pub id: i64,

    /// Display name. Case-insensitively unique, minimum trimmed length 2.
    pub name: String,

    /// Postal address, if captured.
    pub address: Option<String>,

    /// Contact email, if captured.
    pub email: Option<String>,
}

// =============================================================================
// Invoice
// =============================================================================

/// A full invoice record, joined with its client's display name.
///
/// The monetary fields are derived sums over the line items, computed once
/// at creation and stored redundantly. Invariant:
/// `grand_total = subtotal + tax_total`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Invoice {
    /// Generated integer identifier.
    pub id: i64,

    /// Human-readable number derived from `id` (`INV-00001`).
    pub invoice_number: String,

    /// The billed client. Must reference an existing client; checked at
    /// application level before insert.
    pub client_id: i64,

    /// Client display name (from the join; not stored on the invoice row).
    pub client_name: String,

    /// Date the invoice was issued.
    pub invoice_date: NaiveDate,

    /// Date payment is due. Not checked against `invoice_date`.
    pub due_date: NaiveDate,

    /// Free-text status, default "Draft". Stored but never transitioned by
    /// the service.
    pub status: String,

    /// Billing address as entered; empty string when not provided.
    pub billing_address: String,

    /// Customer email, if provided.
    pub customer_email: Option<String>,

    /// Free-text notes, if provided.
    pub notes: Option<String>,

    /// Sum of quantity × unit_price over all items.
    pub subtotal: f64,

    /// Sum of each item's GST contribution.
    pub tax_total: f64,

    /// subtotal + tax_total.
    pub grand_total: f64,
}

/// The invoice list view: summary fields joined with the client name,
/// without line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InvoiceSummary {
    pub id: i64,
    pub invoice_number: String,
    pub client_id: i64,
    pub client_name: String,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
    pub subtotal: f64,
    pub tax_total: f64,
    pub grand_total: f64,
}

// =============================================================================
// Invoice Items
// =============================================================================

/// One line item on a stored invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InvoiceItem {
    /// Generated integer identifier.
    pub id: i64,

    /// What was billed.
    pub description: String,

    /// Units billed. May be fractional (hours, kilograms).
    pub quantity: f64,

    /// Price per unit.
    pub unit_price: f64,

    /// GST rate applied to this line, as a percentage (10 = 10%).
    /// Expected 0-100 but not validated.
    pub gst_percentage: f64,
}

// =============================================================================
// Creation Payloads
// =============================================================================

/// A validated invoice-creation payload, ready to persist.
///
/// Produced by the API layer after coercing and validating the raw JSON
/// body; everything here has already passed the rules in [`crate::validation`].
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub client_id: i64,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
    pub billing_address: String,
    pub customer_email: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<NewInvoiceItem>,
}

/// One line item of an invoice-creation payload.
#[derive(Debug, Clone)]
pub struct NewInvoiceItem {
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub gst_percentage: f64,
}

impl NewInvoiceItem {
    /// The line amount: quantity × unit_price.
    #[inline]
    pub fn line_amount(&self) -> f64 {
        self.quantity * self.unit_price
    }

    /// This line's GST contribution: line amount × gst_percentage / 100.
    #[inline]
    pub fn tax_amount(&self) -> f64 {
        self.line_amount() * self.gst_percentage / 100.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_tax_amounts() {
        let item = NewInvoiceItem {
            description: "Widget".to_string(),
            quantity: 2.0,
            unit_price: 100.0,
            gst_percentage: 10.0,
        };
        assert_eq!(item.line_amount(), 200.0);
        assert_eq!(item.tax_amount(), 20.0);
    }

    #[test]
    fn test_fractional_quantity() {
        let item = NewInvoiceItem {
            description: "Consulting hours".to_string(),
            quantity: 2.5,
            unit_price: 80.0,
            gst_percentage: 0.0,
        };
        assert_eq!(item.line_amount(), 200.0);
        assert_eq!(item.tax_amount(), 0.0);
    }
}
