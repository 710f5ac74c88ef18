//! # Totals Module
//!
//! Invoice total computation and invoice-number derivation.
//!
//! ## How Totals Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Invoice Total Computation                       │
//! │                                                                     │
//! │  items[] ──► per item: line = quantity × unit_price                 │
//! │                        tax  = line × gst_percentage / 100           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  subtotal  = Σ line                                                 │
//! │  tax_total = Σ tax                                                  │
//! │  grand_total = subtotal + tax_total                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Stored redundantly on the invoice row at creation time.            │
//! │  NEVER recomputed afterwards: the stored figures are the record.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64?
//! Quantities may be fractional (2.5 consulting hours) and the wire format
//! carries plain JSON numbers, so amounts stay decimal end to end. The
//! stored totals mirror exactly what was computed from the payload.

use serde::{Deserialize, Serialize};

use crate::types::NewInvoiceItem;

/// Currency symbol prefixed to every amount in rendered invoice text.
///
/// Display only. The service carries no other currency or localization
/// logic; stored amounts are plain numbers.
pub const CURRENCY_SYMBOL: &str = "₹";

// =============================================================================
// Invoice Totals
// =============================================================================

/// The three derived sums stored on every invoice row.
///
/// Invariant: `grand_total = subtotal + tax_total`. Constructed only by
/// [`compute_totals`], so the invariant holds everywhere by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of quantity × unit_price over all items.
    pub subtotal: f64,

    /// Sum of each item's GST contribution.
    pub tax_total: f64,

    /// subtotal + tax_total.
    pub grand_total: f64,
}

/// Computes the stored totals for an invoice-creation payload.
///
/// ## Example
/// ```rust
/// use ledger_core::totals::compute_totals;
/// use ledger_core::types::NewInvoiceItem;
///
/// let items = vec![NewInvoiceItem {
///     description: "Widget".to_string(),
///     quantity: 2.0,
///     unit_price: 100.0,
///     gst_percentage: 10.0,
/// }];
///
/// let totals = compute_totals(&items);
/// assert_eq!(totals.subtotal, 200.0);
/// assert_eq!(totals.tax_total, 20.0);
/// assert_eq!(totals.grand_total, 220.0);
/// ```
pub fn compute_totals(items: &[NewInvoiceItem]) -> InvoiceTotals {
    let mut subtotal = 0.0;
    let mut tax_total = 0.0;

    for item in items {
        subtotal += item.line_amount();
        tax_total += item.tax_amount();
    }

    InvoiceTotals {
        subtotal,
        tax_total,
        grand_total: subtotal + tax_total,
    }
}

// =============================================================================
// Invoice Number
// =============================================================================

/// Derives the human-readable invoice number from a generated id.
///
/// Format: `INV-` followed by the id zero-padded to 5 digits. Ids above
/// 99999 simply widen the number; the prefix and derivation never change.
///
/// ## Two-Phase Assignment
/// The number depends on the database-generated primary key, so invoice
/// creation inserts the row first, reads the new id, then patches the
/// stored `invoice_number` (inside the same transaction).
///
/// ## Example
/// ```rust
/// use ledger_core::totals::invoice_number;
///
/// assert_eq!(invoice_number(1), "INV-00001");
/// assert_eq!(invoice_number(12345), "INV-12345");
/// ```
#[inline]
pub fn invoice_number(id: i64) -> String {
    format!("INV-{id:05}")
}

// =============================================================================
// Display Formatting
// =============================================================================

/// Formats an amount for the rendered invoice document: the fixed currency
/// symbol, then the value with two decimal places.
///
/// ## Example
/// ```rust
/// use ledger_core::totals::format_currency;
///
/// assert_eq!(format_currency(220.0), "₹220.00");
/// assert_eq!(format_currency(0.5), "₹0.50");
/// ```
#[inline]
pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Formats a quantity or percentage without a trailing `.0` for whole
/// numbers (2 rather than 2.0, but 2.5 stays 2.5).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
