//! # Invoice Rendering
//!
//! Fixed plain-text layout for the invoice download endpoint.
//!
//! The output is the downloadable `.txt` document: header lines, one line
//! per item, then the three total lines with every amount prefixed by the
//! fixed currency symbol.

use crate::totals::{format_currency, format_number};
use crate::types::{Invoice, InvoiceItem};

/// Renders an invoice and its items as plain text.
///
/// ## Layout
/// ```text
/// Invoice: INV-00001
/// Client: Acme Traders
/// Invoice Date: 2024-01-15
/// Due Date: 2024-02-15
///
/// Items:
///   Widget  2 x ₹100.00 (GST 10%)
///
/// Subtotal: ₹200.00
/// Tax: ₹20.00
/// Grand Total: ₹220.00
/// ```
pub fn render_invoice_text(invoice: &Invoice, items: &[InvoiceItem]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Invoice: {}\n", invoice.invoice_number));
    out.push_str(&format!("Client: {}\n", invoice.client_name));
    out.push_str(&format!("Invoice Date: {}\n", invoice.invoice_date));
    out.push_str(&format!("Due Date: {}\n", invoice.due_date));
    out.push('\n');

    out.push_str("Items:\n");
    for item in items {
        out.push_str(&format!(
            "  {}  {} x {} (GST {}%)\n",
            item.description,
            format_number(item.quantity),
            format_currency(item.unit_price),
            format_number(item.gst_percentage),
        ));
    }
    out.push('\n');

    out.push_str(&format!("Subtotal: {}\n", format_currency(invoice.subtotal)));
    out.push_str(&format!("Tax: {}\n", format_currency(invoice.tax_total)));
    out.push_str(&format!(
        "Grand Total: {}\n",
        format_currency(invoice.grand_total)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_invoice() -> Invoice {
        Invoice {
            id: 1,
            invoice_number: "INV-00001".to_string(),
            client_id: 1,
            client_name: "Acme Traders".to_string(),
            invoice_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            status: "Draft".to_string(),
            billing_address: String::new(),
            customer_email: None,
            notes: None,
            subtotal: 200.0,
            tax_total: 20.0,
            grand_total: 220.0,
        }
    }

    fn sample_items() -> Vec<InvoiceItem> {
        vec![
            InvoiceItem {
                id: 1,
                description: "Widget".to_string(),
                quantity: 2.0,
                unit_price: 100.0,
                gst_percentage: 10.0,
            },
        ]
    }

    #[test]
    fn test_render_contains_header_lines() {
        let text = render_invoice_text(&sample_invoice(), &sample_items());
        assert!(text.contains("Invoice: INV-00001"));
        assert!(text.contains("Client: Acme Traders"));
        assert!(text.contains("Invoice Date: 2024-01-15"));
        assert!(text.contains("Due Date: 2024-02-15"));
    }

    #[test]
    fn test_render_lists_every_item() {
        let mut items = sample_items();
        items.push(InvoiceItem {
            id: 2,
            description: "Installation".to_string(),
            quantity: 1.5,
            unit_price: 40.0,
            gst_percentage: 0.0,
        });
        let text = render_invoice_text(&sample_invoice(), &items);
        assert!(text.contains("Widget  2 x ₹100.00 (GST 10%)"));
        assert!(text.contains("Installation  1.5 x ₹40.00 (GST 0%)"));
    }

    #[test]
    fn test_render_totals_carry_currency_symbol() {
        let text = render_invoice_text(&sample_invoice(), &sample_items());
        assert!(text.contains("Subtotal: ₹200.00"));
        assert!(text.contains("Tax: ₹20.00"));
        assert!(text.contains("Grand Total: ₹220.00"));
    }
}
