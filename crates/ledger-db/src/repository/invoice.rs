//! # Invoice Repository
//!
//! Database operations for invoices and their line items.
//!
//! ## Invoice Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Invoice Lifecycle                              │
//! │                                                                     │
//! │  1. CREATE (one transaction)                                        │
//! │     ├── INSERT invoice row (totals precomputed by ledger-core)      │
//! │     ├── read generated id → derive INV-00001                        │
//! │     ├── UPDATE invoice_number                                       │
//! │     └── INSERT each line item                                       │
//! │                                                                     │
//! │  2. READ                                                            │
//! │     ├── list_summaries() → joined with client name, no items        │
//! │     └── get() + items() → full document                             │
//! │                                                                     │
//! │  3. DELETE (one transaction)                                        │
//! │     ├── DELETE line items                                           │
//! │     └── DELETE invoice row (silently a no-op for unknown ids)       │
//! │                                                                     │
//! │  No updates: invoices are immutable once created.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use ledger_core::totals::{invoice_number, InvoiceTotals};
use ledger_core::types::{Invoice, InvoiceItem, InvoiceSummary, NewInvoice};

/// Repository for invoice database operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    pool: SqlitePool,
}

impl InvoiceRepository {
    /// Creates a new InvoiceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        InvoiceRepository { pool }
    }

    /// Lists every invoice joined with its client's display name, ordered
    /// by id ascending. Summary view: line items are not included.
    pub async fn list_summaries(&self) -> DbResult<Vec<InvoiceSummary>> {
        let summaries = sqlx::query_as::<_, InvoiceSummary>(
            r#"
            SELECT i.id, i.invoice_number, i.client_id, c.name AS client_name,
                   i.invoice_date, i.due_date, i.status,
                   i.subtotal, i.tax_total, i.grand_total
            FROM invoices i
            JOIN clients c ON i.client_id = c.id
            ORDER BY i.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    /// Gets a full invoice (joined with the client name) by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Invoice>> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT i.id, i.invoice_number, i.client_id, c.name AS client_name,
                   i.invoice_date, i.due_date, i.status,
                   i.billing_address, i.customer_email, i.notes,
                   i.subtotal, i.tax_total, i.grand_total
            FROM invoices i
            JOIN clients c ON i.client_id = c.id
            WHERE i.id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(invoice)
    }

    /// Gets all line items for an invoice, in insertion order.
    pub async fn items(&self, invoice_id: i64) -> DbResult<Vec<InvoiceItem>> {
        let items = sqlx::query_as::<_, InvoiceItem>(
            r#"
            SELECT id, description, quantity, unit_price, gst_percentage
            FROM invoice_items
            WHERE invoice_id = ?1
            ORDER BY id
            "#,
        )
        .bind(invoice_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Creates an invoice with its line items.
    ///
    /// ## Two-Phase Numbering
    /// The invoice_number derives from the generated primary key, so the
    /// row is inserted first (with the number blank), the fresh id is read
    /// back, and the number is patched.
    ///
    /// ## Atomicity
    /// The row insert, the number patch, and every item insert run inside a
    /// single transaction: a failure partway leaves no partial invoice.
    ///
    /// ## Returns
    /// The generated invoice id and the derived invoice number.
    pub async fn create(
        &self,
        new: &NewInvoice,
        totals: &InvoiceTotals,
    ) -> DbResult<(i64, String)> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO invoices
                (client_id, invoice_date, due_date, status,
                 billing_address, customer_email, notes,
                 subtotal, tax_total, grand_total)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(new.client_id)
        .bind(new.invoice_date)
        .bind(new.due_date)
        .bind(&new.status)
        .bind(&new.billing_address)
        .bind(&new.customer_email)
        .bind(&new.notes)
        .bind(totals.subtotal)
        .bind(totals.tax_total)
        .bind(totals.grand_total)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        let number = invoice_number(id);

        sqlx::query("UPDATE invoices SET invoice_number = ?1 WHERE id = ?2")
            .bind(&number)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for item in &new.items {
            sqlx::query(
                r#"
                INSERT INTO invoice_items
                    (invoice_id, description, quantity, unit_price, gst_percentage)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(id)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(item.gst_percentage)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(id, number = %number, items = new.items.len(), "Invoice created");

        Ok((id, number))
    }

    /// Deletes an invoice and all its line items.
    ///
    /// Silently succeeds when the id doesn't exist: both statements simply
    /// affect zero rows.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM invoice_items WHERE invoice_id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM invoices WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(id, "Invoice deleted");

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use ledger_core::compute_totals;
    use ledger_core::types::NewInvoiceItem;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn new_invoice(client_id: i64) -> NewInvoice {
        NewInvoice {
            client_id,
            invoice_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            status: "Draft".to_string(),
            billing_address: String::new(),
            customer_email: None,
            notes: None,
            items: vec![
                NewInvoiceItem {
                    description: "Widget".to_string(),
                    quantity: 2.0,
                    unit_price: 100.0,
                    gst_percentage: 10.0,
                },
                NewInvoiceItem {
                    description: "Installation".to_string(),
                    quantity: 1.0,
                    unit_price: 50.0,
                    gst_percentage: 0.0,
                },
            ],
        }
    }

    async fn create_one(db: &Database) -> (i64, String) {
        let client = db.clients().insert("Acme Traders").await.unwrap();
        let new = new_invoice(client.id);
        let totals = compute_totals(&new.items);
        db.invoices().create(&new, &totals).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_stores_row_items_and_number() {
        let db = test_db().await;
        let (id, number) = create_one(&db).await;

        assert_eq!(number, format!("INV-{id:05}"));

        let invoice = db.invoices().get(id).await.unwrap().unwrap();
        assert_eq!(invoice.invoice_number, number);
        assert_eq!(invoice.client_name, "Acme Traders");
        assert_eq!(invoice.subtotal, 250.0);
        assert_eq!(invoice.tax_total, 20.0);
        assert_eq!(invoice.grand_total, 270.0);

        let items = db.invoices().items(id).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "Widget");
        assert_eq!(items[1].description, "Installation");
    }

    #[tokio::test]
    async fn test_list_summaries_ordered_by_id() {
        let db = test_db().await;
        let (first, _) = create_one(&db).await;

        let client = db.clients().insert("Zenith Corp").await.unwrap();
        let new = new_invoice(client.id);
        let totals = compute_totals(&new.items);
        let (second, _) = db.invoices().create(&new, &totals).await.unwrap();

        let summaries = db.invoices().list_summaries().await.unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, first);
        assert_eq!(summaries[1].id, second);
        assert_eq!(summaries[1].client_name, "Zenith Corp");
    }

    #[tokio::test]
    async fn test_delete_removes_invoice_and_items() {
        let db = test_db().await;
        let (id, _) = create_one(&db).await;

        db.invoices().delete(id).await.unwrap();

        assert!(db.invoices().get(id).await.unwrap().is_none());
        assert!(db.invoices().items(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_silent() {
        let db = test_db().await;
        db.invoices().delete(9999).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let db = test_db().await;
        assert!(db.invoices().get(42).await.unwrap().is_none());
    }
}
