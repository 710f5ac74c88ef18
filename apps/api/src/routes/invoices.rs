//! Invoice ledger endpoints.
//!
//! ```text
//! GET    /api/invoices                summaries joined with client names
//! POST   /api/invoices                create (one transaction, derived number)
//! GET    /api/invoices/:id            full invoice + ordered items
//! DELETE /api/invoices/:id            cascade delete, silent for unknown ids
//! GET    /api/invoices/:id/download   plain-text document as an attachment
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::error::ApiError;
use crate::payload;
use crate::AppState;
use ledger_core::render::render_invoice_text;
use ledger_core::totals::compute_totals;
use ledger_core::types::{Invoice, InvoiceItem};

/// Builds the invoice ledger router.
pub fn invoice_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/:id", get(get_invoice).delete(delete_invoice))
        .route("/invoices/:id/download", get(download_invoice))
}

/// GET /api/invoices
async fn list_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let invoices = state.db.invoices().list_summaries().await?;

    Ok(Json(json!({
        "success": true,
        "invoices": invoices,
    })))
}

/// POST /api/invoices
///
/// Validates the payload, verifies the client exists, computes the totals,
/// and persists the invoice with its items in a single transaction.
async fn create_invoice(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let value = payload::parse_json(&body)?;
    let new = payload::parse_new_invoice(&value)?;

    if !state.db.clients().exists(new.client_id).await? {
        return Err(ApiError::ClientNotFound);
    }

    let totals = compute_totals(&new.items);
    let (invoice_id, invoice_number) = state.db.invoices().create(&new, &totals).await?;

    info!(
        invoice_id,
        number = %invoice_number,
        grand_total = totals.grand_total,
        "Invoice created"
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Invoice created successfully",
            "invoice_id": invoice_id,
            "invoice_number": invoice_number,
        })),
    ))
}

/// The full invoice document: every stored field plus the ordered items.
#[derive(Serialize)]
struct InvoiceDetail {
    #[serde(flatten)]
    invoice: Invoice,
    items: Vec<InvoiceItem>,
}

/// GET /api/invoices/:id
async fn get_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.invoices();

    let invoice = repo.get(id).await?.ok_or(ApiError::InvoiceNotFound)?;
    let items = repo.items(id).await?;

    Ok(Json(json!({
        "success": true,
        "invoice": InvoiceDetail { invoice, items },
    })))
}

/// DELETE /api/invoices/:id
///
/// Idempotent in effect: deleting an id that doesn't exist still reports
/// success, it just affects zero rows.
async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.invoices().delete(id).await?;

    info!(id, "Invoice deleted");

    Ok(Json(json!({
        "success": true,
        "message": "Invoice deleted successfully",
    })))
}

/// GET /api/invoices/:id/download
///
/// Returns the rendered plain-text document as an attachment named after
/// the invoice number (`INV-00001.txt`).
async fn download_invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.invoices();

    let invoice = repo.get(id).await?.ok_or(ApiError::InvoiceNotFound)?;
    let items = repo.items(id).await?;

    let text = render_invoice_text(&invoice, &items);
    let filename = format!("{}.txt", invoice.invoice_number);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        text,
    ))
}
