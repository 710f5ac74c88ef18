//! HTTP route handlers.
//!
//! One module per resource; each exposes a `*_routes()` builder merged into
//! the `/api` router in [`crate::app`]. Handlers do three things only:
//! shape the payload (via [`crate::payload`]), call a repository, and wrap
//! the result in the `{"success": ...}` envelope.

use axum::response::Html;

pub mod clients;
pub mod invoices;

pub use clients::client_routes;
pub use invoices::invoice_routes;

/// Serves the static front-end page at `/`.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
