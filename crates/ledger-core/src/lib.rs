//! # ledger-core: Pure Business Logic for the Ledger Invoicing Service
//!
//! This crate is the heart of the service. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Ledger Architecture                            │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  HTTP API (apps/api, axum)                    │ │
//! │  │   GET/POST /api/clients, /api/invoices, .../download          │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │              ★ ledger-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐  ┌─────────┐  ┌────────────┐  ┌─────────┐       │ │
//! │  │  │  types  │  │ totals  │  │ validation │  │ render  │       │ │
//! │  │  │ Client  │  │ GST sum │  │   rules    │  │  .txt   │       │ │
//! │  │  │ Invoice │  │ INV-nr  │  │   checks   │  │ layout  │       │ │
//! │  │  └─────────┘  └─────────┘  └────────────┘  └─────────┘       │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │                 ledger-db (Database Layer)                    │ │
//! │  │           SQLite queries, schema, repositories                │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Client, Invoice, InvoiceItem, ...)
//! - [`totals`] - Invoice total computation and invoice-number derivation
//! - [`validation`] - Business rule validation
//! - [`render`] - Plain-text invoice rendering
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use ledger_core::totals::{compute_totals, invoice_number};
//! use ledger_core::types::NewInvoiceItem;
//!
//! let items = vec![NewInvoiceItem {
//!     description: "Consulting".to_string(),
//!     quantity: 2.0,
//!     unit_price: 100.0,
//!     gst_percentage: 10.0,
//! }];
//!
//! let totals = compute_totals(&items);
//! assert_eq!(totals.subtotal, 200.0);
//! assert_eq!(totals.tax_total, 20.0);
//! assert_eq!(totals.grand_total, 220.0);
//!
//! assert_eq!(invoice_number(7), "INV-00007");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod render;
pub mod totals;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use totals::{compute_totals, invoice_number, InvoiceTotals, CURRENCY_SYMBOL};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default status assigned to invoices created without an explicit status.
///
/// Status is stored free text: the service records it but never transitions
/// it. Any Draft -> Sent -> Paid semantics are a caller convention.
pub const DEFAULT_INVOICE_STATUS: &str = "Draft";

/// Minimum length of a client name after trimming surrounding whitespace.
pub const MIN_CLIENT_NAME_LEN: usize = 2;
