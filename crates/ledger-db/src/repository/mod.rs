//! # Repository Module
//!
//! Database repository implementations for the invoicing service.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Repository Pattern Explained                       │
//! │                                                                     │
//! │  HTTP handler                                                       │
//! │       │                                                             │
//! │       │  db.invoices().create(&new_invoice, &totals)                │
//! │       ▼                                                             │
//! │  InvoiceRepository                                                  │
//! │  ├── list_summaries(&self)                                          │
//! │  ├── get(&self, id)                                                 │
//! │  ├── create(&self, new, totals)                                     │
//! │  └── delete(&self, id)                                              │
//! │       │                                                             │
//! │       │  Parameterized SQL                                          │
//! │       ▼                                                             │
//! │  SQLite Database                                                    │
//! │                                                                     │
//! │  Benefits:                                                          │
//! │  • SQL is isolated in one place                                     │
//! │  • Multi-statement writes own their transactions                    │
//! │  • Handlers stay JSON-shaping only                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`client::ClientRepository`] - Client listing and creation
//! - [`invoice::InvoiceRepository`] - Invoice lifecycle and line items

pub mod client;
pub mod invoice;
