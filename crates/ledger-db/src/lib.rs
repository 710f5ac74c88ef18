//! # ledger-db: Database Layer for the Ledger Invoicing Service
//!
//! This crate provides database access for the invoicing API. It uses
//! SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Ledger Data Flow                             │
//! │                                                                     │
//! │  HTTP handler (POST /api/invoices)                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                   ledger-db (THIS CRATE)                      │ │
//! │  │                                                               │ │
//! │  │  ┌──────────────┐   ┌────────────────┐   ┌────────────────┐  │ │
//! │  │  │   Database   │   │  Repositories  │   │   Migrations   │  │ │
//! │  │  │  (pool.rs)   │◄──│  client.rs     │   │   (embedded)   │  │ │
//! │  │  │  SqlitePool  │   │  invoice.rs    │   │  001_init.sql  │  │ │
//! │  │  └──────────────┘   └────────────────┘   └────────────────┘  │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  SQLite database file (or :memory: in tests)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded bootstrap schema
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (clients, invoices)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("ledger.db")).await?;
//! let clients = db.clients().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::client::ClientRepository;
pub use repository::invoice::InvoiceRepository;
