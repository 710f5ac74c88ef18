//! # Ledger API
//!
//! HTTP server for the invoicing front end.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Ledger API Server                           │
//! │                                                                     │
//! │  Browser ───► axum (/api/*) ───► ledger-core ───► ledger-db        │
//! │                   │              (validation,     (SQLite)          │
//! │                   │               totals,                           │
//! │                   ▼               rendering)                        │
//! │             static page (/)                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Endpoints
//! - `GET/POST /api/clients` - client registry
//! - `GET/POST /api/invoices`, `GET/DELETE /api/invoices/:id`,
//!   `GET /api/invoices/:id/download` - invoice ledger
//! - `GET /` - static page
//!
//! ## Configuration
//! Environment variables (see [`config::ApiConfig`]):
//! - `HTTP_PORT` - listen port (default: 8080)
//! - `DATABASE_PATH` - SQLite file path (default: ledger.db)
//! - `CORS_ORIGINS` - comma-separated allowed origins (default: permissive)

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod payload;
pub mod routes;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

use ledger_db::Database;

/// Shared application state.
pub struct AppState {
    pub db: Database,
    pub config: ApiConfig,
}

/// Builds the complete application router.
///
/// Also the entry point for integration tests, which drive the router
/// directly with `tower::ServiceExt::oneshot` instead of binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(routes::index))
        .nest(
            "/api",
            Router::new()
                .merge(routes::client_routes())
                .merge(routes::invoice_routes()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for the browser front end: permissive when no origins are
/// configured (development), otherwise restricted to the configured list.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|s| s.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
