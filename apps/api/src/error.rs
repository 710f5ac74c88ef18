//! Error types for the HTTP API.
//!
//! `ApiError` is the single error surface handlers return; its
//! `IntoResponse` impl produces the uniform JSON envelope
//! `{"success": false, "message": ...}` with the mapped status code.
//!
//! ## Status Mapping
//! ```text
//! InvalidJson / Validation / ClientNotFound  → 400
//! InvoiceNotFound                            → 404
//! DuplicateClient                            → 409
//! Database / Internal                        → 500
//! ```
//!
//! Note that a missing client on invoice creation is 400, not 404: the
//! invoice URL itself is valid, the payload references a bad client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use ledger_core::ValidationError;
use ledger_db::DbError;

/// HTTP API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body was not parseable JSON.
    #[error("Invalid JSON payload")]
    InvalidJson,

    /// A business-rule violation; message comes from the core variant.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client name already taken (case-insensitive).
    #[error("Client already exists")]
    DuplicateClient,

    /// Invoice payload referenced a client id that doesn't exist.
    #[error("Client not found")]
    ClientNotFound,

    /// No invoice with the requested id.
    #[error("Invoice not found")]
    InvoiceNotFound,

    /// Store failure; the underlying error text is surfaced verbatim.
    #[error("DB error: {0}")]
    Database(String),

    /// Anything else unexpected.
    #[error("Server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson | ApiError::Validation(_) | ApiError::ClientNotFound => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvoiceNotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateClient => StatusCode::CONFLICT,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Database(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(%status, error = %self, "Request failed");
        }

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::InvalidJson.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Validation(ValidationError::ItemsRequired).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::ClientNotFound.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvoiceNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::DuplicateClient.status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Database("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_errors_embed_underlying_text() {
        let err: ApiError = DbError::QueryFailed("no such table: invoices".to_string()).into();
        assert_eq!(err.to_string(), "DB error: Query failed: no such table: invoices");
    }
}
