//! Client registry endpoints.
//!
//! ```text
//! GET  /api/clients   list, ordered by name
//! POST /api/clients   add (trim, min length, case-insensitive duplicate check)
//! ```

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use crate::error::ApiError;
use crate::payload;
use crate::AppState;
use ledger_core::validation::validate_client_name;

/// Builds the client registry router.
pub fn client_routes() -> Router<Arc<AppState>> {
    Router::new().route("/clients", get(list_clients).post(add_client))
}

/// GET /api/clients
async fn list_clients(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let clients = state.db.clients().list().await?;

    Ok(Json(json!({
        "success": true,
        "clients": clients,
    })))
}

/// POST /api/clients
///
/// Body: `{"name": "..."}`. The name is trimmed before validation and
/// before the duplicate check, so `" ab "` and `"AB"` collide.
async fn add_client(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let value = payload::parse_json(&body)?;
    let name = validate_client_name(payload::client_name(&value))?;

    let repo = state.db.clients();

    if repo.find_id_by_name(&name).await?.is_some() {
        return Err(ApiError::DuplicateClient);
    }

    let client = repo.insert(&name).await?;

    info!(id = client.id, name = %client.name, "Client added");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Client added successfully",
            "client": { "id": client.id, "name": client.name },
        })),
    ))
}
