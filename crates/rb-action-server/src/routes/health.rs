//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health — liveness plus reservation-store availability.
///
/// The server deliberately stays up when the database pool could not
/// be built, so liveness alone says nothing about whether reservations
/// can actually be taken; `store` reports that separately.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let store = if state.store.is_available() {
        "ok"
    } else {
        "degraded"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "store": store,
    }))
}
