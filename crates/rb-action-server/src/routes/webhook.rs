//! The action webhook endpoint.

use axum::Json;
use axum::extract::State;

use rb_protocol::{ActionRequest, ActionResponse};

use crate::actions;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /webhook — run the requested custom action against the
/// supplied conversation tracker.
pub async fn run_action(
    State(state): State<AppState>,
    Json(req): Json<ActionRequest>,
) -> ApiResult<Json<ActionResponse>> {
    let resp = actions::dispatch(&state, &req).await?;
    Ok(Json(resp))
}
