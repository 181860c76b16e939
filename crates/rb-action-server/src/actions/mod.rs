//! Custom action handlers and the dispatcher.

pub mod cancel;
pub mod details;
pub mod fallback;
pub mod reserve;

use rb_protocol::{ActionRequest, ActionResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Action names as declared in the dialogue engine's domain.
pub const ACTION_RESERVE_TABLE: &str = "action_reserve_table";
pub const ACTION_CANCEL_RESERVATION: &str = "action_cancel_reservation";
pub const ACTION_RESERVATION_DETAILS: &str = "action_reservation_details";
pub const ACTION_DEFAULT_FALLBACK: &str = "action_default_fallback";

/// Route a webhook request to its action handler.
pub async fn dispatch(state: &AppState, req: &ActionRequest) -> Result<ActionResponse, ApiError> {
    tracing::debug!(
        action = %req.next_action,
        sender = %req.tracker.sender_id,
        "dispatching action"
    );
    match req.next_action.as_str() {
        ACTION_RESERVE_TABLE => Ok(reserve::run(state, &req.tracker).await),
        ACTION_CANCEL_RESERVATION => Ok(cancel::run(state, &req.tracker).await),
        ACTION_RESERVATION_DETAILS => Ok(details::run(state, &req.tracker).await),
        ACTION_DEFAULT_FALLBACK => Ok(fallback::run()),
        other => Err(ApiError::UnknownAction(other.to_string())),
    }
}
