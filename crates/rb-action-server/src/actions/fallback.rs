//! Default fallback action.

use rb_protocol::ActionResponse;

use crate::messages;

/// Fixed "did not understand" reply.
pub fn run() -> ActionResponse {
    tracing::info!("fallback action triggered");
    ActionResponse::with_message(messages::FALLBACK)
}
