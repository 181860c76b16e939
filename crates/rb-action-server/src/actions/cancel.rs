//! Reservation cancellation.

use rb_protocol::{ActionResponse, ReservationKey, Tracker};

use crate::messages;
use crate::state::AppState;

/// Cancel the reservation identified by whichever slots are available
/// (number, then name, then phone). With no identifying slot at all,
/// fail immediately — storage is never touched.
pub async fn run(state: &AppState, tracker: &Tracker) -> ActionResponse {
    let slots = &tracker.slots;
    let Some(key) = ReservationKey::from_parts(
        slots.reservation_number.as_deref(),
        slots.customer_name.as_deref(),
        slots.phone.as_deref(),
    ) else {
        tracing::warn!("cancel requested without any identifying slot");
        return ActionResponse::with_message(messages::NO_IDENTIFIER);
    };

    match state.store.cancel(&key).await {
        Ok(Some(cancelled)) => {
            tracing::info!(reservation_id = cancelled.id, "cancelled via webhook");
            ActionResponse::with_message(messages::CANCEL_CONFIRMED)
        }
        Ok(None) => ActionResponse::with_message(messages::CANCEL_NOT_FOUND),
        Err(err) => {
            tracing::error!(%err, "cancel failed");
            ActionResponse::with_message(messages::STORAGE_FAILURE)
        }
    }
}
