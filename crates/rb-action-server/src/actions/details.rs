//! Reservation lookup.

use rb_protocol::{ActionResponse, ReservationKey, Tracker};

use crate::messages;
use crate::state::AppState;

/// Describe the reservation identified by the available slots, with the
/// same identifier precedence as cancel.
pub async fn run(state: &AppState, tracker: &Tracker) -> ActionResponse {
    let slots = &tracker.slots;
    let Some(key) = ReservationKey::from_parts(
        slots.reservation_number.as_deref(),
        slots.customer_name.as_deref(),
        slots.phone.as_deref(),
    ) else {
        tracing::warn!("details requested without any identifying slot");
        return ActionResponse::with_message(messages::NO_IDENTIFIER);
    };

    match state.store.get_details(&key).await {
        Ok(Some(reservation)) => ActionResponse::with_message(messages::details(&reservation)),
        Ok(None) => ActionResponse::with_message(messages::DETAILS_NOT_FOUND),
        Err(err) => {
            tracing::error!(%err, "details lookup failed");
            ActionResponse::with_message(messages::STORAGE_FAILURE)
        }
    }
}
