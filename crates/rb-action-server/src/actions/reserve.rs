//! Slot completion and reservation commit.

use rb_protocol::{ActionResponse, SlotField, Tracker, new_reservation_number};
use rb_store::{NewReservation, StoreError};

use crate::messages;
use crate::state::AppState;

/// Fill any missing slots from the latest message; when all four
/// required fields are present, commit the reservation exactly once.
pub async fn run(state: &AppState, tracker: &Tracker) -> ActionResponse {
    let known = &tracker.slots;
    let (slots, missing) = rb_extract::complete(&tracker.latest_message.text, known);

    let mut resp = ActionResponse::default();
    // Report newly filled values back to the dialogue engine so it
    // keeps them for the rest of the conversation.
    for field in SlotField::ALL {
        if known.get(field).is_none() {
            if let Some(value) = slots.get(field) {
                resp.push_slot(field.slot_name(), value);
            }
        }
    }

    if !missing.is_empty() {
        tracing::warn!(?missing, "reservation incomplete, not committed");
        resp.push_message(messages::missing_fields(&missing));
        return resp;
    }

    let reservation_number = new_reservation_number();
    let new = NewReservation {
        reservation_number: reservation_number.clone(),
        name: slots.customer_name.clone().unwrap_or_default(),
        phone: slots.phone.clone().unwrap_or_default(),
        date_text: slots.date.clone().unwrap_or_default(),
        party_size_text: slots.party_size.clone().unwrap_or_default(),
    };

    match state.store.create(&new).await {
        Ok(()) => {
            tracing::info!(%reservation_number, "reservation committed");
            resp.push_slot("reservation_number", &reservation_number);
            resp.push_message(messages::confirmation(&reservation_number));
        }
        Err(err @ (StoreError::InvalidPartySize(_) | StoreError::InvalidDate(_))) => {
            tracing::warn!(%err, "reservation rejected by validation");
            resp.push_message(messages::CREATE_FAILED);
        }
        Err(err) => {
            tracing::error!(%err, "reservation commit failed");
            resp.push_message(messages::STORAGE_FAILURE);
        }
    }
    resp
}
