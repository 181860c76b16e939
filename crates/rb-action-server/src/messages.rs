//! User-facing French messages.
//!
//! Every failure path maps to one of these plain-language texts; the
//! webhook never leaks stack traces, error codes, or internals.

use rb_protocol::{Reservation, ReservationStatus, SlotField};

pub fn confirmation(reservation_number: &str) -> String {
    format!("Réservation confirmée. Votre numéro de réservation est {reservation_number}.")
}

/// Enumerates the canonical French labels, comma-joined.
pub fn missing_fields(missing: &[SlotField]) -> String {
    let labels: Vec<&str> = missing.iter().map(|f| f.label_fr()).collect();
    format!(
        "Il manque des informations pour finaliser la réservation: {}",
        labels.join(", ")
    )
}

pub fn details(reservation: &Reservation) -> String {
    let status = match reservation.status {
        ReservationStatus::Confirmed => "confirmée",
        ReservationStatus::Cancelled => "annulée",
    };
    format!(
        "Réservation {} au nom de {} le {} pour {} personnes ({status}).",
        reservation.reservation_number,
        reservation.name,
        reservation.date.format("%d/%m/%Y"),
        reservation.number_of_people,
    )
}

pub const CREATE_FAILED: &str =
    "La réservation n'a pas pu être enregistrée. Pouvez-vous vérifier la date et le nombre de personnes ?";

pub const CANCEL_CONFIRMED: &str = "Votre réservation a été annulée.";

pub const CANCEL_NOT_FOUND: &str =
    "Aucune réservation active n'a été trouvée avec ces informations.";

pub const DETAILS_NOT_FOUND: &str = "Aucune réservation n'a été trouvée avec ces informations.";

pub const NO_IDENTIFIER: &str =
    "Pouvez-vous me donner votre numéro de réservation, votre nom ou votre numéro de téléphone ?";

pub const STORAGE_FAILURE: &str =
    "Une erreur est survenue. Veuillez réessayer dans quelques instants.";

pub const FALLBACK: &str =
    "Je n'ai pas compris. Pouvez-vous reformuler ou préciser votre demande ?";
