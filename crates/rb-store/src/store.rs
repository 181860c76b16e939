//! The `ReservationStore` trait and the validation shared by its
//! implementations.

use async_trait::async_trait;
use chrono::NaiveDate;

use rb_protocol::dates::parse_reservation_date;
use rb_protocol::{Reservation, ReservationKey};

use crate::error::{StoreError, StoreResult};

/// Input for a reservation create.
///
/// Date and party size arrive as the raw strings the extractor (or the
/// NLU) produced; the store validates them before writing anything.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub reservation_number: String,
    pub name: String,
    pub phone: String,
    pub date_text: String,
    pub party_size_text: String,
}

/// Identity of a reservation that just transitioned to cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelledReservation {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
}

/// Transactional reservation persistence.
///
/// Cancel and lookup address reservations through a [`ReservationKey`]
/// only — a caller with zero identifiers cannot reach storage at all.
/// `Ok(None)` from cancel/lookup means no confirmed (resp. existing)
/// row matched; it is not an error.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Validate and persist a new confirmed reservation together with
    /// its `create` history row, atomically.
    async fn create(&self, new: &NewReservation) -> StoreResult<()>;

    /// Transition a confirmed reservation to cancelled and write its
    /// `cancel` history row, atomically.
    async fn cancel(&self, key: &ReservationKey) -> StoreResult<Option<CancelledReservation>>;

    /// Read-only lookup of a reservation, any status.
    async fn get_details(&self, key: &ReservationKey) -> StoreResult<Option<Reservation>>;

    /// Whether the backing storage can currently serve operations.
    ///
    /// A degraded store reports `false` but still answers every call
    /// (with [`StoreError::Unavailable`]).
    fn is_available(&self) -> bool {
        true
    }
}

pub(crate) fn validate_party_size(text: &str) -> StoreResult<i32> {
    match text.trim().parse::<i32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(StoreError::InvalidPartySize(text.to_string())),
    }
}

pub(crate) fn validate_date(text: &str) -> StoreResult<NaiveDate> {
    parse_reservation_date(text).ok_or_else(|| StoreError::InvalidDate(text.to_string()))
}

pub(crate) fn create_details(name: &str, date: NaiveDate, people: i32) -> String {
    format!(
        "Réservation créée pour {name} le {} pour {people} personnes",
        date.format("%d/%m/%Y")
    )
}

pub(crate) fn cancel_details(name: &str, date: NaiveDate) -> String {
    format!("Réservation annulée pour {name} le {}", date.format("%d/%m/%Y"))
}
