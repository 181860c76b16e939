//! In-memory reservation store for tests and DB-less development.
//!
//! Mirrors the PostgreSQL implementation's semantics exactly —
//! validation, status lifecycle, atomic history rows — behind a single
//! `RwLock` so a failed operation can never leave half a write behind.

use async_trait::async_trait;
use tokio::sync::RwLock;

use rb_protocol::{HistoryAction, Reservation, ReservationKey, ReservationStatus};

use crate::error::StoreResult;
use crate::store::{
    CancelledReservation, NewReservation, ReservationStore, cancel_details, create_details,
    validate_date, validate_party_size,
};

/// An audit row, as the relational schema would hold it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub reservation_id: i64,
    pub action: HistoryAction,
    pub details: String,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    reservations: Vec<Reservation>,
    history: Vec<HistoryEntry>,
}

#[derive(Default)]
pub struct MemoryReservationStore {
    inner: RwLock<Inner>,
}

impl MemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reservation rows, for test assertions.
    pub async fn reservations(&self) -> Vec<Reservation> {
        self.inner.read().await.reservations.clone()
    }

    /// Snapshot of the audit trail, for test assertions.
    pub async fn history(&self) -> Vec<HistoryEntry> {
        self.inner.read().await.history.clone()
    }
}

fn key_matches(reservation: &Reservation, key: &ReservationKey) -> bool {
    match key {
        ReservationKey::Number(v) => reservation.reservation_number == *v,
        // UPPER() comparison, as the SQL predicate does it.
        ReservationKey::Name(v) => reservation.name.to_uppercase() == v.to_uppercase(),
        ReservationKey::Phone(v) => reservation.phone == *v,
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    async fn create(&self, new: &NewReservation) -> StoreResult<()> {
        let people = validate_party_size(&new.party_size_text)
            .inspect_err(|err| tracing::error!(%err, "reservation create aborted"))?;
        let date = validate_date(&new.date_text)
            .inspect_err(|err| tracing::error!(%err, "reservation create aborted"))?;

        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.reservations.push(Reservation {
            id,
            reservation_number: new.reservation_number.clone(),
            name: new.name.clone(),
            phone: new.phone.clone(),
            date,
            number_of_people: people,
            status: ReservationStatus::Confirmed,
        });
        inner.history.push(HistoryEntry {
            reservation_id: id,
            action: HistoryAction::Create,
            details: create_details(&new.name, date, people),
        });

        tracing::info!(reservation_id = id, reservation_number = %new.reservation_number, "reservation created");
        Ok(())
    }

    async fn cancel(&self, key: &ReservationKey) -> StoreResult<Option<CancelledReservation>> {
        let mut inner = self.inner.write().await;
        let Some(reservation) = inner
            .reservations
            .iter_mut()
            .find(|r| r.status == ReservationStatus::Confirmed && key_matches(r, key))
        else {
            tracing::warn!(?key, "no confirmed reservation matched for cancel");
            return Ok(None);
        };

        reservation.status = ReservationStatus::Cancelled;
        let cancelled = CancelledReservation {
            id: reservation.id,
            name: reservation.name.clone(),
            date: reservation.date,
        };
        inner.history.push(HistoryEntry {
            reservation_id: cancelled.id,
            action: HistoryAction::Cancel,
            details: cancel_details(&cancelled.name, cancelled.date),
        });

        tracing::info!(reservation_id = cancelled.id, "reservation cancelled");
        Ok(Some(cancelled))
    }

    async fn get_details(&self, key: &ReservationKey) -> StoreResult<Option<Reservation>> {
        let inner = self.inner.read().await;
        Ok(inner
            .reservations
            .iter()
            .find(|r| key_matches(r, key))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use chrono::NaiveDate;

    fn durand() -> NewReservation {
        NewReservation {
            reservation_number: "1234".into(),
            name: "DURAND".into(),
            phone: "0612345678".into(),
            date_text: "5/3/2025".into(),
            party_size_text: "4".into(),
        }
    }

    #[tokio::test]
    async fn create_writes_reservation_and_history_atomically() {
        let store = MemoryReservationStore::new();
        store.create(&durand()).await.unwrap();

        let rows = store.reservations().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, ReservationStatus::Confirmed);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(rows[0].number_of_people, 4);

        let history = store.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].action, HistoryAction::Create);
        assert_eq!(
            history[0].details,
            "Réservation créée pour DURAND le 05/03/2025 pour 4 personnes"
        );
    }

    #[tokio::test]
    async fn invalid_party_size_writes_nothing() {
        let store = MemoryReservationStore::new();
        let err = store
            .create(&NewReservation {
                party_size_text: "abc".into(),
                ..durand()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidPartySize(_)));
        assert!(store.reservations().await.is_empty());
        assert!(store.history().await.is_empty());
    }

    #[tokio::test]
    async fn invalid_calendar_date_writes_nothing() {
        let store = MemoryReservationStore::new();
        let err = store
            .create(&NewReservation {
                date_text: "31/04/2025".into(),
                ..durand()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidDate(_)));
        assert!(store.reservations().await.is_empty());
        assert!(store.history().await.is_empty());
    }

    #[tokio::test]
    async fn cancel_by_phone_then_second_cancel_finds_nothing() {
        let store = MemoryReservationStore::new();
        store.create(&durand()).await.unwrap();

        let key = ReservationKey::Phone("0612345678".into());
        let cancelled = store.cancel(&key).await.unwrap().unwrap();
        assert_eq!(cancelled.name, "DURAND");

        let rows = store.reservations().await;
        assert_eq!(rows[0].status, ReservationStatus::Cancelled);

        let history = store.history().await;
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].action, HistoryAction::Cancel);
        assert_eq!(
            history[1].details,
            "Réservation annulée pour DURAND le 05/03/2025"
        );

        // The row is no longer confirmed — second cancel is a no-match.
        assert!(store.cancel(&key).await.unwrap().is_none());
        assert_eq!(store.history().await.len(), 2);
    }

    #[tokio::test]
    async fn cancel_by_name_is_case_insensitive() {
        let store = MemoryReservationStore::new();
        store.create(&durand()).await.unwrap();

        let cancelled = store
            .cancel(&ReservationKey::Name("durand".into()))
            .await
            .unwrap();
        assert!(cancelled.is_some());
    }

    #[tokio::test]
    async fn cancel_unknown_key_is_a_clean_no_match() {
        let store = MemoryReservationStore::new();
        store.create(&durand()).await.unwrap();

        assert!(
            store
                .cancel(&ReservationKey::Number("9999".into()))
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(store.history().await.len(), 1);
    }

    #[tokio::test]
    async fn get_details_finds_cancelled_rows_too() {
        let store = MemoryReservationStore::new();
        store.create(&durand()).await.unwrap();
        store
            .cancel(&ReservationKey::Number("1234".into()))
            .await
            .unwrap();

        let found = store
            .get_details(&ReservationKey::Number("1234".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.status, ReservationStatus::Cancelled);
        assert_eq!(found.name, "DURAND");
    }

    #[tokio::test]
    async fn get_details_unknown_is_none() {
        let store = MemoryReservationStore::new();
        let found = store
            .get_details(&ReservationKey::Phone("0000000000".into()))
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
