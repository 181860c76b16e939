//! PostgreSQL-backed reservation store.
//!
//! Built over a bounded `PgPool` (min 1, max 10 connections). Pool
//! construction failure degrades the store instead of crashing the
//! process: every operation then fails fast with
//! [`StoreError::Unavailable`]. Transactions rely on sqlx RAII — an
//! early return drops the transaction, which rolls it back and hands
//! the connection back to the pool on every exit path.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use rb_protocol::{HistoryAction, Reservation, ReservationKey, ReservationStatus};

use crate::config::PgConfig;
use crate::error::{StoreError, StoreResult};
use crate::store::{
    CancelledReservation, NewReservation, ReservationStore, cancel_details, create_details,
    validate_date, validate_party_size,
};

/// How long an operation waits for a pooled connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

pub struct PgReservationStore {
    /// `None` when pool construction failed — degraded mode.
    pool: Option<PgPool>,
}

impl PgReservationStore {
    /// Build the pool, run migrations, and return the store.
    ///
    /// Never fails: on any error the store comes up degraded and every
    /// operation reports [`StoreError::Unavailable`], so callers always
    /// get a failure signal instead of an unhandled fault.
    pub async fn connect(config: &PgConfig) -> Self {
        match Self::try_connect(config).await {
            Ok(pool) => {
                tracing::info!(
                    host = %config.host,
                    database = %config.database,
                    "reservation database pool ready"
                );
                Self { pool: Some(pool) }
            }
            Err(err) => {
                tracing::error!(error = %err, "reservation database pool unavailable");
                Self { pool: None }
            }
        }
    }

    async fn try_connect(config: &PgConfig) -> Result<PgPool, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .min_connections(1)
            .max_connections(10)
            // Fail fast on exhaustion instead of starving the dialogue
            // engine's response budget.
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(&config.url())
            .await?;

        tracing::info!("running reservation migrations");
        sqlx::raw_sql(include_str!("../migrations/001_reservations.sql"))
            .execute(&pool)
            .await?;
        sqlx::raw_sql(include_str!("../migrations/002_reservation_history.sql"))
            .execute(&pool)
            .await?;

        Ok(pool)
    }

    /// A store with no pool; every operation fails with `Unavailable`.
    pub fn unavailable() -> Self {
        Self { pool: None }
    }

    fn pool(&self) -> StoreResult<&PgPool> {
        self.pool.as_ref().ok_or(StoreError::Unavailable)
    }
}

/// SQL predicate and bind value for a lookup key.
fn key_predicate(key: &ReservationKey) -> (&'static str, &str) {
    match key {
        ReservationKey::Number(v) => ("reservation_number = $1", v),
        ReservationKey::Name(v) => ("UPPER(name) = UPPER($1)", v),
        ReservationKey::Phone(v) => ("phone = $1", v),
    }
}

#[async_trait]
impl ReservationStore for PgReservationStore {
    fn is_available(&self) -> bool {
        self.pool.is_some()
    }

    async fn create(&self, new: &NewReservation) -> StoreResult<()> {
        let pool = self.pool()?;

        // Validate before touching storage — abort means zero writes.
        let people = validate_party_size(&new.party_size_text)
            .inspect_err(|err| tracing::error!(%err, "reservation create aborted"))?;
        let date = validate_date(&new.date_text)
            .inspect_err(|err| tracing::error!(%err, "reservation create aborted"))?;

        let mut tx = pool.begin().await?;

        let reservation_id: i64 = sqlx::query_scalar(
            "INSERT INTO reservations (reservation_number, name, phone, date, number_of_people, status)
             VALUES ($1, $2, $3, $4, $5, 'confirmed')
             RETURNING id",
        )
        .bind(&new.reservation_number)
        .bind(&new.name)
        .bind(&new.phone)
        .bind(date)
        .bind(people)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO reservation_history (reservation_id, action, details)
             VALUES ($1, $2, $3)",
        )
        .bind(reservation_id)
        .bind(HistoryAction::Create.as_str())
        .bind(create_details(&new.name, date, people))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(
            reservation_id,
            reservation_number = %new.reservation_number,
            "reservation created"
        );
        Ok(())
    }

    async fn cancel(&self, key: &ReservationKey) -> StoreResult<Option<CancelledReservation>> {
        let pool = self.pool()?;
        let (predicate, value) = key_predicate(key);

        let mut tx = pool.begin().await?;

        let sql = format!(
            "UPDATE reservations SET status = 'cancelled'
             WHERE {predicate} AND status = 'confirmed'
             RETURNING id, name, date"
        );
        let row: Option<(i64, String, NaiveDate)> = sqlx::query_as(&sql)
            .bind(value)
            .fetch_optional(&mut *tx)
            .await?;

        let Some((id, name, date)) = row else {
            // Transaction dropped here — nothing was committed.
            tracing::warn!(?key, "no confirmed reservation matched for cancel");
            return Ok(None);
        };

        sqlx::query(
            "INSERT INTO reservation_history (reservation_id, action, details)
             VALUES ($1, $2, $3)",
        )
        .bind(id)
        .bind(HistoryAction::Cancel.as_str())
        .bind(cancel_details(&name, date))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::info!(reservation_id = id, "reservation cancelled");
        Ok(Some(CancelledReservation { id, name, date }))
    }

    async fn get_details(&self, key: &ReservationKey) -> StoreResult<Option<Reservation>> {
        let pool = self.pool()?;
        let (predicate, value) = key_predicate(key);

        let sql = format!(
            "SELECT id, reservation_number, name, phone, date, number_of_people, status
             FROM reservations WHERE {predicate}"
        );
        let row: Option<(i64, String, String, String, NaiveDate, i32, String)> =
            sqlx::query_as(&sql).bind(value).fetch_optional(pool).await?;

        row.map(|(id, reservation_number, name, phone, date, number_of_people, status)| {
            let status = ReservationStatus::parse(&status).ok_or_else(|| {
                StoreError::Database(sqlx::Error::Decode(
                    format!("unknown reservation status: {status}").into(),
                ))
            })?;
            Ok(Reservation {
                id,
                reservation_number,
                name,
                phone,
                date,
                number_of_people,
                status,
            })
        })
        .transpose()
    }
}
