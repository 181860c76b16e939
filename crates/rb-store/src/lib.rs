//! Transactional reservation persistence.
//!
//! The [`ReservationStore`] trait is the seam the action server is
//! written against: a PostgreSQL implementation over a bounded
//! connection pool for production, and an in-memory implementation with
//! identical semantics for tests and DB-less development.
//!
//! Guarantees common to both implementations:
//! - a reservation row and its `create` history row are written in one
//!   transaction — never one without the other;
//! - cancel transitions `confirmed` → `cancelled` and writes its
//!   `cancel` history row in the same transaction;
//! - validation failures abort before any write;
//! - storage faults surface as [`StoreError`], never as panics.

pub mod config;
pub mod error;
pub mod memory;
pub mod pg;
mod store;

pub use config::PgConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryReservationStore;
pub use pg::PgReservationStore;
pub use store::{CancelledReservation, NewReservation, ReservationStore};
