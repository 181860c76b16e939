//! Shared application state for the Axum server.

use std::sync::Arc;

use rb_store::{MemoryReservationStore, ReservationStore};

/// Shared application state, cloned into every handler.
///
/// The store is injected at construction — production wires the
/// PostgreSQL store (possibly degraded), tests wire the in-memory one.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReservationStore>,
}

impl AppState {
    pub fn with_store(store: Arc<dyn ReservationStore>) -> Self {
        Self { store }
    }

    /// In-memory state for tests and DB-less development.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryReservationStore::new()),
        }
    }
}
