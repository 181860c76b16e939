//! Reservation storage error taxonomy.

use thiserror::Error;

/// Errors surfaced by reservation storage operations.
///
/// A no-match on cancel/lookup is not an error — those operations
/// return `Ok(None)`. Everything here aborts the operation with no
/// partial write.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The connection pool could not be built or yielded no connection;
    /// the store fails every operation fast instead of blocking.
    #[error("reservation storage is unavailable")]
    Unavailable,

    /// Party size did not parse as a positive integer.
    #[error("invalid party size: {0}")]
    InvalidPartySize(String),

    /// Date text matched neither accepted form, or is not a real
    /// calendar date.
    #[error("invalid reservation date: {0}")]
    InvalidDate(String),

    /// Any other database-layer fault; the transaction was rolled back.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
