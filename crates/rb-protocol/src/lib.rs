//! Shared types for the reservation assistant.
//!
//! Everything the extractor, the store, and the action server agree on
//! lives here: slot fields and their canonical order, the persistent
//! reservation entities, the lookup key with its identifier precedence,
//! French date parsing, and the webhook wire format spoken by the
//! dialogue engine.

pub mod action;
pub mod dates;
pub mod reservation;
pub mod slots;

pub use action::*;
pub use reservation::*;
pub use slots::*;
