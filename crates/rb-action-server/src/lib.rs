//! Action webhook server for the reservation assistant.
//!
//! The dialogue engine posts the name of a custom action plus its
//! conversation tracker to `POST /webhook`; the dispatcher runs the
//! matching handler (slot completion + commit, cancel, details lookup,
//! fallback) and answers with slot events and French utterances.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `rb-e2e-tests`) can access `AppState` and `build_router`.

pub mod actions;
pub mod config;
pub mod error;
pub mod messages;
pub mod routes;
pub mod state;
