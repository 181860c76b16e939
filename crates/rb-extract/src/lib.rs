//! Fallback slot extractor for the reservation assistant.
//!
//! When the upstream NLU leaves reservation fields empty, an ordered
//! table of pattern rules recovers them from the raw message text:
//! date (numeric or French textual), party size, customer name, phone.
//! Extraction is pure and never fails — a non-matching field is simply
//! reported as missing.

pub mod rules;

pub use rules::complete;
