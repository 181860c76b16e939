//! The ordered extraction rule table.
//!
//! Rules are evaluated top to bottom, per field, only when the field is
//! not already known — first match wins, later rules for the same field
//! are fallbacks. Keeping the table data-driven makes adding a locale
//! or date format a one-line change.

use std::sync::LazyLock;

use regex::Regex;

use rb_protocol::{ReservationSlots, SlotField};

/// Transform applied to a rule's first capture group.
type Transform = fn(&str) -> String;

struct ExtractionRule {
    field: SlotField,
    /// Short name for debug logging.
    name: &'static str,
    pattern: Regex,
    transform: Transform,
}

fn verbatim(s: &str) -> String {
    s.to_string()
}

fn uppercased(s: &str) -> String {
    s.to_uppercase()
}

static RULES: LazyLock<Vec<ExtractionRule>> = LazyLock::new(|| {
    let rule = |field, name, pattern: &str, transform| ExtractionRule {
        field,
        name,
        pattern: Regex::new(pattern).unwrap(),
        transform,
    };
    vec![
        // Date: numeric D/M/YYYY (or dashes), then "D <month> YYYY".
        rule(
            SlotField::Date,
            "date_numeric",
            r"(\d{1,2}[/-]\d{1,2}[/-]\d{4})",
            verbatim,
        ),
        rule(
            SlotField::Date,
            "date_text",
            r"(?i)(\d{1,2}\s+(?:janvier|février|mars|avril|mai|juin|juillet|août|septembre|octobre|novembre|décembre)\s+\d{4})",
            verbatim,
        ),
        // Party size: digits followed by "personnes" / "pers" / "pers.".
        rule(
            SlotField::PartySize,
            "party_size",
            r"(?i)(\d+)\s*(?:personnes|pers\.?)",
            verbatim,
        ),
        // Name: "au nom de X" family, then the "c'est X" contraction.
        // The letter class is matched case-insensitively and the capture
        // uppercased, so "au nom de durand" still yields DURAND.
        rule(
            SlotField::CustomerName,
            "name_marker",
            r"(?i)(?:au\s+nom(?:\s*de)?|nom(?:\s*de)?)\s*([A-ZÉÈÀÙ]{2,})",
            uppercased,
        ),
        rule(
            SlotField::CustomerName,
            "name_cest",
            r"(?i)c(?:'|’)?est\s*([A-ZÉÈÀÙ]{2,})",
            uppercased,
        ),
        // Phone: 10 digits starting with 0, no separators.
        rule(SlotField::Phone, "phone", r"(0\d{9})", verbatim),
    ]
});

/// Fill any unset slots from the raw message text.
///
/// Returns the updated slot set and the required fields still missing,
/// in the canonical reporting order. Already-known values are never
/// overwritten.
pub fn complete(text: &str, known: &ReservationSlots) -> (ReservationSlots, Vec<SlotField>) {
    tracing::debug!(%text, ?known, "running fallback slot extraction");

    let mut slots = known.clone();
    for rule in RULES.iter() {
        if slots.get(rule.field).is_some() {
            continue;
        }
        if let Some(m) = rule.pattern.captures(text).and_then(|c| c.get(1)) {
            let value = (rule.transform)(m.as_str());
            tracing::debug!(rule = rule.name, field = ?rule.field, %value, "slot filled");
            slots.set(rule.field, value);
        } else {
            tracing::debug!(rule = rule.name, field = ?rule.field, "no match");
        }
    }

    let missing = slots.missing();
    tracing::debug!(?slots, ?missing, "slot state after extraction");
    (slots, missing)
}
