use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a reservation.
///
/// Created `Confirmed`, transitions only to `Cancelled`, never back,
/// never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "confirmed" => Some(ReservationStatus::Confirmed),
            "cancelled" => Some(ReservationStatus::Cancelled),
            _ => None,
        }
    }
}

/// Audit action recorded in the reservation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    Create,
    Cancel,
}

impl HistoryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryAction::Create => "create",
            HistoryAction::Cancel => "cancel",
        }
    }
}

/// A persisted reservation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Database identity.
    pub id: i64,
    /// Operator-facing 4-digit booking number. Not unique (4 digits,
    /// caller-generated); collisions are possible.
    pub reservation_number: String,
    pub name: String,
    pub phone: String,
    pub date: NaiveDate,
    pub number_of_people: i32,
    pub status: ReservationStatus,
}

/// How a cancel/lookup addresses a reservation: exactly one identifier.
///
/// When the dialogue supplies several, the highest-precedence one wins
/// (number, then name, then phone) and the others are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationKey {
    Number(String),
    /// Matched case-insensitively against the stored name.
    Name(String),
    Phone(String),
}

impl ReservationKey {
    /// Build a key from whichever identifiers the dialogue has.
    ///
    /// Empty strings count as absent. `None` when nothing usable is
    /// supplied — callers must treat that as an immediate failure
    /// without touching storage.
    pub fn from_parts(
        number: Option<&str>,
        name: Option<&str>,
        phone: Option<&str>,
    ) -> Option<Self> {
        fn present(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }
        if let Some(n) = present(number) {
            Some(ReservationKey::Number(n.to_string()))
        } else if let Some(n) = present(name) {
            Some(ReservationKey::Name(n.to_string()))
        } else {
            present(phone).map(|p| ReservationKey::Phone(p.to_string()))
        }
    }
}

/// Generate a fresh operator-facing booking number (1000–9999).
pub fn new_reservation_number() -> String {
    rand::thread_rng().gen_range(1000..=9999).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Confirmed).unwrap(),
            r#""confirmed""#
        );
        assert_eq!(ReservationStatus::parse("cancelled"), Some(ReservationStatus::Cancelled));
        assert_eq!(ReservationStatus::parse("pending"), None);
    }

    #[test]
    fn history_action_strings() {
        assert_eq!(HistoryAction::Create.as_str(), "create");
        assert_eq!(HistoryAction::Cancel.as_str(), "cancel");
    }

    #[test]
    fn key_precedence_number_first() {
        let key = ReservationKey::from_parts(Some("1234"), Some("DURAND"), Some("0612345678"));
        assert_eq!(key, Some(ReservationKey::Number("1234".into())));
    }

    #[test]
    fn key_precedence_name_over_phone() {
        let key = ReservationKey::from_parts(None, Some("DURAND"), Some("0612345678"));
        assert_eq!(key, Some(ReservationKey::Name("DURAND".into())));
    }

    #[test]
    fn key_phone_last() {
        let key = ReservationKey::from_parts(None, None, Some("0612345678"));
        assert_eq!(key, Some(ReservationKey::Phone("0612345678".into())));
    }

    #[test]
    fn key_requires_at_least_one_identifier() {
        assert_eq!(ReservationKey::from_parts(None, None, None), None);
        assert_eq!(ReservationKey::from_parts(Some(""), Some("  "), None), None);
    }

    #[test]
    fn reservation_number_is_four_digits() {
        for _ in 0..100 {
            let n: u32 = new_reservation_number().parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }
}
