//! French reservation-date parsing.
//!
//! Two textual forms are accepted, the same two the slot extractor
//! recognizes: numeric `D/M/YYYY` (also `-` separated) and
//! `D <french month> YYYY`. Calendar validity is enforced here —
//! "31/04/2025" has a valid shape but is not a date.

use chrono::NaiveDate;

/// Lowercase French month names with their month numbers.
pub const FRENCH_MONTHS: [(&str, u32); 12] = [
    ("janvier", 1),
    ("février", 2),
    ("mars", 3),
    ("avril", 4),
    ("mai", 5),
    ("juin", 6),
    ("juillet", 7),
    ("août", 8),
    ("septembre", 9),
    ("octobre", 10),
    ("novembre", 11),
    ("décembre", 12),
];

/// Month number for a French month name, case-insensitive.
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    FRENCH_MONTHS
        .iter()
        .find(|(month, _)| *month == lower)
        .map(|(_, n)| *n)
}

/// Parse a reservation date in either accepted form.
///
/// Returns `None` for unrecognized shapes, unknown month names, and
/// shapes that do not form a real calendar date.
pub fn parse_reservation_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.contains('/') || text.contains('-') {
        parse_numeric(text)
    } else {
        parse_textual(text)
    }
}

/// `D/M/YYYY` or `D-M-YYYY`, day first.
fn parse_numeric(text: &str) -> Option<NaiveDate> {
    let sep = if text.contains('/') { '/' } else { '-' };
    let mut parts = text.split(sep);
    let day: u32 = parts.next()?.trim().parse().ok()?;
    let month: u32 = parts.next()?.trim().parse().ok()?;
    let year: i32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `D <french month> YYYY`, e.g. "25 mars 2025".
fn parse_textual(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split_whitespace();
    let day: u32 = parts.next()?.parse().ok()?;
    let month = month_number(parts.next()?)?;
    let year: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_slash() {
        assert_eq!(
            parse_reservation_date("5/3/2025"),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
    }

    #[test]
    fn numeric_dash() {
        assert_eq!(
            parse_reservation_date("05-03-2025"),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
    }

    #[test]
    fn textual_month() {
        assert_eq!(
            parse_reservation_date("25 mars 2025"),
            NaiveDate::from_ymd_opt(2025, 3, 25)
        );
    }

    #[test]
    fn textual_month_case_insensitive() {
        assert_eq!(
            parse_reservation_date("25 Mars 2025"),
            NaiveDate::from_ymd_opt(2025, 3, 25)
        );
        assert_eq!(
            parse_reservation_date("1 Décembre 2025"),
            NaiveDate::from_ymd_opt(2025, 12, 1)
        );
    }

    #[test]
    fn invalid_calendar_date_rejected() {
        // Valid shape, not a real date.
        assert_eq!(parse_reservation_date("31/04/2025"), None);
        assert_eq!(parse_reservation_date("29 février 2025"), None);
    }

    #[test]
    fn unknown_month_rejected() {
        assert_eq!(parse_reservation_date("25 march 2025"), None);
    }

    #[test]
    fn malformed_shapes_rejected() {
        assert_eq!(parse_reservation_date("5/3"), None);
        assert_eq!(parse_reservation_date("5/3/2025/1"), None);
        assert_eq!(parse_reservation_date("demain"), None);
        assert_eq!(parse_reservation_date(""), None);
    }
}
