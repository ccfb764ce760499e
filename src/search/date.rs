// Strict calendar date handling for the search wire format
// Dates travel as zero-padded dd/mm/yyyy strings and must name a day that
// actually exists on the calendar.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

const DMY_FORMAT: &str = "%d/%m/%Y";

/// Shape gate for the wire format: chrono alone tolerates unpadded day and
/// month fields, which the format forbids.
fn dmy_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").expect("pattern is a valid literal"))
}

/// Parse a strict `dd/mm/yyyy` date
///
/// Accepts only zero-padded day and month with a four-digit year, and only
/// combinations that exist: there is no rollover, so 29/02 parses in leap
/// years and fails in all others.
pub fn parse_strict_dmy(input: &str) -> Result<NaiveDate, String> {
    if !dmy_shape().is_match(input) {
        return Err(format!("Date must be in dd/mm/yyyy form: {:?}", input));
    }

    NaiveDate::parse_from_str(input, DMY_FORMAT)
        .map_err(|_| format!("No such calendar date: {}", input))
}

/// Canonical wire form of a date
pub fn format_dmy(date: NaiveDate) -> String {
    date.format(DMY_FORMAT).to_string()
}

/// Serde adapter for snapshot date fields
pub mod dmy {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_dmy(*date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_dates() {
        assert_eq!(
            parse_strict_dmy("01/06/2026").unwrap(),
            NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
        );
        assert_eq!(
            parse_strict_dmy("31/12/2026").unwrap(),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_rejects_unpadded_fields() {
        assert!(parse_strict_dmy("1/06/2026").is_err());
        assert!(parse_strict_dmy("01/6/2026").is_err());
        assert!(parse_strict_dmy("01/06/26").is_err());
    }

    #[test]
    fn test_rejects_nonexistent_dates() {
        // No rollover into the next month
        assert!(parse_strict_dmy("31/04/2026").is_err());
        assert!(parse_strict_dmy("00/06/2026").is_err());
        assert!(parse_strict_dmy("15/13/2026").is_err());
    }

    #[test]
    fn test_leap_year_boundary() {
        assert!(parse_strict_dmy("29/02/2025").is_err());
        assert_eq!(
            parse_strict_dmy("29/02/2028").unwrap(),
            NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_rejects_garbage_and_trailing_input() {
        assert!(parse_strict_dmy("").is_err());
        assert!(parse_strict_dmy("tomorrow").is_err());
        assert!(parse_strict_dmy("01-06-2026").is_err());
        assert!(parse_strict_dmy("01/06/2026 ").is_err());
        assert!(parse_strict_dmy("01/06/20261").is_err());
    }

    #[test]
    fn test_format_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        assert_eq!(format_dmy(date), "01/06/2026");
    }

    #[test]
    fn test_parse_format_round_trip() {
        let wire = "07/09/2026";
        assert_eq!(format_dmy(parse_strict_dmy(wire).unwrap()), wire);
    }
}
