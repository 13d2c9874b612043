//! Input date parsing and the canonical store date representation.
//!
//! Every date accepted by the service is coerced to a `NaiveDate` during
//! validation and serialized as ISO `YYYY-MM-DD` everywhere after that, so a
//! date that passes validation is the same date a later lookup filters on.

use chrono::NaiveDate;

/// Canonical serialization format for dates held in record fields.
pub const STORE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Plain-date input formats, tried in order. `DD/MM/YYYY` is the form
/// timesheet clients have historically submitted.
const INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Parse a date from any accepted input representation.
///
/// Accepts ISO `YYYY-MM-DD`, `DD/MM/YYYY`, and RFC 3339 timestamps (only the
/// date part is kept). Returns `None` for anything else; callers fold that
/// into a validation violation.
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    for format in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Render a date in the canonical store format.
pub fn format_store_date(date: NaiveDate) -> String {
    date.format(STORE_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_input_date("2024-01-05"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn parses_day_first_dates() {
        assert_eq!(
            parse_input_date("05/01/2024"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn parses_rfc3339_timestamps() {
        assert_eq!(
            parse_input_date("2024-01-05T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            parse_input_date("  2024-01-05 "),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_input_date("not-a-date"), None);
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("2024-13-40"), None);
    }

    #[test]
    fn store_format_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(parse_input_date(&format_store_date(date)), Some(date));
    }
}
