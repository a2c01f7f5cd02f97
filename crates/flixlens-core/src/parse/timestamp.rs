use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a timestamp cell and express it in the viewer's `offset`.
///
/// Zoned inputs (RFC 3339, RFC 2822) are converted; naive inputs are read as
/// wall-clock time in `offset`. Date-only inputs resolve to midnight.
pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&offset));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&offset));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    naive.and_local_timezone(offset).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[test]
    fn test_rfc3339_with_zone() {
        let parsed = parse_timestamp("2024-01-05T20:00:00Z", utc()).unwrap();
        assert_eq!(parsed.hour(), 20);
        assert_eq!(parsed.day(), 5);
    }

    #[test]
    fn test_zoned_input_is_converted_to_viewer_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let parsed = parse_timestamp("2024-01-05T20:00:00Z", tokyo).unwrap();
        assert_eq!(parsed.hour(), 5);
        assert_eq!(parsed.day(), 6);
    }

    #[test]
    fn test_naive_input_is_wall_clock_in_viewer_offset() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let parsed = parse_timestamp("2023-11-18 23:15:42", new_york).unwrap();
        assert_eq!(parsed.hour(), 23);
        assert_eq!(parsed.minute(), 15);
        assert_eq!(parsed.offset(), &new_york);
    }

    #[test]
    fn test_other_formats() {
        assert!(parse_timestamp("2024-03-01 08:30", utc()).is_some());
        assert!(parse_timestamp("03/01/2024 08:30:00", utc()).is_some());
        assert!(parse_timestamp("Fri, 05 Jan 2024 20:00:00 +0000", utc()).is_some());

        let date_only = parse_timestamp("2024-03-01", utc()).unwrap();
        assert_eq!(date_only.hour(), 0);
        assert_eq!(date_only.month(), 3);
    }

    #[test]
    fn test_unparseable_inputs() {
        assert!(parse_timestamp("", utc()).is_none());
        assert!(parse_timestamp("yesterday", utc()).is_none());
        assert!(parse_timestamp("2024-13-45 10:00:00", utc()).is_none());
    }
}
