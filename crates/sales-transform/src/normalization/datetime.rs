//! Permissive date parsing for free-form `date_sold` values.

use chrono::{NaiveDate, NaiveDateTime};

/// Date-only formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%d/%m/%Y",  // European: 15/01/2024
    "%m/%d/%Y",  // US: 01/15/2024
    "%d.%m.%Y",  // German: 15.01.2024
    "%Y%m%d",    // Compact: 20240115
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
    "%d-%m-%Y",  // 15-01-2024
];

/// Datetime formats; the time component is discarded.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d-%b-%Y %H:%M", // 15-Jan-2024 10:30
];

/// Best-effort parse of a free-form date string to a calendar date.
///
/// Empty and unparseable values return None; the date normalizer stage maps
/// those to the missing marker and drops the row.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn parses_iso_and_slashed_dates() {
        assert_eq!(parse_date("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date(" 2024/01/05 "), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("20240105"), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn parses_month_names() {
        assert_eq!(parse_date("15-Jan-2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("Jan 15, 2024"), Some(ymd(2024, 1, 15)));
        assert_eq!(parse_date("15 January 2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn ambiguous_slashed_dates_resolve_day_first() {
        assert_eq!(parse_date("03/04/2024"), Some(ymd(2024, 4, 3)));
        // month 15 only parses month-second
        assert_eq!(parse_date("01/15/2024"), Some(ymd(2024, 1, 15)));
    }

    #[test]
    fn discards_time_components() {
        assert_eq!(parse_date("2024-01-05 10:30:00"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_date("2024-01-05T10:30"), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2024-13-05"), None);
    }
}
