//! Utilities for date parsing and formatting
//!
//! Filters keep `NaiveDate` values; the wire and the native `<input type="date">`
//! both use ISO `YYYY-MM-DD`.

use chrono::{Datelike, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Format a date as ISO `YYYY-MM-DD`
pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Parse an ISO date, tolerating a trailing time part.
/// Empty or malformed input yields `None`.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> 2024-03-15
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, ISO_FORMAT).ok()
}

/// Format a date for display, e.g. "Mar 15, 2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Jan 1 of the year containing `date`
pub fn year_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// Dec 31 of the year containing `date`
pub fn year_end(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_iso_round_trip() {
        assert_eq!(to_iso(d(2024, 3, 5)), "2024-03-05");
        assert_eq!(parse_iso("2024-03-15"), Some(d(2024, 3, 15)));
        assert_eq!(parse_iso("2024-03-15T14:02:26.123Z"), Some(d(2024, 3, 15)));
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(parse_iso(""), None);
        assert_eq!(parse_iso("invalid"), None);
        assert_eq!(parse_iso("2024-02-30"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(d(2024, 3, 15)), "Mar 15, 2024");
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_start(d(2024, 2, 17)), d(2024, 2, 1));
        assert_eq!(month_end(d(2024, 2, 17)), d(2024, 2, 29));
        assert_eq!(month_end(d(2023, 2, 1)), d(2023, 2, 28));
        assert_eq!(month_end(d(2024, 12, 5)), d(2024, 12, 31));
        assert_eq!(month_end(d(2024, 4, 30)), d(2024, 4, 30));
    }

    #[test]
    fn test_year_bounds() {
        assert_eq!(year_start(d(2024, 7, 4)), d(2024, 1, 1));
        assert_eq!(year_end(d(2024, 7, 4)), d(2024, 12, 31));
    }
}
