//! Lenient date parsing for scraped exports.
//!
//! Exports mix US slash dates (`3/7/2025`, `03-07-25`), ISO dates with or
//! without a time part, and long-form dates (`March 7, 2025`). Anything
//! else is "no signal" and yields `None`.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

/// `M/D/Y` or `M-D-Y` with a 2- or 4-digit year.
static US_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4}|\d{2})$").expect("Invalid US date regex")
});

/// `YYYY-MM-DD` or `YYYY/MM/DD`, optionally followed by a time part.
static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})(?:[T ].*)?$").expect("Invalid ISO date regex")
});

const LONG_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%B %d %Y", "%d %B %Y"];

/// Two-digit years below this pivot land in the 2000s, the rest in the 1900s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// Parses a date in any of the formats seen in source exports.
pub fn parse_loose_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(date) = parse_us_date(trimmed).or_else(|| parse_iso_date(trimmed)) {
        return Some(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(datetime.date_naive());
    }

    for format in LONG_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    // "3/7/2025 12:00:00 AM" and similar: retry on the date token alone.
    let first_token = trimmed.split_whitespace().next()?;
    if first_token.len() < trimmed.len() {
        return parse_us_date(first_token).or_else(|| parse_iso_date(first_token));
    }

    None
}

fn parse_us_date(value: &str) -> Option<NaiveDate> {
    let caps = US_DATE_REGEX.captures(value)?;
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year_text = &caps[3];
    let mut year: i32 = year_text.parse().ok()?;
    if year_text.len() == 2 {
        year += if year < TWO_DIGIT_YEAR_PIVOT { 2000 } else { 1900 };
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let caps = ISO_DATE_REGEX.captures(value)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parses_us_dates() {
        assert_eq!(parse_loose_date("3/7/2025"), Some(ymd(2025, 3, 7)));
        assert_eq!(parse_loose_date("03-07-2025"), Some(ymd(2025, 3, 7)));
        assert_eq!(parse_loose_date("12/31/24"), Some(ymd(2024, 12, 31)));
        assert_eq!(parse_loose_date("1/1/75"), Some(ymd(1975, 1, 1)));
    }

    #[test]
    fn test_parses_iso_dates_and_datetimes() {
        assert_eq!(parse_loose_date("2025-03-07"), Some(ymd(2025, 3, 7)));
        assert_eq!(parse_loose_date("2025/3/7"), Some(ymd(2025, 3, 7)));
        assert_eq!(parse_loose_date("2025-03-07T10:15:00"), Some(ymd(2025, 3, 7)));
        assert_eq!(
            parse_loose_date("2025-03-07T10:15:00-05:00"),
            Some(ymd(2025, 3, 7))
        );
    }

    #[test]
    fn test_parses_long_form_dates() {
        assert_eq!(parse_loose_date("March 7, 2025"), Some(ymd(2025, 3, 7)));
        assert_eq!(parse_loose_date("Mar 7, 2025"), Some(ymd(2025, 3, 7)));
    }

    #[test]
    fn test_parses_date_with_trailing_time() {
        assert_eq!(
            parse_loose_date("3/7/2025 12:00:00 AM"),
            Some(ymd(2025, 3, 7))
        );
    }

    #[test]
    fn test_rejects_garbage_and_impossible_dates() {
        assert_eq!(parse_loose_date(""), None);
        assert_eq!(parse_loose_date("N/A"), None);
        assert_eq!(parse_loose_date("soon"), None);
        assert_eq!(parse_loose_date("2/30/2025"), None);
        assert_eq!(parse_loose_date("13/1/2025"), None);
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(ymd(2025, 1, 1), ymd(2025, 1, 31)), 30);
        assert_eq!(days_between(ymd(2025, 1, 31), ymd(2025, 1, 1)), -30);
    }
}
