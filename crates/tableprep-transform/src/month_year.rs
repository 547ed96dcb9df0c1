//! Date parsing for text columns on their way into the range filter.
//!
//! Two rungs, tried whole-column by the caller: the exact
//! abbreviated-month-hyphen-year shape the loan data carries (`Jan-2016`),
//! then a lenient ladder of the formats the generic parser accepted in
//! practice.

use chrono::{NaiveDate, NaiveDateTime};

const MONTH_ABBREVIATIONS: &[(&str, u32)] = &[
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

fn month_number(abbrev: &str) -> Option<u32> {
    let lower = abbrev.to_ascii_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, number)| *number)
}

/// Parse an abbreviated-month-hyphen-year value such as `Jan-2016`.
///
/// The year must be exactly four digits; the result is pinned to the first
/// day of the month.
pub fn parse_month_year(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let (month_part, year_part) = trimmed.split_once('-')?;
    let month = month_number(month_part)?;
    if year_part.len() != 4 || !year_part.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year_part.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d-%b-%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Lenient fallback parse across a fixed ladder of common formats.
///
/// Datetime values lose their time-of-day; only the calendar date survives.
pub fn parse_date_lenient(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Some(date) = parse_month_year(trimmed) {
        return Some(date);
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}
