/// Utilities for date formatting
///
/// Server timestamps look like "2019-05-10T10:21:32.000+0000"; plain dates
/// like "2017-10-24".
use chrono::{DateTime, NaiveDate};

const DISPLAY_FORMAT: &str = "%d %b %Y";

/// Format a platform timestamp or ISO date as "10 May 2019"
/// Returns the input unchanged when it cannot be parsed.
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(format_naive_date)
        .unwrap_or_else(|| value.to_string())
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
