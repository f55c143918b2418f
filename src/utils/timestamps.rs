use chrono::{Datelike, NaiveDateTime};

/// Display formats seen in chat exports, tried in order
const EXPORT_FORMATS: &[&str] = &[
    "%b %d, %Y %I:%M %p",
    "%b %d, %Y, %I:%M %p",
    "%b %d, %Y %I:%M:%S %p",
    "%b %d, %Y %H:%M",
];

/// Parse an export display time such as `Jan 05, 2024 3:12 pm`
pub fn parse_export_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    EXPORT_FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Shorten an export display time for narrow views:
/// - Current year: "Jan 5 15:12"
/// - Other years: "Jan 5, 2023 15:12"
///
/// Unrecognized input is returned unchanged.
pub fn compact_timestamp(raw: &str, current_year: i32) -> String {
    match parse_export_timestamp(raw) {
        Some(ts) if ts.year() == current_year => ts.format("%b %-d %H:%M").to_string(),
        Some(ts) => ts.format("%b %-d, %Y %H:%M").to_string(),
        None => raw.to_string(),
    }
}
