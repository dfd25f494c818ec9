//! Date display helpers.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::{DateTime, NaiveDate};

/// Render an ISO-ish date as `M/D/YYYY`.
///
/// Accepts full RFC 3339 timestamps and the directory's unpadded
/// `YYYY-M-D` dates. Empty input renders empty; anything unparseable is
/// returned as given.
pub fn format_iso_date(iso: &str) -> String {
    let iso = iso.trim();
    if iso.is_empty() {
        return String::new();
    }
    let date = DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(iso, "%Y-%m-%d"));
    match date {
        Ok(d) => d.format("%-m/%-d/%Y").to_string(),
        Err(_) => iso.to_owned(),
    }
}
