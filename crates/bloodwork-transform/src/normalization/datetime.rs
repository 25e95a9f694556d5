//! Collection date parsing for chronological ordering.
//!
//! Report dates are kept as the author wrote them; this module only derives a
//! sortable calendar date. ISO forms are tried first, then the US forms used
//! by American lab reports, then month-name forms.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%y",  // US short: 01/15/24, before %Y reads "24" as a year
    "%m/%d/%Y",  // US: 01/15/2024
    "%m-%d-%Y",  // US: 01-15-2024
    "%d-%b-%Y",  // 15-Jan-2024
    "%d-%B-%Y",  // 15-January-2024
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
    "%Y%m%d",    // Compact: 20240115
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a collection date into a calendar date.
///
/// Accepts a date, a local date-time, or an RFC 3339 timestamp (the date part
/// in its own offset is used). Returns `None` for anything else.
pub fn parse_collection_date(value: &str) -> Option<NaiveDate> {
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
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(datetime.date());
        }
    }

    let parsed = chrono::DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive());
    if parsed.is_none() {
        debug!("collection date not recognized; it sorts last");
    }
    parsed
}
