//! Tolerant roster date parsing
//! Tries a fixed, ordered list of accepted formats; the first match wins
//!
//! Accepted component orders:
//!   1. YYYY-MM-DD
//!   2. MM/DD/YYYY
//!   3. DD/MM/YYYY
//!   4. YYYY-MM-DDTHH:MM:SS±HHMM (full timestamp with offset)
//!
//! `-` and `/` are interchangeable separators in the three numeric date
//! forms, so `2014/01/05` and `05-16-2012` parse. No further order is
//! guessed: month-name forms such as `27-Apr-2011` fail, and the caller
//! decides the fallback policy.
//!
//! All parsing is locale-invariant and anchored to UTC midnight so day
//! counting is deterministic regardless of where the pipeline executes.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::error::{AppError, Result};

/// Date-only formats, tried in order against the separator-normalized text
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m-%d-%Y", "%d-%m-%Y"];

/// Full timestamp with numeric offset, tried last
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a roster date cell to a UTC instant.
///
/// Date-only text maps to UTC midnight of that calendar day; timestamped
/// text keeps its time of day, converted to UTC.
pub fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    // Slash and dash are equivalent separators in the date-only forms
    let canonical = text.replace('/', "-");

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&canonical, format) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    if let Ok(instant) = DateTime::parse_from_str(&canonical, TIMESTAMP_FORMAT) {
        return Ok(instant.with_timezone(&Utc));
    }

    Err(AppError::ParseError(format!(
        "Unrecognized date format: {}",
        text
    )))
}
