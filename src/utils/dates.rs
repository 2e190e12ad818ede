use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{ProcessingError, Result};

/// Timestamp formats carrying an explicit UTC offset. These are
/// normalized to UTC and then stripped to naive local time.
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
];

/// Naive timestamp formats seen across the yearly extracts.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m-%d-%Y %H:%M:%S",
    "%m-%d-%Y %H:%M",
    "%m-%d-%Y %I:%M %p",
];

/// Date-only formats, parsed as midnight.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m-%d-%Y"];

/// Parse a date field under mixed-format recognition.
///
/// The yearly extracts do not agree on a single format, sometimes not even
/// within one column, so every recognized format is tried in turn. The
/// caller is expected to have trimmed the value and replaced "/" with "-"
/// already. Values carrying a timezone offset are converted to UTC before
/// the offset is dropped.
pub fn parse_mixed_datetime(value: &str) -> Result<NaiveDateTime> {
    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Ok(parsed.naive_utc());
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            if let Some(midnight) = parsed.and_hms_opt(0, 0, 0) {
                return Ok(midnight);
            }
        }
    }

    Err(ProcessingError::DateParse {
        value: value.to_string(),
    })
}

/// Full English weekday name of a timestamp ("Monday" .. "Sunday").
pub fn weekday_name(datetime: &NaiveDateTime) -> String {
    datetime.format("%A").to_string()
}
