//! Timestamp parsing and calendar decomposition

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use super::FeatureError;

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

// Ambiguous dotted and slashed dates are read month-first; the day-first
// form only matches once the month-first one is out of range.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
    "%m.%d.%Y %H:%M:%S%.f",
    "%m.%d.%Y %H:%M",
    "%d/%m/%Y %H:%M:%S%.f",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S%.f",
    "%d.%m.%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%m.%d.%Y", "%d/%m/%Y", "%d.%m.%Y"];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Calendar fields derived from a check timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFields {
    pub weekday: &'static str,
    pub month: &'static str,
    pub hour: u32,
}

/// Parse a check timestamp into its wall-clock date-time.
///
/// Offsets are accepted but not applied: the local fields are kept.
pub fn parse_time_check(raw: &str) -> Result<NaiveDateTime, FeatureError> {
    let value = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Ok(dt.naive_local());
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Some(dt) = NaiveDate::parse_from_str(value, format)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(dt);
        }
    }

    Err(FeatureError::InvalidTimestamp(raw.to_string()))
}

pub fn decompose(dt: &NaiveDateTime) -> CalendarFields {
    CalendarFields {
        weekday: weekday_name(dt.weekday()),
        month: MONTH_NAMES[dt.month0() as usize],
        hour: dt.hour(),
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
