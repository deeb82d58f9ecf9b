//! Elapsed Time
//!
//! Converts the reference timestamp into fractional Julian years and
//! splits the result into the integer/fraction pieces the widget shows.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::config::FRACTION_DIGITS;

/// Fixed-length Julian year, not calendar aware
pub const MS_PER_YEAR: f64 = 365.25 * 24.0 * 3600.0 * 1000.0;

/// Local date-time layouts produced by `<input type="datetime-local">`
const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

pub fn elapsed_years(now_ms: f64, birth_ms: f64) -> f64 {
    (now_ms - birth_ms) / MS_PER_YEAR
}

/// Parse a stored birthdate into epoch milliseconds.
///
/// Accepts RFC 3339, a bare date (UTC midnight) or a local date-time.
pub fn parse_birthdate(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis() as f64);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(midnight.and_utc().timestamp_millis() as f64);
    }
    LOCAL_FORMATS.iter().find_map(|fmt| {
        let naive = NaiveDateTime::parse_from_str(raw, fmt).ok()?;
        Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp_millis() as f64)
    })
}

/// One rendered tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgeReading {
    pub integer: String,
    /// Digits after the decimal point, without the dot
    pub fraction: String,
}

impl AgeReading {
    pub fn from_years(years: f64) -> Self {
        let text = format!("{:.*}", FRACTION_DIGITS, years);
        match text.split_once('.') {
            Some((integer, fraction)) => Self {
                integer: integer.to_string(),
                fraction: fraction.to_string(),
            },
            None => Self {
                integer: text,
                fraction: String::new(),
            },
        }
    }

    pub fn at(now_ms: f64, birth_ms: f64) -> Self {
        Self::from_years(elapsed_years(now_ms, birth_ms))
    }

    /// Fraction as shown next to the integer part, e.g. `.123456789`
    pub fn fraction_display(&self) -> String {
        format!(".{}", self.fraction)
    }
}
