//! Time utilities: parsing HH:MM, minutes since midnight, formatting hours.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Strict parse used by the CLI: returns the canonical "HH:MM" string.
pub fn validate_time(t: &str) -> AppResult<String> {
    parse_time(t)
        .map(|nt| nt.format("%H:%M").to_string())
        .ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Lenient "HH:MM" → minutes since midnight (0..=1439).
///
/// Returns `None` for anything that is not two numeric fields inside a
/// single day. Callers in the calculator treat `None` as a zero contribution.
pub fn to_minutes(s: &str) -> Option<i64> {
    let (h, m) = s.trim().split_once(':')?;
    let h = h.trim().parse::<i64>().ok()?;
    let m = m.trim().parse::<i64>().ok()?;

    if !(0..24).contains(&h) || !(0..60).contains(&m) {
        return None;
    }
    Some(h * 60 + m)
}

pub fn minutes_of(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Hours with two decimals, as shown on the dashboard.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
