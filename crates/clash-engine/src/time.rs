//! Wall-clock time and weekday helpers.
//!
//! Times are naive "HH:MM" strings in 24-hour local time; no timezone is ever
//! attached. Days are ordinals with 0 = Monday through 6 = Sunday, the same
//! numbering as [`chrono::Weekday::num_days_from_monday`].

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The seven canonical English day names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A day as it appears in API payloads: either an ordinal or an already-named day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayValue {
    Number(i64),
    Name(String),
}

impl From<u8> for DayValue {
    fn from(n: u8) -> Self {
        DayValue::Number(n as i64)
    }
}

impl From<&str> for DayValue {
    fn from(s: &str) -> Self {
        DayValue::Name(s.to_string())
    }
}

/// Parse an "H:MM" or "HH:MM" string into minutes since midnight.
///
/// - Empty or blank input is `Some(0)`.
/// - The hour token must be an integer, otherwise `None` (`":30"` included).
/// - A missing or non-numeric minute token counts as 0.
/// - Tokens after the second (seconds in "HH:MM:SS") are ignored.
///
/// Ranges are not validated: `"25:99"` yields `Some(1599)`.
pub fn time_to_minutes(time_str: &str) -> Option<i32> {
    let time_str = time_str.trim();
    if time_str.is_empty() {
        return Some(0);
    }

    let mut parts = time_str.split(':');
    let hours: i32 = parts.next().unwrap_or_default().trim().parse().ok()?;
    let minutes: i32 = parts
        .next()
        .and_then(|token| token.trim().parse().ok())
        .unwrap_or(0);

    hours.checked_mul(60)?.checked_add(minutes)
}

/// Format a start/end pair as `"{start} - {end}"`, verbatim.
pub fn format_time_slot(start_time: &str, end_time: &str) -> String {
    format!("{} - {}", start_time, end_time)
}

/// Map a day ordinal (0 = Monday) to its English name, or `""` if out of range.
pub fn day_name(day: u8) -> &'static str {
    match Weekday::try_from(day) {
        Ok(weekday) => weekday_name(weekday),
        Err(_) => "",
    }
}

/// Render a [`DayValue`] as a day name.
///
/// Names pass through unchanged; ordinals 0..=6 map through [`DAY_NAMES`];
/// anything else renders as `""`.
pub fn day_number_to_name(day: &DayValue) -> String {
    match day {
        DayValue::Name(name) => name.clone(),
        DayValue::Number(n) => u8::try_from(*n).map(day_name).unwrap_or_default().to_string(),
    }
}

/// Inverse of [`day_name`]. Case-sensitive: `"monday"` is not a day.
pub fn day_name_to_number(name: &str) -> Option<u8> {
    DAY_NAMES.iter().position(|d| *d == name).map(|i| i as u8)
}

pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_monday() as usize]
}
