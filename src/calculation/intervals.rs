//! Time-slot helpers.
//!
//! Forecast curves are indexed by fixed-width intervals starting at midnight.
//! These helpers turn indices into wall-clock labels and test whether a time
//! falls inside a shift window, including windows that cross midnight.

use chrono::{NaiveTime, Timelike};

use crate::error::{EngineError, EngineResult};

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Default interval width used by the application (96 slots per day).
pub const DEFAULT_INTERVAL_MINUTES: u32 = 15;

/// Parses an `HH:MM` time of day.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] naming `parameter` if the
/// text is not a valid 24-hour time.
pub fn parse_time_of_day(parameter: &str, text: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M").map_err(|e| {
        EngineError::invalid_configuration(
            parameter,
            format!("'{}' is not an HH:MM time ({})", text, e),
        )
    })
}

/// Returns the minutes elapsed since midnight.
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Returns the start time of interval `index`, wrapping around midnight.
pub fn interval_start(index: usize, interval_minutes: u32) -> NaiveTime {
    let offset = (index as u64 * u64::from(interval_minutes)) % u64::from(MINUTES_PER_DAY);
    let minutes = offset as u32;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Returns the `HH:MM` label of interval `index`.
///
/// # Examples
///
/// ```
/// use staffing_engine::calculation::interval_label;
///
/// assert_eq!(interval_label(0, 15), "00:00");
/// assert_eq!(interval_label(37, 15), "09:15");
/// assert_eq!(interval_label(96, 15), "00:00");
/// ```
pub fn interval_label(index: usize, interval_minutes: u32) -> String {
    interval_start(index, interval_minutes)
        .format("%H:%M")
        .to_string()
}

/// Returns the labels of every interval in one day.
///
/// # Panics
///
/// Panics if `interval_minutes` is zero.
pub fn generate_time_intervals(interval_minutes: u32) -> Vec<String> {
    let count = (MINUTES_PER_DAY / interval_minutes) as usize;
    (0..count)
        .map(|index| interval_label(index, interval_minutes))
        .collect()
}

/// Returns true if `time` lies in the inclusive window `[start, end]`.
///
/// When `start` is after `end` the window crosses midnight
/// (e.g. 18:00-05:30).
pub fn is_time_in_window(time: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    if start > end {
        time >= start || time <= end
    } else {
        time >= start && time <= end
    }
}
