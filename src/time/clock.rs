//! Day clock helpers: `HH:MM` strings, 12-hour display, durations and
//! grid generation.
//!
//! All values are minutes since local midnight. Unlike the pixel
//! converter these helpers validate their input, since they sit on the
//! boundary with user-entered text.

use serde::{Deserialize, Serialize};

use super::pixel::MINUTES_PER_DAY;
use crate::error::{Result, TimeError};

/// Last valid minute of a day (23:59).
pub const LAST_MINUTE: i32 = MINUTES_PER_DAY - 1;

/// Noon (12:00).
pub const NOON: i32 = 12 * 60;

/// Half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Before noon.
    #[serde(rename = "AM")]
    Am,
    /// Noon and after.
    #[serde(rename = "PM")]
    Pm,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Am => f.write_str("AM"),
            Period::Pm => f.write_str("PM"),
        }
    }
}

/// A time of day on a 12-hour clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    /// `h:MM`, hour without padding (12 for midnight and noon).
    pub time: String,
    /// AM or PM.
    pub period: Period,
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.time, self.period)
    }
}

/// A duration split into whole hours and leftover minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationParts {
    /// Whole hours, rounded down.
    pub hours: i64,
    /// Minutes past the last whole hour (0-59).
    pub minutes: i64,
    /// Total length in minutes.
    pub total_minutes: i64,
}

/// Parses `HH:MM` (24-hour) into minutes since midnight.
///
/// # Errors
/// [`TimeError::InvalidTimeString`] if the text is not two `:`-separated
/// integers with hours in 0-23 and minutes in 0-59.
pub fn parse_time(text: &str) -> Result<i32> {
    let invalid = || TimeError::InvalidTimeString(text.to_string());

    let (hours, minutes) = text.trim().split_once(':').ok_or_else(invalid)?;
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;

    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as zero-padded `HH:MM`.
///
/// # Errors
/// [`TimeError::MinutesOutOfRange`] outside 0-1439.
pub fn format_time(minutes: i32) -> Result<String> {
    if !(0..=LAST_MINUTE).contains(&minutes) {
        return Err(TimeError::MinutesOutOfRange {
            minutes,
            max: LAST_MINUTE,
        });
    }
    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// AM before 12:00, PM from 12:00.
pub fn period_of(minutes: i32) -> Period {
    if minutes / 60 < 12 {
        Period::Am
    } else {
        Period::Pm
    }
}

/// Converts minutes since midnight to a 12-hour clock reading.
pub fn to_12_hour(minutes: i32) -> ClockTime {
    let hours24 = minutes / 60;
    let mins = minutes % 60;
    let hours12 = match hours24 % 12 {
        0 => 12,
        h => h,
    };

    ClockTime {
        time: format!("{hours12}:{mins:02}"),
        period: period_of(minutes),
    }
}

/// Splits the length of `[start, end)` into hours and minutes.
///
/// Hours round down, so a negative span of 30 minutes is `-1h 30m`.
pub fn duration_parts(start_minutes: i32, end_minutes: i32) -> DurationParts {
    let total_minutes = i64::from(end_minutes) - i64::from(start_minutes);
    DurationParts {
        hours: total_minutes.div_euclid(60),
        minutes: total_minutes.rem_euclid(60),
        total_minutes,
    }
}

/// Minute offsets of grid lines: `0, interval, 2*interval, ...` below 1440.
///
/// A non-positive interval yields an empty grid.
pub fn generate_time_grid(interval_minutes: i32) -> Vec<i32> {
    if interval_minutes <= 0 {
        return Vec::new();
    }
    (0..MINUTES_PER_DAY)
        .step_by(interval_minutes as usize)
        .collect()
}

/// Whether `[start, end)` lies within one day and is non-empty.
pub fn is_valid_time_range(start_minutes: i32, end_minutes: i32) -> bool {
    (0..=LAST_MINUTE).contains(&start_minutes)
        && (0..=LAST_MINUTE).contains(&end_minutes)
        && start_minutes < end_minutes
}

/// Midnight at either end of the day.
#[inline]
pub fn is_midnight(minutes: i32) -> bool {
    minutes == 0 || minutes == MINUTES_PER_DAY
}

/// 12:00, the AM/PM boundary.
#[inline]
pub fn is_noon(minutes: i32) -> bool {
    minutes == NOON
}
