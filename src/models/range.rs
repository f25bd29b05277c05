//! Time range and schedule item models.
//!
//! # Time Model
//! All times are integer minutes since local midnight (0..=1439 for a
//! regular day). The engine does not clamp: negative or out-of-range
//! minutes flow through the arithmetic linearly, and rejecting them is
//! the job of [`crate::validation`].
//!
//! # Interval Semantics
//! Ranges are half-open `[start, end)`. Two ranges that only touch at a
//! boundary (`a.end == b.start`) do not overlap.

use serde::{Deserialize, Serialize};

/// Anything occupying a span of day-local minutes.
pub trait TimeSpan {
    /// Span start (minutes, inclusive).
    fn start_minutes(&self) -> i32;
    /// Span end (minutes, exclusive).
    fn end_minutes(&self) -> i32;

    /// Length of the span in minutes. Negative for degenerate input.
    ///
    /// Widened to `i64` so any pair of `i32` endpoints has a length.
    #[inline]
    fn duration_minutes(&self) -> i64 {
        i64::from(self.end_minutes()) - i64::from(self.start_minutes())
    }
}

/// A time span with a string identity.
///
/// Identity must be stable for the duration of one layout pass; the
/// engine uses it to exclude an entry from its own overlap list and to
/// map computed positions back to records.
pub trait ScheduleEntry: TimeSpan {
    /// Unique identifier.
    fn id(&self) -> &str;
}

impl<T: TimeSpan + ?Sized> TimeSpan for &T {
    fn start_minutes(&self) -> i32 {
        (**self).start_minutes()
    }

    fn end_minutes(&self) -> i32 {
        (**self).end_minutes()
    }
}

impl<T: ScheduleEntry + ?Sized> ScheduleEntry for &T {
    fn id(&self) -> &str {
        (**self).id()
    }
}

/// A plain `[start, end)` interval in day-local minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    /// Start (minutes, inclusive).
    pub start_minutes: i32,
    /// End (minutes, exclusive).
    pub end_minutes: i32,
}

impl TimeRange {
    /// Creates a new time range.
    pub fn new(start_minutes: i32, end_minutes: i32) -> Self {
        Self {
            start_minutes,
            end_minutes,
        }
    }

    /// Whether a minute falls within this range.
    #[inline]
    pub fn contains(&self, minute: i32) -> bool {
        minute >= self.start_minutes && minute < self.end_minutes
    }

    /// Whether two ranges overlap.
    pub fn overlaps(&self, other: &impl TimeSpan) -> bool {
        self.start_minutes < other.end_minutes() && other.start_minutes() < self.end_minutes
    }
}

impl TimeSpan for TimeRange {
    fn start_minutes(&self) -> i32 {
        self.start_minutes
    }

    fn end_minutes(&self) -> i32 {
        self.end_minutes
    }
}

/// The layout engine's view of a schedule: identity plus time range.
///
/// `layer` and `z_index` are carried through untouched; layout math
/// never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    /// Unique identifier.
    pub id: String,
    /// Start (minutes, inclusive).
    pub start_minutes: i32,
    /// End (minutes, exclusive).
    pub end_minutes: i32,
    /// Stacking layer hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<i32>,
    /// Stacking order hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl ScheduleItem {
    /// Creates a new schedule item without stacking hints.
    pub fn new(id: impl Into<String>, start_minutes: i32, end_minutes: i32) -> Self {
        Self {
            id: id.into(),
            start_minutes,
            end_minutes,
            layer: None,
            z_index: None,
        }
    }

    /// Sets the layer hint.
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = Some(layer);
        self
    }

    /// Sets the z-index hint.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// The item's time range.
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start_minutes, self.end_minutes)
    }
}

impl TimeSpan for ScheduleItem {
    fn start_minutes(&self) -> i32 {
        self.start_minutes
    }

    fn end_minutes(&self) -> i32 {
        self.end_minutes
    }
}

impl ScheduleEntry for ScheduleItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A stored interval as seen by the pre-persistence overlap check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapSummary {
    /// Stored schedule ID.
    pub id: String,
    /// Start (minutes, inclusive).
    pub start_time_minutes: i32,
    /// End (minutes, exclusive).
    pub end_time_minutes: i32,
}

impl OverlapSummary {
    /// Creates a new summary.
    pub fn new(id: impl Into<String>, start_time_minutes: i32, end_time_minutes: i32) -> Self {
        Self {
            id: id.into(),
            start_time_minutes,
            end_time_minutes,
        }
    }
}

impl TimeSpan for OverlapSummary {
    fn start_minutes(&self) -> i32 {
        self.start_time_minutes
    }

    fn end_minutes(&self) -> i32 {
        self.end_time_minutes
    }
}

impl ScheduleEntry for OverlapSummary {
    fn id(&self) -> &str {
        &self.id
    }
}
