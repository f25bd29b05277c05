//! Overlap group and layout position models.
//!
//! These are transient: they live for a single layout pass and are
//! recomputed from scratch whenever the day's schedules change.

use serde::{Deserialize, Serialize};

/// A maximal connected component under the overlap relation.
///
/// Every item overlaps, directly or transitively, with another item of
/// the same group. A schedule that overlaps nothing forms a singleton
/// group with `max_concurrent == 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapGroup<T> {
    /// Members in discovery order.
    pub items: Vec<T>,
    /// Peak number of members active at the same minute.
    pub max_concurrent: usize,
}

impl<T> OverlapGroup<T> {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any members actually run concurrently.
    pub fn is_packed(&self) -> bool {
        self.max_concurrent > 1
    }
}

/// Horizontal placement of a block, in percent of the row width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutPosition {
    /// Width (percent, `(0, 100]`).
    pub width: f64,
    /// Left offset (percent, `[0, 100)`).
    pub left: f64,
}

impl LayoutPosition {
    /// Full row width, no offset.
    pub const FULL: Self = Self {
        width: 100.0,
        left: 0.0,
    };

    /// Creates a new position.
    pub fn new(width: f64, left: f64) -> Self {
        Self { width, left }
    }

    /// Right edge (percent).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Whether this position is narrower than the full row.
    #[inline]
    pub fn is_packed(&self) -> bool {
        self.width < 100.0
    }
}

impl Default for LayoutPosition {
    fn default() -> Self {
        Self::FULL
    }
}

/// One item paired with its computed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleLayout<T> {
    /// The laid-out item.
    pub item: T,
    /// Its horizontal placement.
    pub position: LayoutPosition,
}
