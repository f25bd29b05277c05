//! Layout and validation settings.
//!
//! Both structs derive `Deserialize` with `#[serde(default)]`, so a
//! partial document overrides only the keys it names.

use serde::{Deserialize, Serialize};

use crate::overlap::PackingOrder;

/// Horizontal gap between packed columns (percent of row width).
pub const DEFAULT_GAP_PERCENT: f64 = 0.5;

/// Color used when a record has neither a custom nor a category color.
pub const DEFAULT_FALLBACK_COLOR: &str = "#868e96";

/// Rendering parameters for the layout builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical scale (px per minute).
    pub pixels_per_minute: f64,
    /// Minimum block height (px). 0 disables the floor.
    pub min_block_height: f64,
    /// Gap between packed columns (percent).
    pub gap_percent: f64,
    /// Visiting order used when packing a group into columns.
    pub packing_order: PackingOrder,
    /// Color of last resort.
    pub fallback_color: String,
    /// Shared z-index assigned to every block in a packed group.
    pub packed_z_index: i32,
    /// Spacing of background grid lines (minutes).
    pub grid_interval_minutes: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_minute: 2.0,
            min_block_height: 60.0,
            gap_percent: DEFAULT_GAP_PERCENT,
            packing_order: PackingOrder::Discovery,
            fallback_color: DEFAULT_FALLBACK_COLOR.to_string(),
            packed_z_index: 1,
            grid_interval_minutes: 15,
        }
    }
}

impl LayoutConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the vertical scale.
    pub fn with_pixels_per_minute(mut self, pixels_per_minute: f64) -> Self {
        self.pixels_per_minute = pixels_per_minute;
        self
    }

    /// Sets the minimum block height.
    pub fn with_min_block_height(mut self, min_block_height: f64) -> Self {
        self.min_block_height = min_block_height;
        self
    }

    /// Sets the column gap.
    pub fn with_gap_percent(mut self, gap_percent: f64) -> Self {
        self.gap_percent = gap_percent;
        self
    }

    /// Sets the packing order.
    pub fn with_packing_order(mut self, order: PackingOrder) -> Self {
        self.packing_order = order;
        self
    }

    /// Sets the fallback color.
    pub fn with_fallback_color(mut self, color: impl Into<String>) -> Self {
        self.fallback_color = color.into();
        self
    }

    /// Sets the shared z-index of packed blocks.
    pub fn with_packed_z_index(mut self, z_index: i32) -> Self {
        self.packed_z_index = z_index;
        self
    }

    /// Sets the grid line spacing.
    pub fn with_grid_interval(mut self, minutes: i32) -> Self {
        self.grid_interval_minutes = minutes;
        self
    }
}

/// Business limits applied before a schedule is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConstraints {
    /// Most schedules allowed to overlap at once, the candidate included.
    pub max_overlapping_schedules: usize,
    /// Shortest allowed schedule (minutes).
    pub min_duration_minutes: i32,
    /// Longest allowed schedule (minutes).
    pub max_duration_minutes: i32,
    /// Title length limit (characters).
    pub max_title_length: usize,
    /// Description length limit (characters).
    pub max_description_length: usize,
    /// Schedules allowed per day.
    pub max_daily_schedules: usize,
}

impl Default for ScheduleConstraints {
    fn default() -> Self {
        Self {
            max_overlapping_schedules: 5,
            min_duration_minutes: 5,
            max_duration_minutes: 24 * 60,
            max_title_length: 100,
            max_description_length: 500,
            max_daily_schedules: 100,
        }
    }
}

impl ScheduleConstraints {
    /// Creates the default constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overlap ceiling.
    pub fn with_max_overlapping(mut self, max: usize) -> Self {
        self.max_overlapping_schedules = max;
        self
    }

    /// Sets the duration bounds.
    pub fn with_duration_bounds(mut self, min_minutes: i32, max_minutes: i32) -> Self {
        self.min_duration_minutes = min_minutes;
        self.max_duration_minutes = max_minutes;
        self
    }

    /// Sets the per-day schedule limit.
    pub fn with_max_daily(mut self, max: usize) -> Self {
        self.max_daily_schedules = max;
        self
    }
}
