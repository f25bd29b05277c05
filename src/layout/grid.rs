//! Background grid geometry.

use crate::models::GridLine;
use crate::time::{generate_time_grid, time_to_pixel};

/// One line per grid step over the day, flagged on full hours.
///
/// The closing 24:00 line is not included; see
/// [`LayoutBuilder::grid_lines`](super::LayoutBuilder::grid_lines).
pub fn build_grid_lines(interval_minutes: i32, pixels_per_minute: f64) -> Vec<GridLine> {
    generate_time_grid(interval_minutes)
        .into_iter()
        .map(|minutes| GridLine {
            top: time_to_pixel(minutes, pixels_per_minute),
            is_hour: minutes % 60 == 0,
        })
        .collect()
}
