//! Time arithmetic for the day view.
//!
//! - **`pixel`**: linear minute <-> pixel mapping for the vertical axis
//! - **`clock`**: `HH:MM` parsing/formatting, 12-hour display, grids

pub mod clock;
pub mod pixel;

pub use clock::{
    duration_parts, format_time, generate_time_grid, is_midnight, is_noon, is_valid_time_range,
    parse_time, period_of, to_12_hour, ClockTime, DurationParts, Period,
};
pub use pixel::{
    block_height, duration_to_height, pixel_to_time, time_to_pixel, total_height, PixelScale,
    MINUTES_PER_DAY,
};
