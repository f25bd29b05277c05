//! Minute <-> pixel conversion for the vertical day axis.
//!
//! Pure linear arithmetic with no bounds checking: out-of-range minutes
//! map linearly like any other value.

use serde::{Deserialize, Serialize};

/// Minutes in a day.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Converts a minute offset to a vertical pixel offset.
#[inline]
pub fn time_to_pixel(minutes: i32, pixels_per_minute: f64) -> f64 {
    f64::from(minutes) * pixels_per_minute
}

/// Converts a pixel offset back to the nearest minute.
///
/// Halves round away from zero, so this is the exact inverse of
/// [`time_to_pixel`] for integer minutes.
#[inline]
pub fn pixel_to_time(pixels: f64, pixels_per_minute: f64) -> i32 {
    (pixels / pixels_per_minute).round() as i32
}

/// Height of a `[start, end)` span in pixels.
#[inline]
pub fn duration_to_height(start_minutes: i32, end_minutes: i32, pixels_per_minute: f64) -> f64 {
    (f64::from(end_minutes) - f64::from(start_minutes)) * pixels_per_minute
}

/// Block height with a legibility floor. `min_height = 0` disables it.
pub fn block_height(
    start_minutes: i32,
    end_minutes: i32,
    pixels_per_minute: f64,
    min_height: f64,
) -> f64 {
    duration_to_height(start_minutes, end_minutes, pixels_per_minute).max(min_height)
}

/// Height of a full day column in pixels.
#[inline]
pub fn total_height(pixels_per_minute: f64) -> f64 {
    time_to_pixel(MINUTES_PER_DAY, pixels_per_minute)
}

/// A fixed vertical scale, in pixels per minute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelScale(pub f64);

impl PixelScale {
    /// Creates a scale.
    pub fn new(pixels_per_minute: f64) -> Self {
        Self(pixels_per_minute)
    }

    /// Pixels per minute.
    #[inline]
    pub fn pixels_per_minute(&self) -> f64 {
        self.0
    }

    /// See [`time_to_pixel`].
    #[inline]
    pub fn to_pixel(&self, minutes: i32) -> f64 {
        time_to_pixel(minutes, self.0)
    }

    /// See [`pixel_to_time`].
    #[inline]
    pub fn to_time(&self, pixels: f64) -> i32 {
        pixel_to_time(pixels, self.0)
    }

    /// See [`duration_to_height`].
    #[inline]
    pub fn height(&self, start_minutes: i32, end_minutes: i32) -> f64 {
        duration_to_height(start_minutes, end_minutes, self.0)
    }

    /// See [`block_height`].
    #[inline]
    pub fn block_height(&self, start_minutes: i32, end_minutes: i32, min_height: f64) -> f64 {
        block_height(start_minutes, end_minutes, self.0, min_height)
    }

    /// See [`total_height`].
    #[inline]
    pub fn day_height(&self) -> f64 {
        total_height(self.0)
    }
}
