//! Error types for day clock conversions.
//!
//! The layout engine itself is total over numeric input and never
//! fails; only string/clock conversions at the edges can.

use thiserror::Error;

/// Errors raised when converting between minutes and clock strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// A clock string was not of the form `HH:MM` with HH 0-23, MM 0-59.
    #[error("Invalid time string: '{0}'")]
    InvalidTimeString(String),
    /// A minute value fell outside a single day.
    #[error("Invalid minutes: {minutes}. Must be between 0 and {max}")]
    MinutesOutOfRange { minutes: i32, max: i32 },
}

/// Result type alias for clock conversions.
pub type Result<T> = std::result::Result<T, TimeError>;
