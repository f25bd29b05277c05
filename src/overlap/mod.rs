//! Interval overlap engine.
//!
//! Turns an unordered set of same-day schedules into side-by-side
//! columns:
//!
//! ```text
//! items ──► group_overlapping_schedules ──► OverlapGroup*
//!                                              │
//!                      ColumnPacker::pack ◄────┘
//!                              │
//!                              ▼
//!                   ScheduleLayout { item, position }
//! ```
//!
//! - **`sweep`**: half-open overlap predicate and peak concurrency
//! - **`grouping`**: connected components under the overlap relation
//! - **`packing`**: first-fit column assignment and width/left percentages
//!
//! Every function here is pure; nothing is cached between calls.

mod grouping;
mod packing;
mod sweep;

pub use grouping::group_overlapping_schedules;
pub use packing::{
    assign_columns, calculate_all_schedule_layouts, calculate_overlap_layout, column_position,
    ColumnAssignment, ColumnPacker, PackingOrder,
};
pub use sweep::{calculate_max_concurrent, find_overlaps, is_overlapping};
