//! Day planner layout engine for the U-Engine ecosystem.
//!
//! Lays out same-day schedule blocks on a vertical time axis: overlapping
//! blocks are grouped, packed into side-by-side columns and turned into
//! pixel/percentage geometry ready for rendering.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeRange`, `ScheduleItem`, `ScheduleRecord`,
//!   `OverlapGroup`, `LayoutPosition`, `RenderBlock`
//! - **`overlap`**: Overlap predicate, sweep-line concurrency, grouping,
//!   first-fit column packing
//! - **`layout`**: Render blocks, color resolution, background grid
//! - **`time`**: Minute/pixel mapping and `HH:MM` clock helpers
//! - **`validation`**: Pre-persistence checks (fields, overlap ceiling, daily limit)
//! - **`analysis`**: Daily statistics, plan/execution pairing, progress
//! - **`config`**: `LayoutConfig` and `ScheduleConstraints`
//!
//! # Architecture
//!
//! Data flows one way:
//! records -> groups -> columns -> percentages -> render blocks.
//! Every operation is a pure function of its input; nothing is cached
//! between renders. Validation runs independently, before persistence.
//!
//! # Example
//!
//! ```
//! use u_dayplan::layout::build_schedule_blocks;
//! use u_dayplan::models::ScheduleRecord;
//!
//! let records = vec![
//!     ScheduleRecord::plan("a", 540, 600).with_title("Math"),
//!     ScheduleRecord::plan("b", 570, 630).with_title("English"),
//! ];
//! let blocks = build_schedule_blocks(&records, 2.0, 60.0);
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].width, 49.75);
//! assert_eq!(blocks[1].left, 50.25);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod overlap;
pub mod time;
pub mod validation;

pub use config::{LayoutConfig, ScheduleConstraints};
pub use error::{Result, TimeError};
