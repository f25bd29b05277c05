//! Day planner domain models.
//!
//! Provides the data types exchanged with the layout engine: plain time
//! ranges, schedule items and records going in, overlap groups and
//! positions in between, render blocks coming out.
//!
//! # Type Roles
//!
//! | Type | Role |
//! |------|------|
//! | `TimeRange` | Bare `[start, end)` interval |
//! | `ScheduleItem` | Engine input: id + range + stacking hints |
//! | `ScheduleRecord` | Data source record with presentation metadata |
//! | `OverlapSummary` | Stored interval fed to the overlap validator |
//! | `OverlapGroup` | Connected component under the overlap relation |
//! | `LayoutPosition` | Width/left percentages |
//! | `RenderBlock` | Final pixel + percent geometry for the UI |

mod block;
mod layout;
mod range;
mod record;

pub use block::{GridLine, RenderBlock};
pub use layout::{LayoutPosition, OverlapGroup, ScheduleLayout};
pub use range::{OverlapSummary, ScheduleEntry, ScheduleItem, TimeRange, TimeSpan};
pub use record::{Category, ScheduleKind, ScheduleRecord};
