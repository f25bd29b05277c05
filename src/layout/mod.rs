//! Day view layout: render blocks and grid lines.
//!
//! Combines the overlap engine's percentages with pixel geometry and
//! presentation metadata. Blocks are recomputed from the full record set
//! on every call and never retained.

mod builder;
mod grid;

pub use builder::{build_schedule_blocks, resolve_color, LayoutBuilder};
pub use grid::build_grid_lines;
