//! Render-ready output of the layout builder.

use serde::{Deserialize, Serialize};

/// A fully positioned schedule block.
///
/// Pixel fields (`top`, `height`) are relative to the top of the day
/// column; percentage fields (`width`, `left`) are relative to its width.
/// A block is valid only for the input it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBlock {
    /// Source record ID.
    pub id: String,
    /// Vertical offset (px).
    pub top: f64,
    /// Height (px), floored at the configured minimum.
    pub height: f64,
    /// Width (percent).
    pub width: f64,
    /// Left offset (percent).
    pub left: f64,
    /// Stacking order.
    pub z_index: i32,
    /// Resolved display color.
    pub background_color: String,
    /// Display title.
    pub title: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the source is a PLAN.
    pub is_plan: bool,
    /// Whether the source is an EXECUTION.
    pub is_execution: bool,
    /// Completion flag.
    pub completed: bool,
}

/// A horizontal background line of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLine {
    /// Vertical offset (px).
    pub top: f64,
    /// Whether the line falls on a full hour.
    pub is_hour: bool,
}
