//! Column packing of an overlap group.
//!
//! # Algorithm
//!
//! Greedy first-fit interval coloring: visit the group's items in order
//! and drop each into the lowest-indexed column none of whose members it
//! overlaps, opening a new column when none fits. Column count and index
//! then become percentages:
//!
//! ```text
//! width = (100 - gap * (columns - 1)) / columns
//! left  = (width + gap) * column_index
//! ```
//!
//! so columns are separated by `gap` and never exceed the row width.
//!
//! # Visiting Order
//! First-fit is optimal (column count == peak concurrency) when items are
//! visited by ascending start. [`PackingOrder::Discovery`] packs in the
//! order the group holds its items, which is what grouping produces and
//! the default. [`PackingOrder::StartTime`] re-sorts each group first,
//! which only differs for hand-built groups or degenerate ranges.
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8
//! (interval graph coloring).

use serde::{Deserialize, Serialize};

use super::grouping::group_overlapping_schedules;
use super::sweep::is_overlapping;
use crate::config::DEFAULT_GAP_PERCENT;
use crate::models::{LayoutPosition, OverlapGroup, ScheduleEntry, ScheduleLayout, TimeSpan};

/// Order in which a group's items are offered to the column packer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackingOrder {
    /// The group's own item order.
    #[default]
    Discovery,
    /// Ascending start minute, ties in group order.
    StartTime,
}

/// Column index per item plus the number of columns opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// `columns[i]` is the column of the i-th item.
    pub columns: Vec<usize>,
    /// Item indices per column, in placement order.
    pub lanes: Vec<Vec<usize>>,
    /// Number of columns used.
    pub column_count: usize,
}

/// First-fit column assignment in slice order.
pub fn assign_columns<T: TimeSpan>(items: &[T]) -> ColumnAssignment {
    let visit: Vec<usize> = (0..items.len()).collect();
    assign_columns_in(items, &visit)
}

fn assign_columns_in<T: TimeSpan>(items: &[T], visit: &[usize]) -> ColumnAssignment {
    let mut columns = vec![0; items.len()];
    let mut lanes: Vec<Vec<usize>> = Vec::new();

    for &i in visit {
        let fit = lanes.iter().position(|lane| {
            lane.iter()
                .all(|&placed| !is_overlapping(&items[i], &items[placed]))
        });

        let column = match fit {
            Some(c) => c,
            None => {
                lanes.push(Vec::new());
                lanes.len() - 1
            }
        };
        lanes[column].push(i);
        columns[i] = column;
    }

    ColumnAssignment {
        columns,
        column_count: lanes.len(),
        lanes,
    }
}

/// Converts a column slot into row percentages.
pub fn column_position(column: usize, column_count: usize, gap_percent: f64) -> LayoutPosition {
    if column_count <= 1 {
        return LayoutPosition::FULL;
    }
    let count = column_count as f64;
    let width = (100.0 - gap_percent * (count - 1.0)) / count;
    LayoutPosition {
        width,
        left: (width + gap_percent) * column as f64,
    }
}

/// Packs overlap groups into side-by-side columns.
///
/// # Example
///
/// ```
/// use u_dayplan::models::{OverlapGroup, ScheduleItem};
/// use u_dayplan::overlap::ColumnPacker;
///
/// let group = OverlapGroup {
///     items: vec![ScheduleItem::new("a", 540, 600), ScheduleItem::new("b", 570, 630)],
///     max_concurrent: 2,
/// };
/// let layouts = ColumnPacker::new().pack(&group);
/// assert_eq!(layouts[0].position.width, 49.75);
/// assert_eq!(layouts[1].position.left, 50.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnPacker {
    gap_percent: f64,
    order: PackingOrder,
}

impl Default for ColumnPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnPacker {
    /// Creates a packer with a 0.5% gap and discovery order.
    pub fn new() -> Self {
        Self {
            gap_percent: DEFAULT_GAP_PERCENT,
            order: PackingOrder::Discovery,
        }
    }

    /// Sets the gap between columns (percent).
    pub fn with_gap_percent(mut self, gap_percent: f64) -> Self {
        self.gap_percent = gap_percent;
        self
    }

    /// Sets the visiting order.
    pub fn with_order(mut self, order: PackingOrder) -> Self {
        self.order = order;
        self
    }

    /// Assigns columns within one group.
    pub fn assign<T: TimeSpan>(&self, group: &OverlapGroup<T>) -> ColumnAssignment {
        let mut visit: Vec<usize> = (0..group.items.len()).collect();
        if self.order == PackingOrder::StartTime {
            visit.sort_by_key(|&i| group.items[i].start_minutes());
        }
        assign_columns_in(&group.items, &visit)
    }

    /// Lays out one group, column by column: every item of column 0 in
    /// placement order, then column 1, and so on.
    ///
    /// A group whose peak concurrency is 1 gets full width throughout,
    /// without consulting the packer.
    pub fn pack<T: TimeSpan + Clone>(&self, group: &OverlapGroup<T>) -> Vec<ScheduleLayout<T>> {
        if group.max_concurrent <= 1 {
            return group
                .items
                .iter()
                .map(|item| ScheduleLayout {
                    item: item.clone(),
                    position: LayoutPosition::FULL,
                })
                .collect();
        }

        let assignment = self.assign(group);
        let count = assignment.column_count;
        assignment
            .lanes
            .iter()
            .enumerate()
            .flat_map(move |(column, lane)| {
                let position = column_position(column, count, self.gap_percent);
                lane.iter().map(move |&i| ScheduleLayout {
                    item: group.items[i].clone(),
                    position,
                })
            })
            .collect()
    }

    /// Groups and lays out a whole day, flattened in group order.
    pub fn pack_all<T: ScheduleEntry + Clone>(&self, items: &[T]) -> Vec<ScheduleLayout<T>> {
        group_overlapping_schedules(items)
            .iter()
            .flat_map(|group| self.pack(group))
            .collect()
    }
}

/// Lays out one group with the default packer.
pub fn calculate_overlap_layout<T: TimeSpan + Clone>(
    group: &OverlapGroup<T>,
) -> Vec<ScheduleLayout<T>> {
    ColumnPacker::new().pack(group)
}

/// Groups and lays out a whole day with the default packer.
pub fn calculate_all_schedule_layouts<T: ScheduleEntry + Clone>(
    items: &[T],
) -> Vec<ScheduleLayout<T>> {
    ColumnPacker::new().pack_all(items)
}
