//! Render block construction.
//!
//! # Pipeline
//!
//! 1. Project records onto [`ScheduleItem`]s.
//! 2. Group overlapping items and pack each group into columns.
//! 3. Index positions by record id.
//! 4. Merge each record with its position, pixel geometry, resolved
//!    color and stacking order.
//!
//! Output order matches input order, one block per record.

use std::collections::HashMap;

use log::{debug, warn};

use crate::config::LayoutConfig;
use crate::models::{GridLine, LayoutPosition, RenderBlock, ScheduleItem, ScheduleRecord};
use crate::overlap::{group_overlapping_schedules, ColumnPacker};
use crate::time::PixelScale;

use super::grid::build_grid_lines;

/// Picks a display color: custom override, then category, then fallback.
///
/// Empty strings count as unset at every tier.
pub fn resolve_color<'a>(
    custom_color: Option<&'a str>,
    category_color: Option<&'a str>,
    fallback: &'a str,
) -> &'a str {
    fn is_set(color: &&str) -> bool {
        !color.is_empty()
    }

    custom_color
        .filter(is_set)
        .or_else(|| category_color.filter(is_set))
        .unwrap_or(fallback)
}

/// Builds render-ready blocks for one day.
///
/// # Example
///
/// ```
/// use u_dayplan::config::LayoutConfig;
/// use u_dayplan::layout::LayoutBuilder;
/// use u_dayplan::models::ScheduleRecord;
///
/// let records = vec![
///     ScheduleRecord::plan("1", 540, 600).with_title("English"),
///     ScheduleRecord::plan("2", 570, 630).with_title("Math"),
/// ];
/// let blocks = LayoutBuilder::new(LayoutConfig::default()).build(&records);
///
/// assert_eq!(blocks[0].top, 1080.0);
/// assert_eq!(blocks[0].width, 49.75);
/// assert_eq!(blocks[1].left, 50.25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutBuilder {
    config: LayoutConfig,
}

impl LayoutBuilder {
    /// Creates a builder with the given configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn scale(&self) -> PixelScale {
        PixelScale::new(self.config.pixels_per_minute)
    }

    fn packer(&self) -> ColumnPacker {
        ColumnPacker::new()
            .with_gap_percent(self.config.gap_percent)
            .with_order(self.config.packing_order)
    }

    /// Computes the horizontal position of every record, keyed by id.
    pub fn positions(&self, records: &[ScheduleRecord]) -> HashMap<String, LayoutPosition> {
        let items: Vec<ScheduleItem> = records.iter().map(ScheduleRecord::to_item).collect();
        let groups = group_overlapping_schedules(&items);
        let packer = self.packer();

        let mut positions = HashMap::with_capacity(items.len());
        for group in &groups {
            for layout in packer.pack(group) {
                positions.insert(layout.item.id, layout.position);
            }
        }

        debug!(
            "laid out {} schedule(s) in {} overlap group(s)",
            items.len(),
            groups.len()
        );
        positions
    }

    /// Builds one block per record, in input order.
    pub fn build(&self, records: &[ScheduleRecord]) -> Vec<RenderBlock> {
        let positions = self.positions(records);
        let scale = self.scale();

        records
            .iter()
            .map(|record| {
                let position = positions.get(&record.id).copied().unwrap_or_else(|| {
                    warn!("no layout computed for schedule '{}'; using full width", record.id);
                    LayoutPosition::FULL
                });
                self.block(record, position, &scale)
            })
            .collect()
    }

    fn block(
        &self,
        record: &ScheduleRecord,
        position: LayoutPosition,
        scale: &PixelScale,
    ) -> RenderBlock {
        let background_color = resolve_color(
            record.custom_color.as_deref(),
            record.category_color(),
            &self.config.fallback_color,
        );

        // Packed siblings share one stacking level so none hides another.
        let z_index = if position.is_packed() {
            self.config.packed_z_index
        } else {
            record.z_index
        };

        RenderBlock {
            id: record.id.clone(),
            top: scale.to_pixel(record.start_time_minutes),
            height: scale.block_height(
                record.start_time_minutes,
                record.end_time_minutes,
                self.config.min_block_height,
            ),
            width: position.width,
            left: position.left,
            z_index,
            background_color: background_color.to_string(),
            title: record.title.clone(),
            description: record.description.clone().filter(|d| !d.is_empty()),
            is_plan: record.is_plan(),
            is_execution: record.is_execution(),
            completed: record.completed,
        }
    }

    /// Background grid lines for the whole day, closing 24:00 line included.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let mut lines = build_grid_lines(
            self.config.grid_interval_minutes,
            self.config.pixels_per_minute,
        );
        lines.push(GridLine {
            top: self.total_height(),
            is_hour: true,
        });
        lines
    }

    /// Height of the day column (px).
    pub fn total_height(&self) -> f64 {
        self.scale().day_height()
    }
}

/// Builds render blocks with the default configuration at the given scale.
pub fn build_schedule_blocks(
    records: &[ScheduleRecord],
    pixels_per_minute: f64,
    min_block_height: f64,
) -> Vec<RenderBlock> {
    let config = LayoutConfig::default()
        .with_pixels_per_minute(pixels_per_minute)
        .with_min_block_height(min_block_height);
    LayoutBuilder::new(config).build(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn block<'a>(blocks: &'a [RenderBlock], id: &str) -> &'a RenderBlock {
        blocks.iter().find(|b| b.id == id).expect("block present")
    }

    #[test]
    fn test_resolve_color_tiers() {
        assert_eq!(resolve_color(Some("#111"), Some("#222"), "#333"), "#111");
        assert_eq!(resolve_color(None, Some("#222"), "#333"), "#222");
        assert_eq!(resolve_color(None, None, "#333"), "#333");
        assert_eq!(resolve_color(Some(""), Some("#222"), "#333"), "#222");
        assert_eq!(resolve_color(Some(""), Some(""), "#333"), "#333");
    }

    #[test]
    fn test_single_block_full_width() {
        let records = vec![ScheduleRecord::plan("1", 540, 600).with_title("English")];
        let blocks = build_schedule_blocks(&records, 2.0, 60.0);

        assert_eq!(blocks.len(), 1);
        let b = &blocks[0];
        assert_eq!(b.width, 100.0);
        assert_eq!(b.left, 0.0);
        assert_eq!(b.z_index, 0);
        assert_eq!(b.top, 1080.0);
        assert_eq!(b.height, 120.0);
        assert_eq!(b.background_color, "#868e96");
        assert_eq!(b.title, "English");
        assert!(b.is_plan);
        assert!(!b.is_execution);
    }

    #[test]
    fn test_overlapping_blocks_split_and_share_z_index() {
        let records = vec![
            ScheduleRecord::plan("1", 540, 600).with_z_index(5),
            ScheduleRecord::plan("2", 570, 630).with_z_index(3),
        ];
        let blocks = build_schedule_blocks(&records, 2.0, 60.0);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].width, 49.75);
        assert_eq!(blocks[1].width, 49.75);
        assert_eq!(blocks[0].z_index, 1);
        assert_eq!(blocks[1].z_index, 1);

        let mut lefts: Vec<f64> = blocks.iter().map(|b| b.left).collect();
        lefts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(lefts, vec![0.0, 50.25]);
    }

    #[test]
    fn test_three_way_blocks() {
        let records = vec![
            ScheduleRecord::plan("1", 540, 660),
            ScheduleRecord::plan("2", 570, 630),
            ScheduleRecord::plan("3", 600, 650),
        ];
        let blocks = build_schedule_blocks(&records, 2.0, 60.0);
        let expected = (100.0 - 0.5 * 2.0) / 3.0;
        for b in &blocks {
            assert!((b.width - expected).abs() < 1e-10);
            assert_eq!(b.z_index, 1);
        }
    }

    #[test]
    fn test_mixed_packed_and_standalone() {
        let records = vec![
            ScheduleRecord::plan("1", 540, 600).with_z_index(2),
            ScheduleRecord::plan("2", 570, 630).with_z_index(3),
            ScheduleRecord::plan("3", 660, 720).with_z_index(7),
        ];
        let blocks = build_schedule_blocks(&records, 2.0, 60.0);

        assert_eq!(block(&blocks, "1").width, 49.75);
        assert_eq!(block(&blocks, "2").width, 49.75);
        assert_eq!(block(&blocks, "3").width, 100.0);
        assert_eq!(block(&blocks, "1").z_index, 1);
        assert_eq!(block(&blocks, "2").z_index, 1);
        assert_eq!(block(&blocks, "3").z_index, 7); // stored value kept
    }

    #[test]
    fn test_output_in_input_order() {
        let records = vec![
            ScheduleRecord::plan("late", 900, 960),
            ScheduleRecord::plan("early", 480, 540),
            ScheduleRecord::plan("overlap", 500, 520),
        ];
        let blocks = build_schedule_blocks(&records, 1.0, 0.0);
        let ids: Vec<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early", "overlap"]);
    }

    #[test]
    fn test_min_height_floor() {
        let records = vec![ScheduleRecord::plan("short", 540, 545)];
        let blocks = build_schedule_blocks(&records, 2.0, 60.0);
        assert_eq!(blocks[0].height, 60.0);

        let blocks = build_schedule_blocks(&records, 2.0, 0.0);
        assert_eq!(blocks[0].height, 10.0);
    }

    #[test]
    fn test_color_resolution_in_blocks() {
        let study = Category::new("c1", "Study", "#4c6ef5");
        let records = vec![
            ScheduleRecord::plan("custom", 0, 30)
                .with_category(study.clone())
                .with_custom_color("#fa5252"),
            ScheduleRecord::plan("category", 60, 90).with_category(study),
            ScheduleRecord::plan("none", 120, 150),
        ];
        let builder = LayoutBuilder::new(LayoutConfig::default().with_fallback_color("#000000"));
        let blocks = builder.build(&records);
        assert_eq!(block(&blocks, "custom").background_color, "#fa5252");
        assert_eq!(block(&blocks, "category").background_color, "#4c6ef5");
        assert_eq!(block(&blocks, "none").background_color, "#000000");
    }

    #[test]
    fn test_presentation_fields_carried() {
        let records = vec![ScheduleRecord::execution("e", 600, 660)
            .with_title("Run")
            .with_description("5k")
            .with_completed(true)];
        let b = &build_schedule_blocks(&records, 2.0, 60.0)[0];
        assert!(b.is_execution);
        assert!(!b.is_plan);
        assert!(b.completed);
        assert_eq!(b.description.as_deref(), Some("5k"));
    }

    #[test]
    fn test_empty_description_dropped() {
        let records = vec![ScheduleRecord::plan("p", 600, 660).with_description("")];
        let b = &build_schedule_blocks(&records, 2.0, 60.0)[0];
        assert!(b.description.is_none());
    }

    #[test]
    fn test_custom_packed_z_index() {
        let records = vec![
            ScheduleRecord::plan("1", 540, 600),
            ScheduleRecord::plan("2", 570, 630),
        ];
        let builder = LayoutBuilder::new(LayoutConfig::default().with_packed_z_index(10));
        assert!(builder.build(&records).iter().all(|b| b.z_index == 10));
    }

    #[test]
    fn test_grid_lines_include_midnight_close() {
        let builder = LayoutBuilder::new(LayoutConfig::default().with_grid_interval(60));
        let lines = builder.grid_lines();
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0].top, 0.0);
        assert_eq!(lines[24].top, 2880.0);
        assert!(lines.iter().all(|l| l.is_hour));
        assert_eq!(builder.total_height(), 2880.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(build_schedule_blocks(&[], 2.0, 60.0).is_empty());
    }

    #[test]
    fn test_extreme_minutes_lay_out() {
        let records = vec![
            ScheduleRecord::plan("wide", i32::MIN, i32::MAX),
            ScheduleRecord::plan("inverted", i32::MAX, i32::MIN),
        ];
        let blocks = build_schedule_blocks(&records, 1.0, 0.0);
        assert_eq!(blocks.len(), 2);

        let wide = block(&blocks, "wide");
        assert_eq!(wide.top, f64::from(i32::MIN));
        assert_eq!(wide.height, f64::from(u32::MAX));
        assert_eq!(wide.width, 100.0);

        assert_eq!(block(&blocks, "inverted").height, 0.0);
    }
}
