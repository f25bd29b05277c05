//! Daily statistics and helper queries over schedule records.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Count | Number of records for the day |
//! | Plan / Execution Count | Records per kind |
//! | Completed Count | Records flagged completed |
//! | Completion Rate | Completed plans / plans (0.0..1.0) |
//! | Total Duration | Sum of `end - start` in minutes |
//! | Category Breakdown | Count and minutes per category |

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::{ScheduleRecord, TimeSpan};

/// Category key for records without a category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// A plan and the execution that carried it out, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanExecutionPair<'a> {
    /// The plan.
    pub plan: &'a ScheduleRecord,
    /// First execution whose `plan_id` names the plan.
    pub execution: Option<&'a ScheduleRecord>,
}

/// Pairs every plan with the first execution that references it.
///
/// Plans keep their input order. Executions without a matching plan are
/// not reported.
pub fn pair_plan_with_execution(records: &[ScheduleRecord]) -> Vec<PlanExecutionPair<'_>> {
    records
        .iter()
        .filter(|r| r.is_plan())
        .map(|plan| PlanExecutionPair {
            plan,
            execution: records
                .iter()
                .find(|r| r.is_execution() && r.plan_id.as_deref() == Some(plan.id.as_str())),
        })
        .collect()
}

/// Buckets records by the slot their start falls in.
///
/// Slot keys are the slot start in minutes, rounded down. A non-positive
/// interval is treated as one minute.
pub fn group_by_time_slot(
    records: &[ScheduleRecord],
    interval_minutes: i32,
) -> BTreeMap<i64, Vec<&ScheduleRecord>> {
    let interval = i64::from(interval_minutes.max(1));
    let mut slots: BTreeMap<i64, Vec<&ScheduleRecord>> = BTreeMap::new();
    for record in records {
        let slot = i64::from(record.start_time_minutes).div_euclid(interval) * interval;
        slots.entry(slot).or_default().push(record);
    }
    slots
}

fn category_key(record: &ScheduleRecord) -> &str {
    record
        .category
        .as_ref()
        .map(|c| c.id.as_str())
        .unwrap_or(UNCATEGORIZED)
}

/// Total minutes per category id.
pub fn category_durations(records: &[ScheduleRecord]) -> HashMap<String, i64> {
    let mut durations: HashMap<String, i64> = HashMap::new();
    for record in records {
        *durations.entry(category_key(record).to_string()).or_insert(0) +=
            record.duration_minutes();
    }
    durations
}

/// Whether `now` falls inside the span (half-open).
pub fn is_active(span: &impl TimeSpan, now_minutes: i32) -> bool {
    span.start_minutes() <= now_minutes && now_minutes < span.end_minutes()
}

/// Elapsed share of the span at `now`, as a rounded percentage.
///
/// 0 before the start, 100 at or after the end.
pub fn progress_percent(span: &impl TimeSpan, now_minutes: i32) -> u8 {
    if now_minutes < span.start_minutes() {
        return 0;
    }
    if now_minutes >= span.end_minutes() {
        return 100;
    }
    let total = span.duration_minutes() as f64;
    let elapsed = f64::from(now_minutes) - f64::from(span.start_minutes());
    (elapsed / total * 100.0).round() as u8
}

/// Per-category totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    /// Category display name, or the uncategorized key.
    pub name: String,
    /// Number of records.
    pub count: usize,
    /// Total minutes.
    pub total_minutes: i64,
}

/// Summary of one day's records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    /// Number of records.
    pub total_count: usize,
    /// PLAN records.
    pub plan_count: usize,
    /// EXECUTION records.
    pub execution_count: usize,
    /// Records flagged completed.
    pub completed_count: usize,
    /// Completed plans / plans (0.0..1.0). 0 when there are no plans.
    pub completion_rate: f64,
    /// Sum of durations in minutes.
    pub total_minutes: i64,
    /// Breakdown keyed by category id.
    pub by_category: BTreeMap<String, CategoryStats>,
}

impl DailyStats {
    /// Computes statistics from a day's records.
    pub fn calculate(records: &[ScheduleRecord]) -> Self {
        let mut stats = Self {
            total_count: records.len(),
            ..Self::default()
        };
        let mut completed_plans = 0usize;

        for record in records {
            let minutes = record.duration_minutes();
            stats.total_minutes += minutes;

            if record.is_plan() {
                stats.plan_count += 1;
                if record.completed {
                    completed_plans += 1;
                }
            } else {
                stats.execution_count += 1;
            }
            if record.completed {
                stats.completed_count += 1;
            }

            let entry = stats
                .by_category
                .entry(category_key(record).to_string())
                .or_insert_with(|| CategoryStats {
                    name: record
                        .category
                        .as_ref()
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                    ..CategoryStats::default()
                });
            entry.count += 1;
            entry.total_minutes += minutes;
        }

        if stats.plan_count > 0 {
            stats.completion_rate = completed_plans as f64 / stats.plan_count as f64;
        }
        stats
    }

    /// Share of the day covered by record durations (may exceed 1.0 with overlaps).
    pub fn day_coverage(&self) -> f64 {
        self.total_minutes as f64 / f64::from(crate::time::MINUTES_PER_DAY)
    }
}
