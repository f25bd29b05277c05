//! Schedule records as delivered by the data source.
//!
//! A record is a stored PLAN or EXECUTION block for one day, with the
//! presentation metadata the layout builder needs. Executions may point
//! back at the plan they carry out via `plan_id`.

use serde::{Deserialize, Serialize};

use super::{ScheduleEntry, ScheduleItem, TimeSpan};

/// Kind of a schedule block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleKind {
    /// Intended use of time.
    Plan,
    /// Time actually spent.
    Execution,
}

/// A user-defined category with a display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display color (CSS color string).
    pub color: String,
}

impl Category {
    /// Creates a new category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A stored schedule block for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    /// Unique identifier.
    pub id: String,
    /// Start (minutes, inclusive).
    pub start_time_minutes: i32,
    /// End (minutes, exclusive).
    pub end_time_minutes: i32,
    /// Plan or execution.
    #[serde(rename = "type")]
    pub kind: ScheduleKind,
    /// Display title.
    pub title: String,
    /// Optional long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Assigned category.
    #[serde(default)]
    pub category: Option<Category>,
    /// Per-record color override.
    #[serde(default)]
    pub custom_color: Option<String>,
    /// Completion flag.
    #[serde(default)]
    pub completed: bool,
    /// Stacking layer.
    #[serde(default)]
    pub layer: i32,
    /// Stored stacking order.
    #[serde(default)]
    pub z_index: i32,
    /// Plan this execution belongs to.
    #[serde(default)]
    pub plan_id: Option<String>,
}

impl ScheduleRecord {
    /// Creates a new record with empty metadata.
    pub fn new(
        id: impl Into<String>,
        kind: ScheduleKind,
        start_time_minutes: i32,
        end_time_minutes: i32,
    ) -> Self {
        Self {
            id: id.into(),
            start_time_minutes,
            end_time_minutes,
            kind,
            title: String::new(),
            description: None,
            category: None,
            custom_color: None,
            completed: false,
            layer: 0,
            z_index: 0,
            plan_id: None,
        }
    }

    /// Creates a PLAN record.
    pub fn plan(id: impl Into<String>, start_time_minutes: i32, end_time_minutes: i32) -> Self {
        Self::new(id, ScheduleKind::Plan, start_time_minutes, end_time_minutes)
    }

    /// Creates an EXECUTION record.
    pub fn execution(
        id: impl Into<String>,
        start_time_minutes: i32,
        end_time_minutes: i32,
    ) -> Self {
        Self::new(id, ScheduleKind::Execution, start_time_minutes, end_time_minutes)
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Sets a color override.
    pub fn with_custom_color(mut self, color: impl Into<String>) -> Self {
        self.custom_color = Some(color.into());
        self
    }

    /// Marks the record completed.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sets the stacking layer.
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Sets the stored z-index.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Links an execution to its plan.
    pub fn with_plan_id(mut self, plan_id: impl Into<String>) -> Self {
        self.plan_id = Some(plan_id.into());
        self
    }

    /// Whether this is a PLAN record.
    #[inline]
    pub fn is_plan(&self) -> bool {
        self.kind == ScheduleKind::Plan
    }

    /// Whether this is an EXECUTION record.
    #[inline]
    pub fn is_execution(&self) -> bool {
        self.kind == ScheduleKind::Execution
    }

    /// Category color, if a category is assigned.
    pub fn category_color(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.color.as_str())
    }

    /// Projects the record onto the layout engine's item type.
    pub fn to_item(&self) -> ScheduleItem {
        ScheduleItem {
            id: self.id.clone(),
            start_minutes: self.start_time_minutes,
            end_minutes: self.end_time_minutes,
            layer: Some(self.layer),
            z_index: Some(self.z_index),
        }
    }
}

impl TimeSpan for ScheduleRecord {
    fn start_minutes(&self) -> i32 {
        self.start_time_minutes
    }

    fn end_minutes(&self) -> i32 {
        self.end_time_minutes
    }
}

impl ScheduleEntry for ScheduleRecord {
    fn id(&self) -> &str {
        &self.id
    }
}
