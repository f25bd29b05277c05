//! Pre-persistence validation for schedules.
//!
//! Runs before a new or edited schedule is stored. Detects:
//! - Missing or oversized titles and descriptions
//! - Time ranges outside the day or with `start >= end`
//! - Durations outside the configured bounds
//! - More simultaneous overlaps than allowed
//! - Days that already hold the maximum number of schedules
//!
//! The overlap check only counts pairwise overlaps with the candidate;
//! it never builds groups or layouts.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConstraints;
use crate::models::{ScheduleEntry, TimeSpan};
use crate::overlap::is_overlapping;
use crate::time::is_valid_time_range;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending input field (`title`, `description`, `time`, `overlap`, `date`).
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Title is empty or whitespace.
    MissingTitle,
    /// Title exceeds the length limit.
    TitleTooLong,
    /// Description exceeds the length limit.
    DescriptionTooLong,
    /// Start/end outside 0-1439 or start not before end.
    InvalidTimeRange,
    /// Shorter than the minimum duration.
    DurationTooShort,
    /// Longer than the maximum duration.
    DurationTooLong,
    /// Candidate would overlap too many schedules.
    TooManyOverlaps,
    /// The day is full.
    DailyLimitReached,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, field: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// The user-editable fields of a schedule being created or edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    /// Display title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Start (minutes, inclusive).
    pub start_time_minutes: i32,
    /// End (minutes, exclusive).
    pub end_time_minutes: i32,
}

impl ScheduleDraft {
    /// Creates a draft without description.
    pub fn new(title: impl Into<String>, start_time_minutes: i32, end_time_minutes: i32) -> Self {
        Self {
            title: title.into(),
            description: None,
            start_time_minutes,
            end_time_minutes,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl TimeSpan for ScheduleDraft {
    fn start_minutes(&self) -> i32 {
        self.start_time_minutes
    }

    fn end_minutes(&self) -> i32 {
        self.end_time_minutes
    }
}

/// Outcome of the overlap-count check.
///
/// A failure is a value, not an error: callers surface `error` to the
/// user unchanged and must not store the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapCheck {
    /// Whether the candidate may be stored.
    pub valid: bool,
    /// Overlapping schedules, the candidate included.
    pub overlap_count: usize,
    /// Reason for rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Validates the fields of a schedule draft.
///
/// Checks:
/// 1. Title present (non-blank) and within the length limit
/// 2. Description within the length limit
/// 3. Time range inside the day with start before end
/// 4. Duration within the configured bounds
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_schedule_data(
    draft: &ScheduleDraft,
    constraints: &ScheduleConstraints,
) -> ValidationResult {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingTitle,
            "title",
            "Title is required.",
        ));
    } else if draft.title.chars().count() > constraints.max_title_length {
        errors.push(ValidationError::new(
            ValidationErrorKind::TitleTooLong,
            "title",
            format!(
                "Title must be at most {} characters.",
                constraints.max_title_length
            ),
        ));
    }

    if let Some(description) = &draft.description {
        if description.chars().count() > constraints.max_description_length {
            errors.push(ValidationError::new(
                ValidationErrorKind::DescriptionTooLong,
                "description",
                format!(
                    "Description must be at most {} characters.",
                    constraints.max_description_length
                ),
            ));
        }
    }

    if !is_valid_time_range(draft.start_time_minutes, draft.end_time_minutes) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeRange,
            "time",
            "Start time must be earlier than end time.",
        ));
    }

    let duration = draft.duration_minutes();
    if duration < i64::from(constraints.min_duration_minutes) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationTooShort,
            "time",
            format!(
                "Schedules must be at least {} minutes long.",
                constraints.min_duration_minutes
            ),
        ));
    }
    if duration > i64::from(constraints.max_duration_minutes) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DurationTooLong,
            "time",
            format!(
                "Schedules can be at most {} hours long.",
                constraints.max_duration_minutes / 60
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the candidate against the default overlap ceiling (5).
///
/// `exclude_id` skips the stored copy of a schedule being edited.
///
/// # Example
///
/// ```
/// use u_dayplan::models::{OverlapSummary, TimeRange};
/// use u_dayplan::validation::validate_overlap_count;
///
/// let existing: Vec<OverlapSummary> = (0..5)
///     .map(|i| OverlapSummary::new(format!("s{i}"), 540, 600))
///     .collect();
/// let check = validate_overlap_count(&TimeRange::new(550, 560), &existing, None);
/// assert!(!check.valid);
/// assert_eq!(check.overlap_count, 6);
/// ```
pub fn validate_overlap_count<C, E>(
    candidate: &C,
    existing: &[E],
    exclude_id: Option<&str>,
) -> OverlapCheck
where
    C: TimeSpan,
    E: ScheduleEntry,
{
    validate_overlap_count_with_limit(
        candidate,
        existing,
        exclude_id,
        &ScheduleConstraints::default(),
    )
}

/// Checks the candidate against `constraints.max_overlapping_schedules`.
pub fn validate_overlap_count_with_limit<C, E>(
    candidate: &C,
    existing: &[E],
    exclude_id: Option<&str>,
    constraints: &ScheduleConstraints,
) -> OverlapCheck
where
    C: TimeSpan,
    E: ScheduleEntry,
{
    let overlapping = existing
        .iter()
        .filter(|e| exclude_id != Some(e.id()))
        .filter(|e| is_overlapping(candidate, *e))
        .count();
    let overlap_count = overlapping + 1;
    let max = constraints.max_overlapping_schedules;

    if overlap_count > max {
        debug!(
            "rejecting [{}, {}): {} overlaps exceed limit {}",
            candidate.start_minutes(),
            candidate.end_minutes(),
            overlap_count,
            max
        );
        return OverlapCheck {
            valid: false,
            overlap_count,
            error: Some(format!(
                "At most {max} schedules may overlap. This change would overlap {overlap_count}."
            )),
        };
    }

    OverlapCheck {
        valid: true,
        overlap_count,
        error: None,
    }
}

/// Checks that one more schedule fits into a day holding `current_count`.
pub fn validate_daily_schedule_count(
    current_count: usize,
    max_count: usize,
) -> Result<(), ValidationError> {
    if current_count >= max_count {
        return Err(ValidationError::new(
            ValidationErrorKind::DailyLimitReached,
            "date",
            format!("At most {max_count} schedules can be added per day."),
        ));
    }
    Ok(())
}

/// Checks the daily count against `constraints.max_daily_schedules`.
pub fn validate_daily_schedule_count_with_limit(
    current_count: usize,
    constraints: &ScheduleConstraints,
) -> Result<(), ValidationError> {
    validate_daily_schedule_count(current_count, constraints.max_daily_schedules)
}

/// Full pre-persistence check: field validation, then the overlap count.
///
/// The overlap count is only computed once the fields are valid.
///
/// # Returns
/// `Ok(overlap_count)` when the draft may be stored.
pub fn validate_schedule<E: ScheduleEntry>(
    draft: &ScheduleDraft,
    existing: &[E],
    exclude_id: Option<&str>,
    constraints: &ScheduleConstraints,
) -> Result<usize, Vec<ValidationError>> {
    validate_schedule_data(draft, constraints)?;

    let check = validate_overlap_count_with_limit(draft, existing, exclude_id, constraints);
    match check.error {
        Some(message) if !check.valid => Err(vec![ValidationError::new(
            ValidationErrorKind::TooManyOverlaps,
            "overlap",
            message,
        )]),
        _ => Ok(check.overlap_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OverlapSummary, TimeRange};

    fn constraints() -> ScheduleConstraints {
        ScheduleConstraints::default()
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    fn stacked(count: usize) -> Vec<OverlapSummary> {
        (0..count)
            .map(|i| OverlapSummary::new(format!("s{i}"), 540, 600))
            .collect()
    }

    #[test]
    fn test_valid_draft() {
        let draft = ScheduleDraft::new("English", 540, 600).with_description("Chapter 3");
        assert!(validate_schedule_data(&draft, &constraints()).is_ok());
    }

    #[test]
    fn test_blank_title() {
        let draft = ScheduleDraft::new("   ", 540, 600);
        assert_eq!(
            kinds(validate_schedule_data(&draft, &constraints())),
            vec![ValidationErrorKind::MissingTitle]
        );
    }

    #[test]
    fn test_title_too_long() {
        let draft = ScheduleDraft::new("a".repeat(101), 540, 600);
        let errors = validate_schedule_data(&draft, &constraints()).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TitleTooLong);
        assert_eq!(errors[0].field, "title");

        let draft = ScheduleDraft::new("a".repeat(100), 540, 600);
        assert!(validate_schedule_data(&draft, &constraints()).is_ok());
    }

    #[test]
    fn test_title_length_counts_characters() {
        let draft = ScheduleDraft::new("영".repeat(100), 540, 600);
        assert!(validate_schedule_data(&draft, &constraints()).is_ok());
    }

    #[test]
    fn test_description_too_long() {
        let draft = ScheduleDraft::new("t", 540, 600).with_description("d".repeat(501));
        assert_eq!(
            kinds(validate_schedule_data(&draft, &constraints())),
            vec![ValidationErrorKind::DescriptionTooLong]
        );
    }

    #[test]
    fn test_inverted_range_reports_range_and_duration() {
        let draft = ScheduleDraft::new("t", 600, 540);
        assert_eq!(
            kinds(validate_schedule_data(&draft, &constraints())),
            vec![
                ValidationErrorKind::InvalidTimeRange,
                ValidationErrorKind::DurationTooShort
            ]
        );
    }

    #[test]
    fn test_out_of_day_range() {
        let draft = ScheduleDraft::new("t", 1400, 1440);
        assert_eq!(
            kinds(validate_schedule_data(&draft, &constraints())),
            vec![ValidationErrorKind::InvalidTimeRange]
        );
    }

    #[test]
    fn test_duration_bounds() {
        let draft = ScheduleDraft::new("t", 540, 544);
        assert_eq!(
            kinds(validate_schedule_data(&draft, &constraints())),
            vec![ValidationErrorKind::DurationTooShort]
        );

        let draft = ScheduleDraft::new("t", 540, 545);
        assert!(validate_schedule_data(&draft, &constraints()).is_ok());

        let tight = ScheduleConstraints::default().with_duration_bounds(5, 60);
        let draft = ScheduleDraft::new("t", 540, 620);
        let errors = validate_schedule_data(&draft, &tight).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::DurationTooLong);
        assert_eq!(errors[0].message, "Schedules can be at most 1 hours long.");
    }

    #[test]
    fn test_extreme_bounds_report_too_long() {
        let draft = ScheduleDraft::new("t", -2_000_000_000, 2_000_000_000);
        assert_eq!(
            kinds(validate_schedule_data(&draft, &constraints())),
            vec![
                ValidationErrorKind::InvalidTimeRange,
                ValidationErrorKind::DurationTooLong
            ]
        );

        let draft = ScheduleDraft::new("t", i32::MAX, i32::MIN);
        assert_eq!(
            kinds(validate_schedule_data(&draft, &constraints())),
            vec![
                ValidationErrorKind::InvalidTimeRange,
                ValidationErrorKind::DurationTooShort
            ]
        );
    }

    #[test]
    fn test_multiple_errors() {
        let draft = ScheduleDraft::new("", 600, 600).with_description("d".repeat(600));
        let errors = validate_schedule_data(&draft, &constraints()).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_overlap_count_at_limit() {
        let check = validate_overlap_count(&TimeRange::new(550, 560), &stacked(4), None);
        assert!(check.valid);
        assert_eq!(check.overlap_count, 5);
        assert!(check.error.is_none());
    }

    #[test]
    fn test_overlap_count_over_limit() {
        let check = validate_overlap_count(&TimeRange::new(550, 560), &stacked(5), None);
        assert!(!check.valid);
        assert_eq!(check.overlap_count, 6);
        assert_eq!(
            check.error.as_deref(),
            Some("At most 5 schedules may overlap. This change would overlap 6.")
        );
    }

    #[test]
    fn test_overlap_count_excludes_edited_schedule() {
        let existing = stacked(5);
        let check = validate_overlap_count(&TimeRange::new(540, 600), &existing, Some("s0"));
        assert!(check.valid);
        assert_eq!(check.overlap_count, 5);
    }

    #[test]
    fn test_overlap_count_ignores_touching() {
        let existing = vec![
            OverlapSummary::new("before", 480, 540),
            OverlapSummary::new("after", 600, 660),
        ];
        let check = validate_overlap_count(&TimeRange::new(540, 600), &existing, None);
        assert!(check.valid);
        assert_eq!(check.overlap_count, 1);
    }

    #[test]
    fn test_overlap_count_custom_limit() {
        let limits = ScheduleConstraints::default().with_max_overlapping(2);
        let check = validate_overlap_count_with_limit(
            &TimeRange::new(550, 560),
            &stacked(2),
            None,
            &limits,
        );
        assert!(!check.valid);
        assert_eq!(check.overlap_count, 3);
    }

    #[test]
    fn test_overlap_check_serialization() {
        let check = validate_overlap_count(&TimeRange::new(0, 10), &stacked(0), None);
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["overlapCount"], 1);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_daily_count() {
        assert!(validate_daily_schedule_count(99, 100).is_ok());
        let err = validate_daily_schedule_count(100, 100).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DailyLimitReached);
        assert_eq!(err.message, "At most 100 schedules can be added per day.");
    }

    #[test]
    fn test_daily_count_custom_limit() {
        let limits = ScheduleConstraints::default().with_max_daily(20);
        assert!(validate_daily_schedule_count_with_limit(19, &limits).is_ok());
        let err = validate_daily_schedule_count_with_limit(20, &limits).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DailyLimitReached);
        assert_eq!(err.message, "At most 20 schedules can be added per day.");

        assert!(validate_daily_schedule_count_with_limit(20, &constraints()).is_ok());
    }

    #[test]
    fn test_validate_schedule_combined() {
        let draft = ScheduleDraft::new("Math", 550, 590);
        assert_eq!(
            validate_schedule(&draft, &stacked(3), None, &constraints()),
            Ok(4)
        );

        let errors = validate_schedule(&draft, &stacked(5), None, &constraints()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TooManyOverlaps);
        assert_eq!(errors[0].field, "overlap");
    }

    #[test]
    fn test_validate_schedule_fields_first() {
        // Field errors short-circuit before the overlap count
        let draft = ScheduleDraft::new("", 550, 590);
        let errors = validate_schedule(&draft, &stacked(10), None, &constraints()).unwrap_err();
        assert!(errors
            .iter()
            .all(|e| e.kind != ValidationErrorKind::TooManyOverlaps));
    }
}
