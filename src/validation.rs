//! Structural input validation.
//!
//! Checks the people and tasks handed to the planner before any hours are
//! allocated. Detects:
//! - Duplicate IDs
//! - Non-positive or non-finite daily capacity
//! - Non-positive or non-finite task cost
//! - Done hours outside `[0, cost]`
//!
//! Every problem is collected; the planner refuses to generate when any
//! is found. References to unknown or inactive assignees are not
//! structural problems: such tasks are simply not planned.

use crate::models::{Person, Task};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A person's daily capacity is zero, negative or not finite.
    NonPositiveCapacity,
    /// A task's cost is zero, negative or not finite.
    NonPositiveCost,
    /// A task's done hours are negative, not finite, or exceed its cost.
    InvalidProgress,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates people and tasks for planning.
///
/// Checks:
/// 1. No duplicate person IDs
/// 2. No duplicate task IDs
/// 3. Every person has a positive, finite `hours_per_day`
/// 4. Every task has a positive, finite `cost_hours`
/// 5. Every task has `0 <= done_hours <= cost_hours`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(people: &[Person], tasks: &[Task]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut person_ids = HashSet::new();
    for person in people {
        if !person_ids.insert(person.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate person ID: {}", person.id),
            ));
        }

        if !(person.hours_per_day.is_finite() && person.hours_per_day > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCapacity,
                format!(
                    "Person '{}' has invalid hours per day: {}",
                    person.id, person.hours_per_day
                ),
            ));
        }
    }

    let mut task_ids = HashSet::new();
    for task in tasks {
        if !task_ids.insert(task.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }

        if !(task.cost_hours.is_finite() && task.cost_hours > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCost,
                format!("Task '{}' has invalid cost hours: {}", task.id, task.cost_hours),
            ));
            // Progress is meaningless against an invalid cost
            continue;
        }

        if !task.done_hours.is_finite()
            || task.done_hours < 0.0
            || task.done_hours > task.cost_hours
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProgress,
                format!(
                    "Task '{}' has done hours {} outside [0, {}]",
                    task.id, task.done_hours, task.cost_hours
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
