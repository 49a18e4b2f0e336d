//! Task model.
//!
//! A task is an estimated amount of work (hours) belonging to a project,
//! optionally assigned to one person. Only the hours still pending are
//! planned.

use serde::{Deserialize, Serialize};

/// Tolerance for hour comparisons against zero.
///
/// Fractional hours accumulate rounding error when split across days;
/// anything below this is treated as no time at all.
pub const HOURS_EPSILON: f64 = 1e-9;

/// Workflow state of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Todo,
    /// Work has begun.
    InProgress,
    /// Finished; never planned again.
    Completed,
}

impl TaskStatus {
    /// Whether the task is finished.
    #[inline]
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

/// A unit of work to be planned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Owning project.
    pub project_id: String,
    /// Total estimated effort (hours).
    pub cost_hours: f64,
    /// Effort already spent (hours).
    #[serde(default)]
    pub done_hours: f64,
    /// Assigned person, if any.
    #[serde(default)]
    pub assignee_id: Option<String>,
    /// Workflow state.
    #[serde(default)]
    pub status: TaskStatus,
    /// Planning priority (lower = more urgent).
    #[serde(default)]
    pub priority: i32,
}

impl Task {
    /// Creates an unassigned `todo` task with priority 0.
    pub fn new(id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            project_id: project_id.into(),
            cost_hours: 0.0,
            done_hours: 0.0,
            assignee_id: None,
            status: TaskStatus::Todo,
            priority: 0,
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the estimated effort.
    pub fn with_cost(mut self, hours: f64) -> Self {
        self.cost_hours = hours;
        self
    }

    /// Sets the effort already spent.
    pub fn with_done(mut self, hours: f64) -> Self {
        self.done_hours = hours;
        self
    }

    /// Assigns the task to a person.
    pub fn assigned_to(mut self, person_id: impl Into<String>) -> Self {
        self.assignee_id = Some(person_id.into());
        self
    }

    /// Removes the assignee.
    pub fn unassigned(mut self) -> Self {
        self.assignee_id = None;
        self
    }

    /// Sets the workflow state.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Hours still requiring allocation: `cost_hours - done_hours`.
    #[inline]
    pub fn pending_hours(&self) -> f64 {
        self.cost_hours - self.done_hours
    }

    /// Whether any work remains beyond the rounding tolerance.
    #[inline]
    pub fn has_pending_work(&self) -> bool {
        self.pending_hours() > HOURS_EPSILON
    }

    /// Whether the task is assigned to `person_id`.
    pub fn is_assigned_to(&self, person_id: &str) -> bool {
        self.assignee_id.as_deref() == Some(person_id)
    }
}
