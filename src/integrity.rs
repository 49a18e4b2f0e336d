//! Planning integrity checks and orphan cleanup.
//!
//! A block is an orphan when the entities it references no longer justify
//! it: the person is gone or inactive, or the task is gone, completed or
//! assigned to someone else. Orphans appear when entities change without
//! the planning being regenerated.
//!
//! Orphans are reported as data, never as errors; the caller decides
//! whether to clean, warn or ignore.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PlanningResult;
use crate::models::{Person, ScheduleBlock, Task, Workspace};

/// Why a block failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrityIssueKind {
    /// Referenced person does not exist.
    MissingPerson,
    /// Referenced person is inactive.
    InactivePerson,
    /// Referenced task does not exist.
    MissingTask,
    /// Referenced task is completed.
    CompletedTask,
    /// Referenced task is assigned to someone else (or no one).
    AssigneeMismatch,
}

/// One invalid block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityIssue {
    /// Offending block.
    pub block_id: uuid::Uuid,
    /// Failure category.
    pub kind: IntegrityIssueKind,
    /// Human-readable description referencing the offending ids.
    pub message: String,
}

/// Outcome of an integrity check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    /// Whether every block is valid.
    pub is_valid: bool,
    /// One message per invalid block.
    pub issues: Vec<String>,
    /// Structured form of `issues`.
    pub details: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    fn from_details(details: Vec<IntegrityIssue>) -> Self {
        Self {
            is_valid: details.is_empty(),
            issues: details.iter().map(|i| i.message.clone()).collect(),
            details,
        }
    }

    /// Number of invalid blocks.
    pub fn issue_count(&self) -> usize {
        self.details.len()
    }
}

/// Id-indexed view over a workspace's people and tasks.
struct EntityIndex<'a> {
    people: HashMap<&'a str, &'a Person>,
    tasks: HashMap<&'a str, &'a Task>,
}

impl<'a> EntityIndex<'a> {
    fn new(workspace: &'a Workspace) -> Self {
        Self {
            people: workspace.people.iter().map(|p| (p.id.as_str(), p)).collect(),
            tasks: workspace.tasks.iter().map(|t| (t.id.as_str(), t)).collect(),
        }
    }

    /// First failing check for a block, if any.
    fn check(&self, block: &ScheduleBlock) -> Option<IntegrityIssue> {
        let issue = |kind, message: String| {
            Some(IntegrityIssue {
                block_id: block.id,
                kind,
                message,
            })
        };

        match self.people.get(block.person_id.as_str()) {
            None => {
                return issue(
                    IntegrityIssueKind::MissingPerson,
                    format!(
                        "Block {} references missing person '{}'",
                        block.id, block.person_id
                    ),
                )
            }
            Some(person) if !person.active => {
                return issue(
                    IntegrityIssueKind::InactivePerson,
                    format!(
                        "Block {} references inactive person '{}'",
                        block.id, block.person_id
                    ),
                )
            }
            Some(_) => {}
        }

        let Some(task) = self.tasks.get(block.task_id.as_str()) else {
            return issue(
                IntegrityIssueKind::MissingTask,
                format!(
                    "Block {} references missing task '{}'",
                    block.id, block.task_id
                ),
            );
        };

        if task.status.is_completed() {
            return issue(
                IntegrityIssueKind::CompletedTask,
                format!(
                    "Block {} references completed task '{}'",
                    block.id, block.task_id
                ),
            );
        }

        if !task.is_assigned_to(&block.person_id) {
            return issue(
                IntegrityIssueKind::AssigneeMismatch,
                format!(
                    "Block {} assigns task '{}' to '{}' but its assignee is '{}'",
                    block.id,
                    block.task_id,
                    block.person_id,
                    task.assignee_id.as_deref().unwrap_or("none")
                ),
            );
        }

        None
    }
}

/// Checks every block of the workspace's planning.
///
/// Read-only; each invalid block contributes exactly one issue.
pub fn validate_planning_integrity(workspace: &Workspace) -> IntegrityReport {
    let index = EntityIndex::new(workspace);
    let details: Vec<IntegrityIssue> = workspace
        .planning
        .schedule_blocks
        .iter()
        .filter_map(|b| index.check(b))
        .collect();

    if !details.is_empty() {
        tracing::warn!(issues = details.len(), "planning integrity issues found");
    }
    IntegrityReport::from_details(details)
}

/// Returns a workspace whose planning keeps only valid blocks.
///
/// Never fails; the `Result` matches the other planner operations.
pub fn clean_orphan_blocks(workspace: &Workspace) -> PlanningResult<Workspace> {
    let index = EntityIndex::new(workspace);
    let planning = workspace
        .planning
        .retain_blocks(|b| index.check(b).is_none());

    let removed = workspace.planning.block_count() - planning.block_count();
    if removed > 0 {
        tracing::info!(removed, "removed orphan schedule blocks");
    }

    Ok(workspace.clone().with_planning(planning))
}
