//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for tasks that should be planned first.

use super::{DispatchingRule, RuleScore};
use crate::models::Task;

/// Task priority, most urgent first.
///
/// Priority values follow the workspace convention: lower = more urgent,
/// so the score is the priority itself.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        f64::from(task.priority)
    }

    fn description(&self) -> &'static str {
        "Task Priority (ascending)"
    }
}

/// Shortest pending work first.
///
/// Finishes small tasks early; useful as a secondary rule on priority ties.
#[derive(Debug, Clone, Copy)]
pub struct ShortestPending;

impl DispatchingRule for ShortestPending {
    fn name(&self) -> &'static str {
        "SPW"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        task.pending_hours()
    }

    fn description(&self) -> &'static str {
        "Shortest Pending Work"
    }
}

/// Longest pending work first.
#[derive(Debug, Clone, Copy)]
pub struct LongestPending;

impl DispatchingRule for LongestPending {
    fn name(&self) -> &'static str {
        "LPW"
    }

    fn evaluate(&self, task: &Task) -> RuleScore {
        -task.pending_hours()
    }

    fn description(&self) -> &'static str {
        "Longest Pending Work"
    }
}
