//! Task ordering for the planner.
//!
//! Each person's eligible tasks are consumed by the allocator in the order
//! produced here. The planner uses [`rules::Priority`] (lower priority value
//! first) followed by the configured [`TieBreaker`]; further rules can be
//! chained to break priority ties before the final tie-breaker applies.
//!
//! # Usage
//!
//! ```
//! use workplan::dispatching::{rules, RuleEngine, TieBreaker};
//! use workplan::models::Task;
//!
//! let tasks = vec![
//!     Task::new("T1", "PRJ").with_cost(4.0).with_priority(2),
//!     Task::new("T2", "PRJ").with_cost(4.0).with_priority(1),
//! ];
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Priority)
//!     .with_final_tie_breaker(TieBreaker::InputOrder);
//!
//! assert_eq!(engine.sort_indices(&tasks), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Task;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores are scheduled first.
pub type RuleScore = f64;

/// A rule scoring how urgently a task should be planned.
///
/// # Score Convention
/// **Lower score = planned earlier.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "PRIORITY").
    fn name(&self) -> &'static str;

    /// Scores a task.
    fn evaluate(&self, task: &Task) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
