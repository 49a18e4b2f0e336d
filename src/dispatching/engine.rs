//! Rule engine for task ordering.
//!
//! Applies rules in sequence: the next rule is consulted only when all
//! previous rules tie. Remaining ties are resolved by a [`TieBreaker`].

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{rules, DispatchingRule, RuleScore};
use crate::models::Task;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Keep the input order (stable sort).
    #[default]
    InputOrder,
    /// Lexicographic by task ID.
    ById,
}

/// A composable rule engine for task ordering.
///
/// # Example
/// ```
/// use workplan::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_rule(rules::ShortestPending);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine (input order preserved).
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
            epsilon: 1e-9,
        }
    }

    /// The ordering used by the planner: priority ascending, then `tie_breaker`.
    pub fn by_priority(tie_breaker: TieBreaker) -> Self {
        Self::new()
            .with_rule(rules::Priority)
            .with_final_tie_breaker(tie_breaker)
    }

    /// Appends a rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Returns indices into `tasks`, most urgent first.
    ///
    /// The sort is stable: tasks tied on every rule keep their input order
    /// unless the tie-breaker is [`TieBreaker::ById`].
    pub fn sort_indices<T: Borrow<Task>>(&self, tasks: &[T]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_by(|&a, &b| {
            self.compare(Borrow::<Task>::borrow(&tasks[a]), Borrow::<Task>::borrow(&tasks[b]))
        });
        indices
    }

    /// Orders borrowed tasks, most urgent first.
    pub fn sort<'a>(&self, tasks: &[&'a Task]) -> Vec<&'a Task> {
        self.sort_indices(tasks)
            .into_iter()
            .map(|i| tasks[i])
            .collect()
    }

    /// Scores from each rule for one task.
    pub fn evaluate(&self, task: &Task) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(task)).collect()
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        for rule in &self.rules {
            let score_a = rule.evaluate(a);
            let score_b = rule.evaluate(b);

            if (score_a - score_b).abs() > self.epsilon {
                return score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal);
            }
        }

        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::by_priority(TieBreaker::InputOrder)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
