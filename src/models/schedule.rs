//! Planning (solution) model.
//!
//! A planning is the complete day-by-day allocation of people's hours to
//! tasks, produced wholesale by the planner. Blocks are never created or
//! edited outside the engine.
//!
//! # Persisted Shape
//! ```json
//! {
//!   "generatedAt": "2026-02-17T08:00:00Z",
//!   "strategy": { "type": "sequential", "splitAcrossDays": true },
//!   "scheduleBlocks": [
//!     { "id": "…", "personId": "P1", "taskId": "T1", "projectId": "PRJ",
//!       "date": "2026-02-17", "hoursPlanned": 6.0 }
//!   ]
//! }
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for deterministic block identifiers.
const BLOCK_NAMESPACE: Uuid = Uuid::from_u128(0x6b1f_3c2e_8d4a_5f07_9e21_b3c4_d5e6_f708);

/// One person working on one task for a number of hours on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlock {
    /// Block identifier (stable for identical inputs).
    pub id: Uuid,
    /// Person doing the work.
    pub person_id: String,
    /// Task being worked on.
    pub task_id: String,
    /// Task's project at generation time (denormalized for queries).
    pub project_id: String,
    /// Working day of the block.
    pub date: NaiveDate,
    /// Planned hours (> 0).
    pub hours_planned: f64,
}

impl ScheduleBlock {
    /// Creates a block with an id derived from `(person, task, date)`.
    pub fn new(
        person_id: impl Into<String>,
        task_id: impl Into<String>,
        project_id: impl Into<String>,
        date: NaiveDate,
        hours_planned: f64,
    ) -> Self {
        let person_id = person_id.into();
        let task_id = task_id.into();
        Self {
            id: Self::derive_id(&person_id, &task_id, date),
            person_id,
            task_id,
            project_id: project_id.into(),
            date,
            hours_planned,
        }
    }

    /// Deterministic UUID v5 for a `(person, task, date)` triple.
    pub fn derive_id(person_id: &str, task_id: &str, date: NaiveDate) -> Uuid {
        let name = format!(
            "{}:{}{}:{}{}",
            person_id.len(),
            person_id,
            task_id.len(),
            task_id,
            date
        );
        Uuid::new_v5(&BLOCK_NAMESPACE, name.as_bytes())
    }
}

/// Descriptor of the strategy that produced a planning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningStrategy {
    /// Strategy name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether tasks may be split across several days.
    pub split_across_days: bool,
}

impl PlanningStrategy {
    /// The sequential, split-across-days strategy.
    pub fn sequential() -> Self {
        Self {
            kind: "sequential".to_string(),
            split_across_days: true,
        }
    }
}

impl Default for PlanningStrategy {
    fn default() -> Self {
        Self::sequential()
    }
}

/// A generated planning.
///
/// `schedule_blocks` keeps generation order: grouped by person, then by
/// task priority, then by date. It is not globally chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planning {
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Strategy descriptor.
    pub strategy: PlanningStrategy,
    /// Blocks in generation order.
    pub schedule_blocks: Vec<ScheduleBlock>,
}

impl Default for Planning {
    fn default() -> Self {
        Self::new(PlanningStrategy::default(), Vec::new())
    }
}

impl Planning {
    /// Creates a planning stamped with the current time.
    pub fn new(strategy: PlanningStrategy, schedule_blocks: Vec<ScheduleBlock>) -> Self {
        Self {
            generated_at: Utc::now(),
            strategy,
            schedule_blocks,
        }
    }

    /// Returns a copy keeping only blocks accepted by `keep`.
    ///
    /// `generated_at` and `strategy` are preserved.
    pub fn retain_blocks<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&ScheduleBlock) -> bool,
    {
        Self {
            generated_at: self.generated_at,
            strategy: self.strategy.clone(),
            schedule_blocks: self
                .schedule_blocks
                .iter()
                .filter(|b| keep(b))
                .cloned()
                .collect(),
        }
    }

    /// Number of blocks.
    pub fn block_count(&self) -> usize {
        self.schedule_blocks.len()
    }

    /// Whether the planning holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.schedule_blocks.is_empty()
    }

    /// Blocks of a person, sorted by date (stable within a date).
    pub fn blocks_for_person(&self, person_id: &str) -> Vec<&ScheduleBlock> {
        let mut blocks: Vec<&ScheduleBlock> = self
            .schedule_blocks
            .iter()
            .filter(|b| b.person_id == person_id)
            .collect();
        blocks.sort_by_key(|b| b.date);
        blocks
    }

    /// Blocks falling on a date, in generation order.
    pub fn blocks_for_date(&self, date: NaiveDate) -> Vec<&ScheduleBlock> {
        self.schedule_blocks
            .iter()
            .filter(|b| b.date == date)
            .collect()
    }

    /// Blocks of a task, in generation order (non-decreasing date).
    pub fn blocks_for_task(&self, task_id: &str) -> Vec<&ScheduleBlock> {
        self.schedule_blocks
            .iter()
            .filter(|b| b.task_id == task_id)
            .collect()
    }

    /// Latest date among a person's blocks.
    pub fn estimated_end_date(&self, person_id: &str) -> Option<NaiveDate> {
        self.schedule_blocks
            .iter()
            .filter(|b| b.person_id == person_id)
            .map(|b| b.date)
            .max()
    }

    /// Latest date among a task's blocks.
    pub fn task_end_date(&self, task_id: &str) -> Option<NaiveDate> {
        self.schedule_blocks
            .iter()
            .filter(|b| b.task_id == task_id)
            .map(|b| b.date)
            .max()
    }

    /// Hours planned for a person on a date.
    pub fn hours_on(&self, person_id: &str, date: NaiveDate) -> f64 {
        self.schedule_blocks
            .iter()
            .filter(|b| b.person_id == person_id && b.date == date)
            .map(|b| b.hours_planned)
            .sum()
    }

    /// Hours planned across all blocks.
    pub fn total_hours(&self) -> f64 {
        self.schedule_blocks.iter().map(|b| b.hours_planned).sum()
    }
}
