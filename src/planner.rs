//! Planning orchestrator.
//!
//! Wires validation, eligibility, ordering and allocation into a single
//! full regeneration: the previous planning is discarded and rebuilt from
//! the current people and tasks. The result is a pure function of
//! `(people, tasks, start_date)`; only `generated_at` varies between runs.
//!
//! Callers regenerate after any change to a person's capacity or activity,
//! or to a task's cost, progress, status, priority or assignee
//! (see [`Workspace::scheduling_inputs_changed`]).

use chrono::{Local, NaiveDate};

use crate::config::PlannerConfig;
use crate::dispatching::RuleEngine;
use crate::error::{PlanningError, PlanningResult};
use crate::models::{Planning, ScheduleBlock, Workspace};
use crate::scheduler::SequentialAllocator;
use crate::validation::validate_input;

/// Generates plannings for workspaces.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use workplan::models::{Person, Task, Workspace};
/// use workplan::Planner;
///
/// let ws = Workspace::new()
///     .with_person(Person::new("P1").with_hours_per_day(8.0))
///     .with_task(Task::new("T1", "PRJ").with_cost(6.0).assigned_to("P1"));
/// let monday = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
///
/// let planned = Planner::new().generate_schedule_from(&ws, monday).unwrap();
/// assert_eq!(planned.planning.block_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
    engine: RuleEngine,
    allocator: SequentialAllocator,
}

impl Planner {
    /// Creates a planner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner from a configuration.
    ///
    /// Fails if the configuration does not validate.
    pub fn with_config(config: PlannerConfig) -> PlanningResult<Self> {
        config.validate()?;
        Ok(Self {
            engine: RuleEngine::by_priority(config.tie_breaker),
            allocator: SequentialAllocator::new(),
            config,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Regenerates the planning starting at the configured date, or today.
    pub fn generate_schedule(&self, workspace: &Workspace) -> PlanningResult<Workspace> {
        let start_date = self
            .config
            .start_date
            .unwrap_or_else(|| Local::now().date_naive());
        self.generate_schedule_from(workspace, start_date)
    }

    /// Regenerates the planning starting at `start_date`.
    ///
    /// # Errors
    /// [`PlanningError::InvalidInput`] when people or tasks are structurally
    /// invalid. Nothing is generated in that case and the input workspace
    /// (with its previous planning) remains the caller's to keep.
    pub fn generate_schedule_from(
        &self,
        workspace: &Workspace,
        start_date: NaiveDate,
    ) -> PlanningResult<Workspace> {
        tracing::info!(
            people = workspace.people.len(),
            tasks = workspace.tasks.len(),
            %start_date,
            "generating schedule"
        );

        if let Err(errors) = validate_input(&workspace.people, &workspace.tasks) {
            tracing::warn!(errors = errors.len(), "schedule generation rejected");
            return Err(PlanningError::InvalidInput(errors));
        }

        let blocks = self
            .allocator
            .allocate(&workspace.people, &workspace.tasks, &self.engine, start_date)?;
        let planning = Planning::new(self.config.strategy.clone(), blocks);

        tracing::info!(blocks = planning.block_count(), "schedule generated");
        Ok(workspace.clone().with_planning(planning))
    }
}

/// A person's blocks, sorted by date.
pub fn schedule_for_person<'a>(
    workspace: &'a Workspace,
    person_id: &str,
) -> Vec<&'a ScheduleBlock> {
    workspace.planning.blocks_for_person(person_id)
}

/// All blocks on a date.
pub fn schedule_for_date(workspace: &Workspace, date: NaiveDate) -> Vec<&ScheduleBlock> {
    workspace.planning.blocks_for_date(date)
}

/// Last planned date for a person, or `None` if nothing is planned.
pub fn estimated_end_date(workspace: &Workspace, person_id: &str) -> Option<NaiveDate> {
    workspace.planning.estimated_end_date(person_id)
}
