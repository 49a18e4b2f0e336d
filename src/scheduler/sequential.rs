//! Sequential capacity-packing allocator.
//!
//! # Algorithm
//!
//! Per person, independently:
//! 1. Start on the first working day at or after the start date with a
//!    full day of capacity.
//! 2. Take tasks in dispatching order. Place `min(residual, remaining)`
//!    hours on the current day; when the day is full, move to the next
//!    working day and refill.
//! 3. Capacity left over after a task is used by the next one on the same
//!    day (capacity packing).
//!
//! Greedy first-fit bin packing over daily buckets of `hours_per_day`.
//!
//! # Complexity
//! O(p * t + d) where p=people, t=tasks, d=emitted blocks.

use chrono::NaiveDate;

use crate::dispatching::RuleEngine;
use crate::error::{PlanningError, PlanningResult};
use crate::models::{Person, ScheduleBlock, Task, WorkCalendar, HOURS_EPSILON};

use super::eligibility::{eligible_people, eligible_tasks, tasks_of};

/// Sequential, split-across-days allocator.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use workplan::dispatching::RuleEngine;
/// use workplan::models::{Person, Task};
/// use workplan::scheduler::SequentialAllocator;
///
/// let people = vec![Person::new("P1").with_hours_per_day(6.0)];
/// let tasks = vec![Task::new("T1", "PRJ").with_cost(20.0).assigned_to("P1")];
/// let monday = NaiveDate::from_ymd_opt(2026, 2, 16).unwrap();
///
/// let blocks = SequentialAllocator::new()
///     .allocate(&people, &tasks, &RuleEngine::default(), monday)
///     .unwrap();
/// let hours: Vec<f64> = blocks.iter().map(|b| b.hours_planned).collect();
/// assert_eq!(hours, vec![6.0, 6.0, 6.0, 2.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequentialAllocator {
    calendar: WorkCalendar,
}

impl SequentialAllocator {
    /// Creates an allocator on the standard working-day calendar.
    pub fn new() -> Self {
        Self {
            calendar: WorkCalendar::new(),
        }
    }

    /// Sets the calendar.
    pub fn with_calendar(mut self, calendar: WorkCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Allocates every eligible task of every active person.
    ///
    /// Blocks are emitted person by person (input order), and within a
    /// person in dispatching order. Tasks whose assignee is inactive or
    /// unknown are skipped.
    ///
    /// # Errors
    /// [`PlanningError::CalendarExhausted`] when some person's work would run
    /// past the last representable working day. No blocks are returned then.
    pub fn allocate(
        &self,
        people: &[Person],
        tasks: &[Task],
        engine: &RuleEngine,
        start_date: NaiveDate,
    ) -> PlanningResult<Vec<ScheduleBlock>> {
        let tasks = eligible_tasks(tasks);
        let mut blocks = Vec::new();

        for person in eligible_people(people) {
            let ordered = engine.sort(&tasks_of(&tasks, &person.id));
            if ordered.is_empty() {
                continue;
            }

            let person_blocks = self.allocate_person(person, &ordered, start_date)?;
            tracing::debug!(
                person = %person.id,
                tasks = ordered.len(),
                blocks = person_blocks.len(),
                "allocated person"
            );
            blocks.extend(person_blocks);
        }

        Ok(blocks)
    }

    /// Allocates already ordered tasks for one person.
    ///
    /// Every task is placed in full; the caller is responsible for
    /// eligibility and ordering.
    ///
    /// # Errors
    /// [`PlanningError::CalendarExhausted`] when the date range ends before
    /// the work does.
    pub fn allocate_person(
        &self,
        person: &Person,
        ordered: &[&Task],
        start_date: NaiveDate,
    ) -> PlanningResult<Vec<ScheduleBlock>> {
        let capacity = person.hours_per_day;
        let mut blocks = Vec::new();
        if capacity <= HOURS_EPSILON {
            return Ok(blocks);
        }

        let exhausted = |last_date| PlanningError::CalendarExhausted {
            person_id: person.id.clone(),
            last_date,
        };

        let mut cursor = self
            .calendar
            .next_working_day(start_date)
            .ok_or_else(|| exhausted(start_date))?;
        let mut residual = capacity;

        for task in ordered {
            let mut remaining = task.pending_hours();

            while remaining > HOURS_EPSILON {
                if residual <= HOURS_EPSILON {
                    cursor = self
                        .calendar
                        .following_working_day(cursor)
                        .ok_or_else(|| exhausted(cursor))?;
                    residual = capacity;
                }

                // Absorb float residue so a task never ends with a sliver block
                let chunk = if remaining <= residual + HOURS_EPSILON {
                    remaining
                } else {
                    residual
                };

                blocks.push(ScheduleBlock::new(
                    &person.id,
                    &task.id,
                    &task.project_id,
                    cursor,
                    chunk,
                ));

                residual = (residual - chunk).max(0.0);
                remaining -= chunk;
            }
        }

        Ok(blocks)
    }
}
