//! Planning domain models.
//!
//! Provides the data types the planner reads (people, projects, tasks)
//! and the data it produces (schedule blocks grouped in a planning),
//! all held together by an immutable workspace snapshot.
//!
//! # Entity Roles
//!
//! | Type | Role | Owned by |
//! |------|------|----------|
//! | Person | Capacity provider (hours/day) | Caller |
//! | Project | Grouping of tasks | Caller |
//! | Task | Demand (pending hours, priority) | Caller |
//! | ScheduleBlock | Hours of one person on one task on one day | Planner |
//! | Planning | Generated set of blocks | Planner |

mod calendar;
mod person;
mod project;
mod schedule;
mod task;
mod workspace;

pub use calendar::WorkCalendar;
pub use person::Person;
pub use project::Project;
pub use schedule::{Planning, PlanningStrategy, ScheduleBlock};
pub use task::{Task, TaskStatus, HOURS_EPSILON};
pub use workspace::Workspace;
