//! Sequential planning engine for people, projects and tasks.
//!
//! Answers "on which day, and for how many hours, does each person work on
//! each task?" by turning a workspace snapshot into day-by-day schedule
//! blocks that respect daily capacity, task priority and working days.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Person`, `Project`, `Task`, `WorkCalendar`,
//!   `ScheduleBlock`, `Planning`, `Workspace`
//! - **`dispatching`**: Task ordering rules (priority ascending, stable ties)
//! - **`scheduler`**: Eligibility filter, capacity-packing allocator, load KPIs
//! - **`validation`**: Structural input checks (capacity, cost, progress, IDs)
//! - **`integrity`**: Orphan-block detection and cleanup
//! - **`planner`**: Full-regeneration orchestrator and planning queries
//!
//! # Guarantees
//!
//! After a successful generation:
//! - every block has positive hours on a Monday–Friday date;
//! - no person exceeds `hours_per_day` on any date;
//! - each eligible task's blocks sum to its pending hours, in date order;
//! - unassigned or completed tasks and inactive people have no blocks.
//!
//! Workspaces are immutable values: every operation takes a snapshot and
//! returns a new one.

pub mod config;
pub mod dispatching;
pub mod error;
pub mod integrity;
pub mod models;
pub mod planner;
pub mod scheduler;
pub mod telemetry;
pub mod validation;

pub use config::PlannerConfig;
pub use error::{PlanningError, PlanningResult};
pub use integrity::{clean_orphan_blocks, validate_planning_integrity, IntegrityReport};
pub use planner::{estimated_end_date, schedule_for_date, schedule_for_person, Planner};
