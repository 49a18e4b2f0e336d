//! Allocation and load metrics.
//!
//! Turns eligible, ordered tasks into day-by-day schedule blocks and
//! summarizes the result.
//!
//! # Algorithm
//!
//! `SequentialAllocator` is a greedy, priority-ordered, first-fit packer:
//! each person's working days are buckets of `hours_per_day`, filled in
//! task order without resetting the residual between tasks.
//!
//! # KPI
//!
//! `PlanningKpi` reports total hours, end dates and utilization per person.

pub mod eligibility;
mod kpi;
mod sequential;

pub use kpi::PlanningKpi;
pub use sequential::SequentialAllocator;
