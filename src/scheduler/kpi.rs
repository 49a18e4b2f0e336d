//! Planning load metrics.
//!
//! Summarizes a generated planning per person.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Hours | Sum of planned hours |
//! | End Date | Latest planned date (per person and overall) |
//! | Utilization | Planned hours / (hours_per_day × working days spanned) |
//! | Avg Utilization | Mean of per-person utilization |
//!
//! A person's span runs from their first to their last planned date,
//! counting working days only.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Person, Planning, WorkCalendar};

/// Planning load indicators.
#[derive(Debug, Clone)]
pub struct PlanningKpi {
    /// Number of blocks.
    pub block_count: usize,
    /// Sum of planned hours.
    pub total_hours: f64,
    /// Latest planned date overall.
    pub end_date: Option<NaiveDate>,
    /// Planned hours per person.
    pub hours_by_person: HashMap<String, f64>,
    /// Latest planned date per person.
    pub end_date_by_person: HashMap<String, NaiveDate>,
    /// Utilization per person (0.0..1.0).
    pub utilization_by_person: HashMap<String, f64>,
    /// Mean per-person utilization (0.0 when nothing is planned).
    pub avg_utilization: f64,
}

impl PlanningKpi {
    /// Computes metrics from a planning and the people it was generated for.
    ///
    /// Blocks of people missing from `people` count toward totals and end
    /// dates but not toward utilization.
    pub fn calculate(planning: &Planning, people: &[Person]) -> Self {
        let calendar = WorkCalendar::new();
        let mut hours_by_person: HashMap<String, f64> = HashMap::new();
        let mut span_by_person: HashMap<String, (NaiveDate, NaiveDate)> = HashMap::new();

        for block in &planning.schedule_blocks {
            *hours_by_person.entry(block.person_id.clone()).or_insert(0.0) += block.hours_planned;
            span_by_person
                .entry(block.person_id.clone())
                .and_modify(|(first, last)| {
                    *first = (*first).min(block.date);
                    *last = (*last).max(block.date);
                })
                .or_insert((block.date, block.date));
        }

        let mut utilization_by_person = HashMap::new();
        for person in people {
            let (Some(hours), Some(&(first, last))) = (
                hours_by_person.get(&person.id),
                span_by_person.get(&person.id),
            ) else {
                continue;
            };
            let days = calendar.working_days_between(first, last);
            let available = person.hours_per_day * f64::from(days);
            if available > 0.0 {
                utilization_by_person.insert(person.id.clone(), hours / available);
            }
        }

        let avg_utilization = if utilization_by_person.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_person.values().sum();
            sum / utilization_by_person.len() as f64
        };

        let end_date_by_person: HashMap<String, NaiveDate> = span_by_person
            .into_iter()
            .map(|(id, (_, last))| (id, last))
            .collect();

        Self {
            block_count: planning.block_count(),
            total_hours: planning.total_hours(),
            end_date: end_date_by_person.values().max().copied(),
            hours_by_person,
            end_date_by_person,
            utilization_by_person,
            avg_utilization,
        }
    }

    /// Whether every person's planned work ends on or before `date`.
    pub fn finishes_by(&self, date: NaiveDate) -> bool {
        self.end_date.is_none_or(|end| end <= date)
    }
}
