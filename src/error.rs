//! Error types for planner operations.

use chrono::NaiveDate;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors produced by the planner.
///
/// Only structural problems are errors. Dangling references between
/// blocks and entities are reported by [`crate::integrity`] as data.
#[derive(Debug, Error)]
pub enum PlanningError {
    /// Workspace entities are structurally invalid; nothing was generated.
    #[error("invalid planning input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    /// Pending work runs past the last representable working day.
    #[error("calendar exhausted: person '{person_id}' has work left after {last_date}")]
    CalendarExhausted {
        /// Person whose allocation overflowed.
        person_id: String,
        /// Last date reached.
        last_date: NaiveDate,
    },
    /// Planner configuration rejected.
    #[error("invalid planner config: {0}")]
    InvalidConfig(String),
    /// Planner configuration could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result alias for planner operations.
pub type PlanningResult<T> = Result<T, PlanningError>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
