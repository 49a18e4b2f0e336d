//! Planner configuration.
//!
//! ```json
//! {
//!   "strategy": { "type": "sequential", "splitAcrossDays": true },
//!   "startDate": "2026-02-16",
//!   "tieBreaker": "input_order"
//! }
//! ```
//!
//! Every field is optional; omitted fields take their defaults.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dispatching::TieBreaker;
use crate::error::{PlanningError, PlanningResult};
use crate::models::PlanningStrategy;

/// Planner configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    /// Descriptor stamped into every generated planning.
    pub strategy: PlanningStrategy,
    /// Fixed start date; `None` means today at generation time.
    pub start_date: Option<NaiveDate>,
    /// Resolution of equal-priority ties.
    pub tie_breaker: TieBreaker,
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy descriptor.
    pub fn with_strategy(mut self, strategy: PlanningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fixes the start date.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the equal-priority tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Validates configuration values.
    pub fn validate(&self) -> PlanningResult<()> {
        if self.strategy.kind.trim().is_empty() {
            return Err(PlanningError::InvalidConfig(
                "strategy type must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Parses configuration from a JSON string and validates it.
    pub fn from_json_str(input: &str) -> PlanningResult<Self> {
        let cfg: PlannerConfig = serde_json::from_str(input)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
