//! Person model.
//!
//! People are the resources that perform tasks. Each person has a fixed
//! daily capacity in hours and an activity flag; inactive people receive
//! no planned hours.

use serde::{Deserialize, Serialize};

/// A person whose working hours are planned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Unique person identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Daily capacity (hours, must be positive).
    pub hours_per_day: f64,
    /// Whether the person takes part in planning.
    pub active: bool,
}

impl Person {
    /// Creates an active person with an 8-hour working day.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            hours_per_day: 8.0,
            active: true,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the daily capacity.
    pub fn with_hours_per_day(mut self, hours: f64) -> Self {
        self.hours_per_day = hours;
        self
    }

    /// Sets the activity flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Marks the person inactive.
    pub fn deactivated(self) -> Self {
        self.with_active(false)
    }
}
