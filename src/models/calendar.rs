//! Working-day calendar.
//!
//! Decides which calendar dates can receive planned hours.
//!
//! # Day Model
//! Dates are plain calendar dates (`NaiveDate`) with no time zone.
//! Monday through Friday are working days; Saturday and Sunday never are.
//! Holiday calendars are not modelled.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Stateless Monday–Friday calendar.
///
/// All operations are pure functions of the input date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCalendar;

impl WorkCalendar {
    /// Creates the standard Monday–Friday calendar.
    pub fn new() -> Self {
        Self
    }

    /// Whether `date` is a working day.
    #[inline]
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns `date` if it is a working day, otherwise the first
    /// working day after it.
    ///
    /// `None` when no working day remains before the end of the
    /// representable date range.
    pub fn next_working_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut current = date;
        while !self.is_working_day(current) {
            current = next_day(current)?;
        }
        Some(current)
    }

    /// First working day strictly after `date`, if representable.
    pub fn following_working_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.next_working_day(next_day(date)?)
    }

    /// Number of working days in the inclusive range `[from, to]`.
    ///
    /// Returns 0 when `to` is before `from`.
    pub fn working_days_between(&self, from: NaiveDate, to: NaiveDate) -> u32 {
        if to < from {
            return 0;
        }
        from.iter_days()
            .take_while(|d| *d <= to)
            .filter(|d| self.is_working_day(*d))
            .count() as u32
    }
}

/// Calendar successor of `date`.
fn next_day(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(1))
}
