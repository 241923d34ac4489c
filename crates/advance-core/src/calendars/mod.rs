//! Business day calendars and maturity date resolution.
//!
//! This module provides:
//! - The [`Calendar`] trait and concrete calendars (weekend-only, holiday-set)
//! - Bounded business-day rolling in either direction
//! - Maturity resolution with the month-preserving rule for month/year terms

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{AdvanceError, AdvanceResult};
use crate::types::{Date, FrequencyUnit};

/// Hard cap on consecutive non-business days a roll will cross.
///
/// A real calendar never has two weeks without a business day; hitting the
/// cap means the holiday data is broken and the roll fails instead of
/// walking the calendar indefinitely.
pub const MAX_ROLL_DAYS: u32 = 14;

/// Trait for business day calendars.
///
/// Calendars decide which days are valid trading/settlement days.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is not a business day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }
}

/// Direction of a business-day roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollDirection {
    /// Toward later dates.
    Forward,
    /// Toward earlier dates.
    Backward,
}

impl RollDirection {
    /// The signed one-day increment for this direction.
    #[must_use]
    pub fn step(&self) -> i64 {
        match self {
            RollDirection::Forward => 1,
            RollDirection::Backward => -1,
        }
    }
}

/// Returns `date` itself if it is a business day, otherwise the first
/// business day reached by stepping one day at a time in `direction`.
///
/// # Errors
///
/// Returns `AdvanceError::CalendarError` if no business day is found within
/// [`MAX_ROLL_DAYS`] steps - broken holiday data, not a legitimate calendar.
pub fn next_business_day<C: Calendar + ?Sized>(
    date: Date,
    direction: RollDirection,
    calendar: &C,
) -> AdvanceResult<Date> {
    let mut candidate = date;
    for _ in 0..=MAX_ROLL_DAYS {
        if calendar.is_business_day(candidate) {
            return Ok(candidate);
        }
        candidate = candidate.add_days(direction.step());
    }
    Err(AdvanceError::calendar_error(format!(
        "no business day within {MAX_ROLL_DAYS} days of {date}"
    )))
}

/// Resolves the settlement maturity date for a term's literal maturity.
///
/// Rolls forward to the next business day. Month- and year-denominated terms
/// must not slip into the following month: when the forward roll crosses the
/// month boundary, the maturity rolls backward from the literal date instead.
/// Week- and day-denominated terms roll forward freely.
///
/// # Errors
///
/// Propagates the roll-cap error from [`next_business_day`].
pub fn resolve_maturity_date<C: Calendar + ?Sized>(
    candidate: Date,
    unit: FrequencyUnit,
    calendar: &C,
) -> AdvanceResult<Date> {
    let forward = next_business_day(candidate, RollDirection::Forward, calendar)?;
    if unit.is_month_or_year() && forward > candidate.end_of_month() {
        return next_business_day(candidate, RollDirection::Backward, calendar);
    }
    Ok(forward)
}

/// A weekend-only calendar (no holidays).
///
/// Useful for tests and as the degenerate case of an empty holiday set.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// A calendar backed by an explicit holiday date set.
///
/// This is the production calendar: the holiday lookup service hands back a
/// set of dates and the engine treats weekends plus that set as
/// non-business days. An empty set is valid and equivalent to
/// [`WeekendCalendar`].
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    name: String,
    holidays: HashSet<Date>,
}

impl HolidayCalendar {
    /// Creates a calendar from a collection of holiday dates.
    pub fn from_dates(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Loads a calendar from a JSON document.
    ///
    /// # JSON Format
    ///
    /// ```json
    /// { "name": "US Settlement", "holidays": ["2026-01-01", "2026-12-25"] }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `AdvanceError::CalendarError` for malformed JSON or holiday
    /// dates that fail to parse.
    pub fn from_json(json: &str) -> AdvanceResult<Self> {
        let data: CalendarData =
            serde_json::from_str(json).map_err(|e| AdvanceError::CalendarError {
                reason: format!("Failed to parse JSON: {e}"),
            })?;
        let mut holidays = HashSet::with_capacity(data.holidays.len());
        for text in &data.holidays {
            holidays.insert(Date::parse(text).map_err(|_| AdvanceError::CalendarError {
                reason: format!("Invalid holiday date '{text}'"),
            })?);
        }
        Ok(Self {
            name: data.name,
            holidays,
        })
    }

    /// The configured name of this calendar.
    pub fn calendar_name(&self) -> &str {
        &self.name
    }

    /// Number of holidays configured.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &'static str {
        // Trait requires a static string; the configured name is available
        // through calendar_name().
        "Holiday"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays.contains(&date)
    }
}

/// Serializable calendar document, the shape the holiday service returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarData {
    /// Name of the calendar.
    pub name: String,
    /// Holiday dates in YYYY-MM-DD format.
    #[serde(default)]
    pub holidays: Vec<String>,
}
