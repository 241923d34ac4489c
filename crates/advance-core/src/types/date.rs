//! Date type for rate calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AdvanceError, AdvanceResult};

/// A calendar date.
///
/// Newtype wrapper around `chrono::NaiveDate` providing the date operations
/// the rate engine needs: month-safe arithmetic, end-of-month lookup, and
/// weekend detection.
///
/// # Example
///
/// ```rust
/// use advance_core::types::Date;
///
/// let date = Date::from_ymd(2026, 3, 15).unwrap();
/// let maturity = date.add_months(6).unwrap();
/// assert_eq!(maturity.month(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AdvanceError::InvalidDate` if the components do not form a
    /// valid calendar date.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AdvanceResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| AdvanceError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AdvanceError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AdvanceResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| AdvanceError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date. Negative values move backward.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months, clamping to the last valid day of the
    /// target month (e.g., Jan 31 + 1 month = Feb 28/29).
    ///
    /// # Errors
    ///
    /// Returns `AdvanceError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> AdvanceResult<Self> {
        let total = self.year() * 12 + self.month() as i32 - 1 + months;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        let day = self.day().min(days_in_month(year, month));
        Self::from_ymd(year, month, day)
    }

    /// Adds a number of years, clamping Feb 29 to Feb 28 when needed.
    ///
    /// # Errors
    ///
    /// Returns `AdvanceError::InvalidDate` if the result is out of range.
    pub fn add_years(&self, years: i32) -> AdvanceResult<Self> {
        let year = self.year() + years;
        let day = self.day().min(days_in_month(year, self.month()));
        Self::from_ymd(year, self.month(), day)
    }

    /// Number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the last day of the date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        let day = days_in_month(self.year(), self.month());
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), day)
                .expect("end of month is always valid"),
        )
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_and_accessors() {
        let date = Date::from_ymd(2026, 8, 7).unwrap();
        assert_eq!(date.year(), 2026);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 7);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2026, 2, 30).is_err());
        assert!(Date::from_ymd(2026, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2026-08-07").unwrap();
        assert_eq!(date, Date::from_ymd(2026, 8, 7).unwrap());
        assert!(Date::parse("not-a-date").is_err());
        assert!(Date::parse("08/07/2026").is_err());
    }

    #[test]
    fn test_add_months_clamps() {
        let date = Date::from_ymd(2026, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result, Date::from_ymd(2026, 2, 28).unwrap());

        // Across a year boundary, backwards
        let result = date.add_months(-2).unwrap();
        assert_eq!(result, Date::from_ymd(2025, 11, 30).unwrap());
    }

    #[test]
    fn test_add_years_leap() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(date.add_years(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(date.add_years(4).unwrap(), Date::from_ymd(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2026, 1, 1).unwrap();
        let d2 = Date::from_ymd(2026, 2, 15).unwrap();
        assert_eq!(d1.days_between(&d2), 45);
        assert_eq!(d2.days_between(&d1), -45);
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(
            Date::from_ymd(2026, 2, 10).unwrap().end_of_month(),
            Date::from_ymd(2026, 2, 28).unwrap()
        );
        assert_eq!(
            Date::from_ymd(2024, 2, 10).unwrap().end_of_month(),
            Date::from_ymd(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_weekend_detection() {
        // 2026-08-08 is a Saturday, 2026-08-09 a Sunday
        assert!(Date::from_ymd(2026, 8, 8).unwrap().is_weekend());
        assert!(Date::from_ymd(2026, 8, 9).unwrap().is_weekend());
        assert!(!Date::from_ymd(2026, 8, 10).unwrap().is_weekend());
    }

    #[test]
    fn test_display_and_serde() {
        let date = Date::from_ymd(2026, 8, 7).unwrap();
        assert_eq!(date.to_string(), "2026-08-07");

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2026-08-07\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }
}
