//! Advance terms and their provider-period encoding.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{AdvanceError, AdvanceResult};
use crate::types::Date;

/// Unit of a provider period encoding (the letter part of "3M", "1Y", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrequencyUnit {
    /// Days
    Days,
    /// Weeks
    Weeks,
    /// Months
    Months,
    /// Years
    Years,
}

impl FrequencyUnit {
    /// Single-letter provider code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FrequencyUnit::Days => "D",
            FrequencyUnit::Weeks => "W",
            FrequencyUnit::Months => "M",
            FrequencyUnit::Years => "Y",
        }
    }

    /// Parses a provider unit letter (case-insensitive).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "D" => Some(FrequencyUnit::Days),
            "W" => Some(FrequencyUnit::Weeks),
            "M" => Some(FrequencyUnit::Months),
            "Y" => Some(FrequencyUnit::Years),
            _ => None,
        }
    }

    /// True for month- and year-denominated periods, which must not roll
    /// across a month boundary when their maturity date is adjusted.
    #[must_use]
    pub fn is_month_or_year(&self) -> bool {
        matches!(self, FrequencyUnit::Months | FrequencyUnit::Years)
    }
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An advance term.
///
/// The fixed calendar set (overnight through 3 years) is closed; `Open` is a
/// synthetic alias of overnight that is never sourced from the provider
/// directly. `Custom` terms are identified by their day count and exist only
/// when a caller supplies an explicit maturity date or the provider publishes
/// a non-tabulated point.
///
/// Terms serialize as their wire strings: `overnight`, `open`, `1week`,
/// `2month`, `1year`, `45day`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Overnight advance.
    Overnight,
    /// Open advance - structurally a duplicate of overnight.
    Open,
    /// 1 week.
    Week1,
    /// 2 weeks.
    Week2,
    /// 3 weeks.
    Week3,
    /// 1 month.
    Month1,
    /// 2 months.
    Month2,
    /// 3 months.
    Month3,
    /// 6 months.
    Month6,
    /// 1 year.
    Year1,
    /// 2 years.
    Year2,
    /// 3 years.
    Year3,
    /// Ad-hoc term identified by its day count.
    Custom(u32),
}

impl Term {
    /// The canonical term set, in curve order. Every loan type must quote
    /// every one of these.
    pub const CANONICAL: [Term; 12] = [
        Term::Overnight,
        Term::Open,
        Term::Week1,
        Term::Week2,
        Term::Week3,
        Term::Month1,
        Term::Month2,
        Term::Month3,
        Term::Month6,
        Term::Year1,
        Term::Year2,
        Term::Year3,
    ];

    /// Maps a provider period encoding (magnitude + unit) to a term.
    ///
    /// The mapping table is exact: 1D, 1W-3W, 1M/2M/3M/6M, 1Y-3Y. Any other
    /// combination (4M, 5M, 10Y, ...) has no term and returns `None`; the
    /// caller skips that data point. `Open` is never produced here.
    #[must_use]
    pub fn from_period(magnitude: u32, unit: FrequencyUnit) -> Option<Self> {
        match (magnitude, unit) {
            (1, FrequencyUnit::Days) => Some(Term::Overnight),
            (1, FrequencyUnit::Weeks) => Some(Term::Week1),
            (2, FrequencyUnit::Weeks) => Some(Term::Week2),
            (3, FrequencyUnit::Weeks) => Some(Term::Week3),
            (1, FrequencyUnit::Months) => Some(Term::Month1),
            (2, FrequencyUnit::Months) => Some(Term::Month2),
            (3, FrequencyUnit::Months) => Some(Term::Month3),
            (6, FrequencyUnit::Months) => Some(Term::Month6),
            (1, FrequencyUnit::Years) => Some(Term::Year1),
            (2, FrequencyUnit::Years) => Some(Term::Year2),
            (3, FrequencyUnit::Years) => Some(Term::Year3),
            _ => None,
        }
    }

    /// The canonical (magnitude, unit) encoding of this term.
    ///
    /// `Open` shares overnight's encoding; custom terms are day-denominated
    /// by construction.
    #[must_use]
    pub fn frequency(&self) -> (u32, FrequencyUnit) {
        match self {
            Term::Overnight | Term::Open => (1, FrequencyUnit::Days),
            Term::Week1 => (1, FrequencyUnit::Weeks),
            Term::Week2 => (2, FrequencyUnit::Weeks),
            Term::Week3 => (3, FrequencyUnit::Weeks),
            Term::Month1 => (1, FrequencyUnit::Months),
            Term::Month2 => (2, FrequencyUnit::Months),
            Term::Month3 => (3, FrequencyUnit::Months),
            Term::Month6 => (6, FrequencyUnit::Months),
            Term::Year1 => (1, FrequencyUnit::Years),
            Term::Year2 => (2, FrequencyUnit::Years),
            Term::Year3 => (3, FrequencyUnit::Years),
            Term::Custom(days) => (*days, FrequencyUnit::Days),
        }
    }

    /// Builds the day-count term for an explicit maturity date.
    ///
    /// `funding` is the settlement date the count runs from; callers pass
    /// today's date when no explicit funding date was supplied.
    ///
    /// # Errors
    ///
    /// Returns `AdvanceError::InvalidTerm` if the maturity does not fall
    /// strictly after the funding date.
    pub fn custom_between(maturity: Date, funding: Date) -> AdvanceResult<(u32, Self)> {
        let days = funding.days_between(&maturity);
        if days <= 0 {
            return Err(AdvanceError::invalid_term(format!(
                "maturity {maturity} is not after funding date {funding}"
            )));
        }
        let days = days as u32;
        Ok((days, Term::Custom(days)))
    }

    /// True for day-count (`<N>day`) terms.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Term::Custom(_))
    }

    /// Parses a wire-format term string (`overnight`, `2week`, `45day`, ...).
    #[must_use]
    pub fn from_wire_name(s: &str) -> Option<Self> {
        match s {
            "overnight" => Some(Term::Overnight),
            "open" => Some(Term::Open),
            "1week" => Some(Term::Week1),
            "2week" => Some(Term::Week2),
            "3week" => Some(Term::Week3),
            "1month" => Some(Term::Month1),
            "2month" => Some(Term::Month2),
            "3month" => Some(Term::Month3),
            "6month" => Some(Term::Month6),
            "1year" => Some(Term::Year1),
            "2year" => Some(Term::Year2),
            "3year" => Some(Term::Year3),
            _ => s
                .strip_suffix("day")
                .and_then(|n| n.parse::<u32>().ok())
                .filter(|days| *days > 0)
                .map(Term::Custom),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Overnight => f.write_str("overnight"),
            Term::Open => f.write_str("open"),
            Term::Week1 => f.write_str("1week"),
            Term::Week2 => f.write_str("2week"),
            Term::Week3 => f.write_str("3week"),
            Term::Month1 => f.write_str("1month"),
            Term::Month2 => f.write_str("2month"),
            Term::Month3 => f.write_str("3month"),
            Term::Month6 => f.write_str("6month"),
            Term::Year1 => f.write_str("1year"),
            Term::Year2 => f.write_str("2year"),
            Term::Year3 => f.write_str("3year"),
            Term::Custom(days) => write!(f, "{days}day"),
        }
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Term {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Term::from_wire_name(&s).ok_or_else(|| D::Error::custom(format!("unknown term: {s}")))
    }
}
