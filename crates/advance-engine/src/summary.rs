//! Rate summary assembly.
//!
//! Merges the live and start-of-day snapshots with band configuration,
//! trading statuses, blackout dates, and the business-day calendar into the
//! decision-ready summary the API layer serves.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use advance_core::calendars::{resolve_maturity_date, Calendar};
use advance_core::types::{
    Date, LoanTermStatus, LoanType, MarketDataPoint, PaymentConvention, RateBandConfig,
    RateBandResult, Snapshot, Term,
};

use crate::disablement::is_disabled;
use crate::error::{EngineError, EngineResult};
use crate::monitor::RateMonitor;

/// One enriched rate entry in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    /// Live advance rate.
    pub rate: Decimal,
    /// The rate this term opened at.
    pub start_of_day_rate: Decimal,
    /// Business-day-corrected maturity date (explicit custom maturities are
    /// carried unmodified).
    pub maturity_date: Date,
    /// Day count, present on custom terms only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_maturity: Option<u32>,
    /// Payment convention.
    pub payment_on: PaymentConvention,
    /// Interest day-count basis.
    pub interest_day_count: String,
    /// Whether the rate is disabled for trading.
    pub disabled: bool,
    /// True once the term's trading window has closed for the day.
    pub end_of_day: bool,
    /// Band thresholds and breach flags behind the disablement decision.
    pub rate_band_info: RateBandResult,
}

/// The full per-type, per-term rate summary.
#[derive(Debug, Clone, Serialize)]
pub struct RateSummary {
    /// When this summary was assembled.
    pub as_of: DateTime<Utc>,
    /// Entries keyed by loan type, then term.
    pub rates: BTreeMap<LoanType, BTreeMap<Term, SummaryEntry>>,
}

/// Per-request parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryRequest {
    /// Ad-hoc maturity date: when present, a `<days>day` term is added for
    /// every loan type.
    pub explicit_maturity: Option<Date>,
    /// Funding date the custom day count runs from; today when absent.
    pub explicit_funding: Option<Date>,
}

impl SummaryRequest {
    /// A request for the canonical term set only.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// A request that also prices an explicit maturity date.
    #[must_use]
    pub fn with_explicit_maturity(maturity: Date, funding: Option<Date>) -> Self {
        Self {
            explicit_maturity: Some(maturity),
            explicit_funding: funding,
        }
    }
}

/// Assembles rate summaries from fully materialized inputs.
///
/// Purely computational: all collaborators are borrowed, nothing is cached,
/// and no I/O happens here. The composition root owns retrieval and
/// lifecycle of every input.
pub struct SummaryAssembler<'a> {
    /// Live snapshot.
    pub live: &'a Snapshot,
    /// Start-of-day snapshot.
    pub start_of_day: &'a Snapshot,
    /// Administrative flags per (term, loan type).
    pub statuses: &'a BTreeMap<(Term, LoanType), LoanTermStatus>,
    /// Band configuration per term.
    pub band_configs: &'a BTreeMap<Term, RateBandConfig>,
    /// Blackout maturity dates.
    pub blackout_dates: &'a BTreeSet<Date>,
    /// Business-day calendar.
    pub calendar: &'a dyn Calendar,
    /// Monitoring hook.
    pub monitor: &'a dyn RateMonitor,
}

impl SummaryAssembler<'_> {
    /// Builds the full summary.
    ///
    /// Walks every loan type and every canonical term, then the optional
    /// explicit custom term. Any missing snapshot entry, band config, or
    /// status aborts the whole request - a summary is never partial.
    ///
    /// # Errors
    ///
    /// `UpstreamUnavailable` for missing snapshot data, `ConfigurationGap`
    /// for missing config/status, `Core` for calendar-cap failures.
    pub fn assemble(&self, request: &SummaryRequest) -> EngineResult<RateSummary> {
        let mut rates = BTreeMap::new();

        for loan_type in LoanType::ALL {
            let live_terms = self.snapshot_terms(self.live, loan_type, "live")?;
            let sod_terms = self.snapshot_terms(self.start_of_day, loan_type, "start-of-day")?;

            let mut entries = BTreeMap::new();
            for term in Term::CANONICAL {
                entries.insert(
                    term,
                    self.build_entry(loan_type, term, live_terms, sod_terms, None)?,
                );
            }

            if let Some(maturity) = request.explicit_maturity {
                let funding = request.explicit_funding.unwrap_or_else(Date::today);
                let (days, term) = Term::custom_between(maturity, funding)?;
                entries.insert(
                    term,
                    self.build_entry(loan_type, term, live_terms, sod_terms, Some((maturity, days)))?,
                );
            }

            rates.insert(loan_type, entries);
        }

        Ok(RateSummary {
            as_of: Utc::now(),
            rates,
        })
    }

    fn snapshot_terms<'s>(
        &self,
        snapshot: &'s Snapshot,
        loan_type: LoanType,
        label: &str,
    ) -> EngineResult<&'s BTreeMap<Term, MarketDataPoint>> {
        snapshot
            .get(&loan_type)
            .ok_or_else(|| EngineError::upstream(format!("no {label} rates for {loan_type}")))
    }

    fn build_entry(
        &self,
        loan_type: LoanType,
        term: Term,
        live_terms: &BTreeMap<Term, MarketDataPoint>,
        sod_terms: &BTreeMap<Term, MarketDataPoint>,
        explicit: Option<(Date, u32)>,
    ) -> EngineResult<SummaryEntry> {
        let live = live_terms
            .get(&term)
            .ok_or_else(|| EngineError::missing_term(loan_type, term, "live"))?;
        let start_of_day = sod_terms
            .get(&term)
            .ok_or_else(|| EngineError::missing_term(loan_type, term, "start-of-day"))?;

        let config = self.band_config(term)?;
        let status = self.status(loan_type, term)?;

        let band = RateBandResult::evaluate(live.rate, start_of_day.rate, config);

        let maturity_date = match explicit {
            // Explicit maturities are priced as requested, never adjusted.
            Some((date, _)) => date,
            None => resolve_maturity_date(live.maturity_date, term.frequency().1, self.calendar)?,
        };

        let disabled = is_disabled(maturity_date, &band, status, self.blackout_dates);

        if band.threshold_exceeded() && status.trade_status && status.display_status {
            self.monitor.threshold_breach(loan_type, term, &band);
        }

        Ok(SummaryEntry {
            rate: live.rate,
            start_of_day_rate: start_of_day.rate,
            maturity_date,
            days_to_maturity: match explicit {
                Some((_, days)) => Some(days),
                None => live.days_to_maturity,
            },
            payment_on: live.payment_on,
            interest_day_count: live.interest_day_count.clone(),
            disabled,
            end_of_day: !status.trade_status,
            rate_band_info: band,
        })
    }

    /// Band config for a term. Ad-hoc custom terms cannot be keyed in the
    /// configuration store and ride the open bucket's bands.
    fn band_config(&self, term: Term) -> EngineResult<&RateBandConfig> {
        if let Some(config) = self.band_configs.get(&term) {
            return Ok(config);
        }
        if term.is_custom() {
            if let Some(config) = self.band_configs.get(&Term::Open) {
                return Ok(config);
            }
        }
        Err(EngineError::configuration_gap(format!(
            "no rate band config for {term}"
        )))
    }

    /// Trading status for a (term, loan type); custom terms fall back to the
    /// open bucket like band configs do.
    fn status(&self, loan_type: LoanType, term: Term) -> EngineResult<&LoanTermStatus> {
        if let Some(status) = self.statuses.get(&(term, loan_type)) {
            return Ok(status);
        }
        if term.is_custom() {
            if let Some(status) = self.statuses.get(&(Term::Open, loan_type)) {
                return Ok(status);
            }
        }
        Err(EngineError::configuration_gap(format!(
            "no trading status for {loan_type} {term}"
        )))
    }
}
