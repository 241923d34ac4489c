//! Monitoring hooks for data-quality and rate-band events.

use advance_core::types::{LoanType, RateBandResult, Term};

/// Observer for conditions that are reportable but not fatal.
///
/// The engine calls these hooks and keeps going; delivery (alerting, paging,
/// metrics) is the collaborator's concern.
pub trait RateMonitor: Send + Sync {
    /// A data point resolved to a term but carried a blank/unusable rate.
    /// The entry was kept with a zero rate.
    fn blank_rate(&self, loan_type: LoanType, term: Term);

    /// A live rate breached an off threshold while the term was otherwise
    /// tradeable and visible.
    fn threshold_breach(&self, loan_type: LoanType, term: Term, band: &RateBandResult);
}

/// Monitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMonitor;

impl RateMonitor for NoopMonitor {
    fn blank_rate(&self, _loan_type: LoanType, _term: Term) {}

    fn threshold_breach(&self, _loan_type: LoanType, _term: Term, _band: &RateBandResult) {}
}

/// Monitor that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMonitor;

impl RateMonitor for TracingMonitor {
    fn blank_rate(&self, loan_type: LoanType, term: Term) {
        tracing::warn!(%loan_type, %term, "blank rate in market data, kept with zero rate");
    }

    fn threshold_breach(&self, loan_type: LoanType, term: Term, band: &RateBandResult) {
        tracing::warn!(
            %loan_type,
            %term,
            min_exceeded = band.min_threshold_exceeded,
            max_exceeded = band.max_threshold_exceeded,
            "rate band off threshold breached"
        );
    }
}
