//! The disablement decision.

use std::collections::BTreeSet;

use advance_core::types::{Date, LoanTermStatus, RateBandResult};

/// Decides whether a term's rate is disabled for trading.
///
/// A rate is disabled when its maturity falls on a blackout date, when
/// either administrative flag is off, or when either off-band threshold is
/// breached. All five operands are evaluated before combining - the
/// non-short-circuiting `|` keeps every condition observable in a debugger
/// or trace regardless of which one fires first.
#[must_use]
pub fn is_disabled(
    maturity_date: Date,
    band: &RateBandResult,
    status: &LoanTermStatus,
    blackout_dates: &BTreeSet<Date>,
) -> bool {
    let blackout = blackout_dates.contains(&maturity_date);
    let not_tradeable = !status.trade_status;
    let not_displayed = !status.display_status;
    let below_band = band.min_threshold_exceeded;
    let above_band = band.max_threshold_exceeded;

    blackout | not_tradeable | not_displayed | below_band | above_band
}
