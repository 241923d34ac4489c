//! Rate band configuration and evaluation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-term rate band configuration, in basis points off the start-of-day
/// rate. Supplied by the administrative configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBandConfig {
    /// Basis points below start-of-day at which the term is taken off.
    pub low_band_off_bp: i64,
    /// Basis points below start-of-day at which a warning is raised.
    pub low_band_warn_bp: i64,
    /// Basis points above start-of-day at which a warning is raised.
    pub high_band_warn_bp: i64,
    /// Basis points above start-of-day at which the term is taken off.
    pub high_band_off_bp: i64,
}

/// Result of evaluating a live rate against its band configuration.
///
/// Computed fresh on every evaluation and never cached. The warn thresholds
/// are informational; only the off thresholds feed the disablement decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBandResult {
    /// Absolute low-off delta (basis points / 100).
    pub low_band_off_delta: Decimal,
    /// Absolute low-warn delta.
    pub low_band_warn_delta: Decimal,
    /// Absolute high-warn delta.
    pub high_band_warn_delta: Decimal,
    /// Absolute high-off delta.
    pub high_band_off_delta: Decimal,
    /// Start-of-day rate minus the low-off delta.
    pub low_band_off_rate: Decimal,
    /// Start-of-day rate minus the low-warn delta.
    pub low_band_warn_rate: Decimal,
    /// Start-of-day rate plus the high-warn delta.
    pub high_band_warn_rate: Decimal,
    /// Start-of-day rate plus the high-off delta.
    pub high_band_off_rate: Decimal,
    /// True when the live rate is below the low-off threshold.
    pub min_threshold_exceeded: bool,
    /// True when the live rate is above the high-off threshold.
    pub max_threshold_exceeded: bool,
}

impl RateBandResult {
    /// Evaluates a live rate against the start-of-day rate and band config.
    ///
    /// All arithmetic is exact decimal: a basis-point delta of 50 becomes
    /// 0.50 with no rounding beyond the source precision.
    #[must_use]
    pub fn evaluate(live_rate: Decimal, start_of_day_rate: Decimal, config: &RateBandConfig) -> Self {
        let low_band_off_delta = bp_to_rate(config.low_band_off_bp);
        let low_band_warn_delta = bp_to_rate(config.low_band_warn_bp);
        let high_band_warn_delta = bp_to_rate(config.high_band_warn_bp);
        let high_band_off_delta = bp_to_rate(config.high_band_off_bp);

        let low_band_off_rate = start_of_day_rate - low_band_off_delta;
        let low_band_warn_rate = start_of_day_rate - low_band_warn_delta;
        let high_band_warn_rate = start_of_day_rate + high_band_warn_delta;
        let high_band_off_rate = start_of_day_rate + high_band_off_delta;

        RateBandResult {
            low_band_off_delta,
            low_band_warn_delta,
            high_band_warn_delta,
            high_band_off_delta,
            low_band_off_rate,
            low_band_warn_rate,
            high_band_warn_rate,
            high_band_off_rate,
            min_threshold_exceeded: live_rate < low_band_off_rate,
            max_threshold_exceeded: live_rate > high_band_off_rate,
        }
    }

    /// True when either off threshold is breached.
    #[must_use]
    pub fn threshold_exceeded(&self) -> bool {
        self.min_threshold_exceeded || self.max_threshold_exceeded
    }
}

/// Basis points to an absolute rate delta (bp / 100).
fn bp_to_rate(bp: i64) -> Decimal {
    Decimal::new(bp, 2)
}
