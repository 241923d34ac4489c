//! Normalized market data records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Date, LoanType, Term};

/// Payment convention attached to a rate record.
///
/// Short-term advances pay at maturity; the variant set is closed on the
/// provider side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentConvention {
    /// Interest paid at maturity.
    #[default]
    Maturity,
}

impl fmt::Display for PaymentConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentConvention::Maturity => f.write_str("Maturity"),
        }
    }
}

/// One normalized rate record for a (loan type, term) pair in one snapshot.
///
/// Produced by document normalization; immutable afterwards. Summary assembly
/// derives the enriched entry from it rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDataPoint {
    /// The quoted advance rate. Zero when the provider published a blank
    /// rate (a data-quality condition, reported separately).
    pub rate: Decimal,
    /// The raw maturity date as published, before business-day adjustment.
    pub maturity_date: Date,
    /// Payment convention, fixed to maturity for advances.
    pub payment_on: PaymentConvention,
    /// Interest day-count basis as published (e.g. "ACT/ACT").
    pub interest_day_count: String,
    /// Day count for custom terms, absent for tabulated terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_to_maturity: Option<u32>,
}

/// A fully normalized snapshot: one record per loan type per recognized term.
pub type Snapshot = BTreeMap<LoanType, BTreeMap<Term, MarketDataPoint>>;
