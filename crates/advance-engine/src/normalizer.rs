//! Market-data document normalization.
//!
//! Walks a provider document and produces one typed record per recognized
//! term per loan type. Provider-format quirks (the synthetic `open` alias,
//! second "custom" blocks for an already-seen type) are absorbed here so the
//! rest of the engine never sees document-shape accidents.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use advance_core::types::{
    Date, FrequencyUnit, LoanType, MarketDataPoint, PaymentConvention, Snapshot, Term,
};

use crate::document::{MarketDocument, TermPoint};
use crate::error::{EngineError, EngineResult};
use crate::monitor::RateMonitor;

/// Normalizes a provider document into a snapshot.
///
/// Per block: the long-form display name is inverted to a [`LoanType`]; a
/// block for a type already seen is treated as custom-sourced and its points
/// are keyed by day count against the block's spot date. Tabulated points
/// map through [`Term::from_period`]; periods with no mapping are skipped.
/// Points with a resolvable term but a blank rate are kept with a zero rate
/// and reported through `monitor`.
///
/// # Errors
///
/// Returns `EngineError::MalformedDate` when any maturity or (needed) spot
/// text fails to parse - a broken document is never partially normalized.
pub fn normalize(document: &MarketDocument, monitor: &dyn RateMonitor) -> EngineResult<Snapshot> {
    let mut snapshot: Snapshot = BTreeMap::new();

    for block in &document.blocks {
        let Some(loan_type) = LoanType::from_display_name(&block.display_name) else {
            tracing::warn!(display_name = %block.display_name, "unrecognized loan type block skipped");
            continue;
        };

        // A second block for the same type carries the provider's
        // non-tabulated points; its terms are derived from the spot date.
        let custom_sourced = snapshot.contains_key(&loan_type);
        let spot_date = if custom_sourced {
            Some(parse_date(&block.spot_date)?)
        } else {
            None
        };

        let terms = snapshot.entry(loan_type).or_default();

        for point in &block.terms {
            let maturity = parse_date(&point.maturity)?;

            let Some((term, days_to_maturity)) = resolve_term(point, maturity, spot_date) else {
                tracing::debug!(
                    %loan_type,
                    maturity = %point.maturity,
                    "data point with no term mapping skipped"
                );
                continue;
            };

            let rate = match point.rate {
                Some(rate) => rate,
                None => {
                    monitor.blank_rate(loan_type, term);
                    Decimal::ZERO
                }
            };

            if custom_sourced && terms.contains_key(&term) {
                // First occurrence wins; see DESIGN.md.
                tracing::warn!(%loan_type, %term, "duplicate term in custom block, keeping first");
                continue;
            }

            terms.insert(
                term,
                MarketDataPoint {
                    rate,
                    maturity_date: maturity,
                    payment_on: PaymentConvention::Maturity,
                    interest_day_count: block.day_count_basis.clone(),
                    days_to_maturity,
                },
            );
        }

        if !custom_sourced {
            if let Some(overnight) = terms.get(&Term::Overnight).cloned() {
                // open is a structural duplicate of overnight, never
                // independently provider-sourced.
                terms.entry(Term::Open).or_insert(overnight);
            }
        }
    }

    Ok(snapshot)
}

fn resolve_term(
    point: &TermPoint,
    maturity: Date,
    spot_date: Option<Date>,
) -> Option<(Term, Option<u32>)> {
    if let Some(spot) = spot_date {
        let (days, term) = Term::custom_between(maturity, spot).ok()?;
        return Some((term, Some(days)));
    }
    let magnitude = point.frequency?;
    let unit = FrequencyUnit::from_code(point.frequency_unit.as_deref()?)?;
    Term::from_period(magnitude, unit).map(|term| (term, None))
}

fn parse_date(text: &str) -> EngineResult<Date> {
    Date::parse(text).map_err(|_| EngineError::malformed_date(text))
}
