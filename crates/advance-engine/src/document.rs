//! Provider market-data document model.
//!
//! The provider feed is loosely structured: rates arrive as JSON numbers or
//! numeric strings (sometimes blank), period magnitudes as numbers or
//! strings, and dates as text. This module keeps that looseness at the
//! deserialization boundary; everything past [`crate::normalizer`] is typed.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// A full market-data document: one or more rate blocks per loan type.
///
/// A loan type may appear twice - a standard block followed by a block of
/// non-tabulated ("custom") points. Order within the document is the
/// provider's; the normalizer relies only on first-occurrence-is-standard.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketDocument {
    /// Rate blocks in document order.
    pub blocks: Vec<RateBlock>,
}

impl MarketDocument {
    /// Parses a document from provider JSON.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::UpstreamUnavailable` when the document does not
    /// deserialize - an unusable feed is indistinguishable from no feed.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| EngineError::upstream(format!("unreadable market data document: {e}")))
    }
}

/// One loan-type block of the document.
#[derive(Debug, Clone, Deserialize)]
pub struct RateBlock {
    /// Long-form loan type name (e.g. "Agency Collateral").
    pub display_name: String,
    /// Interest day-count basis for every point in the block.
    pub day_count_basis: String,
    /// The block's spot/funding date text, used for custom-sourced points.
    pub spot_date: String,
    /// Term data points.
    #[serde(default)]
    pub terms: Vec<TermPoint>,
}

/// One term data point within a block.
#[derive(Debug, Clone, Deserialize)]
pub struct TermPoint {
    /// Quoted rate. `None` covers blank, null, and unparseable values - the
    /// blank-rate data-quality case.
    #[serde(default, deserialize_with = "de_opt_rate")]
    pub rate: Option<Decimal>,
    /// Maturity date text.
    pub maturity: String,
    /// Period magnitude for tabulated terms; absent on custom points.
    #[serde(default, deserialize_with = "de_opt_magnitude")]
    pub frequency: Option<u32>,
    /// Period unit letter (D/W/M/Y) for tabulated terms.
    #[serde(default)]
    pub frequency_unit: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn de_opt_rate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Decimal>, D::Error> {
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) => Decimal::try_from(n).ok(),
        Some(NumberOrText::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Decimal::from_str(s).ok()
            }
        }
        None => None,
    })
}

fn de_opt_magnitude<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match raw {
        Some(NumberOrText::Number(n)) if n >= 0.0 && n.fract() == 0.0 => Some(n as u32),
        Some(NumberOrText::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
