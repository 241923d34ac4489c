//! Shared fixtures for engine integration tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use advance_core::types::{Date, LoanTermStatus, LoanType, RateBandConfig, RateBandResult, Term};
use advance_engine::{MarketDocument, RateMonitor};
use serde_json::{json, Value};

/// Spot/funding date every fixture document is anchored on (a Friday).
pub const SPOT: &str = "2026-08-07";

pub fn spot() -> Date {
    Date::parse(SPOT).unwrap()
}

/// Standard period encodings for the canonical provider-sourced terms.
pub const PERIODS: [(u32, &str); 11] = [
    (1, "D"),
    (1, "W"),
    (2, "W"),
    (3, "W"),
    (1, "M"),
    (2, "M"),
    (3, "M"),
    (6, "M"),
    (1, "Y"),
    (2, "Y"),
    (3, "Y"),
];

fn maturity_for(frequency: u32, unit: &str) -> Date {
    let spot = spot();
    match unit {
        "D" => spot.add_days(i64::from(frequency)),
        "W" => spot.add_days(7 * i64::from(frequency)),
        "M" => spot.add_months(frequency as i32).unwrap(),
        "Y" => spot.add_years(frequency as i32).unwrap(),
        _ => panic!("unknown unit {unit}"),
    }
}

/// A full provider document: one standard block per loan type quoting every
/// tabulated period at `base_rate`, plus a custom block per type with a
/// 45-day point at `base_rate + 0.07`.
pub fn document_value(base_rate: f64) -> Value {
    let mut blocks = Vec::new();
    for loan_type in LoanType::ALL {
        let terms: Vec<Value> = PERIODS
            .iter()
            .map(|(frequency, unit)| {
                json!({
                    "rate": format!("{base_rate:.2}"),
                    "maturity": maturity_for(*frequency, unit).to_string(),
                    "frequency": frequency,
                    "frequency_unit": unit,
                })
            })
            .collect();
        blocks.push(json!({
            "display_name": loan_type.display_name(),
            "day_count_basis": "ACT/ACT",
            "spot_date": SPOT,
            "terms": terms,
        }));
    }
    for loan_type in LoanType::ALL {
        blocks.push(json!({
            "display_name": loan_type.display_name(),
            "day_count_basis": "ACT/ACT",
            "spot_date": SPOT,
            "terms": [{
                "rate": format!("{:.2}", base_rate + 0.07),
                "maturity": spot().add_days(45).to_string(),
            }],
        }));
    }
    json!({ "blocks": blocks })
}

fn term_point<'a>(
    doc: &'a mut Value,
    loan_type: LoanType,
    frequency: u32,
    unit: &str,
) -> &'a mut Value {
    let blocks = doc["blocks"].as_array_mut().unwrap();
    for block in blocks {
        if block["display_name"] != loan_type.display_name() {
            continue;
        }
        let terms = block["terms"].as_array_mut().unwrap();
        for point in terms {
            if point["frequency"] == json!(frequency) && point["frequency_unit"] == json!(unit) {
                return point;
            }
        }
    }
    panic!("no {frequency}{unit} point for {loan_type}");
}

pub fn set_term_rate(doc: &mut Value, loan_type: LoanType, frequency: u32, unit: &str, rate: f64) {
    term_point(doc, loan_type, frequency, unit)["rate"] = json!(rate);
}

pub fn clear_term_rate(doc: &mut Value, loan_type: LoanType, frequency: u32, unit: &str) {
    term_point(doc, loan_type, frequency, unit)["rate"] = json!(null);
}

pub fn set_term_maturity(
    doc: &mut Value,
    loan_type: LoanType,
    frequency: u32,
    unit: &str,
    maturity: &str,
) {
    term_point(doc, loan_type, frequency, unit)["maturity"] = json!(maturity);
}

pub fn remove_term(doc: &mut Value, loan_type: LoanType, frequency: u32, unit: &str) {
    for block in doc["blocks"].as_array_mut().unwrap() {
        if block["display_name"] != loan_type.display_name() {
            continue;
        }
        let terms = block["terms"].as_array_mut().unwrap();
        terms.retain(|point| {
            !(point["frequency"] == json!(frequency) && point["frequency_unit"] == json!(unit))
        });
    }
}

pub fn parse(doc: &Value) -> MarketDocument {
    MarketDocument::from_json(&doc.to_string()).unwrap()
}

/// Symmetric 50/25 band config for every canonical term.
pub fn band_configs() -> BTreeMap<Term, RateBandConfig> {
    Term::CANONICAL
        .into_iter()
        .map(|term| {
            (
                term,
                RateBandConfig {
                    low_band_off_bp: 50,
                    low_band_warn_bp: 25,
                    high_band_warn_bp: 25,
                    high_band_off_bp: 50,
                },
            )
        })
        .collect()
}

/// Active status for every canonical (term, loan type) pair.
pub fn statuses() -> BTreeMap<(Term, LoanType), LoanTermStatus> {
    let mut map = BTreeMap::new();
    for term in Term::CANONICAL {
        for loan_type in LoanType::ALL {
            map.insert((term, loan_type), LoanTermStatus::active());
        }
    }
    map
}

pub fn no_blackouts() -> BTreeSet<Date> {
    BTreeSet::new()
}

/// Monitor that records every event for assertions.
#[derive(Default)]
pub struct RecordingMonitor {
    pub blank: Mutex<Vec<(LoanType, Term)>>,
    pub breaches: Mutex<Vec<(LoanType, Term)>>,
}

impl RateMonitor for RecordingMonitor {
    fn blank_rate(&self, loan_type: LoanType, term: Term) {
        self.blank.lock().unwrap().push((loan_type, term));
    }

    fn threshold_breach(&self, loan_type: LoanType, term: Term, _band: &RateBandResult) {
        self.breaches.lock().unwrap().push((loan_type, term));
    }
}
