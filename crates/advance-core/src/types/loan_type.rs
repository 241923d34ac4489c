//! Loan type (collateral class) enumeration.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Collateral class an advance rate is quoted against.
///
/// This is a closed set: the market-data provider publishes one rate block
/// per class, and administrative configuration is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoanType {
    /// Whole-loan collateral.
    WholeLoan,
    /// Agency collateral.
    Agency,
    /// AAA-rated collateral.
    Aaa,
    /// AA-rated collateral.
    Aa,
}

impl LoanType {
    /// All loan types, in canonical order.
    pub const ALL: [LoanType; 4] = [
        LoanType::WholeLoan,
        LoanType::Agency,
        LoanType::Aaa,
        LoanType::Aa,
    ];

    /// The long-form name the market-data provider uses for this class.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            LoanType::WholeLoan => "Whole Loan Collateral",
            LoanType::Agency => "Agency Collateral",
            LoanType::Aaa => "AAA Rated Collateral",
            LoanType::Aa => "AA Rated Collateral",
        }
    }

    /// Inverts [`display_name`](Self::display_name): maps a provider
    /// long-form name back to the canonical identifier.
    #[must_use]
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|lt| lt.display_name() == name)
    }

    /// The identifier used in the wire format and configuration stores.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            LoanType::WholeLoan => "whole_loan",
            LoanType::Agency => "agency",
            LoanType::Aaa => "aaa",
            LoanType::Aa => "aa",
        }
    }

    /// Parses a wire-format identifier.
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|lt| lt.wire_name() == name)
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl Serialize for LoanType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for LoanType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        LoanType::from_wire_name(&s)
            .ok_or_else(|| D::Error::custom(format!("unknown loan type: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_round_trip() {
        for lt in LoanType::ALL {
            assert_eq!(LoanType::from_display_name(lt.display_name()), Some(lt));
        }
        assert_eq!(LoanType::from_display_name("B Rated Collateral"), None);
    }

    #[test]
    fn test_wire_name_round_trip() {
        for lt in LoanType::ALL {
            assert_eq!(LoanType::from_wire_name(lt.wire_name()), Some(lt));
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&LoanType::WholeLoan).unwrap();
        assert_eq!(json, "\"whole_loan\"");
        let parsed: LoanType = serde_json::from_str("\"aaa\"").unwrap();
        assert_eq!(parsed, LoanType::Aaa);
        assert!(serde_json::from_str::<LoanType>("\"junk\"").is_err());
    }
}
