//! Administrative per-term trading status.

use serde::{Deserialize, Serialize};

/// Administrative flags for one (term, loan type) pair.
///
/// Maintained outside this engine; consumed read-only. A term with
/// `trade_status` off is past its trading window for the day, one with
/// `display_status` off is hidden entirely - either disables the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTermStatus {
    /// Tradeable today.
    pub trade_status: bool,
    /// Visible today.
    pub display_status: bool,
}

impl LoanTermStatus {
    /// Both flags on - the normal state during trading hours.
    #[must_use]
    pub fn active() -> Self {
        Self {
            trade_status: true,
            display_status: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active() {
        let status = LoanTermStatus::active();
        assert!(status.trade_status);
        assert!(status.display_status);
    }

    #[test]
    fn test_serde() {
        let json = r#"{"trade_status":true,"display_status":false}"#;
        let status: LoanTermStatus = serde_json::from_str(json).unwrap();
        assert!(status.trade_status);
        assert!(!status.display_status);
    }
}
