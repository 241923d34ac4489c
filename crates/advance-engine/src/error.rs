//! Error types for the Advance engine crate.

use advance_core::{AdvanceError, LoanType, Term};
use thiserror::Error;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// The main error type for engine operations.
///
/// Every variant is fatal for the enclosing request: the engine never
/// returns a partially enriched summary. Recoverable conditions (blank
/// rates, unmapped periods) are not errors - they flow through the
/// monitoring hook or are skipped during normalization.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Upstream data is missing or incomplete - no partial summary.
    #[error("Upstream unavailable: {reason}")]
    UpstreamUnavailable {
        /// Description of what was missing.
        reason: String,
    },

    /// A maturity or spot text in the provider document failed to parse.
    #[error("Malformed date in market data: {text}")]
    MalformedDate {
        /// The text that failed to parse.
        text: String,
    },

    /// A canonical term has no band config or trading status entry.
    #[error("Configuration gap: {reason}")]
    ConfigurationGap {
        /// Description of the missing configuration.
        reason: String,
    },

    /// Error from core date or calendar operations.
    #[error(transparent)]
    Core(#[from] AdvanceError),
}

impl EngineError {
    /// Creates an upstream-unavailable error.
    #[must_use]
    pub fn upstream(reason: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            reason: reason.into(),
        }
    }

    /// Creates an upstream-unavailable error for a missing snapshot entry.
    #[must_use]
    pub fn missing_term(loan_type: LoanType, term: Term, snapshot: &str) -> Self {
        Self::UpstreamUnavailable {
            reason: format!("no {snapshot} rate for {loan_type} {term}"),
        }
    }

    /// Creates a malformed-date error.
    #[must_use]
    pub fn malformed_date(text: impl Into<String>) -> Self {
        Self::MalformedDate { text: text.into() }
    }

    /// Creates a configuration-gap error.
    #[must_use]
    pub fn configuration_gap(reason: impl Into<String>) -> Self {
        Self::ConfigurationGap {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_term_message() {
        let err = EngineError::missing_term(LoanType::Agency, Term::Month6, "live");
        assert_eq!(
            err.to_string(),
            "Upstream unavailable: no live rate for agency 6month"
        );
    }

    #[test]
    fn test_core_error_is_transparent() {
        let core = AdvanceError::calendar_error("no business day within 14 days of 2026-08-08");
        let err: EngineError = core.clone().into();
        assert_eq!(err.to_string(), core.to_string());
    }
}
