//! Error types for the Advance core crate.

use thiserror::Error;

/// A specialized Result type for Advance core operations.
pub type AdvanceResult<T> = Result<T, AdvanceError>;

/// The main error type for Advance core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvanceError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid term or term encoding.
    #[error("Invalid term: {reason}")]
    InvalidTerm {
        /// Description of what's invalid.
        reason: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl AdvanceError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid term error.
    #[must_use]
    pub fn invalid_term(reason: impl Into<String>) -> Self {
        Self::InvalidTerm {
            reason: reason.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}
