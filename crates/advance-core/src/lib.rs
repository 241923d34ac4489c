//! # Advance Core
//!
//! Core types and calendar logic for the Advance rate engine.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Types**: `Date`, `LoanType`, `Term`, market data and rate band records
//! - **Calendars**: business day calendars, bounded rolling, maturity resolution
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: closed enums for loan types and terms keep the provider
//!   document's loose strings at the boundary
//! - **Explicit Over Implicit**: all fallibility is in `Result` returns;
//!   band math and date arithmetic never panic on typed inputs
//!
//! ## Example
//!
//! ```rust
//! use advance_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let config = RateBandConfig {
//!     low_band_off_bp: 50,
//!     low_band_warn_bp: 25,
//!     high_band_warn_bp: 25,
//!     high_band_off_bp: 50,
//! };
//! let result = RateBandResult::evaluate(dec!(1.40), dec!(2.00), &config);
//! assert!(result.min_threshold_exceeded);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendars;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        next_business_day, resolve_maturity_date, Calendar, HolidayCalendar, RollDirection,
        WeekendCalendar,
    };
    pub use crate::error::{AdvanceError, AdvanceResult};
    pub use crate::types::{
        Date, FrequencyUnit, LoanTermStatus, LoanType, MarketDataPoint, PaymentConvention,
        RateBandConfig, RateBandResult, Snapshot, Term,
    };
}

// Re-export commonly used types at crate root
pub use error::{AdvanceError, AdvanceResult};
pub use types::{Date, LoanType, Term};
