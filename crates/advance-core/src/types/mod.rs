//! Domain types for the advance rate engine.
//!
//! This module provides type-safe representations of the engine's concepts:
//!
//! - [`Date`]: Calendar date
//! - [`LoanType`]: Collateral class a rate is quoted against
//! - [`Term`] / [`FrequencyUnit`]: Advance terms and their provider encoding
//! - [`MarketDataPoint`]: One normalized rate record
//! - [`RateBandConfig`] / [`RateBandResult`]: Band configuration and evaluation
//! - [`LoanTermStatus`]: Administrative trade/display flags

mod bands;
mod date;
mod loan_type;
mod market;
mod status;
mod term;

pub use bands::{RateBandConfig, RateBandResult};
pub use date::Date;
pub use loan_type::LoanType;
pub use market::{MarketDataPoint, PaymentConvention, Snapshot};
pub use status::LoanTermStatus;
pub use term::{FrequencyUnit, Term};
