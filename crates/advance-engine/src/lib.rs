//! # Advance Engine
//!
//! Market-data normalization, rate banding, and summary assembly for the
//! Advance rate engine.
//!
//! The engine is purely computational: callers retrieve the provider
//! snapshots, holiday set, and administrative configuration, then hand fully
//! materialized inputs to [`summary::SummaryAssembler`]. The pipeline:
//!
//! 1. [`document`] - typed model of the provider's loose document format
//! 2. [`normalizer`] - document walk producing one record per (type, term)
//! 3. [`summary`] - merges snapshots with configuration into the final
//!    summary, using the band math and calendars from `advance-core`
//!
//! Data-quality conditions and band breaches are reported through the
//! [`monitor::RateMonitor`] hook; everything fatal is an [`error::EngineError`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod disablement;
pub mod document;
pub mod error;
pub mod monitor;
pub mod normalizer;
pub mod summary;

pub use disablement::is_disabled;
pub use document::MarketDocument;
pub use error::{EngineError, EngineResult};
pub use monitor::{NoopMonitor, RateMonitor, TracingMonitor};
pub use normalizer::normalize;
pub use summary::{RateSummary, SummaryAssembler, SummaryEntry, SummaryRequest};
