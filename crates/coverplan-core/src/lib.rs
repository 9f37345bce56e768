//! # coverplan-core - Core Domain Types
//!
//! Foundation crate for coverplan. Provides the calculator model, the chart
//! projection, the lead form and payload, currency formatting and error
//! handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Calculator (`calculator`)
//! - [`CalculatorState`] - The two clamped source numbers
//! - [`SliderRange`] - Closed range with a step and fill-ratio math
//! - [`CalculationData`] - Snapshot handed to the quote modal
//!
//! ### Projection (`projection`)
//! - [`project()`] - Cumulative coverage points for the chart
//! - [`ProjectionCache`] - Memoised projection keyed on the inputs
//! - [`AxisScale`] - Value-axis ticks
//!
//! ### Leads (`lead`)
//! - [`LeadForm`], [`LeadField`], [`SmokerStatus`] - Quote form model
//! - [`QuotePayload`] - Wire shape delivered to a lead sink
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use coverplan_core::prelude::*;
//! ```

pub mod calculator;
pub mod error;
pub mod format;
pub mod lead;
pub mod logging;
pub mod prelude;
pub mod projection;
pub mod types;

pub use calculator::{
    total_protection, CalculationData, CalculatorState, DerivedTotals, Slider, SliderRange,
    DEFAULT_MONTHLY_AMOUNT, DEFAULT_YEARS, MONTHLY_AMOUNT, YEARS,
};
pub use error::{Error, Result, ResultExt};
pub use format::{
    format_axis_label, format_currency, format_currency_precise, format_duration_tooltip,
    format_year_tick, format_years,
};
pub use lead::{LeadField, LeadForm, QuotePayload, SmokerStatus, GENDER_SUGGESTIONS};
pub use projection::{project, AxisScale, ChartPoint, ProjectionCache};
pub use types::AppPhase;
