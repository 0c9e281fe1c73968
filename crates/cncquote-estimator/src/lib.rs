//! # CNC Quote Estimator
//!
//! Turns geometry measurements into machining time and cost.
//!
//! - **Estimator**: the cost formula over a summary, a material and a thickness
//! - **Quote**: request/quotation records handed to document renderers
//!
//! Every value is computed at full floating point precision. Rounding for
//! display belongs to whoever renders the result.

pub mod estimator;
pub mod quote;

pub use estimator::{estimate, CostBreakdown};
pub use quote::{QuoteRequest, Quotation, DEFAULT_VALIDITY_DAYS};

pub use cncquote_core::{EstimateError, InvalidInputError, InvalidMaterialError};
