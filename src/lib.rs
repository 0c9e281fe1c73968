//! # CNC Quote
//!
//! Machining time and cost estimates for 2D CNC parts.
//!
//! ## Architecture
//!
//! CNC Quote is organized as a workspace with multiple crates:
//!
//! 1. **cncquote-core** - Points, error types, unit conversion, material catalog
//! 2. **cncquote-geometry** - Drawing primitives and the geometry measurer
//! 3. **cncquote-estimator** - Cost formula, quote requests and quotations
//! 4. **cncquote-settings** - Configuration files and material catalog files
//! 5. **cncquote** - Command line binary and text rendering
//!
//! ## Flow
//!
//! A JSON primitive list is measured into a [`GeometrySummary`], combined
//! with a [`MaterialProfile`] from the catalog and a stock thickness, and
//! estimated into a [`CostBreakdown`] wrapped in a [`Quotation`]. Only the
//! renderer rounds.

pub mod cli;
pub mod commands;
pub mod report;

pub use cncquote_core::{
    CatalogError, EstimateError, GeometryError, InvalidInputError, InvalidMaterialError,
    MaterialCatalog, MaterialProfile, MeasurementSystem, Point2D,
};
pub use cncquote_estimator::{estimate, CostBreakdown, QuoteRequest, Quotation};
pub use cncquote_geometry::{
    load_primitives, measure, parse_primitives, BoundingBox, EntityCounts, GeometrySummary,
    Primitive,
};
pub use cncquote_settings::{Config, QuoteSettings, SettingsError};

/// Version string shown by `--version`
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Initialize logging
///
/// Logs go to stderr so stdout carries only the rendered quote. `RUST_LOG`
/// takes precedence; otherwise the level is `warn`, or `debug` when verbose.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
