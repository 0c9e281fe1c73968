//! # CNC Quote Core
//!
//! Core types and utilities shared by the CNC Quote crates.
//! Provides the fundamental abstractions for 2D points, error
//! handling, unit conversion and the material catalog.

pub mod data;
pub mod error;
pub mod types;
pub mod units;

pub use data::materials::{standard_catalog, MaterialCatalog, MaterialId, MaterialProfile};

pub use error::{
    CatalogError, EstimateError, GeometryError, GeometryFault, InvalidInputError,
    InvalidMaterialError,
};

pub use types::Point2D;

pub use units::{MeasurementSystem, UnitError};
