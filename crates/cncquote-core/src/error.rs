//! Error handling for CNC Quote
//!
//! Provides error types for every stage of the quoting pipeline:
//! - Geometry errors (malformed or degenerate primitives)
//! - Input errors (request parameters outside their domain)
//! - Material errors (profiles violating their own invariants)
//! - Catalog errors (material lookup and registration)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Every error is terminal for the request that raised it.

use thiserror::Error;

/// Reason a single primitive failed validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryFault {
    /// Arc or circle radius is zero or negative
    #[error("radius must be positive, got {radius}")]
    NonPositiveRadius {
        /// The offending radius.
        radius: f64,
    },

    /// Polyline has fewer than two vertices
    #[error("polyline needs at least 2 vertices, got {count}")]
    TooFewVertices {
        /// The number of vertices supplied.
        count: usize,
    },

    /// A coordinate, radius or angle is NaN or infinite
    #[error("{field} is not a finite number")]
    NonFinite {
        /// Name of the non-finite field.
        field: &'static str,
    },
}

/// Geometry error
///
/// Raised by the measurer when any primitive fails its structural
/// invariant. Identifies the primitive by its position in the input.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid {kind} at index {index}: {fault}")]
pub struct GeometryError {
    /// Position of the offending primitive in the input sequence.
    pub index: usize,
    /// Primitive kind name ("line", "arc", ...).
    pub kind: &'static str,
    /// Why the primitive was rejected.
    pub fault: GeometryFault,
}

/// Request parameter outside its valid domain
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid input '{parameter}': {value} ({reason})")]
pub struct InvalidInputError {
    /// The parameter name.
    pub parameter: String,
    /// The rejected value.
    pub value: f64,
    /// What the parameter must satisfy.
    pub reason: String,
}

impl InvalidInputError {
    pub fn new(parameter: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            value,
            reason: reason.into(),
        }
    }
}

/// Material profile violating its own invariants
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Material '{material}' has invalid {field}: {value} ({reason})")]
pub struct InvalidMaterialError {
    /// The material name.
    pub material: String,
    /// The offending profile field.
    pub field: String,
    /// The rejected value.
    pub value: f64,
    /// What the field must satisfy.
    pub reason: String,
}

/// Estimation error type
///
/// Returned by the cost estimator. Input is checked before the material.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// Request parameter is invalid
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// Material profile is invalid
    #[error(transparent)]
    InvalidMaterial(#[from] InvalidMaterialError),
}

/// Material catalog error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No profile is registered under the requested name
    #[error("Unknown material '{name}' (available: {available})")]
    UnknownMaterial {
        /// The requested material name.
        name: String,
        /// Comma separated list of known names.
        available: String,
    },

    /// A profile was rejected when added to the catalog
    #[error(transparent)]
    InvalidProfile(#[from] InvalidMaterialError),
}
