//! # CNC Quote Geometry
//!
//! Converts the primitives extracted from a 2D drawing into the scalar
//! measurements the cost estimator works from.
//!
//! ## Components
//!
//! - **Primitives**: lines, arcs, circles and polylines as a closed enum
//! - **Bounds**: axis-aligned bounding boxes over every point on the geometry
//! - **Measurer**: total cutting length, bounding area and entity counts
//! - **Document**: JSON primitive lists handed over by a drawing parser
//!
//! ## Arc convention
//!
//! Arcs run counter-clockwise from `start_angle` to `end_angle`, in degrees.
//! The sweep is `(end_angle - start_angle) mod 360`, so swapping the two
//! angles selects the complementary arc and equal angles give an empty arc.

pub mod bounds;
pub mod document;
pub mod measure;
pub mod primitive;

pub use bounds::BoundingBox;
pub use document::{load_primitives, parse_primitives, DocumentError, PrimitiveDocument};
pub use measure::{measure, EntityCounts, GeometrySummary};
pub use primitive::{arc_sweep_degrees, Primitive, PrimitiveKind};

pub use cncquote_core::{GeometryError, GeometryFault, Point2D};
