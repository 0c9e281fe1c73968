//! Geometry measurer
//!
//! Reduces a drawing's primitives to the measurements that drive the cost
//! estimate. Measurement is all-or-nothing: the first invalid primitive
//! fails the whole call and no partial summary is produced.

use cncquote_core::{GeometryError, GeometryFault};
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::primitive::{Primitive, PrimitiveKind};

/// Number of primitives of each kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCounts {
    pub lines: usize,
    pub arcs: usize,
    pub circles: usize,
    pub polylines: usize,
}

impl EntityCounts {
    fn record(&mut self, kind: PrimitiveKind) {
        match kind {
            PrimitiveKind::Line => self.lines += 1,
            PrimitiveKind::Arc => self.arcs += 1,
            PrimitiveKind::Circle => self.circles += 1,
            PrimitiveKind::Polyline => self.polylines += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.lines + self.arcs + self.circles + self.polylines
    }
}

/// Scalar measurements of a drawing
///
/// Lengths are millimetres, areas square millimetres.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometrySummary {
    /// Sum of the cutting length of every primitive
    pub total_cutting_length: f64,
    /// Number of primitives measured
    pub primitive_count: usize,
    /// Area of the axis-aligned box around all geometry.
    /// A proxy for stock consumption, not the true part area.
    pub bounding_area: f64,
    /// Per-kind breakdown of `primitive_count`
    #[serde(default)]
    pub counts: EntityCounts,
    /// Box around all geometry, `None` for an empty drawing
    #[serde(default)]
    pub bounds: Option<BoundingBox>,
}

impl GeometrySummary {
    /// Summary of a drawing with no geometry
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.primitive_count == 0
    }
}

/// Measure a sequence of primitives
///
/// An empty sequence yields an all-zero summary.
pub fn measure(primitives: &[Primitive]) -> Result<GeometrySummary, GeometryError> {
    let mut total_cutting_length = 0.0;
    let mut counts = EntityCounts::default();
    let mut bounds: Option<BoundingBox> = None;

    for (index, primitive) in primitives.iter().enumerate() {
        let kind = primitive.kind();
        let reject = |fault: GeometryFault| {
            tracing::warn!(index, kind = kind.as_str(), %fault, "Rejected primitive");
            GeometryError {
                index,
                kind: kind.as_str(),
                fault,
            }
        };
        primitive.validate().map_err(reject)?;

        // Finite inputs can still overflow once squared or summed
        let length = primitive.length();
        if !length.is_finite() {
            return Err(reject(GeometryFault::NonFinite { field: "length" }));
        }
        total_cutting_length += length;
        if !total_cutting_length.is_finite() {
            return Err(reject(GeometryFault::NonFinite {
                field: "total_cutting_length",
            }));
        }

        counts.record(kind);
        if let Some(bb) = primitive.bounds() {
            let merged = match bounds {
                Some(acc) => acc.union(bb),
                None => bb,
            };
            if !merged.area().is_finite() {
                return Err(reject(GeometryFault::NonFinite {
                    field: "bounding_area",
                }));
            }
            bounds = Some(merged);
        }
    }

    let summary = GeometrySummary {
        total_cutting_length,
        primitive_count: counts.total(),
        bounding_area: bounds.map_or(0.0, |bb| bb.area()),
        counts,
        bounds,
    };

    tracing::debug!(
        primitives = summary.primitive_count,
        cutting_length_mm = summary.total_cutting_length,
        bounding_area_mm2 = summary.bounding_area,
        "Measured geometry"
    );

    Ok(summary)
}
