//! Drawing primitives
//!
//! The closed set of 2D shapes a drawing is reduced to before quoting.
//! Coordinates are millimetres, angles are degrees.

use cncquote_core::{GeometryFault, Point2D};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::bounds::BoundingBox;

/// One atomic 2D shape extracted from a drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    /// Straight segment
    Line { start: Point2D, end: Point2D },
    /// Circular arc running counter-clockwise from `start_angle` to `end_angle`
    Arc {
        center: Point2D,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    /// Full circle
    Circle { center: Point2D, radius: f64 },
    /// Chain of straight segments through `vertices`
    Polyline {
        vertices: Vec<Point2D>,
        #[serde(default)]
        closed: bool,
    },
}

/// Primitive kind without its geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Line,
    Arc,
    Circle,
    Polyline,
}

impl PrimitiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Arc => "arc",
            Self::Circle => "circle",
            Self::Polyline => "polyline",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counter-clockwise sweep from `start_angle` to `end_angle`, in `[0, 360)` degrees
///
/// Reversing the angles yields the complementary sweep; equal angles yield 0.
pub fn arc_sweep_degrees(start_angle: f64, end_angle: f64) -> f64 {
    (end_angle - start_angle).rem_euclid(360.0)
}

impl Primitive {
    pub fn line(start: Point2D, end: Point2D) -> Self {
        Self::Line { start, end }
    }

    pub fn arc(center: Point2D, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    pub fn circle(center: Point2D, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    pub fn polyline(vertices: Vec<Point2D>, closed: bool) -> Self {
        Self::Polyline { vertices, closed }
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Line { .. } => PrimitiveKind::Line,
            Self::Arc { .. } => PrimitiveKind::Arc,
            Self::Circle { .. } => PrimitiveKind::Circle,
            Self::Polyline { .. } => PrimitiveKind::Polyline,
        }
    }

    /// Check the structural invariant of this primitive
    pub fn validate(&self) -> Result<(), GeometryFault> {
        match self {
            Self::Line { start, end } => {
                require_finite_point(start, "start")?;
                require_finite_point(end, "end")
            }
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                require_finite_point(center, "center")?;
                require_positive_radius(*radius)?;
                require_finite(*start_angle, "start_angle")?;
                require_finite(*end_angle, "end_angle")
            }
            Self::Circle { center, radius } => {
                require_finite_point(center, "center")?;
                require_positive_radius(*radius)
            }
            Self::Polyline { vertices, .. } => {
                if vertices.len() < 2 {
                    return Err(GeometryFault::TooFewVertices {
                        count: vertices.len(),
                    });
                }
                vertices
                    .iter()
                    .try_for_each(|v| require_finite_point(v, "vertex"))
            }
        }
    }

    /// Cutting length along the primitive, in millimetres
    ///
    /// Only meaningful for a primitive that passed [`Primitive::validate`].
    pub fn length(&self) -> f64 {
        match self {
            Self::Line { start, end } => start.distance_to(end),
            Self::Arc {
                radius,
                start_angle,
                end_angle,
                ..
            } => radius * arc_sweep_degrees(*start_angle, *end_angle).to_radians(),
            Self::Circle { radius, .. } => 2.0 * PI * radius,
            Self::Polyline { vertices, closed } => {
                let open: f64 = vertices
                    .windows(2)
                    .map(|pair| pair[0].distance_to(&pair[1]))
                    .sum();
                match (closed, vertices.first(), vertices.last()) {
                    (true, Some(first), Some(last)) => open + last.distance_to(first),
                    _ => open,
                }
            }
        }
    }

    /// Bounding box of every point on the primitive
    ///
    /// `None` only for a polyline without vertices.
    pub fn bounds(&self) -> Option<BoundingBox> {
        match self {
            Self::Line { start, end } => BoundingBox::from_points([*start, *end]),
            Self::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                let sweep = arc_sweep_degrees(*start_angle, *end_angle);
                let endpoints = [
                    point_at(center, *radius, *start_angle),
                    point_at(center, *radius, start_angle + sweep),
                ];
                // Quadrant extremes crossed by the sweep
                let extremes = (0..4u8).filter_map(|quadrant| {
                    let angle = f64::from(quadrant) * 90.0;
                    ((angle - start_angle).rem_euclid(360.0) <= sweep)
                        .then(|| cardinal_point(center, *radius, quadrant))
                });
                BoundingBox::from_points(endpoints.into_iter().chain(extremes))
            }
            Self::Circle { center, radius } => BoundingBox::from_points([
                Point2D::new(center.x - radius, center.y - radius),
                Point2D::new(center.x + radius, center.y + radius),
            ]),
            Self::Polyline { vertices, .. } => BoundingBox::from_points(vertices.iter().copied()),
        }
    }
}

fn require_finite(value: f64, field: &'static str) -> Result<(), GeometryFault> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryFault::NonFinite { field })
    }
}

fn require_finite_point(p: &Point2D, field: &'static str) -> Result<(), GeometryFault> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(GeometryFault::NonFinite { field })
    }
}

fn require_positive_radius(radius: f64) -> Result<(), GeometryFault> {
    require_finite(radius, "radius")?;
    if radius <= 0.0 {
        return Err(GeometryFault::NonPositiveRadius { radius });
    }
    Ok(())
}

fn point_at(center: &Point2D, radius: f64, angle_deg: f64) -> Point2D {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point2D::new(center.x + radius * cos, center.y + radius * sin)
}

// Exact points at 0, 90, 180 and 270 degrees
fn cardinal_point(center: &Point2D, radius: f64, quadrant: u8) -> Point2D {
    match quadrant {
        0 => Point2D::new(center.x + radius, center.y),
        1 => Point2D::new(center.x, center.y + radius),
        2 => Point2D::new(center.x - radius, center.y),
        _ => Point2D::new(center.x, center.y - radius),
    }
}
