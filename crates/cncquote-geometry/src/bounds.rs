//! Axis-aligned bounding boxes

use cncquote_core::Point2D;
use serde::{Deserialize, Serialize};

/// Smallest axis-aligned rectangle containing a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point2D,
    pub max: Point2D,
}

impl BoundingBox {
    /// Degenerate box around a single point
    pub fn from_point(p: Point2D) -> Self {
        Self { min: p, max: p }
    }

    /// Box around every point of an iterator, `None` when it is empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |bb, p| bb.including(p)))
    }

    /// Grow the box to include `p`
    pub fn including(self, p: Point2D) -> Self {
        Self {
            min: Point2D::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2D::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Smallest box containing both boxes
    pub fn union(self, other: BoundingBox) -> Self {
        self.including(other.min).including(other.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}
