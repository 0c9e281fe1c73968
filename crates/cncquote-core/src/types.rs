//! Basic geometric value types

use serde::{Deserialize, Serialize};

/// A point on the drawing plane, in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::new(4.0, 6.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_finite_check() {
        assert!(Point2D::new(0.0, -3.5).is_finite());
        assert!(!Point2D::new(f64::NAN, 0.0).is_finite());
        assert!(!Point2D::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_from_tuple_and_display() {
        let p: Point2D = (1.5, -2.0).into();
        assert_eq!(p, Point2D::new(1.5, -2.0));
        assert_eq!(p.to_string(), "(1.500, -2.000)");
    }
}
