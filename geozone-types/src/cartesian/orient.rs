use crate::cartesian::CartesianPoint2d;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise (right turn).
    Clockwise,
    /// Counterclockwise (left turn).
    Counterclockwise,
    /// All three points are on one line.
    Collinear,
}

impl Orientation {
    /// Determines orientation of the turn `p -> q -> r`.
    pub fn triplet(
        p: &impl CartesianPoint2d<Num = f64>,
        q: &impl CartesianPoint2d<Num = f64>,
        r: &impl CartesianPoint2d<Num = f64>,
    ) -> Self {
        match cross(p, q, r) {
            v if v > 0.0 => Self::Counterclockwise,
            v if v < 0.0 => Self::Clockwise,
            _ => Self::Collinear,
        }
    }
}

/// Z component of the cross product `(q - p) x (r - p)`.
///
/// Positive for a left turn, negative for a right turn, zero for collinear points. The absolute value is twice the area
/// of the triangle.
pub(crate) fn cross(
    p: &impl CartesianPoint2d<Num = f64>,
    q: &impl CartesianPoint2d<Num = f64>,
    r: &impl CartesianPoint2d<Num = f64>,
) -> f64 {
    (q.x() - p.x()) * (r.y() - p.y()) - (q.y() - p.y()) * (r.x() - p.x())
}

/// Direction in which the vertices of a closed ring go around its interior.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    CounterClockwise,
}

impl Winding {
    /// Winding of a ring with the given signed area.
    pub fn from_signed_area(area: f64) -> Self {
        if area < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}
