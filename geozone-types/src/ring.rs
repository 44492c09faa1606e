//! Single closed ring of planar points, the operand and result type of the [`kernel`](crate::kernel).
//!
//! A `Ring` stores each vertex once: the segment from the last vertex back to the first one is implied, and the first
//! point is never repeated at the end. Use [`Ring::closed_points`] to get the explicitly closed sequence that is
//! handed out to consumers.

use crate::cartesian::{
    cross, CartesianPoint2d, CartesianPoint2dFloat, Point2d, Rect, Segment, Winding,
};
use crate::error::GeometryError;
use ahash::{HashSet, HashSetExt};
use nalgebra::Vector2;

/// Tolerance of the kernel operations relative to the size of the operands.
pub(crate) const RELATIVE_TOLERANCE: f64 = 1e-9;

/// Rings with the area smaller than this fraction of the squared extent are considered degenerate.
const ZERO_AREA_THRESHOLD: f64 = 1e-12;

/// Position of a point relative to a ring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PointLocation {
    /// Strictly inside the ring.
    Inside,
    /// Strictly outside the ring.
    Outside,
    /// On one of the ring's segments (within tolerance).
    Boundary,
}

/// Simple closed ring of planar points. See module documentation for details.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point2d>,
}

impl Ring {
    /// Validates and normalizes a sequence of points into a ring.
    ///
    /// The sequence may be open or explicitly closed (first point repeated at the end), and may have any orientation.
    /// Consecutive duplicate points are collapsed. Orientation is preserved, use [`Ring::oriented`] to change it.
    ///
    /// Fails if any coordinate is not finite, if there are fewer than 3 distinct points, or if all the points lie on
    /// one line.
    pub fn new(points: impl IntoIterator<Item = Point2d>) -> Result<Self, GeometryError> {
        let mut normalized: Vec<Point2d> = Vec::new();
        for point in points {
            if !point.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate {
                    x: point.x,
                    y: point.y,
                });
            }

            if normalized.last() != Some(&point) {
                normalized.push(point);
            }
        }

        while normalized.len() > 1 && normalized.first() == normalized.last() {
            normalized.pop();
        }

        let mut distinct = HashSet::with_capacity(normalized.len());
        for point in &normalized {
            distinct.insert(point_key(point));
        }
        if distinct.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                count: distinct.len(),
            });
        }

        let ring = Self { points: normalized };
        let extent = ring.bounding_rect().extent();
        if ring.area_signed().abs() <= ZERO_AREA_THRESHOLD * extent * extent {
            return Err(GeometryError::ZeroArea);
        }

        Ok(ring)
    }

    /// Creates a ring from points that are known to form a valid ring.
    pub(crate) fn from_raw(points: Vec<Point2d>) -> Self {
        Self { points }
    }

    /// Vertices of the ring, each one included once.
    pub fn points(&self) -> &[Point2d] {
        &self.points
    }

    /// Number of distinct vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A valid ring is never empty, but the method is here for consistency with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Vertices of the ring with the first vertex repeated at the end.
    pub fn closed_points(&self) -> Vec<Point2d> {
        self.iter_points_closing().copied().collect()
    }

    /// Iterates over the vertices, repeating the first one at the end.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &Point2d> {
        self.points.iter().chain(self.points.first())
    }

    /// Iterates over the segments of the ring, including the closing one.
    pub fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Point2d>> {
        self.points
            .iter()
            .zip(self.points.iter().cycle().skip(1))
            .map(|(a, b)| Segment(a, b))
    }

    /// Signed area of the ring: positive for counterclockwise rings, negative for clockwise ones.
    pub fn area_signed(&self) -> f64 {
        let Some(origin) = self.points.first() else {
            return 0.0;
        };

        let doubled: f64 = self
            .points
            .windows(2)
            .map(|pair| cross(origin, &pair[0], &pair[1]))
            .sum();

        doubled / 2.0
    }

    /// Orientation of the ring.
    pub fn winding(&self) -> Winding {
        Winding::from_signed_area(self.area_signed())
    }

    /// Returns the ring with the requested orientation. The first vertex stays the same.
    pub fn oriented(mut self, winding: Winding) -> Self {
        if self.winding() != winding {
            self.points[1..].reverse();
        }

        self
    }

    /// Bounding rectangle of the ring.
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_points(self.points.iter()).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0))
    }

    /// Default tolerance for boundary checks against this ring.
    pub fn tolerance(&self) -> f64 {
        tolerance_for(&self.bounding_rect())
    }

    /// Determines where the point is relative to the ring. Points closer than `tolerance` to any of the segments are
    /// reported as [`PointLocation::Boundary`].
    pub fn locate(
        &self,
        point: &impl CartesianPoint2d<Num = f64>,
        tolerance: f64,
    ) -> PointLocation {
        let tolerance_sq = tolerance * tolerance;
        if self
            .iter_segments()
            .any(|segment| segment.distance_to_point_sq(point) <= tolerance_sq)
        {
            return PointLocation::Boundary;
        }

        if self.winding_number(point) != 0 {
            PointLocation::Inside
        } else {
            PointLocation::Outside
        }
    }

    /// Returns true if the point is inside the ring or on its boundary.
    pub fn contains_point(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool {
        self.locate(point, self.tolerance()) != PointLocation::Outside
    }

    /// Winding number of the ring around the point. Zero means the point is outside.
    ///
    /// Points exactly on the boundary get an arbitrary answer, so use [`Ring::locate`] when this matters.
    pub(crate) fn winding_number(&self, point: &impl CartesianPoint2d<Num = f64>) -> i32 {
        let y = point.y();
        let mut wn = 0;
        for Segment(a, b) in self.iter_segments() {
            if a.y <= y {
                if b.y > y && cross(a, b, point) > 0.0 {
                    wn += 1;
                }
            } else if b.y <= y && cross(a, b, point) < 0.0 {
                wn -= 1;
            }
        }

        wn
    }

    /// Moves all the vertices by the vector.
    pub(crate) fn translate(&self, offset: Vector2<f64>) -> Self {
        Self {
            points: self.points.iter().map(|p| *p + offset).collect(),
        }
    }
}

pub(crate) fn tolerance_for(rect: &Rect) -> f64 {
    RELATIVE_TOLERANCE * rect.extent().max(1.0)
}

/// Hashable key of a point. Negative zero is mapped to zero so that equal points always have equal keys.
pub(crate) fn point_key(point: &Point2d) -> (u64, u64) {
    ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())
}
