use crate::cartesian::{CartesianPoint2d, Point2d};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Minimum x.
    pub x_min: f64,
    /// Minimum y.
    pub y_min: f64,
    /// Maximum x.
    pub x_max: f64,
    /// Maximum y.
    pub y_max: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest rectangle containing all the points, or `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = f64> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let mut rect = Self::new(first.x(), first.y(), first.x(), first.y());

        for p in points {
            rect.x_min = rect.x_min.min(p.x());
            rect.y_min = rect.y_min.min(p.y());
            rect.x_max = rect.x_max.max(p.x());
            rect.y_max = rect.y_max.max(p.y());
        }

        Some(rect)
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Larger of the width and height.
    pub fn extent(&self) -> f64 {
        self.width().max(self.height())
    }

    /// Corner with the minimum coordinates.
    pub fn min_corner(&self) -> Point2d {
        Point2d::new(self.x_min, self.y_min)
    }

    /// Returns true if the rectangles overlap after both were expanded by `tolerance`.
    pub fn intersects(&self, other: &Self, tolerance: f64) -> bool {
        self.x_min - tolerance <= other.x_max
            && other.x_min - tolerance <= self.x_max
            && self.y_min - tolerance <= other.y_max
            && other.y_min - tolerance <= self.y_max
    }
}
