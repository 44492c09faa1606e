use crate::cartesian::{CartesianPoint2d, Point2d};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

/// Common point of two segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentHit {
    /// The common point.
    pub point: Point2d,
    /// Position of the point along the first segment, `0.0` at its start and `1.0` at its end.
    pub t_self: f64,
    /// Position of the point along the second segment.
    pub t_other: f64,
}

impl<'a, P: CartesianPoint2d<Num = f64>> Segment<'a, P> {
    /// Shortest euclidean distance (squared) between a point and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the returned value is the squared length
    ///   of the normal
    /// * if the normal from the point to the segment ends outside of the segment, the returned value is the smaller one
    ///   of the distances between the point and the segment's endpoints
    pub fn distance_to_point_sq<Point: CartesianPoint2d<Num = f64>>(&self, point: &Point) -> f64 {
        if self.0.equal(self.1) {
            return self.0.distance_sq(point);
        }

        let ds = self.1.sub(self.0);
        let dp = point.sub(self.0);
        let ds_len = ds.x * ds.x + ds.y * ds.y;

        let r = (dp.x * ds.x + dp.y * ds.y) / ds_len;
        if r <= 0.0 {
            self.0.distance_sq(point)
        } else if r >= 1.0 {
            self.1.distance_sq(point)
        } else {
            let s = (dp.y * ds.x - dp.x * ds.y) / ds_len;
            (s * s) * ds_len
        }
    }

    /// Position of the orthogonal projection of the point onto the segment, clamped to `[0, 1]`.
    pub fn param_of<Point: CartesianPoint2d<Num = f64>>(&self, point: &Point) -> f64 {
        let ds = self.1.sub(self.0);
        let ds_len = ds.x * ds.x + ds.y * ds.y;
        if ds_len == 0.0 {
            return 0.0;
        }

        let dp = point.sub(self.0);
        ((dp.x * ds.x + dp.y * ds.y) / ds_len).clamp(0.0, 1.0)
    }

    /// Finds all common points of two segments.
    ///
    /// Endpoints closer than `tolerance` to the other segment are reported as they are, without computing an
    /// intersection point. This way both segments are split at exactly the same coordinates, and a vertex touching an
    /// edge never produces a sliver. For collinear overlapping segments the ends of the overlap are returned. For
    /// segments crossing in their interiors a single computed point is returned.
    pub fn hits<Other: CartesianPoint2d<Num = f64>>(
        &self,
        other: &Segment<Other>,
        tolerance: f64,
    ) -> Vec<SegmentHit> {
        let tolerance_sq = tolerance * tolerance;
        let mut hits: Vec<SegmentHit> = Vec::with_capacity(2);

        for (point, t_self) in [(self.0, 0.0), (self.1, 1.0)] {
            if other.distance_to_point_sq(point) <= tolerance_sq {
                hits.push(SegmentHit {
                    point: Point2d::new(point.x(), point.y()),
                    t_self,
                    t_other: other.param_of(point),
                });
            }
        }

        for (point, t_other) in [(other.0, 0.0), (other.1, 1.0)] {
            if self.distance_to_point_sq(point) > tolerance_sq
                || hits
                    .iter()
                    .any(|hit| hit.point.distance_sq(point) <= tolerance_sq)
            {
                continue;
            }

            hits.push(SegmentHit {
                point: Point2d::new(point.x(), point.y()),
                t_self: self.param_of(point),
                t_other,
            });
        }

        if !hits.is_empty() {
            return hits;
        }

        let r = self.1.sub(self.0);
        let s = other.1.sub(other.0);
        let denom = r.x * s.y - r.y * s.x;
        if denom == 0.0 {
            return hits;
        }

        let qp = other.0.sub(self.0);
        let t = (qp.x * s.y - qp.y * s.x) / denom;
        let u = (qp.x * r.y - qp.y * r.x) / denom;
        if t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0 {
            hits.push(SegmentHit {
                point: Point2d::new(self.0.x() + t * r.x, self.0.y() + t * r.y),
                t_self: t,
                t_other: u,
            });
        }

        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distance_to_point() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(2.0, 0.0);
        let segment = Segment(&a, &b);

        assert_eq!(segment.distance_to_point_sq(&Point2d::new(1.0, 0.0)), 0.0);
        assert_eq!(segment.distance_to_point_sq(&Point2d::new(1.0, 1.0)), 1.0);
        assert_eq!(segment.distance_to_point_sq(&Point2d::new(-1.0, 0.0)), 1.0);
        assert_eq!(segment.distance_to_point_sq(&Point2d::new(3.0, 1.0)), 2.0);
    }

    #[test]
    fn crossing_segments() {
        let a0 = Point2d::new(0.0, 0.0);
        let a1 = Point2d::new(2.0, 2.0);
        let b0 = Point2d::new(0.0, 2.0);
        let b1 = Point2d::new(2.0, 0.0);

        let hits = Segment(&a0, &a1).hits(&Segment(&b0, &b1), 1e-9);
        assert_eq!(hits.len(), 1);
        assert_abs_diff_eq!(hits[0].point.x, 1.0);
        assert_abs_diff_eq!(hits[0].point.y, 1.0);
        assert_abs_diff_eq!(hits[0].t_self, 0.5);
        assert_abs_diff_eq!(hits[0].t_other, 0.5);
    }

    #[test]
    fn touching_endpoint_is_reported_exactly() {
        let a0 = Point2d::new(0.0, 0.0);
        let a1 = Point2d::new(4.0, 0.0);
        let b0 = Point2d::new(1.0, 0.0);
        let b1 = Point2d::new(1.0, 3.0);

        let hits = Segment(&a0, &a1).hits(&Segment(&b0, &b1), 1e-9);
        assert_eq!(
            hits,
            vec![SegmentHit {
                point: b0,
                t_self: 0.25,
                t_other: 0.0,
            }]
        );
    }

    #[test]
    fn collinear_overlap() {
        let a0 = Point2d::new(0.0, 0.0);
        let a1 = Point2d::new(4.0, 0.0);
        let b0 = Point2d::new(6.0, 0.0);
        let b1 = Point2d::new(2.0, 0.0);

        let hits = Segment(&a0, &a1).hits(&Segment(&b0, &b1), 1e-9);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].point, a1);
        assert_abs_diff_eq!(hits[0].t_other, 0.5);
        assert_eq!(hits[1].point, b1);
        assert_abs_diff_eq!(hits[1].t_self, 0.5);
    }

    #[test]
    fn parallel_and_distant_segments() {
        let a0 = Point2d::new(0.0, 0.0);
        let a1 = Point2d::new(4.0, 0.0);
        let b0 = Point2d::new(0.0, 1.0);
        let b1 = Point2d::new(4.0, 1.0);
        assert!(Segment(&a0, &a1).hits(&Segment(&b0, &b1), 1e-9).is_empty());

        let c0 = Point2d::new(5.0, -1.0);
        let c1 = Point2d::new(5.0, 1.0);
        assert!(Segment(&a0, &a1).hits(&Segment(&c0, &c1), 1e-9).is_empty());
    }
}
