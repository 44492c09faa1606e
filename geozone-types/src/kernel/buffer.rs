use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::error::GeometryError;
use crate::ring::Ring;
use std::f64::consts::TAU;

/// Number of segments used to approximate a circle when nothing else is specified.
pub const DEFAULT_SEGMENTS: usize = 32;

/// Smallest number of segments accepted by [`buffer_point`].
pub const MIN_SEGMENTS: usize = 8;

/// Approximates a circle around `center` with a regular polygon.
///
/// The polygon has `segments` vertices, all exactly `radius` away from the center. The first vertex is due east of
/// the center, and the following ones go clockwise with equal angular steps.
///
/// The area of the polygon is slightly smaller than the area of the circle: the middle of each side is
/// `radius * (1 - cos(PI / segments))` closer to the center than the vertices.
pub fn buffer_point(
    center: &impl CartesianPoint2d<Num = f64>,
    radius: f64,
    segments: usize,
) -> Result<Ring, GeometryError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::InvalidRadius(radius));
    }

    if segments < MIN_SEGMENTS {
        return Err(GeometryError::TooFewSegments {
            segments,
            min: MIN_SEGMENTS,
        });
    }

    let step = TAU / segments as f64;
    let points = (0..segments).map(|i| {
        let angle = -step * i as f64;
        Point2d::new(
            center.x() + radius * angle.cos(),
            center.y() + radius * angle.sin(),
        )
    });

    Ring::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::{CartesianPoint2dFloat, Winding};
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    #[test]
    fn vertices_are_on_the_circle() {
        let center = Point2d::new(500_000.0, 695_000.0);
        let ring = buffer_point(&center, 200.0, DEFAULT_SEGMENTS).unwrap();

        assert_eq!(ring.len(), 32);
        assert_eq!(ring.closed_points().len(), 33);
        for point in ring.points() {
            assert_abs_diff_eq!(point.distance(&center), 200.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn starts_east_and_goes_clockwise() {
        let center = Point2d::new(10.0, 20.0);
        let ring = buffer_point(&center, 5.0, 8).unwrap();

        assert_abs_diff_eq!(ring.points()[0].x, 15.0);
        assert_abs_diff_eq!(ring.points()[0].y, 20.0);
        assert!(ring.points()[1].y < 20.0);
        assert_eq!(ring.winding(), Winding::Clockwise);
    }

    #[test]
    fn area_is_close_to_circle() {
        let ring = buffer_point(&Point2d::new(0.0, 0.0), 100.0, 64).unwrap();
        let circle_area = std::f64::consts::PI * 100.0 * 100.0;
        let area = ring.area_signed().abs();

        assert!(area < circle_area);
        assert!(area > circle_area * 0.99);
    }

    #[test]
    fn invalid_parameters() {
        let center = Point2d::new(0.0, 0.0);
        assert_matches!(
            buffer_point(&center, 0.0, 32),
            Err(GeometryError::InvalidRadius(_))
        );
        assert_matches!(
            buffer_point(&center, -1.0, 32),
            Err(GeometryError::InvalidRadius(_))
        );
        assert_matches!(
            buffer_point(&center, f64::INFINITY, 32),
            Err(GeometryError::InvalidRadius(_))
        );
        assert_matches!(
            buffer_point(&center, 10.0, 7),
            Err(GeometryError::TooFewSegments {
                segments: 7,
                min: 8
            })
        );
    }
}
