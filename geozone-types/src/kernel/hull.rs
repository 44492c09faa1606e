use crate::cartesian::{Orientation, Point2d, Winding};
use crate::error::GeometryError;
use crate::ring::Ring;
use std::cmp::Ordering;

/// Convex hull of the ring's vertices (Andrew's monotone chain).
///
/// Collinear points on the hull boundary are dropped, only the extreme ones are kept. The resulting ring starts at the
/// vertex with the smallest `x` (and the smallest `y` among equal `x`) and goes clockwise, so the hull of a hull is
/// exactly the same ring.
pub fn convex_hull(ring: impl IntoIterator<Item = Point2d>) -> Result<Ring, GeometryError> {
    let ring = Ring::new(ring)?;

    let mut points = ring.points().to_vec();
    points.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });
    points.dedup();

    let mut lower: Vec<Point2d> = Vec::with_capacity(points.len());
    for p in &points {
        while lower.len() >= 2 && !turns_left(&lower[lower.len() - 2], &lower[lower.len() - 1], p) {
            lower.pop();
        }
        lower.push(*p);
    }

    let mut upper: Vec<Point2d> = Vec::with_capacity(points.len());
    for p in points.iter().rev() {
        while upper.len() >= 2 && !turns_left(&upper[upper.len() - 2], &upper[upper.len() - 1], p) {
            upper.pop();
        }
        upper.push(*p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);

    if lower.len() < 3 {
        log::warn!(
            "Convex hull collapsed to {} points, input ring is nearly degenerate",
            lower.len()
        );
        return Err(GeometryError::ZeroArea);
    }

    Ok(Ring::from_raw(lower).oriented(Winding::Clockwise))
}

fn turns_left(p: &Point2d, q: &Point2d, r: &Point2d) -> bool {
    Orientation::triplet(p, q, r) == Orientation::Counterclockwise
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::CartesianPoint2d;
    use assert_matches::assert_matches;

    fn star() -> Vec<Point2d> {
        vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(2.0, 1.0),
            Point2d::new(4.0, 0.0),
            Point2d::new(3.0, 2.0),
            Point2d::new(4.0, 4.0),
            Point2d::new(2.0, 3.0),
            Point2d::new(0.0, 4.0),
            Point2d::new(1.0, 2.0),
        ]
    }

    #[test]
    fn hull_of_star_is_square() {
        let hull = convex_hull(star()).unwrap();
        assert_eq!(
            hull.points(),
            &[
                Point2d::new(0.0, 0.0),
                Point2d::new(0.0, 4.0),
                Point2d::new(4.0, 4.0),
                Point2d::new(4.0, 0.0),
            ]
        );
        assert_eq!(hull.winding(), Winding::Clockwise);
    }

    #[test]
    fn collinear_points_are_dropped() {
        let ring = vec![
            Point2d::new(0.0, 0.0),
            Point2d::new(1.0, 0.0),
            Point2d::new(2.0, 0.0),
            Point2d::new(2.0, 1.0),
            Point2d::new(2.0, 2.0),
            Point2d::new(0.0, 2.0),
            Point2d::new(0.0, 1.0),
        ];
        let hull = convex_hull(ring).unwrap();
        assert_eq!(hull.len(), 4);
        assert!(!hull.points().contains(&Point2d::new(1.0, 0.0)));
        assert!(!hull.points().contains(&Point2d::new(0.0, 1.0)));
    }

    #[test]
    fn only_left_turns_are_kept() {
        let p = Point2d::new(0.0, 0.0);
        let q = Point2d::new(2.0, 0.0);
        assert!(turns_left(&p, &q, &Point2d::new(3.0, 1.0)));
        assert!(!turns_left(&p, &q, &Point2d::new(3.0, -1.0)));
        assert!(!turns_left(&p, &q, &Point2d::new(4.0, 0.0)));
    }

    #[test]
    fn hull_is_idempotent() {
        let hull = convex_hull(star()).unwrap();
        let hull_of_hull = convex_hull(hull.closed_points()).unwrap();
        assert_eq!(hull, hull_of_hull);

        let irregular = vec![
            Point2d::new(3.1, 0.4),
            Point2d::new(7.9, 1.7),
            Point2d::new(6.2, 3.3),
            Point2d::new(9.4, 6.8),
            Point2d::new(4.4, 5.1),
            Point2d::new(0.7, 8.2),
            Point2d::new(1.9, 3.6),
        ];
        let hull = convex_hull(irregular).unwrap();
        assert_eq!(convex_hull(hull.closed_points()).unwrap(), hull);
    }

    #[test]
    fn hull_contains_all_vertices() {
        let hull = convex_hull(star()).unwrap();
        for p in star() {
            assert!(hull.contains_point(&p), "({}, {})", p.x(), p.y());
        }
    }

    #[test]
    fn degenerate_input() {
        assert_matches!(
            convex_hull(vec![Point2d::new(0.0, 0.0), Point2d::new(1.0, 1.0)]),
            Err(GeometryError::TooFewVertices { .. })
        );
    }
}
