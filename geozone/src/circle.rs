use crate::{GeozoneError, LatLng, OperationOptions, Region};
use geozone_types::kernel::buffer_point;
use geozone_types::GeometryError;
use serde::{Deserialize, Serialize};

/// Circle on the surface of the Earth: a center point and a radius in metres.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: LatLng,
    radius: f64,
}

impl Circle {
    /// Creates a new circle. The radius must be a finite non-negative number.
    pub fn new(center: LatLng, radius: f64) -> Result<Self, GeozoneError> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius).into());
        }

        Ok(Self { center, radius })
    }

    /// Center of the circle.
    pub fn center(&self) -> LatLng {
        self.center
    }

    /// Radius in metres.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Circle with the same center and the radius increased by `extra` metres.
    ///
    /// `extra` can be negative as long as the resulting radius is not.
    pub fn buffer(&self, extra: f64) -> Result<Circle, GeozoneError> {
        Self::new(self.center, self.radius + extra)
    }

    /// Approximates the circle with a regular polygon of `segments` sides.
    ///
    /// The polygon is built in the UTM zone of the center. Its first vertex lies due east of the center (in the
    /// projected frame), the rest follow clockwise. The ring is closed, so it has `segments + 1` vertices.
    pub fn as_region(&self, segments: usize) -> Result<Region, GeozoneError> {
        self.as_region_with(&OperationOptions::default().with_segments(segments))
    }

    /// Same as [`Circle::as_region`], taking the number of segments and the zone from the options.
    pub fn as_region_with(&self, options: &OperationOptions) -> Result<Region, GeozoneError> {
        let projector = options.projector_for(&self.center);
        let center = projector.forward(&self.center)?;
        let ring = buffer_point(&center, self.radius, options.segments)?;

        Region::from_ring(&projector, &ring)
    }

    /// Returns true if the point is inside the circle.
    ///
    /// This is not an exact test against the radius: the circle is approximated with a polygon (see
    /// [`Circle::as_region`]) and the containment is checked against it, so points close to the circumference between
    /// two polygon vertices are reported as outside.
    pub fn contains_coord(&self, point: &LatLng) -> Result<bool, GeozoneError> {
        self.contains_coord_with(point, &OperationOptions::default())
    }

    /// Same as [`Circle::contains_coord`], with explicit options.
    pub fn contains_coord_with(
        &self,
        point: &LatLng,
        options: &OperationOptions,
    ) -> Result<bool, GeozoneError> {
        self.as_region_with(options)?
            .contains_coord_with(point, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlng;
    use crate::projector::UtmProjector;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geozone_types::cartesian::{CartesianPoint2dFloat, Point2d};
    use geozone_types::kernel::DEFAULT_SEGMENTS;
    use std::f64::consts::PI;

    const EXPECTED_RING: [(f64, f64); 33] = [
        (-10.771939, 6.287194),
        (-10.771972, 6.286841),
        (-10.772074, 6.286502),
        (-10.772240, 6.286188),
        (-10.772464, 6.285914),
        (-10.772737, 6.285688),
        (-10.773049, 6.285520),
        (-10.773387, 6.285416),
        (-10.773740, 6.285380),
        (-10.774093, 6.285413),
        (-10.774432, 6.285515),
        (-10.774745, 6.285681),
        (-10.775020, 6.285905),
        (-10.775245, 6.286178),
        (-10.775413, 6.286490),
        (-10.775517, 6.286829),
        (-10.775553, 6.287182),
        (-10.775520, 6.287535),
        (-10.775418, 6.287874),
        (-10.775252, 6.288188),
        (-10.775028, 6.288462),
        (-10.774755, 6.288688),
        (-10.774443, 6.288856),
        (-10.774105, 6.288960),
        (-10.773752, 6.288996),
        (-10.773399, 6.288963),
        (-10.773060, 6.288861),
        (-10.772747, 6.288695),
        (-10.772472, 6.288471),
        (-10.772247, 6.288198),
        (-10.772079, 6.287886),
        (-10.771975, 6.287547),
        (-10.771939, 6.287194),
    ];

    fn circle() -> Circle {
        Circle::new(latlng!(6.287188, -10.773746), 200.0).unwrap()
    }

    #[test]
    fn radius_must_be_non_negative() {
        let center = latlng!(6.287188, -10.773746);
        assert!(Circle::new(center, 0.0).is_ok());
        assert_matches!(
            Circle::new(center, -0.1),
            Err(GeozoneError::Geometry(GeometryError::InvalidRadius(_)))
        );
        assert!(Circle::new(center, f64::NAN).is_err());
        assert!(Circle::new(center, f64::INFINITY).is_err());
    }

    #[test]
    fn buffer_changes_radius() {
        let circle = circle();
        let larger = circle.buffer(50.0).unwrap();
        assert_eq!(larger.center(), circle.center());
        assert_eq!(larger.radius(), 250.0);

        assert_eq!(circle.buffer(-200.0).unwrap().radius(), 0.0);
        assert_matches!(
            circle.buffer(-200.5),
            Err(GeozoneError::Geometry(GeometryError::InvalidRadius(_)))
        );
    }

    #[test]
    fn region_matches_reference_ring() {
        let region = circle().as_region(DEFAULT_SEGMENTS).unwrap();
        let vertices = region.vertices();

        assert_eq!(vertices.len(), 33);
        assert_eq!(vertices.first(), vertices.last());
        for (vertex, (lng, lat)) in vertices.iter().zip(EXPECTED_RING) {
            assert_abs_diff_eq!(vertex.lng(), lng, epsilon = 2e-6);
            assert_abs_diff_eq!(vertex.lat(), lat, epsilon = 2e-6);
        }
    }

    #[test]
    fn region_vertices_are_at_radius() {
        let circle = circle();
        let region = circle.as_region(16).unwrap();
        assert_eq!(region.vertices().len(), 17);

        let projector = UtmProjector::for_point(&circle.center());
        let center = projector.forward(&circle.center()).unwrap();
        let tolerance = 200.0 * (1.0 - (PI / 16.0).cos());
        for vertex in region.vertices() {
            let distance = projector.forward(vertex).unwrap().distance(&center);
            assert_abs_diff_eq!(distance, 200.0, epsilon = tolerance);
        }
    }

    #[test]
    fn degenerate_regions() {
        let center = latlng!(6.287188, -10.773746);
        assert_matches!(
            Circle::new(center, 0.0).unwrap().as_region(32),
            Err(GeozoneError::Geometry(GeometryError::InvalidRadius(_)))
        );
        assert_matches!(
            circle().as_region(4),
            Err(GeozoneError::Geometry(GeometryError::TooFewSegments { .. }))
        );
    }

    #[test]
    fn contains_center_but_not_far_points() {
        let circle = circle();
        let far = latlng!(6.291283, -10.776922);
        assert!(circle.contains_coord(&circle.center()).unwrap());
        assert!(!circle.contains_coord(&far).unwrap());

        // 1.5 radius away in each direction.
        let projector = UtmProjector::for_point(&circle.center());
        let center = projector.forward(&circle.center()).unwrap();
        let offsets = [
            (300.0, 0.0),
            (-300.0, 0.0),
            (0.0, 300.0),
            (0.0, -300.0),
            (212.0, 212.0),
        ];
        for (dx, dy) in offsets {
            let planar = Point2d::new(center.x + dx, center.y + dy);
            let point = projector.inverse(&planar).unwrap();
            assert!(!circle.contains_coord(&point).unwrap());
        }

        let planar = Point2d::new(center.x + 150.0, center.y - 100.0);
        let inside = projector.inverse(&planar).unwrap();
        assert!(circle.contains_coord(&inside).unwrap());
    }
}
