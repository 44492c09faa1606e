use crate::LatLng;
use geozone_types::cartesian::Point2d;
use geozone_types::geo::{Projection, TransverseMercator, UtmZone};
use geozone_types::ProjectionError;

/// Round trip deviation above which a warning is logged, in degrees.
const ROUND_TRIP_TOLERANCE: f64 = 1e-6;

/// Projects geographic points into the planar coordinates of one UTM zone and back.
///
/// A projector is cheap to build, and is built anew for every operation from the operation's first operand. All the
/// points of one operation are projected with the same instance, so they share one planar frame. Planar points
/// produced by different projectors must never be mixed.
#[derive(Debug, Clone, Copy)]
pub struct UtmProjector {
    zone: UtmZone,
    projection: TransverseMercator<LatLng, Point2d>,
    distortion_warning_degrees: f64,
}

impl UtmProjector {
    /// Projector for the zone containing the point.
    pub fn for_point(point: &LatLng) -> Self {
        Self::for_zone(UtmZone::for_point(point))
    }

    /// Projector for the given zone.
    pub fn for_zone(zone: UtmZone) -> Self {
        log::debug!("Creating projector for UTM zone {zone}");
        Self {
            zone,
            projection: TransverseMercator::utm(zone),
            distortion_warning_degrees: f64::INFINITY,
        }
    }

    pub(crate) fn with_distortion_warning(mut self, degrees: f64) -> Self {
        self.distortion_warning_degrees = degrees;
        self
    }

    /// Zone of the projector.
    pub fn zone(&self) -> UtmZone {
        self.zone
    }

    /// Projects a point into easting and northing in metres.
    pub fn forward(&self, point: &LatLng) -> Result<Point2d, ProjectionError> {
        self.check_distortion(point);
        self.projection.project(point)
    }

    /// Converts a planar point back into geographic coordinates.
    pub fn inverse(&self, point: &Point2d) -> Result<LatLng, ProjectionError> {
        self.projection.unproject(point)
    }

    /// Projects all the points, preserving order and length.
    pub fn forward_many<'a>(
        &self,
        points: impl IntoIterator<Item = &'a LatLng>,
    ) -> Result<Vec<Point2d>, ProjectionError> {
        points.into_iter().map(|p| self.forward(p)).collect()
    }

    /// Converts all the points back into geographic coordinates, preserving order and length.
    pub fn inverse_many<'a>(
        &self,
        points: impl IntoIterator<Item = &'a Point2d>,
    ) -> Result<Vec<LatLng>, ProjectionError> {
        self.projection.unproject_all(points)
    }

    /// Largest difference in degrees between the point and the result of projecting it forth and back.
    pub fn round_trip_error(&self, point: &LatLng) -> Result<f64, ProjectionError> {
        let restored = self.inverse(&self.projection.project(point)?)?;
        let error = (restored.lat() - point.lat())
            .abs()
            .max((restored.lng() - point.lng()).abs());

        if error > ROUND_TRIP_TOLERANCE {
            log::warn!(
                "Projection round trip of {point:?} in zone {} is off by {error} degrees",
                self.zone
            );
        }

        Ok(error)
    }

    fn check_distortion(&self, point: &LatLng) {
        let mut offset = (point.lng() - self.zone.central_meridian()).abs() % 360.0;
        if offset > 180.0 {
            offset = 360.0 - offset;
        }

        if offset > self.distortion_warning_degrees {
            log::warn!(
                "Point {point:?} is {offset:.2} degrees away from the central meridian of UTM zone {}, \
                 projection distortion may be significant",
                self.zone
            );
        }
    }
}
