use crate::{Circle, GeozoneError, OperationOptions};
use geozone_types::cartesian::CartesianPoint2dFloat;
use geozone_types::geo::{GeoPoint, NewGeoPoint};
use serde::{Deserialize, Serialize};

/// Point on the WGS84 ellipsoid, latitude and longitude in degrees.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    /// Creates a new point.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Circle with the center in this point.
    pub fn buffer(&self, radius: f64) -> Result<Circle, GeozoneError> {
        Circle::new(*self, radius)
    }

    /// Distance to the other point in metres.
    ///
    /// Both points are projected into the UTM zone of `self`, and the planar distance between them is returned. This
    /// is accurate for points not too far from each other (within one zone), but it is not a geodesic distance.
    pub fn distance(&self, other: &LatLng) -> Result<f64, GeozoneError> {
        self.distance_with(other, &OperationOptions::default())
    }

    /// Same as [`LatLng::distance`], with explicit options.
    pub fn distance_with(
        &self,
        other: &LatLng,
        options: &OperationOptions,
    ) -> Result<f64, GeozoneError> {
        let projector = options.projector_for(self);
        let from = projector.forward(self)?;
        let to = projector.forward(other)?;

        Ok(from.distance(&to))
    }
}

impl GeoPoint for LatLng {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lng
    }
}

impl NewGeoPoint<f64> for LatLng {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon)
    }
}

/// Creates a [`LatLng`] from latitude and longitude values (in degrees).
///
/// ```
/// use geozone::latlng;
///
/// let point = latlng!(6.287188, -10.773746);
/// assert_eq!(point.lng(), -10.773746);
/// ```
#[macro_export]
macro_rules! latlng {
    ($lat:expr, $lng:expr) => {
        $crate::LatLng::new($lat, $lng)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use geozone_types::ProjectionError;

    #[test]
    fn distance_between_close_points() {
        let a = latlng!(6.287188, -10.773746);
        let b = latlng!(6.285524, -10.774412);

        let distance = a.distance(&b).unwrap();
        assert_abs_diff_eq!(distance, 198.0, epsilon = 1.0);
        assert_abs_diff_eq!(b.distance(&a).unwrap(), distance, epsilon = 1e-6);
        assert_eq!(a.distance(&a).unwrap(), 0.0);
    }

    #[test]
    fn distance_is_close_to_geodesic() {
        use geo::HaversineDistance;

        let a = latlng!(37.0, -122.0);
        let b = latlng!(37.01, -122.01);
        let from = geo::Point::new(a.lng(), a.lat());
        let to = geo::Point::new(b.lng(), b.lat());
        let expected = from.haversine_distance(&to);

        // Haversine uses a sphere, so only a rough match is expected.
        let distance = a.distance(&b).unwrap();
        assert_abs_diff_eq!(distance, expected, epsilon = expected * 0.01);
    }

    #[test]
    fn distance_to_pole_fails() {
        assert_matches!(
            latlng!(6.0, -10.0).distance(&latlng!(90.0, -10.0)),
            Err(GeozoneError::Projection(ProjectionError::OutOfDomain { .. }))
        );
    }

    #[test]
    fn buffer_creates_circle() {
        let center = latlng!(6.287188, -10.773746);
        let circle = center.buffer(200.0).unwrap();
        assert_eq!(circle.center(), center);
        assert_eq!(circle.radius(), 200.0);

        assert!(center.buffer(-1.0).is_err());
    }

    #[test]
    fn geo_point_accessors() {
        let point = LatLng::latlon(1.0, 2.0);
        assert_eq!(GeoPoint::lat(&point), 1.0);
        assert_eq!(point.lon(), 2.0);
        assert_eq!(LatLng::lonlat(2.0, 1.0), point);
    }
}
