use crate::error::ProjectionError;
use crate::geo::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Longitudinal UTM zone, a band 6 degrees wide. Zone 1 starts at 180°W, zone 60 ends at 180°E.
///
/// Latitude does not affect the zone: there is no special handling of the polar regions or of the Norway and
/// Svalbard exceptions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UtmZone(u8);

impl UtmZone {
    /// Width of a zone in degrees of longitude.
    pub const WIDTH_DEGREES: f64 = 6.0;

    /// Creates a zone from its number in `1..=60`.
    pub fn new(number: u8) -> Result<Self, ProjectionError> {
        if (1..=60).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ProjectionError::InvalidZone(number))
        }
    }

    /// Zone containing the given longitude (degrees).
    ///
    /// Every longitude maps to a zone: `180°` belongs to zone 60 together with the rest of its band, values outside
    /// of `[-180, 180]` are clamped to the first or the last zone. NaN maps to zone 1, projection of such a point fails
    /// later anyway.
    pub fn from_lon(lon: f64) -> Self {
        let number = ((lon + 180.0) / Self::WIDTH_DEGREES).floor() + 1.0;
        Self((number.clamp(1.0, 60.0) as u8).max(1))
    }

    /// Zone containing the point.
    pub fn for_point(point: &impl GeoPoint<Num = f64>) -> Self {
        Self::from_lon(point.lon())
    }

    /// Zone number in `1..=60`.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Longitude of the central meridian of the zone in degrees.
    pub fn central_meridian(&self) -> f64 {
        f64::from(self.0) * Self::WIDTH_DEGREES - 183.0
    }
}

impl TryFrom<u8> for UtmZone {
    type Error = ProjectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UtmZone> for u8 {
    fn from(value: UtmZone) -> Self {
        value.0
    }
}

impl Display for UtmZone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{GeoPoint2d, NewGeoPoint};
    use assert_matches::assert_matches;

    #[test]
    fn zone_for_point() {
        let zone = |lon, lat| UtmZone::for_point(&GeoPoint2d::lonlat(lon, lat)).number();

        assert_eq!(zone(-8.977841, 7.234933), 29);
        assert_eq!(zone(-122.0, 37.0), 10);
        assert_eq!(zone(-43.157150, -22.948968), 23);
        assert_eq!(zone(-10.773746, 6.287188), 29);
    }

    #[test]
    fn zone_edges() {
        assert_eq!(UtmZone::from_lon(-180.0).number(), 1);
        assert_eq!(UtmZone::from_lon(-174.0).number(), 2);
        assert_eq!(UtmZone::from_lon(0.0).number(), 31);
        assert_eq!(UtmZone::from_lon(-0.000001).number(), 30);
        assert_eq!(UtmZone::from_lon(179.999).number(), 60);
        assert_eq!(UtmZone::from_lon(180.0).number(), 60);
    }

    #[test]
    fn central_meridian() {
        assert_eq!(UtmZone::new(1).unwrap().central_meridian(), -177.0);
        assert_eq!(UtmZone::new(29).unwrap().central_meridian(), -9.0);
        assert_eq!(UtmZone::new(31).unwrap().central_meridian(), 3.0);
        assert_eq!(UtmZone::new(60).unwrap().central_meridian(), 177.0);
    }

    #[test]
    fn invalid_zone_number() {
        assert_matches!(UtmZone::new(0), Err(ProjectionError::InvalidZone(0)));
        assert_matches!(UtmZone::new(61), Err(ProjectionError::InvalidZone(61)));
        assert_matches!(UtmZone::try_from(30), Ok(zone) if zone.number() == 30);
    }
}
