//! Geographic coordinates (latitude and longitude, see [`GeoPoint`]) and their projection into planar coordinates
//! (see [`Projection`]).
//!
//! The projection used by `geozone` is the Universal Transverse Mercator: the globe is split into 60 longitudinal
//! zones of 6 degrees each (see [`UtmZone`]), and geometries are projected with the
//! [`TransverseMercator`] projection of the zone they belong to.

mod datum;
mod point;
mod projection;
mod tmerc;
mod zone;

#[cfg(feature = "geodesy")]
mod geodesy;

pub use datum::Datum;
pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use projection::Projection;
pub use tmerc::TransverseMercator;
pub use zone::UtmZone;

#[cfg(feature = "geodesy")]
pub use self::geodesy::GeodesyProjection;
