//! Geometry primitives and algorithms used by `geozone`.
//!
//! The crate has two halves that know nothing about each other:
//!
//! * [`cartesian`] and [`kernel`] work on planar coordinates in metres. The kernel implements the polygon algebra
//!   (buffering a point into a disc, ring union and intersection, convex hull, point-in-ring containment) on
//!   single-ring polygons.
//! * [`geo`] deals with geographic coordinates: the [`GeoPoint`](geo::GeoPoint) trait, the WGS84 [`Datum`](geo::Datum),
//!   the [`Projection`](geo::Projection) trait and the zoned transverse Mercator projection used to move geometries
//!   between the two worlds.

pub mod cartesian;
pub mod error;
pub mod geo;
pub mod kernel;
mod ring;

pub use error::{GeometryError, ProjectionError};
pub use ring::{PointLocation, Ring};
