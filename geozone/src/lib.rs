//! Geographic points, circles and regions with planar polygon algebra.
//!
//! Computing areas, unions or containment directly on longitude and latitude is wrong everywhere except on tiny
//! extents. `geozone` projects the operands of every operation into the Universal Transverse Mercator zone of the
//! first operand, runs the planar algorithm there and projects the result back:
//!
//! ```
//! use geozone::{latlng, Region};
//!
//! let a = Region::new([
//!     latlng!(6.2860, -10.7780),
//!     latlng!(6.2840, -10.7760),
//!     latlng!(6.2842, -10.7730),
//!     latlng!(6.2865, -10.7718),
//!     latlng!(6.2889, -10.7735),
//!     latlng!(6.2884, -10.7765),
//! ]).unwrap();
//!
//! let circle = latlng!(6.2868, -10.7728).buffer(100.0).unwrap();
//! let union = a.union(&circle.as_region(32).unwrap()).unwrap();
//!
//! assert!(union.contains_coord(&latlng!(6.2855, -10.7770)).unwrap());
//! ```
//!
//! # Main components
//!
//! * [`LatLng`], [`Circle`], [`Region`] and [`LineString`] are immutable value types. Every operation returns a new
//!   value and never modifies its operands.
//! * [`UtmProjector`] converts geographic points into easting and northing of one UTM zone and back. A new projector
//!   is created for each operation, the zone is selected with the [`ZonePolicy`] of the [`OperationOptions`].
//! * The planar algorithms themselves live in the [`geozone_types::kernel`] module.
//! * [`ToWkt`](format::ToWkt) and [`ToGeoJson`](format::ToGeoJson) render the results as text.
//!
//! Operations are meant for geometries of modest size (tens of kilometres). Operands far from the central meridian
//! of the selected zone are still processed, but a warning is logged through the [`log`] facade.

mod circle;
mod error;
pub mod format;
mod lat_lng;
mod line_string;
mod options;
mod projector;
mod region;

pub use circle::Circle;
pub use error::GeozoneError;
pub use lat_lng::LatLng;
pub use line_string::LineString;
pub use options::{OperationOptions, ZonePolicy};
pub use projector::UtmProjector;
pub use region::Region;

// Reexport geozone_types
pub use geozone_types;
