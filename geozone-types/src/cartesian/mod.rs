//! Types and functions on geometries in planar cartesian coordinates.

mod orient;
mod point;
mod rect;
mod segment;

pub(crate) use orient::cross;
pub use orient::{Orientation, Winding};
pub use point::{CartesianPoint2d, CartesianPoint2dFloat, NewCartesianPoint2d, Point2d};
pub use rect::Rect;
pub use segment::{Segment, SegmentHit};
