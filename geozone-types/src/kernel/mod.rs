//! Planar polygon algebra on single rings.
//!
//! All operations accept rings as plain point sequences in either orientation, open or explicitly closed. Inputs are
//! validated and normalized with [`Ring::new`](crate::Ring::new) before any processing, so degenerate rings fail
//! fast with a [`GeometryError`](crate::GeometryError).
//!
//! Resulting rings are always **clockwise**. Use [`Ring::closed_points`](crate::Ring::closed_points) to get them with
//! the first vertex repeated at the end.

mod buffer;
mod hull;
mod overlay;

pub use buffer::{buffer_point, DEFAULT_SEGMENTS, MIN_SEGMENTS};
pub use hull::convex_hull;
pub use overlay::{ring_intersection, ring_union};

use crate::cartesian::{CartesianPoint2d, Point2d};
use crate::error::GeometryError;
use crate::ring::Ring;

/// Returns true if the point is inside the ring or on its boundary.
///
/// Points closer to the boundary than the kernel tolerance (a billionth of the ring size) are considered to be on the
/// boundary and therefore contained.
pub fn contains_point(
    ring: impl IntoIterator<Item = Point2d>,
    point: &impl CartesianPoint2d<Num = f64>,
) -> Result<bool, GeometryError> {
    Ok(Ring::new(ring)?.contains_point(point))
}
