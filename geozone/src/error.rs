//! Error type of the crate.

use geozone_types::{GeometryError, ProjectionError};
use thiserror::Error;

/// Error returned by the operations on [`LatLng`](crate::LatLng), [`Circle`](crate::Circle) and
/// [`Region`](crate::Region).
///
/// Errors are never retried or recovered from internally: the operation that hit one is aborted and the error is
/// returned as is. Operands are never modified.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeozoneError {
    /// A coordinate cannot be projected into or out of the selected UTM zone.
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    /// Input geometry violates a precondition of the operation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
