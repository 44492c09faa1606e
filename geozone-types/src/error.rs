//! Error types used by the crate.

use thiserror::Error;

/// Violated precondition of a planar geometry operation.
///
/// These are deterministic input errors: the same input always fails the same way, so retrying makes no sense.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Ring has fewer than 3 distinct vertices.
    #[error("ring must have at least 3 distinct vertices, got {count}")]
    TooFewVertices {
        /// Number of distinct vertices found.
        count: usize,
    },
    /// All the vertices of the ring lie on one line.
    #[error("ring has zero area")]
    ZeroArea,
    /// One of the coordinates is NaN or infinite.
    #[error("coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate {
        /// X coordinate.
        x: f64,
        /// Y coordinate.
        y: f64,
    },
    /// Radius is negative, zero where a positive one is required, or not finite.
    #[error("invalid radius: {0}")]
    InvalidRadius(f64),
    /// Not enough segments to approximate a circle.
    #[error("at least {min} segments are required to approximate a circle, got {segments}")]
    TooFewSegments {
        /// Requested number of segments.
        segments: usize,
        /// Minimum allowed number of segments.
        min: usize,
    },
    /// Operands of a union do not overlap, so the result cannot be a single ring.
    #[error("operands do not overlap")]
    DisjointOperands,
    /// Result of the operation consists of several separate rings.
    #[error("result consists of {count} separate rings")]
    MultipleComponents {
        /// Number of rings in the result.
        count: usize,
    },
    /// Overlay edges could not be linked into closed rings.
    #[error("failed to build result ring: {0}")]
    Topology(String),
}

/// Coordinate cannot be transformed with the selected projection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Geographic coordinate is outside of the domain of the projection (e.g. a pole).
    #[error("coordinate (lat: {lat}, lon: {lon}) is outside of the projection domain")]
    OutOfDomain {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// Projection produced NaN or infinite coordinates.
    #[error("projection of ({x}, {y}) produced a non-finite result")]
    NonFinite {
        /// First input coordinate.
        x: f64,
        /// Second input coordinate.
        y: f64,
    },
    /// Zone number is outside of `1..=60`.
    #[error("invalid UTM zone: {0}")]
    InvalidZone(u8),
    /// Error reported by an external projection backend.
    #[error("projection backend error: {0}")]
    Backend(String),
}
