use crate::projector::UtmProjector;
use crate::{GeozoneError, LatLng, OperationOptions};
use ahash::{HashSet, HashSetExt};
use geozone_types::kernel;
use geozone_types::{GeometryError, ProjectionError, Ring};
use serde::{Deserialize, Serialize};

/// Polygon on the surface of the Earth, bounded by a single closed ring.
///
/// The ring is always stored closed: the first vertex is repeated as the last one. Regions cannot have holes.
///
/// Binary operations are computed in the UTM zone of the first vertex of `self` (unless the
/// [options](OperationOptions) say otherwise), so both operands should lie close to each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LatLng>", into = "Vec<LatLng>")]
pub struct Region {
    vertices: Vec<LatLng>,
}

impl Region {
    /// Creates a region from its boundary.
    ///
    /// The ring can be open or closed, in any orientation. It is closed if it is open.
    ///
    /// Fails if any vertex is not a valid geographic coordinate, or if there are fewer than 3 distinct vertices.
    pub fn new(vertices: impl IntoIterator<Item = LatLng>) -> Result<Self, GeozoneError> {
        let mut vertices: Vec<LatLng> = vertices.into_iter().collect();
        for vertex in &vertices {
            let (lat, lng) = (vertex.lat(), vertex.lng());
            if !lat.is_finite() || !lng.is_finite() {
                return Err(GeometryError::NonFiniteCoordinate { x: lng, y: lat }.into());
            }

            if lat.abs() > 90.0 || lng.abs() > 180.0 {
                return Err(ProjectionError::OutOfDomain { lat, lon: lng }.into());
            }
        }

        let distinct = distinct_count(&vertices);
        if distinct < 3 {
            return Err(GeometryError::TooFewVertices { count: distinct }.into());
        }

        if vertices.first() != vertices.last() {
            vertices.push(vertices[0]);
        }

        Ok(Self { vertices })
    }

    pub(crate) fn from_ring(projector: &UtmProjector, ring: &Ring) -> Result<Self, GeozoneError> {
        let vertices = projector.inverse_many(&ring.closed_points())?;
        Ok(Self { vertices })
    }

    /// Vertices of the closed boundary, the first one repeated at the end.
    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    /// Union of two overlapping regions.
    ///
    /// Fails with [`GeometryError::DisjointOperands`] if the regions do not overlap. If the union encloses a hole,
    /// only the outer boundary is returned.
    pub fn union(&self, other: &Region) -> Result<Region, GeozoneError> {
        self.union_with(other, &OperationOptions::default())
    }

    /// Same as [`Region::union`], with explicit options.
    pub fn union_with(
        &self,
        other: &Region,
        options: &OperationOptions,
    ) -> Result<Region, GeozoneError> {
        let projector = self.projector(options);
        let ring = kernel::ring_union(
            projector.forward_many(&self.vertices)?,
            projector.forward_many(&other.vertices)?,
        )?;

        Self::from_ring(&projector, &ring)
    }

    /// Intersection of two regions, or `None` if they do not overlap (touching boundaries do not count).
    ///
    /// Fails with [`GeometryError::MultipleComponents`] if the intersection consists of several separate parts.
    pub fn intersection(&self, other: &Region) -> Result<Option<Region>, GeozoneError> {
        self.intersection_with(other, &OperationOptions::default())
    }

    /// Same as [`Region::intersection`], with explicit options.
    pub fn intersection_with(
        &self,
        other: &Region,
        options: &OperationOptions,
    ) -> Result<Option<Region>, GeozoneError> {
        let projector = self.projector(options);
        let ring = kernel::ring_intersection(
            projector.forward_many(&self.vertices)?,
            projector.forward_many(&other.vertices)?,
        )?;

        ring.map(|ring| Self::from_ring(&projector, &ring))
            .transpose()
    }

    /// Smallest convex region containing all the vertices of this one.
    pub fn convex_hull(&self) -> Result<Region, GeozoneError> {
        self.convex_hull_with(&OperationOptions::default())
    }

    /// Same as [`Region::convex_hull`], with explicit options.
    pub fn convex_hull_with(&self, options: &OperationOptions) -> Result<Region, GeozoneError> {
        let projector = self.projector(options);
        let ring = kernel::convex_hull(projector.forward_many(&self.vertices)?)?;

        Self::from_ring(&projector, &ring)
    }

    /// Returns true if the point is inside the region or on its boundary.
    pub fn contains_coord(&self, point: &LatLng) -> Result<bool, GeozoneError> {
        self.contains_coord_with(point, &OperationOptions::default())
    }

    /// Same as [`Region::contains_coord`], with explicit options.
    pub fn contains_coord_with(
        &self,
        point: &LatLng,
        options: &OperationOptions,
    ) -> Result<bool, GeozoneError> {
        let projector = self.projector(options);
        let ring = projector.forward_many(&self.vertices)?;
        let point = projector.forward(point)?;

        Ok(kernel::contains_point(ring, &point)?)
    }

    fn projector(&self, options: &OperationOptions) -> UtmProjector {
        // A region always has at least 3 vertices.
        options.projector_for(&self.vertices[0])
    }
}

impl TryFrom<Vec<LatLng>> for Region {
    type Error = GeozoneError;

    fn try_from(value: Vec<LatLng>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Region> for Vec<LatLng> {
    fn from(value: Region) -> Self {
        value.vertices
    }
}

fn distinct_count(vertices: &[LatLng]) -> usize {
    let mut distinct = HashSet::with_capacity(vertices.len());
    for vertex in vertices {
        // Negative zero is mapped to zero so that equal coordinates always have equal keys.
        let (lat, lng) = (vertex.lat() + 0.0, vertex.lng() + 0.0);
        distinct.insert((lat.to_bits(), lng.to_bits()));
    }

    distinct.len()
}
