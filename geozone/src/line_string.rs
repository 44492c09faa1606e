use crate::LatLng;
use serde::{Deserialize, Serialize};

/// Open sequence of points on the surface of the Earth.
///
/// Line strings take no part in the geometric operations. They can only be built and rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineString {
    vertices: Vec<LatLng>,
}

impl LineString {
    /// Creates a new line string.
    pub fn new(vertices: impl IntoIterator<Item = LatLng>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Vertices of the line string.
    pub fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl From<Vec<LatLng>> for LineString {
    fn from(vertices: Vec<LatLng>) -> Self {
        Self { vertices }
    }
}

impl FromIterator<LatLng> for LineString {
    fn from_iter<T: IntoIterator<Item = LatLng>>(iter: T) -> Self {
        Self::new(iter)
    }
}
