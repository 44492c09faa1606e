use crate::error::ProjectionError;

/// Conversion of points from one coordinate system into another and back.
pub trait Projection {
    /// Type of the source points.
    type InPoint;
    /// Type of the projected points.
    type OutPoint;

    /// Projects a point.
    fn project(&self, input: &Self::InPoint) -> Result<Self::OutPoint, ProjectionError>;
    /// Converts a projected point back into the source coordinate system.
    fn unproject(&self, input: &Self::OutPoint) -> Result<Self::InPoint, ProjectionError>;

    /// Projects all the points, preserving their order. Fails on the first point that cannot be projected.
    fn project_all<'a>(
        &self,
        points: impl IntoIterator<Item = &'a Self::InPoint>,
    ) -> Result<Vec<Self::OutPoint>, ProjectionError>
    where
        Self::InPoint: 'a,
    {
        points.into_iter().map(|p| self.project(p)).collect()
    }

    /// Unprojects all the points, preserving their order. Fails on the first point that cannot be unprojected.
    fn unproject_all<'a>(
        &self,
        points: impl IntoIterator<Item = &'a Self::OutPoint>,
    ) -> Result<Vec<Self::InPoint>, ProjectionError>
    where
        Self::OutPoint: 'a,
    {
        points.into_iter().map(|p| self.unproject(p)).collect()
    }
}
