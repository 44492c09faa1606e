use crate::cartesian::NewCartesianPoint2d;
use crate::error::ProjectionError;
use crate::geo::{NewGeoPoint, Projection, UtmZone};
use geodesy::prelude::*;
use std::marker::PhantomData;

/// Projection backed by the [`geodesy`] crate.
///
/// Accepts any operator definition `geodesy` understands. Mainly used to cross-check the built-in
/// [`TransverseMercator`](super::TransverseMercator) projection.
pub struct GeodesyProjection<In, Out> {
    context: Minimal,
    op: OpHandle,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> GeodesyProjection<In, Out> {
    /// Creates a projection from a `geodesy` operator definition, e.g. `"utm zone=32"`.
    pub fn new(definition: &str) -> Result<Self, ProjectionError> {
        let mut context = Minimal::new();
        let op = context
            .op(definition)
            .map_err(|err| ProjectionError::Backend(err.to_string()))?;
        Ok(Self {
            context,
            op,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        })
    }

    /// UTM projection of the given zone on the WGS84 ellipsoid, northern hemisphere convention.
    pub fn utm(zone: UtmZone) -> Result<Self, ProjectionError> {
        Self::new(&format!("utm zone={zone} ellps=WGS84"))
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for GeodesyProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Result<Self::OutPoint, ProjectionError> {
        let (lat, lon) = (input.lat(), input.lon());
        if !lat.is_finite() || !lon.is_finite() || lat.abs() >= 90.0 || lon.abs() > 180.0 {
            return Err(ProjectionError::OutOfDomain { lat, lon });
        }

        let mut data = [Coor2D::geo(lat, lon)];
        self.context
            .apply(self.op, Fwd, &mut data)
            .map_err(|err| ProjectionError::Backend(err.to_string()))?;

        let [x, y] = data[0].0;
        if !x.is_finite() || !y.is_finite() {
            return Err(ProjectionError::NonFinite { x: lon, y: lat });
        }

        Ok(Out::new(x, y))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Result<Self::InPoint, ProjectionError> {
        let mut data = [Coor2D([input.x(), input.y()])];
        self.context
            .apply(self.op, Inv, &mut data)
            .map_err(|err| ProjectionError::Backend(err.to_string()))?;

        let [lon, lat] = data[0].0;
        if !lon.is_finite() || !lat.is_finite() {
            return Err(ProjectionError::NonFinite {
                x: input.x(),
                y: input.y(),
            });
        }

        Ok(In::latlon(lat.to_degrees(), lon.to_degrees()))
    }
}
