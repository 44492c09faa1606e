//! Text rendering of geometries as WKT and GeoJSON.
//!
//! Coordinates are written as `longitude latitude` with six decimal digits. Vertices are written in the order they are
//! stored, without any reordering or deduplication.

use crate::{LatLng, LineString, Region};
use std::fmt::Write;

/// Geometry that can be rendered as Well Known Text.
pub trait ToWkt {
    /// WKT representation of the geometry.
    fn to_wkt(&self) -> String;
}

/// Geometry that can be rendered as a GeoJSON geometry object.
pub trait ToGeoJson {
    /// Compact GeoJSON representation of the geometry.
    fn to_geojson(&self) -> String;
}

fn wkt_coords(vertices: &[LatLng]) -> String {
    let mut result = String::new();
    for (i, vertex) in vertices.iter().enumerate() {
        if i > 0 {
            result.push_str(", ");
        }
        let _ = write!(result, "{:.6} {:.6}", vertex.lng(), vertex.lat());
    }

    result
}

fn geojson_position(vertex: &LatLng) -> String {
    format!("[{:.6},{:.6}]", vertex.lng(), vertex.lat())
}

fn geojson_positions(vertices: &[LatLng]) -> String {
    let positions: Vec<String> = vertices.iter().map(geojson_position).collect();
    format!("[{}]", positions.join(","))
}

impl ToWkt for LatLng {
    fn to_wkt(&self) -> String {
        format!("POINT ({:.6} {:.6})", self.lng(), self.lat())
    }
}

impl ToWkt for LineString {
    fn to_wkt(&self) -> String {
        format!("LINESTRING ({})", wkt_coords(self.vertices()))
    }
}

impl ToWkt for Region {
    fn to_wkt(&self) -> String {
        format!("POLYGON (({}))", wkt_coords(self.vertices()))
    }
}

impl ToGeoJson for LatLng {
    fn to_geojson(&self) -> String {
        format!(
            r#"{{"type":"Point","coordinates":{}}}"#,
            geojson_position(self)
        )
    }
}

impl ToGeoJson for LineString {
    fn to_geojson(&self) -> String {
        format!(
            r#"{{"type":"LineString","coordinates":{}}}"#,
            geojson_positions(self.vertices())
        )
    }
}

impl ToGeoJson for Region {
    fn to_geojson(&self) -> String {
        format!(
            r#"{{"type":"Polygon","coordinates":[{}]}}"#,
            geojson_positions(self.vertices())
        )
    }
}

#[cfg(feature = "geojson")]
mod geojson_impls {
    use crate::{LatLng, LineString, Region};

    fn position(vertex: &LatLng) -> geojson::Position {
        vec![vertex.lng(), vertex.lat()]
    }

    impl From<&LatLng> for geojson::Geometry {
        fn from(value: &LatLng) -> Self {
            geojson::Geometry::new(geojson::Value::Point(position(value)))
        }
    }

    impl From<&LineString> for geojson::Geometry {
        fn from(value: &LineString) -> Self {
            geojson::Geometry::new(geojson::Value::LineString(
                value.vertices().iter().map(position).collect(),
            ))
        }
    }

    impl From<&Region> for geojson::Geometry {
        fn from(value: &Region) -> Self {
            geojson::Geometry::new(geojson::Value::Polygon(vec![value
                .vertices()
                .iter()
                .map(position)
                .collect()]))
        }
    }
}
