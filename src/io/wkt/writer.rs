//! Serialize shapes and geometries as WKT text.

use geo_types::{Coord, Geometry, LineString};

use crate::error::{GeoSketchError, Result};
use crate::shape::Shape;

/// Serialize drawn shapes as WKT, in order.
///
/// Zero shapes produce the empty string, one shape its bare WKT, and two or
/// more a `GEOMETRYCOLLECTION(…)` of the members.
pub fn write_wkt(shapes: &[Shape]) -> Result<String> {
    let mut members = shapes
        .iter()
        .map(|shape| write_geometry(&shape.to_geometry()))
        .collect::<Result<Vec<String>>>()?;

    Ok(match members.len() {
        0 => String::new(),
        1 => members.remove(0),
        _ => format!("GEOMETRYCOLLECTION({})", members.join(", ")),
    })
}

/// Serialize a single model geometry as WKT.
///
/// Supports the playground subset, recursing into collections. MULTIPOINT
/// members are wrapped in their own parentheses so that a collection of any
/// size, including one, reads back as a MultiPoint. Any other
/// [`Geometry`] variant is an [`GeoSketchError::IncorrectGeometryType`]
/// error.
pub fn write_geometry(geometry: &Geometry<f64>) -> Result<String> {
    match geometry {
        Geometry::Point(point) => Ok(format!("POINT({})", coord_wkt(point.0))),
        Geometry::LineString(line) => Ok(format!("LINESTRING({})", coords_wkt(line))),
        Geometry::Polygon(polygon) => Ok(format!("POLYGON(({}))", coords_wkt(polygon.exterior()))),
        Geometry::MultiPoint(points) => {
            let members = points
                .0
                .iter()
                .map(|point| format!("({})", coord_wkt(point.0)))
                .collect::<Vec<_>>()
                .join(", ");
            Ok(format!("MULTIPOINT({members})"))
        }
        Geometry::GeometryCollection(collection) => {
            let members = collection
                .0
                .iter()
                .map(write_geometry)
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("GEOMETRYCOLLECTION({})", members.join(", ")))
        }
        Geometry::Line(_) => Err(unsupported("Line")),
        Geometry::MultiLineString(_) => Err(unsupported("MultiLineString")),
        Geometry::MultiPolygon(_) => Err(unsupported("MultiPolygon")),
        Geometry::Rect(_) => Err(unsupported("Rect")),
        Geometry::Triangle(_) => Err(unsupported("Triangle")),
    }
}

fn unsupported(name: &str) -> GeoSketchError {
    GeoSketchError::IncorrectGeometryType(name.into())
}

/// `lng1 lat1, lng2 lat2, …` over a line's coordinates.
fn coords_wkt(line: &LineString<f64>) -> String {
    line.coords()
        .map(|coord| coord_wkt(*coord))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `lng lat`, using the numbers' default display form.
fn coord_wkt(coord: Coord<f64>) -> String {
    format!("{} {}", coord.x, coord.y)
}
