//! Write drawn shapes as a GeoJSON feature collection.

use std::io::Write;

use geojson::{Feature, FeatureCollection, JsonObject};

use crate::error::Result;
use crate::shape::Shape;

/// Build the feature collection for a sketch, one feature per shape.
///
/// Circles and rectangles are lowered to polygons exactly as the WKT writer
/// lowers them, so the dump is a structural view of what would be
/// serialized, with an empty properties object per feature.
pub fn feature_collection(shapes: &[Shape]) -> FeatureCollection {
    let features = shapes
        .iter()
        .map(|shape| Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(
                &shape.to_geometry(),
            ))),
            id: None,
            properties: Some(JsonObject::new()),
            foreign_members: None,
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Write a sketch to `writer` as pretty-printed GeoJSON.
pub fn write_geojson<W: Write>(shapes: &[Shape], writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &feature_collection(shapes))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::BufWriter;

    use geo_types::point;
    use geojson::{GeoJson, Value};

    use super::*;

    fn sketch() -> Vec<Shape> {
        vec![
            Shape::Marker(point!(x: 30.0, y: 10.0)),
            Shape::Circle {
                center: point!(x: 0.0, y: 45.0),
                radius: 250.0,
            },
        ]
    }

    #[test]
    fn one_feature_per_shape() {
        let collection = feature_collection(&sketch());
        assert_eq!(collection.features.len(), 2);

        let values: Vec<_> = collection
            .features
            .iter()
            .map(|feature| feature.geometry.as_ref().map(|g| &g.value))
            .collect();
        assert!(matches!(values[0], Some(Value::Point(_))));
        assert!(matches!(values[1], Some(Value::Polygon(_))));
    }

    #[test]
    fn features_carry_empty_properties() {
        let collection = feature_collection(&sketch());
        for feature in &collection.features {
            assert_eq!(feature.properties, Some(JsonObject::new()));
        }
    }

    #[test]
    fn written_output_parses_back() {
        let mut output_buffer = Vec::new();
        let writer = BufWriter::new(&mut output_buffer);
        write_geojson(&sketch(), writer).unwrap();

        let output_string = String::from_utf8(output_buffer).unwrap();
        let parsed: GeoJson = output_string.parse().unwrap();
        let GeoJson::FeatureCollection(collection) = parsed else {
            panic!("expected a feature collection");
        };
        assert_eq!(collection.features.len(), 2);
    }

    #[test]
    fn no_shapes_dump_an_empty_collection() {
        let mut output_buffer = Vec::new();
        write_geojson(&[], &mut output_buffer).unwrap();
        let output_string = String::from_utf8(output_buffer).unwrap();
        assert!(output_string.contains("\"FeatureCollection\""));
        assert!(output_string.contains("\"features\": []"));
    }
}
