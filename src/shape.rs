//! The closed set of shapes a drawing surface can hand to this crate.

use geo_types::{Geometry, LineString, Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

use crate::algorithm::circle::circle_ring;

/// A single sketched map feature.
///
/// The drawing layer decides the variant before calling into this crate; no
/// dynamic type inspection happens here. Coordinates are geographic
/// `(x = longitude, y = latitude)` pairs and circle radii are meters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A point marker.
    Marker(Point<f64>),
    /// A fixed-radius dot; serializes exactly like [`Shape::Marker`].
    CircleMarker(Point<f64>),
    /// A circle with a geographic center and a radius in meters.
    Circle {
        /// Center of the circle.
        center: Point<f64>,
        /// Radius in meters.
        radius: f64,
    },
    /// An axis-aligned rectangle given by its bounds.
    Rectangle(Rect<f64>),
    /// An open path. Never implicitly closed.
    Polyline(LineString<f64>),
    /// A closed area. Only the exterior ring is used.
    Polygon(Polygon<f64>),
}

impl Shape {
    /// Lower the shape to the geometry it serializes as.
    ///
    /// Circles become polygons over the ring from [`circle_ring`];
    /// rectangles become polygons over their corners in NW, NE, SE, SW
    /// order, closed back at NW; polygons keep their exterior ring only.
    pub fn to_geometry(&self) -> Geometry<f64> {
        match self {
            Shape::Marker(point) | Shape::CircleMarker(point) => Geometry::Point(*point),
            Shape::Circle { center, radius } => {
                Geometry::Polygon(Polygon::new(circle_ring(*center, *radius), vec![]))
            }
            Shape::Rectangle(rect) => Geometry::Polygon(Polygon::new(corner_ring(rect), vec![])),
            Shape::Polyline(line) => Geometry::LineString(line.clone()),
            Shape::Polygon(polygon) => {
                Geometry::Polygon(Polygon::new(polygon.exterior().clone(), vec![]))
            }
        }
    }
}

/// Ring over a rectangle's corners: NW, NE, SE, SW, NW.
fn corner_ring(rect: &Rect<f64>) -> LineString<f64> {
    let (min, max) = (rect.min(), rect.max());
    LineString::from(vec![
        (min.x, max.y),
        (max.x, max.y),
        (max.x, min.y),
        (min.x, min.y),
        (min.x, max.y),
    ])
}

#[cfg(test)]
mod tests {
    use geo_types::{coord, line_string, point, polygon};

    use super::*;

    #[test]
    fn rectangle_ring_runs_clockwise_from_northwest() {
        let rect = Rect::new(coord! { x: 10.0, y: 10.0 }, coord! { x: 30.0, y: 20.0 });
        let geometry = Shape::Rectangle(rect).to_geometry();

        let Geometry::Polygon(polygon) = geometry else {
            panic!("expected a polygon");
        };
        let ring: Vec<(f64, f64)> = polygon.exterior().coords().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            ring,
            vec![
                (10.0, 20.0),
                (30.0, 20.0),
                (30.0, 10.0),
                (10.0, 10.0),
                (10.0, 20.0),
            ]
        );
    }

    #[test]
    fn circle_marker_lowers_to_point() {
        let at = point!(x: 7.5, y: -3.25);
        assert_eq!(Shape::CircleMarker(at).to_geometry(), Geometry::Point(at));
        assert_eq!(Shape::Marker(at).to_geometry(), Geometry::Point(at));
    }

    #[test]
    fn polygon_interiors_are_dropped() {
        let with_hole = Polygon::new(
            line_string![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 0.0)],
            vec![line_string![(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 1.0)]],
        );
        let Geometry::Polygon(lowered) = Shape::Polygon(with_hole.clone()).to_geometry() else {
            panic!("expected a polygon");
        };
        assert!(lowered.interiors().is_empty());
        assert_eq!(lowered.exterior(), with_hole.exterior());
    }

    #[test]
    fn circle_lowers_to_closed_polygon() {
        let Geometry::Polygon(polygon) = (Shape::Circle {
            center: point!(x: 0.0, y: 0.0),
            radius: 500.0,
        })
        .to_geometry() else {
            panic!("expected a polygon");
        };
        let ring = polygon.exterior();
        assert_eq!(ring.0.len(), 34);
        assert_eq!(ring.0.first(), ring.0.last());
    }

    #[test]
    fn shapes_survive_serde() {
        let shapes = vec![
            Shape::Marker(point!(x: 30.0, y: 10.0)),
            Shape::Circle {
                center: point!(x: 1.0, y: 2.0),
                radius: 150.0,
            },
            Shape::Polygon(polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]),
        ];
        let json = serde_json::to_string(&shapes).unwrap();
        let back: Vec<Shape> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, shapes);
    }
}
