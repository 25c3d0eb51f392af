//! Approximate a circle as a closed polygon ring in geographic coordinates.

use geo_types::{coord, Coord, LineString, Point};

/// Number of segments in the approximating ring.
const SEGMENTS: usize = 32;

/// Meters per degree of latitude. The same constant scales longitude after
/// dividing by `cos(latitude)` to account for meridian convergence.
const METERS_PER_DEGREE: f64 = 111_111.0;

/// Approximate a circle of `radius_meters` around `center` as a closed ring.
///
/// Offsets are computed on a local tangent plane, not geodesically; that is
/// accurate enough at sketch-scale radii. The full-angle sweep already ends
/// on its starting point and the ring is then closed once more explicitly,
/// so the result has 34 coordinates with the first equal to the last.
pub fn circle_ring(center: Point<f64>, radius_meters: f64) -> LineString<f64> {
    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(SEGMENTS + 2);

    for i in 0..=SEGMENTS {
        let angle = (i as f64) * 2.0 * std::f64::consts::PI / (SEGMENTS as f64);
        let dx = radius_meters * angle.cos();
        let dy = radius_meters * angle.sin();

        let lat_offset = dy / METERS_PER_DEGREE;
        let lng_offset = dx / (METERS_PER_DEGREE * center.y().to_radians().cos());

        coords.push(coord! {
            x: center.x() + lng_offset,
            y: center.y() + lat_offset,
        });
    }

    let first = coords[0];
    coords.push(first);
    LineString::new(coords)
}
