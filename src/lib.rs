//! Geometry core for a geospatial feature playground: convert sketched map
//! shapes to and from a [Well-Known Text] subset, approximate circles as
//! polygon rings, and dump sketches as GeoJSON.
//!
//! The crate is pure data-in/data-out. It has no awareness of maps, tiles,
//! pixels, or input events: a drawing surface hands it [`Shape`] values and
//! raw WKT strings, and gets back [`geo_types::Geometry`] values and WKT
//! text. Coordinates are geographic and always ordered `(longitude,
//! latitude)` in WKT; this crate is the single place where that ordering is
//! fixed in both directions.
//!
//! ```
//! use geo_types::point;
//! use geosketch::io::wkt::{read_wkt, write_wkt};
//! use geosketch::Shape;
//!
//! let shapes = vec![
//!     Shape::Marker(point!(x: 30.0, y: 10.0)),
//!     Shape::Marker(point!(x: 3.0, y: 4.0)),
//! ];
//! let wkt = write_wkt(&shapes)?;
//! assert_eq!(wkt, "GEOMETRYCOLLECTION(POINT(30 10), POINT(3 4))");
//! assert_eq!(read_wkt(&wkt).len(), 1);
//! # Ok::<(), geosketch::GeoSketchError>(())
//! ```
//!
//! [Well-Known Text]: https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry

#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod algorithm;
pub mod error;
pub mod io;
pub mod shape;

pub use error::{GeoSketchError, Result};
pub use shape::Shape;
