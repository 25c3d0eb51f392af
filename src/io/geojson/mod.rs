//! Dump drawn shapes to [GeoJSON](https://geojson.org/).

pub use writer::{feature_collection, write_geojson};

mod writer;
