//! Reader and writer implementations for the interchange formats the
//! playground speaks: a WKT subset and GeoJSON.

pub mod geojson;
pub mod wkt;
