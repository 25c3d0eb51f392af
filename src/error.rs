//! Defines [`GeoSketchError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoSketchError {
    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),

    /// [serde_json::Error]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// WKT decoding error
    #[error("WKT error: {0}")]
    Wkt(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoSketchError>;
