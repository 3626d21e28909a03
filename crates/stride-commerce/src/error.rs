//! Catalog error types.

use thiserror::Error;

/// Errors that can occur at the catalog's parsing boundary.
///
/// Flag selection itself is total and cannot fail; these cover the wire
/// boundary and upstream invariants.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Release date string could not be parsed.
    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),

    /// Listing has a zero colorway count.
    #[error("Listing has no colorways: {0}")]
    NoColorways(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}

impl From<chrono::ParseError> for CatalogError {
    fn from(e: chrono::ParseError) -> Self {
        CatalogError::InvalidReleaseDate(e.to_string())
    }
}
