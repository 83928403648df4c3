//! Error types shared across the scene-grid crates.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors raised when validating user-supplied coordinates and identifiers.
///
/// The conversion algorithms themselves never fail with these; they report
/// "no result" through `Option` or their own error enums.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("Invalid latitude: {0} (must be -90 to 90)")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be -180 to 180)")]
    InvalidLongitude(f64),

    #[error("Unknown navigation model: {0}")]
    UnknownModel(String),

    #[error("Invalid grid address '{text}' for {model}")]
    InvalidAddress { model: String, text: String },
}

impl GeoError {
    /// Create an InvalidAddress error.
    pub fn invalid_address(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self::InvalidAddress {
            model: model.into(),
            text: text.into(),
        }
    }
}
