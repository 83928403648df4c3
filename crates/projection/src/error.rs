//! Error types for projection math.

use thiserror::Error;

/// Reasons a coordinate has no image under a projection.
///
/// Domain errors (a point the projection cannot represent) are kept apart
/// from [`ProjectionError::NoConvergence`] so callers can report the latter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Lambert azimuthal: the point is antipodal to the projection centre.
    #[error("point is antipodal to the projection centre")]
    Antipodal,

    /// Lambert azimuthal: the planar point lies outside the representable disc.
    #[error("planar point lies outside the projection disc (rh/2R = {0:.6})")]
    OutsideDisc(f64),

    /// Sinusoidal: the implied latitude is beyond a pole.
    #[error("implied latitude {0:.6} rad exceeds +/-90 degrees")]
    LatitudeOutOfRange(f64),

    /// Sinusoidal: the planar point lies outside the world outline.
    #[error("planar point lies outside the projection outline")]
    OutsideOutline,

    /// Iterative latitude inversion did not settle within its budget.
    #[error("latitude inversion did not converge after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

impl ProjectionError {
    /// True for errors meaning "this point has no image", as opposed to a
    /// numerical failure.
    pub fn is_domain_error(&self) -> bool {
        !matches!(self, ProjectionError::NoConvergence { .. })
    }
}

/// Result type for projection operations.
pub type Result<T> = std::result::Result<T, ProjectionError>;
