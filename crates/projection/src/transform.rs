//! The projection contract shared by every map projection.

use std::fmt;

use geo_common::{LatLong, ProjCoordinate};

use crate::error::Result;

/// Forward and inverse mapping between latitude/longitude and the planar
/// coordinates of one configured projection instance.
///
/// `forward` and `inverse` are mathematical inverses up to floating point
/// and iteration tolerance. A point with no image is an `Err`, never a panic.
pub trait ProjectionTransformation: Send + Sync + fmt::Debug {
    /// Short human-readable name, e.g. "Lambert Azimuthal (North America)".
    fn name(&self) -> &str;

    /// Geographic degrees to projection metres, full precision.
    fn forward(&self, position: LatLong) -> Result<(f64, f64)>;

    /// Projection metres to geographic degrees, longitude in (-180, 180].
    fn inverse(&self, x: f64, y: f64) -> Result<LatLong>;

    /// Geographic degrees to whole projection metres, `None` when the point
    /// has no image.
    fn lat_long_to_proj(&self, position: LatLong) -> Option<ProjCoordinate> {
        self.forward(position)
            .ok()
            .map(|(x, y)| ProjCoordinate::from_metres(x, y))
    }

    /// Whole projection metres to geographic degrees, `None` when the point
    /// has no image.
    fn proj_to_lat_long(&self, coord: ProjCoordinate) -> Option<LatLong> {
        self.inverse(coord.x_f64(), coord.y_f64()).ok()
    }
}
