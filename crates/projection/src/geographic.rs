//! Fake geographic projection.
//!
//! Presents latitude/longitude as planar metres by scaling degrees with the
//! equatorial length of one degree. Lets geographic datasets use the same
//! projection-coordinate plumbing as real projections.

use std::f64::consts::PI;

use geo_common::LatLong;

use crate::common::{adjust_lon, WGS84_MAJOR_AXIS};
use crate::error::{ProjectionError, Result};
use crate::transform::ProjectionTransformation;

/// Equatorial metres per degree on WGS84.
pub const METRES_PER_DEGREE: f64 = WGS84_MAJOR_AXIS * PI / 180.0;

#[derive(Debug, Clone, Default)]
pub struct FakeGeographic;

impl FakeGeographic {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectionTransformation for FakeGeographic {
    fn name(&self) -> &str {
        "Geographic"
    }

    fn forward(&self, position: LatLong) -> Result<(f64, f64)> {
        Ok((
            position.longitude * METRES_PER_DEGREE,
            position.latitude * METRES_PER_DEGREE,
        ))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<LatLong> {
        let lat = y / METRES_PER_DEGREE;
        if lat.abs() > 90.0 {
            return Err(ProjectionError::LatitudeOutOfRange(lat.to_radians()));
        }
        let lon = adjust_lon((x / METRES_PER_DEGREE).to_radians()).to_degrees();
        Ok(LatLong::new(lat, lon))
    }
}
