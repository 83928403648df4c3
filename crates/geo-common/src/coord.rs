//! Geographic and projected coordinate values.

use crate::error::{GeoError, GeoResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic position in degrees.
///
/// No range invariant is enforced; call sites clamp before use. Use
/// [`LatLong::try_new`] when the values come from a user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLong {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a position, rejecting values outside the geographic ranges.
    pub fn try_new(latitude: f64, longitude: f64) -> GeoResult<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::InvalidLongitude(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Clamp latitude to [-90, 90] and wrap longitude into [-180, 180).
    pub fn normalized(&self) -> Self {
        let latitude = self.latitude.clamp(-90.0, 90.0);
        let longitude = (self.longitude + 180.0).rem_euclid(360.0) - 180.0;
        Self::new(latitude, longitude)
    }

    pub fn latitude_radians(&self) -> f64 {
        self.latitude.to_radians()
    }

    pub fn longitude_radians(&self) -> f64 {
        self.longitude.to_radians()
    }

    /// Largest absolute difference between the two components, in degrees.
    pub fn max_difference(&self, other: &LatLong) -> f64 {
        (self.latitude - other.latitude)
            .abs()
            .max((self.longitude - other.longitude).abs())
    }
}

impl fmt::Display for LatLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A position in a projection's planar space, in whole metres.
///
/// Only meaningful together with the projection that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjCoordinate {
    pub x: i64,
    pub y: i64,
}

impl ProjCoordinate {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Round full-precision projection metres to the nearest whole metre.
    pub fn from_metres(x: f64, y: f64) -> Self {
        Self {
            x: x.round() as i64,
            y: y.round() as i64,
        }
    }

    pub fn x_f64(&self) -> f64 {
        self.x as f64
    }

    pub fn y_f64(&self) -> f64 {
        self.y as f64
    }
}
