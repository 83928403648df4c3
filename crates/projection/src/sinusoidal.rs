//! Sinusoidal (Sanson-Flamsteed) projection on a sphere.
//!
//! forward: x = R·(λ - λ₀)·cos(φ), y = R·φ
//! inverse: φ = y/R, λ = λ₀ + x/(R·cos(φ))
//!
//! This is the projection the MODIS tile grid is laid out in.

use std::f64::consts::{FRAC_PI_2, PI};

use geo_common::LatLong;

use crate::common::{adjust_lon, EPSLN, MODIS_SPHERE_RADIUS};
use crate::error::{ProjectionError, Result};
use crate::transform::ProjectionTransformation;

#[derive(Debug, Clone)]
pub struct Sinusoidal {
    name: String,
    /// Sphere radius (meters)
    pub radius: f64,
    /// Central meridian in radians
    pub lon_center: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl Sinusoidal {
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        center_lon_deg: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        Self {
            name: name.into(),
            radius,
            lon_center: center_lon_deg.to_radians(),
            false_easting,
            false_northing,
        }
    }

    /// The global MODIS sinusoidal grid (R = 6371007.181 m, λ₀ = 0).
    pub fn modis() -> Self {
        Self::new("Sinusoidal (MODIS)", MODIS_SPHERE_RADIUS, 0.0, 0.0, 0.0)
    }
}

impl ProjectionTransformation for Sinusoidal {
    fn name(&self) -> &str {
        &self.name
    }

    fn forward(&self, position: LatLong) -> Result<(f64, f64)> {
        let lat = position.latitude_radians();
        let delta_lon = adjust_lon(position.longitude_radians() - self.lon_center);
        let x = self.radius * delta_lon * lat.cos() + self.false_easting;
        let y = self.radius * lat + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<LatLong> {
        let x = x - self.false_easting;
        let y = y - self.false_northing;

        let lat = y / self.radius;
        if lat.abs() > FRAC_PI_2 + EPSLN {
            return Err(ProjectionError::LatitudeOutOfRange(lat));
        }
        let lat = lat.clamp(-FRAC_PI_2, FRAC_PI_2);

        let lon = if (lat.abs() - FRAC_PI_2).abs() > EPSLN {
            let delta_lon = x / (self.radius * lat.cos());
            if delta_lon.abs() > PI + EPSLN {
                return Err(ProjectionError::OutsideOutline);
            }
            adjust_lon(self.lon_center + delta_lon)
        } else {
            // At the poles, longitude is undefined
            self.lon_center
        };

        Ok(LatLong::new(lat.to_degrees(), lon.to_degrees()))
    }
}
