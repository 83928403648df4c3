//! Lambert Azimuthal Equal-Area projection (spherical form).
//!
//! Used for the continental regions. Each region is a sphere of radius R
//! viewed from a centre (lon0, lat0); area is preserved everywhere, shape
//! only near the centre.
//!
//! forward: k' = sqrt(2 / (1 + g)), g = cos of the great-circle distance to
//! the centre. The antipode (g = -1) has no image.
//! inverse: z = 2 asin(rh / 2R); rh / 2R > 1 lies outside the disc.

use std::f64::consts::FRAC_PI_2;

use geo_common::LatLong;

use crate::common::{adjust_lon, EPSLN, USGS_SPHERE_RADIUS};
use crate::error::{ProjectionError, Result};
use crate::transform::ProjectionTransformation;

/// Lambert Azimuthal Equal-Area projection parameters.
#[derive(Debug, Clone)]
pub struct LambertAzimuthal {
    name: String,
    /// Sphere radius (meters)
    pub radius: f64,
    /// Centre longitude in radians
    pub lon_center: f64,
    /// Centre latitude in radians
    pub lat_center: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    sin_lat_o: f64,
    cos_lat_o: f64,
}

impl LambertAzimuthal {
    /// Create a projection centred on (`center_lon_deg`, `center_lat_deg`).
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        center_lon_deg: f64,
        center_lat_deg: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let lat_center = center_lat_deg.to_radians();
        Self {
            name: name.into(),
            radius,
            lon_center: center_lon_deg.to_radians(),
            lat_center,
            false_easting,
            false_northing,
            sin_lat_o: lat_center.sin(),
            cos_lat_o: lat_center.cos(),
        }
    }

    /// Continental projection on the USGS sphere with no false origin.
    pub fn continental(name: impl Into<String>, center_lon_deg: f64, center_lat_deg: f64) -> Self {
        Self::new(name, USGS_SPHERE_RADIUS, center_lon_deg, center_lat_deg, 0.0, 0.0)
    }
}

impl ProjectionTransformation for LambertAzimuthal {
    fn name(&self) -> &str {
        &self.name
    }

    fn forward(&self, position: LatLong) -> Result<(f64, f64)> {
        let lat = position.latitude_radians();
        let delta_lon = adjust_lon(position.longitude_radians() - self.lon_center);

        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_delta_lon, cos_delta_lon) = delta_lon.sin_cos();

        let g = self.sin_lat_o * sin_lat + self.cos_lat_o * cos_lat * cos_delta_lon;
        if (g + 1.0).abs() <= EPSLN {
            return Err(ProjectionError::Antipodal);
        }

        let ksp = self.radius * (2.0 / (1.0 + g)).sqrt();
        let x = ksp * cos_lat * sin_delta_lon + self.false_easting;
        let y = ksp * (self.cos_lat_o * sin_lat - self.sin_lat_o * cos_lat * cos_delta_lon)
            + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<LatLong> {
        let x = x - self.false_easting;
        let y = y - self.false_northing;

        let rh = (x * x + y * y).sqrt();
        let half_chord = rh / (2.0 * self.radius);
        if half_chord > 1.0 {
            return Err(ProjectionError::OutsideDisc(half_chord));
        }

        let z = 2.0 * half_chord.asin();
        let (sin_z, cos_z) = z.sin_cos();

        let mut lon = self.lon_center;
        let lat;
        if rh.abs() > EPSLN {
            lat = (self.sin_lat_o * cos_z + self.cos_lat_o * sin_z * y / rh).asin();
            if (self.lat_center.abs() - FRAC_PI_2).abs() > EPSLN {
                let temp = cos_z - self.sin_lat_o * lat.sin();
                if temp != 0.0 {
                    lon = adjust_lon(
                        self.lon_center + (x * sin_z * self.cos_lat_o).atan2(temp * rh),
                    );
                }
            } else if self.lat_center < 0.0 {
                lon = adjust_lon(self.lon_center - (-x).atan2(y));
            } else {
                lon = adjust_lon(self.lon_center + x.atan2(-y));
            }
        } else {
            lat = self.lat_center;
        }

        Ok(LatLong::new(lat.to_degrees(), lon.to_degrees()))
    }
}
