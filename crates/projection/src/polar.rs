//! Polar Stereographic projection (ellipsoidal).
//!
//! Used for Antarctica and the polar 120 km navigation grid. The centre
//! latitude is the latitude of true scale; its sign selects the pole. When
//! it sits exactly on the pole the e4 scale form is used instead.
//!
//! The inverse needs the iterative conformal latitude solve in
//! [`phi2z`](crate::common::phi2z).

use std::f64::consts::FRAC_PI_2;

use geo_common::LatLong;

use crate::common::{
    adjust_lon, e4fn, eccentricity, msfnz, phi2z, tsfnz, EPSLN, WGS84_MAJOR_AXIS,
    WGS84_MINOR_AXIS,
};
use crate::error::Result;
use crate::transform::ProjectionTransformation;

#[derive(Debug, Clone)]
pub struct PolarStereographic {
    name: String,
    /// Semi-major axis (meters)
    pub r_major: f64,
    /// Semi-minor axis (meters)
    pub r_minor: f64,
    /// Longitude pointing "down" from the pole, radians
    pub center_lon: f64,
    /// Latitude of true scale, radians
    pub center_lat: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    e: f64,
    /// +1 for the north pole aspect, -1 for the south
    fac: f64,
    /// True-scale latitude is away from the pole
    scaled: bool,
    mcs: f64,
    tcs: f64,
    e4: f64,
}

impl PolarStereographic {
    pub fn new(
        name: impl Into<String>,
        r_major: f64,
        r_minor: f64,
        center_lon_deg: f64,
        center_lat_deg: f64,
        false_easting: f64,
        false_northing: f64,
    ) -> Self {
        let center_lat = center_lat_deg.to_radians();
        let e = eccentricity(r_major, r_minor);
        let fac = if center_lat < 0.0 { -1.0 } else { 1.0 };

        let scaled = (center_lat.abs() - FRAC_PI_2).abs() > EPSLN;
        let (mcs, tcs, e4) = if scaled {
            let con1 = fac * center_lat;
            let sinphi = con1.sin();
            (msfnz(e, sinphi, con1.cos()), tsfnz(e, con1, sinphi), 0.0)
        } else {
            (1.0, 1.0, e4fn(e))
        };

        Self {
            name: name.into(),
            r_major,
            r_minor,
            center_lon: center_lon_deg.to_radians(),
            center_lat,
            false_easting,
            false_northing,
            e,
            fac,
            scaled,
            mcs,
            tcs,
            e4,
        }
    }

    /// Antarctic aspect on WGS84, true scale at 71S, 0E pointing up.
    pub fn antarctic() -> Self {
        Self::new(
            "Polar Stereographic (South)",
            WGS84_MAJOR_AXIS,
            WGS84_MINOR_AXIS,
            0.0,
            -71.0,
            0.0,
            0.0,
        )
    }

    /// Arctic aspect on WGS84, true scale at 70N, 45W pointing down.
    pub fn arctic() -> Self {
        Self::new(
            "Polar Stereographic (North)",
            WGS84_MAJOR_AXIS,
            WGS84_MINOR_AXIS,
            -45.0,
            70.0,
            0.0,
            0.0,
        )
    }

    pub fn is_south(&self) -> bool {
        self.fac < 0.0
    }
}

impl ProjectionTransformation for PolarStereographic {
    fn name(&self) -> &str {
        &self.name
    }

    fn forward(&self, position: LatLong) -> Result<(f64, f64)> {
        let con1 = self.fac * adjust_lon(position.longitude_radians() - self.center_lon);
        let con2 = self.fac * position.latitude_radians();
        let ts = tsfnz(self.e, con2, con2.sin());

        let rh = if self.scaled {
            self.r_major * self.mcs * ts / self.tcs
        } else {
            2.0 * self.r_major * ts / self.e4
        };

        let x = self.fac * rh * con1.sin() + self.false_easting;
        let y = -self.fac * rh * con1.cos() + self.false_northing;
        Ok((x, y))
    }

    fn inverse(&self, x: f64, y: f64) -> Result<LatLong> {
        let x = (x - self.false_easting) * self.fac;
        let y = (y - self.false_northing) * self.fac;
        let rh = (x * x + y * y).sqrt();

        let ts = if self.scaled {
            rh * self.tcs / (self.r_major * self.mcs)
        } else {
            rh * self.e4 / (self.r_major * 2.0)
        };

        let lat = self.fac * phi2z(self.e, ts)?;
        let lon = if rh == 0.0 {
            self.center_lon
        } else {
            adjust_lon(self.fac * x.atan2(-y) + self.center_lon)
        };

        Ok(LatLong::new(lat.to_degrees(), lon.to_degrees()))
    }
}
