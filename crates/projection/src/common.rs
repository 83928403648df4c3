//! Shared helpers for the projection formulas.
//!
//! Radians in, radians out. Names follow the classic GCTP routines so the
//! formulas can be checked against the published algorithms.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{ProjectionError, Result};

/// Tolerance for "equal" angles and distances in the projection formulas.
pub const EPSLN: f64 = 1.0e-10;

/// Iteration budget for [`phi2z`].
pub const PHI2Z_MAX_ITERATIONS: usize = 15;

/// Convergence threshold for [`phi2z`], in radians.
pub const PHI2Z_TOLERANCE: f64 = 1.0e-10;

/// WGS84 semi-major axis (metres).
pub const WGS84_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS84 semi-minor axis (metres).
pub const WGS84_MINOR_AXIS: f64 = 6_356_752.314_245;

/// WGS84 flattening.
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Radius of the USGS authalic sphere used for the continental projections.
pub const USGS_SPHERE_RADIUS: f64 = 6_370_997.0;

/// Radius of the sphere the MODIS sinusoidal grid is defined on.
pub const MODIS_SPHERE_RADIUS: f64 = 6_371_007.181;

/// Wrap a longitude into (-pi, pi].
pub fn adjust_lon(lon: f64) -> f64 {
    if lon.abs() <= PI && lon != -PI {
        return lon;
    }
    let wrapped = (lon + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped <= -PI {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

/// Radius of the parallel at `sinphi`/`cosphi` on the unit ellipsoid.
pub fn msfnz(eccent: f64, sinphi: f64, cosphi: f64) -> f64 {
    let con = eccent * sinphi;
    cosphi / (1.0 - con * con).sqrt()
}

/// Conformal-latitude helper `t` used by the stereographic family.
pub fn tsfnz(eccent: f64, phi: f64, sinphi: f64) -> f64 {
    let con = eccent * sinphi;
    let com = 0.5 * eccent;
    let con = ((1.0 - con) / (1.0 + con)).powf(com);
    (0.5 * (FRAC_PI_2 - phi)).tan() / con
}

/// Scale constant for polar stereographic with the true-scale latitude at
/// the pole.
pub fn e4fn(eccent: f64) -> f64 {
    let con = 1.0 + eccent;
    let com = 1.0 - eccent;
    (con.powf(con) * com.powf(com)).sqrt()
}

/// Recover geodetic latitude from the conformal helper `ts` by fixed-point
/// iteration.
///
/// Starts from the spherical solution and stops once the correction drops
/// to [`PHI2Z_TOLERANCE`]. Running out of iterations is reported as
/// [`ProjectionError::NoConvergence`]; the caller decides how to report it.
pub fn phi2z(eccent: f64, ts: f64) -> Result<f64> {
    let eccnth = 0.5 * eccent;
    let mut phi = FRAC_PI_2 - 2.0 * ts.atan();
    for _ in 0..PHI2Z_MAX_ITERATIONS {
        let con = eccent * phi.sin();
        let dphi = FRAC_PI_2 - 2.0 * (ts * ((1.0 - con) / (1.0 + con)).powf(eccnth)).atan() - phi;
        phi += dphi;
        if dphi.abs() <= PHI2Z_TOLERANCE {
            return Ok(phi);
        }
    }
    Err(ProjectionError::NoConvergence {
        iterations: PHI2Z_MAX_ITERATIONS,
    })
}

/// First eccentricity from the two axes.
pub fn eccentricity(major_axis: f64, minor_axis: f64) -> f64 {
    let ratio = minor_axis / major_axis;
    (1.0 - ratio * ratio).sqrt()
}
