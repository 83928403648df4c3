//! Test support for the scene-grid crates.
//!
//! - [`fixtures`]: reference places, WRS-2 scenes and MODIS tile data
//! - [`generators`]: coordinate sweeps, date runs and entity identifiers
//! - tolerance assertions for degrees and metres
//!
//! Pull it in as a dev-dependency with a path to `crates/test-utils`.

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;

/// Signed difference `a - b` between two longitudes, wrapped into
/// (-180, 180] so values either side of the antimeridian compare close.
pub fn longitude_delta(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Assert two numbers differ by no more than a tolerance.
///
/// ```
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(850_045.49, 850_045.5, 0.05);
/// assert_approx_eq!(0.1 + 0.2, 0.3, 1e-12, "sum of {} parts", 2);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($actual:expr, $expected:expr, $tolerance:expr $(,)?) => {
        $crate::assert_approx_eq!($actual, $expected, $tolerance, "values differ")
    };
    ($actual:expr, $expected:expr, $tolerance:expr, $($msg:tt)+) => {{
        let (actual, expected, tolerance) = ($actual as f64, $expected as f64, $tolerance as f64);
        let off_by = (actual - expected).abs();
        assert!(
            off_by <= tolerance,
            "{}: got {}, expected {} (off by {:e}, tolerance {:e})",
            format_args!($($msg)+),
            actual,
            expected,
            off_by,
            tolerance
        );
    }};
}

/// Assert two `(latitude, longitude)` pairs in degrees agree, treating
/// longitudes across the antimeridian as neighbours.
///
/// ```
/// use test_utils::assert_lat_long_near;
///
/// assert_lat_long_near!((10.0, 179.9999999), (10.0, -180.0), 1e-6);
/// ```
#[macro_export]
macro_rules! assert_lat_long_near {
    (($lat:expr, $lon:expr), ($expected_lat:expr, $expected_lon:expr), $tolerance:expr) => {{
        let tolerance = $tolerance as f64;
        $crate::assert_approx_eq!($lat, $expected_lat, tolerance, "latitude");
        let off_by = $crate::longitude_delta($lon as f64, $expected_lon as f64).abs();
        assert!(
            off_by <= tolerance,
            "longitude: got {}, expected {} (off by {:e})",
            $lon,
            $expected_lon,
            off_by
        );
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longitude_delta_wraps() {
        assert_approx_eq!(longitude_delta(179.0, -179.0), -2.0, 1e-12);
        assert_approx_eq!(longitude_delta(-179.0, 179.0), 2.0, 1e-12);
        assert_approx_eq!(longitude_delta(10.0, 370.0), 0.0, 1e-12);
    }

    #[test]
    #[should_panic(expected = "latitude: got 1.5")]
    fn test_assert_lat_long_near_reports_axis() {
        assert_lat_long_near!((1.5, 0.0), (1.0, 0.0), 0.1);
    }

    #[test]
    #[should_panic(expected = "off by")]
    fn test_assert_approx_eq_fails_outside_tolerance() {
        assert_approx_eq!(2.0, 1.0, 0.5);
    }
}
