//! Generators for synthetic coordinates and scene dates.
//!
//! These produce predictable inputs so tests can assert exact outcomes.

use chrono::{Duration, NaiveDate};

/// Creates a regular sweep of (latitude, longitude) points over a box.
///
/// Points start at the south-west corner and step by `step` degrees, with
/// both edges included when they fall on the step.
///
/// # Example
///
/// ```
/// use test_utils::lat_long_sweep;
///
/// let points = lat_long_sweep((-10.0, -10.0, 10.0, 10.0), 10.0);
/// assert_eq!(points.len(), 9);
/// assert_eq!(points[0], (-10.0, -10.0));
/// ```
pub fn lat_long_sweep(bbox: (f64, f64, f64, f64), step: f64) -> Vec<(f64, f64)> {
    let (west, south, east, north) = bbox;
    let lat_steps = ((north - south) / step).floor() as usize;
    let lon_steps = ((east - west) / step).floor() as usize;

    let mut points = Vec::with_capacity((lat_steps + 1) * (lon_steps + 1));
    for i in 0..=lat_steps {
        for j in 0..=lon_steps {
            points.push((south + i as f64 * step, west + j as f64 * step));
        }
    }
    points
}

/// Creates `count` dates starting at `start`, `step_days` apart.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use test_utils::date_series;
///
/// let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let dates = date_series(start, 3, 16);
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2000, 2, 2).unwrap());
/// ```
pub fn date_series(start: NaiveDate, count: usize, step_days: i64) -> Vec<NaiveDate> {
    (0..count)
        .map(|i| start + Duration::days(step_days * i as i64))
        .collect()
}

/// Creates Landsat-style entity identifiers for a path/row and a run of
/// acquisition days.
///
/// Format: `LT5{path:03}{row:03}{year}{doy:03}`.
pub fn entity_ids(path: i32, row: i32, dates: &[NaiveDate]) -> Vec<String> {
    use chrono::Datelike;

    dates
        .iter()
        .map(|d| format!("LT5{:03}{:03}{}{:03}", path, row, d.year(), d.ordinal()))
        .collect()
}
