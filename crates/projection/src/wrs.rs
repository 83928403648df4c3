//! Worldwide Reference System (WRS) orbital path/row model.
//!
//! Converts latitude/longitude to a Landsat path/row with a circular-orbit
//! model. WRS-1 and WRS-2 share the algorithm and differ only in their
//! orbital constants.
//!
//! Along-track position is the central angle `u` from the equator crossing:
//! - geocentric latitude: sin(φc) = -s·sin(i)·sin(u), s = node direction sign
//! - row = equator_row + u / (2π / scenes_per_orbit)
//! - ground-track longitude = node longitude + atan2(cos(i)·sin(u), cos(u))
//!   - u · days_per_cycle / orbits_per_cycle (earth spin during the pass)
//!
//! Paths number westward from path 1, one path every 360° / orbits_per_cycle
//! at the equator. Consecutive orbits are `days_per_cycle` paths apart, which
//! is the path shift applied when a row wraps into the neighbouring orbit.

use std::f64::consts::PI;

use geo_common::LatLong;
use serde::{Deserialize, Serialize};

use crate::common::WGS84_FLATTENING;

/// Constants describing one reference system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalParameters {
    pub name: &'static str,
    /// Orbits (paths) in one repeat cycle
    pub orbits_per_cycle: i32,
    /// Days in one repeat cycle
    pub days_per_cycle: i32,
    /// Orbital inclination in degrees
    pub inclination_deg: f64,
    /// Longitude where path 1 crosses the equator on the descending pass
    pub path1_longitude_deg: f64,
    /// Rows along one full orbit
    pub scenes_per_orbit: i32,
    /// Row at the descending equator crossing
    pub descending_equator_row: i32,
}

impl OrbitalParameters {
    /// Landsat 1-3: 18-day cycle, 251 orbits.
    pub const WRS1: OrbitalParameters = OrbitalParameters {
        name: "WRS-1",
        orbits_per_cycle: 251,
        days_per_cycle: 18,
        inclination_deg: 99.092,
        path1_longitude_deg: -65.48,
        scenes_per_orbit: 248,
        descending_equator_row: 60,
    };

    /// Landsat 4 onward: 16-day cycle, 233 orbits.
    pub const WRS2: OrbitalParameters = OrbitalParameters {
        name: "WRS-2",
        orbits_per_cycle: 233,
        days_per_cycle: 16,
        inclination_deg: 98.2096,
        path1_longitude_deg: -64.6,
        scenes_per_orbit: 248,
        descending_equator_row: 60,
    };
}

/// Which half of the orbit rows are counted along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeCrossing {
    /// Daytime half: rows increase southward from the north turning point.
    Descending,
    /// Night half: rows increase northward from the south turning point.
    Ascending,
}

/// An integer path/row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathRow {
    pub path: i32,
    pub row: i32,
}

impl PathRow {
    pub const fn new(path: i32, row: i32) -> Self {
        Self { path, row }
    }
}

/// A fractional path/row before rounding and wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathRowF64 {
    pub path: f64,
    pub row: f64,
}

/// Orbital model for one reference system and node crossing.
///
/// Immutable once built; the trigonometric constants are precomputed.
#[derive(Debug, Clone)]
pub struct OrbitalPathRowModel {
    params: OrbitalParameters,
    node: NodeCrossing,
    sin_inclination: f64,
    cos_inclination: f64,
    /// Row at the equator crossing of the selected node
    equator_row: f64,
    /// Longitude of path 1 at the selected equator crossing, radians
    reference_longitude: f64,
    /// +1 descending, -1 ascending
    direction: f64,
    /// Earth rotations per orbit, relative to the orbit plane
    earth_spin_ratio: f64,
    /// (1 - f)^2, converts between geodetic and geocentric latitude
    flattening_ratio: f64,
    radians_per_row: f64,
    radians_per_path: f64,
}

impl OrbitalPathRowModel {
    pub fn new(params: OrbitalParameters, node: NodeCrossing) -> Self {
        let inclination = params.inclination_deg.to_radians();
        let earth_spin_ratio = params.days_per_cycle as f64 / params.orbits_per_cycle as f64;
        let descending_longitude = params.path1_longitude_deg.to_radians();

        let (equator_row, reference_longitude, direction) = match node {
            NodeCrossing::Descending => (
                params.descending_equator_row as f64,
                descending_longitude,
                1.0,
            ),
            // Half an orbit later the track has swung through 180° in the
            // orbit plane while the earth turned under it.
            NodeCrossing::Ascending => (
                (params.descending_equator_row + params.scenes_per_orbit / 2) as f64,
                descending_longitude + PI - PI * earth_spin_ratio,
                -1.0,
            ),
        };

        let flattening = 1.0 - WGS84_FLATTENING;

        Self {
            params,
            node,
            sin_inclination: inclination.sin(),
            cos_inclination: inclination.cos(),
            equator_row,
            reference_longitude,
            direction,
            earth_spin_ratio,
            flattening_ratio: flattening * flattening,
            radians_per_row: 2.0 * PI / params.scenes_per_orbit as f64,
            radians_per_path: 2.0 * PI / params.orbits_per_cycle as f64,
        }
    }

    /// WRS-1 on the descending node.
    pub fn wrs1() -> Self {
        Self::new(OrbitalParameters::WRS1, NodeCrossing::Descending)
    }

    /// WRS-2 on the descending node.
    pub fn wrs2() -> Self {
        Self::new(OrbitalParameters::WRS2, NodeCrossing::Descending)
    }

    pub fn params(&self) -> &OrbitalParameters {
        &self.params
    }

    pub fn node(&self) -> NodeCrossing {
        self.node
    }

    /// Longitude offset from the equator crossing for central angle `u`.
    fn track_longitude_offset(&self, u: f64) -> f64 {
        (self.cos_inclination * u.sin()).atan2(u.cos()) - u * self.earth_spin_ratio
    }

    /// Fractional path/row of a position, before rounding or wrapping.
    pub fn lat_long_to_path_row_f64(&self, position: LatLong) -> PathRowF64 {
        let lat = position.latitude_radians();
        let lon = position.longitude_radians();

        let geocentric_lat = (self.flattening_ratio * lat.tan()).atan();
        let sin_u =
            (-self.direction * geocentric_lat.sin() / self.sin_inclination).clamp(-1.0, 1.0);
        let u = sin_u.asin();

        let row = self.equator_row + u / self.radians_per_row;
        let node_longitude = lon - self.track_longitude_offset(u);
        let path = 1.0 + (self.reference_longitude - node_longitude) / self.radians_per_path;

        PathRowF64 { path, row }
    }

    /// Path/row of the scene containing a position.
    pub fn lat_long_to_path_row(&self, position: LatLong) -> PathRow {
        let fractional = self.lat_long_to_path_row_f64(position);
        let scenes = self.params.scenes_per_orbit;
        let shift = self.params.days_per_cycle as f64;

        let mut row = fractional.row.round() as i32;
        let mut path = fractional.path;
        if row < 1 {
            row += scenes;
            path -= shift;
        } else if row > scenes {
            row -= scenes;
            path += shift;
        }

        let orbits = self.params.orbits_per_cycle;
        let path = (path.round() as i32 - 1).rem_euclid(orbits) + 1;
        PathRow { path, row }
    }

    /// Centre of a (possibly fractional) path/row.
    ///
    /// Exact algebraic inverse of [`Self::lat_long_to_path_row_f64`];
    /// longitude is normalised to (-180, 180].
    pub fn path_row_to_lat_long(&self, path: f64, row: f64) -> LatLong {
        let u = (row - self.equator_row) * self.radians_per_row;

        let geocentric_lat = (-self.direction * self.sin_inclination * u.sin()).asin();
        let lat = (geocentric_lat.tan() / self.flattening_ratio).atan();

        let node_longitude = self.reference_longitude - (path - 1.0) * self.radians_per_path;
        let lon = node_longitude + self.track_longitude_offset(u);

        LatLong::new(lat.to_degrees(), normalize_degrees(lon.to_degrees()))
    }
}

/// Wrap degrees into (-180, 180].
fn normalize_degrees(mut lon: f64) -> f64 {
    lon %= 360.0;
    if lon > 180.0 {
        lon -= 360.0;
    } else if lon <= -180.0 {
        lon += 360.0;
    }
    lon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_scenes_wrs2() {
        let model = OrbitalPathRowModel::wrs2();
        let cases = [
            ("Washington DC", 38.9, -77.04, 15, 33),
            ("Sioux Falls", 43.55, -96.7, 29, 30),
            ("London", 51.5, -0.12, 201, 24),
            ("Sydney", -33.87, 151.2, 89, 83),
            ("Tokyo", 35.68, 139.69, 107, 35),
        ];
        for (name, lat, lon, path, row) in cases {
            let pr = model.lat_long_to_path_row(LatLong::new(lat, lon));
            assert_eq!(pr, PathRow::new(path, row), "{} mapped to {:?}", name, pr);
        }
    }

    #[test]
    fn test_equator_row_at_path_one() {
        let model = OrbitalPathRowModel::wrs2();
        let center = model.path_row_to_lat_long(1.0, 60.0);
        assert!(center.latitude.abs() < 1e-9);
        assert!((center.longitude + 64.6).abs() < 1e-9);
    }

    #[test]
    fn test_turning_latitudes() {
        let model = OrbitalPathRowModel::wrs2();
        let north = model.path_row_to_lat_long(1.0, 1.0);
        let south = model.path_row_to_lat_long(1.0, 122.0);
        // Row 1 starts at about 80°47'N, row 122 at about 81°51'S
        assert!((north.latitude - 80.77).abs() < 0.02, "row 1 at {}", north.latitude);
        assert!((south.latitude + 81.84).abs() < 0.02, "row 122 at {}", south.latitude);
    }

    #[test]
    fn test_fractional_result_is_exposed() {
        let model = OrbitalPathRowModel::wrs2();
        let f = model.lat_long_to_path_row_f64(LatLong::new(43.55, -96.7));
        assert!((f.path - 28.80).abs() < 0.05, "path = {}", f.path);
        assert!((f.row - 29.74).abs() < 0.05, "row = {}", f.row);
    }

    #[test]
    fn test_far_north_wraps_into_previous_orbit() {
        // Above row 1 the model rounds to row 0 or less and wraps into the
        // tail of the previous orbit, shifted by one day's worth of paths
        let model = OrbitalPathRowModel::wrs2();
        let pr = model.lat_long_to_path_row(LatLong::new(85.0, 0.0));
        assert!(pr.row > 240, "row = {}", pr.row);
        let f = model.lat_long_to_path_row_f64(LatLong::new(85.0, 0.0));
        let expected = (f.path - 16.0).round() as i32;
        assert_eq!(pr.path, (expected - 1).rem_euclid(233) + 1);
    }

    #[test]
    fn test_ascending_node_roundtrip() {
        let model = OrbitalPathRowModel::new(OrbitalParameters::WRS2, NodeCrossing::Ascending);
        let equator = model.path_row_to_lat_long(15.0, 184.0);
        assert!(equator.latitude.abs() < 1e-9);
        for &(path, row) in &[(15, 184), (100, 150), (200, 220)] {
            let ll = model.path_row_to_lat_long(path as f64, row as f64);
            assert_eq!(model.lat_long_to_path_row(ll), PathRow::new(path, row));
        }
    }

    #[test]
    fn test_wrs1_roundtrip_sample() {
        let model = OrbitalPathRowModel::wrs1();
        for &(path, row) in &[(1, 1), (31, 30), (125, 60), (251, 122)] {
            let ll = model.path_row_to_lat_long(path as f64, row as f64);
            assert_eq!(model.lat_long_to_path_row(ll), PathRow::new(path, row));
        }
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(190.0), -170.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(-541.0), 179.0);
    }
}
