//! Round-trip and determinism checks across the projection crate.

use geo_common::LatLong;
use projection::region::{classify_path_row, REGION_RULES};
use projection::{
    FakeGeographic, LambertAzimuthal, OrbitalPathRowModel, PathRow, PolarStereographic,
    ProjectionFactory, ProjectionTransformation, Region, Sinusoidal,
};
use test_utils::{assert_lat_long_near, fixtures::places, lat_long_sweep};

const DEGREE_TOLERANCE: f64 = 1e-6;

fn assert_round_trip(projection: &dyn ProjectionTransformation, points: &[(f64, f64)]) {
    for &(lat, lon) in points {
        let position = LatLong::new(lat, lon);
        let name = projection.name();
        let (x, y) = projection
            .forward(position)
            .unwrap_or_else(|e| panic!("{}: forward({}, {}) failed: {}", name, lat, lon, e));
        let back = projection
            .inverse(x, y)
            .unwrap_or_else(|e| panic!("{}: inverse({}, {}) failed: {}", name, x, y, e));

        assert_lat_long_near!((back.latitude, back.longitude), (lat, lon), DEGREE_TOLERANCE);
    }
}

#[test]
fn test_lambert_round_trip_near_center() {
    let projection = LambertAzimuthal::continental("North America", -100.0, 45.0);
    let points = lat_long_sweep((-160.0, 0.0, -40.0, 85.0), 2.5);
    assert_round_trip(&projection, &points);
}

#[test]
fn test_lambert_round_trip_every_region() {
    let factory = ProjectionFactory::new();
    for region in [
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Europe,
        Region::Africa,
        Region::Asia,
        Region::Australia,
        Region::SouthPacific,
    ] {
        let projection = factory.projection_for_region(region);
        let center = projection
            .inverse(0.0, 0.0)
            .expect("projection origin must invert");
        let (w, s) = (center.longitude - 30.0, (center.latitude - 30.0).max(-89.0));
        let (e, n) = (center.longitude + 30.0, (center.latitude + 30.0).min(89.0));
        let points: Vec<_> = lat_long_sweep((w, s, e, n), 5.0)
            .into_iter()
            .map(|(lat, lon)| (lat, LatLong::new(lat, lon).normalized().longitude))
            .collect();
        assert_round_trip(projection.as_ref(), &points);
    }
}

#[test]
fn test_sinusoidal_round_trip_global() {
    let projection = Sinusoidal::modis();
    let points = lat_long_sweep((-179.0, -89.0, 179.0, 89.0), 7.0);
    assert_round_trip(&projection, &points);
}

#[test]
fn test_polar_round_trip() {
    let south = PolarStereographic::antarctic();
    assert_round_trip(&south, &lat_long_sweep((-175.0, -89.0, 175.0, -50.0), 5.0));

    let north = PolarStereographic::arctic();
    assert_round_trip(&north, &lat_long_sweep((-175.0, 50.0, 175.0, 89.0), 5.0));
}

#[test]
fn test_fake_geographic_round_trip() {
    let projection = FakeGeographic::new();
    assert_round_trip(&projection, &lat_long_sweep((-179.0, -90.0, 179.0, 90.0), 11.0));
}

#[test]
fn test_whole_metre_round_trip_stays_close() {
    // Rounding to whole metres costs at most ~1e-5 degrees
    let factory = ProjectionFactory::new();
    let projection = factory.projection_for_region(Region::Europe);
    let position = LatLong::new(48.85, 2.35);
    let coord = projection.lat_long_to_proj(position).expect("Paris projects");
    let back = projection.proj_to_lat_long(coord).expect("and inverts");
    assert!(back.max_difference(&position) < 1e-4);
}

fn wrs_round_trip_rate(model: &OrbitalPathRowModel, rows: std::ops::RangeInclusive<i32>) -> f64 {
    let orbits = model.params().orbits_per_cycle;
    let mut total = 0usize;
    let mut matched = 0usize;
    for path in 1..=orbits {
        for row in rows.clone() {
            total += 1;
            let center = model.path_row_to_lat_long(path as f64, row as f64);
            if model.lat_long_to_path_row(center) == PathRow::new(path, row) {
                matched += 1;
            }
        }
    }
    matched as f64 / total as f64
}

#[test]
fn test_wrs2_scene_centers_round_trip() {
    let model = OrbitalPathRowModel::wrs2();
    let daytime = wrs_round_trip_rate(&model, 1..=122);
    assert!(daytime >= 0.99, "rows 1-122 round trip rate {}", daytime);

    // Rows past the southern turning point fold back onto earlier rows
    let full = wrs_round_trip_rate(&model, 1..=124);
    assert!(full >= 0.98, "rows 1-124 round trip rate {}", full);
}

#[test]
fn test_wrs1_scene_centers_round_trip() {
    let model = OrbitalPathRowModel::wrs1();
    let rate = wrs_round_trip_rate(&model, 1..=122);
    assert!(rate >= 0.99, "rows 1-122 round trip rate {}", rate);
}

#[test]
fn test_reference_places_map_to_their_scenes() {
    let model = OrbitalPathRowModel::wrs2();
    for place in places::ALL {
        let pr = model.lat_long_to_path_row(LatLong::new(place.latitude, place.longitude));
        assert_eq!(
            pr,
            PathRow::new(place.wrs2_path, place.wrs2_row),
            "{}",
            place.name
        );
    }
}

#[test]
fn test_classifier_is_deterministic_and_total() {
    for path in -2..=236 {
        for row in -2..=250 {
            let pr = PathRow::new(path, row);
            let first = classify_path_row(pr);
            assert_eq!(first, classify_path_row(pr));

            let in_grid = (1..=233).contains(&path) && (1..=124).contains(&row);
            assert_eq!(first == Region::OutOfRange, !in_grid, "({}, {})", path, row);

            // The result is the first matching rule, or Asia
            if in_grid {
                let expected = REGION_RULES
                    .iter()
                    .find(|rule| rule.matches(pr))
                    .map(|rule| rule.region)
                    .unwrap_or(Region::Asia);
                assert_eq!(first, expected);
            }
        }
    }
}
