//! Tests for grid bounds policies across the grid shapes used by the models.

use geo_common::{BoundsPolicy, GridAddress, GridBounds};

// ============================================================================
// Zero-based grids (MODIS, UTM bands)
// ============================================================================

#[test]
fn test_zero_based_clamp() {
    let modis = GridBounds::new(0, 35, 0, 17, BoundsPolicy::Clamp, BoundsPolicy::Clamp);
    assert_eq!(modis.check_column(-3), 0);
    assert_eq!(modis.check_column(36), 35);
    assert_eq!(modis.check_row(18), 17);
    assert_eq!(modis.columns(), 36);
    assert_eq!(modis.rows(), 18);
}

#[test]
fn test_one_based_wrap_matches_utm_zones() {
    let utm = GridBounds::new(1, 60, 0, 35, BoundsPolicy::Wrap, BoundsPolicy::Clamp);
    assert_eq!(utm.check_column(61), 1);
    assert_eq!(utm.check_column(0), 60);
    assert_eq!(utm.check_row(-1), 0);
}

// ============================================================================
// Negative ranges (linear degree grids)
// ============================================================================

#[test]
fn test_symmetric_range_wrap() {
    let napp = GridBounds::new(-2880, 2879, -2880, 2880, BoundsPolicy::Wrap, BoundsPolicy::Clamp);
    assert_eq!(napp.check_column(2880), -2880);
    assert_eq!(napp.check_column(-2881), 2879);
    assert_eq!(napp.below_minimum_row(), -2881);
    assert!(!napp.contains(GridAddress::new(0, napp.below_minimum_row())));
}

#[test]
fn test_wrap_policy_is_idempotent() {
    let bounds = GridBounds::new(1, 251, 1, 124, BoundsPolicy::Wrap, BoundsPolicy::Clamp);
    for column in -600..600 {
        let once = bounds.check_column(column);
        assert!((1..=251).contains(&once), "column {} wrapped to {}", column, once);
        assert_eq!(bounds.check_column(once), once);
    }
}
