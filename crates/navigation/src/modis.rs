//! MODIS sinusoidal tile grid: 36 x 18 tiles of 10° at the equator.
//!
//! Tiles are a linear map of sinusoidal metres. Near the poles and the
//! antimeridian a tile can lie entirely outside the world outline; those
//! tiles hold no data and are reported invalid.

use std::f64::consts::PI;

use geo_common::{BoundsPolicy, DoubleGridAddress, GridAddress, GridBounds, LatLong};
use projection::common::MODIS_SPHERE_RADIUS;
use projection::{ProjectionTransformation, Sinusoidal};

use crate::codec::parse_prefixed;
use crate::model::NavigationModel;

/// Tile edge in sinusoidal metres (10° of latitude).
pub const TILE_SIZE: f64 = MODIS_SPHERE_RADIUS * PI / 18.0;

/// Upper-left corner of tile h00v00.
pub const GRID_ULX: f64 = -18.0 * TILE_SIZE;
pub const GRID_ULY: f64 = 9.0 * TILE_SIZE;

/// Tiles whose nearest corner sits on the outline to within rounding, but
/// which contain nothing.
const EDGE_EXCEPTIONS: [(i32, i32); 4] = [(8, 2), (27, 2), (8, 15), (27, 15)];

const BOUNDS: GridBounds = GridBounds::new(0, 35, 0, 17, BoundsPolicy::Clamp, BoundsPolicy::Clamp);

#[derive(Debug, Clone)]
pub struct ModisTileModel {
    projection: Sinusoidal,
}

impl ModisTileModel {
    pub fn new() -> Self {
        Self {
            projection: Sinusoidal::modis(),
        }
    }

    pub fn projection(&self) -> &Sinusoidal {
        &self.projection
    }

    /// Tile extent in sinusoidal metres as (min_x, min_y, max_x, max_y).
    pub fn tile_extent(&self, address: GridAddress) -> (f64, f64, f64, f64) {
        let min_x = GRID_ULX + address.column as f64 * TILE_SIZE;
        let max_y = GRID_ULY - address.row as f64 * TILE_SIZE;
        (min_x, max_y - TILE_SIZE, min_x + TILE_SIZE, max_y)
    }

    /// Fractional tile position of a sinusoidal coordinate.
    pub fn metres_to_double_grid(&self, x: f64, y: f64) -> DoubleGridAddress {
        DoubleGridAddress::new(
            (x - GRID_ULX) / TILE_SIZE - 0.5,
            (GRID_ULY - y) / TILE_SIZE - 0.5,
        )
    }
}

impl Default for ModisTileModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Value in [lo, hi] closest to zero.
fn nearest_to_origin(lo: f64, hi: f64) -> f64 {
    if lo <= 0.0 && hi >= 0.0 {
        0.0
    } else if lo.abs() < hi.abs() {
        lo
    } else {
        hi
    }
}

impl NavigationModel for ModisTileModel {
    fn name(&self) -> &str {
        "MODIS"
    }

    fn bounds(&self) -> GridBounds {
        BOUNDS
    }

    fn lat_long_to_double_grid(&self, position: LatLong) -> Option<DoubleGridAddress> {
        let (x, y) = self.projection.forward(position).ok()?;
        Some(self.metres_to_double_grid(x, y))
    }

    fn grid_to_lat_long(&self, address: GridAddress) -> Option<LatLong> {
        let (min_x, min_y, max_x, max_y) = self.tile_extent(address);
        self.projection
            .inverse((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
            .ok()
    }

    /// A tile is valid if the corner nearest the projection centre lies
    /// inside the world outline.
    fn is_valid_grid_cell(&self, address: GridAddress) -> bool {
        if !BOUNDS.contains(address) {
            return false;
        }
        if EDGE_EXCEPTIONS.contains(&(address.column, address.row)) {
            return false;
        }
        let (min_x, min_y, max_x, max_y) = self.tile_extent(address);
        let x = nearest_to_origin(min_x, max_x);
        let y = nearest_to_origin(min_y, max_y);
        self.projection.inverse(x, y).is_ok()
    }

    fn encode_column(&self, column: i32) -> String {
        format!("h{:02}", column)
    }

    fn encode_row(&self, row: i32) -> String {
        format!("v{:02}", row)
    }

    fn decode_column(&self, text: &str) -> i32 {
        parse_prefixed(text, 'h', 2).unwrap_or_else(|| BOUNDS.below_minimum_column())
    }

    fn decode_row(&self, text: &str) -> i32 {
        parse_prefixed(text, 'v', 2).unwrap_or_else(|| BOUNDS.below_minimum_row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_size() {
        assert!((TILE_SIZE - 1_111_950.519_766_523).abs() < 1e-6);
        assert!((GRID_ULX + 20_015_109.355_797_42).abs() < 1e-4);
    }

    #[test]
    fn test_lat_long_to_tile() {
        let model = ModisTileModel::new();
        let tile = model.lat_long_to_grid(LatLong::new(40.5, -100.0)).unwrap();
        assert_eq!(tile, GridAddress::new(10, 4));

        // The poles fall in the first and last rows
        let north = model.lat_long_to_grid(LatLong::new(90.0, 0.0)).unwrap();
        assert_eq!(north.row, 0);
        let south = model.lat_long_to_grid(LatLong::new(-90.0, 0.0)).unwrap();
        assert_eq!(south.row, 17);
    }

    #[test]
    fn test_tile_center_round_trip() {
        let model = ModisTileModel::new();
        let address = GridAddress::new(18, 8);
        let center = model.grid_to_lat_long(address).unwrap();
        assert!((center.latitude - 5.0).abs() < 1e-9);
        assert_eq!(model.lat_long_to_grid(center), Some(address));
    }

    #[test]
    fn test_validity() {
        let model = ModisTileModel::new();
        assert!(model.is_valid_grid_cell(GridAddress::new(0, 8)));
        assert!(model.is_valid_grid_cell(GridAddress::new(14, 0)));
        assert!(!model.is_valid_grid_cell(GridAddress::new(0, 0)));
        assert!(!model.is_valid_grid_cell(GridAddress::new(13, 0)));
        assert!(!model.is_valid_grid_cell(GridAddress::new(8, 2)));
        assert!(model.is_valid_grid_cell(GridAddress::new(9, 2)));
        assert!(!model.is_valid_grid_cell(GridAddress::new(36, 8)));
        assert!(!model.is_valid_grid_cell(GridAddress::new(5, -1)));
    }

    #[test]
    fn test_encoding() {
        let model = ModisTileModel::new();
        assert_eq!(model.encode_address(GridAddress::new(8, 5)), "h08v05");
        assert_eq!(model.decode_address("h08v05"), Ok(GridAddress::new(8, 5)));
        assert_eq!(model.decode_column("08"), -1);
        assert_eq!(model.decode_row("v5"), -1);
        assert!(model.decode_address("h40v05").is_err());
    }
}
