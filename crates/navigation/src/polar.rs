//! 120 km square cells in polar stereographic space.
//!
//! The grid is a square of 70 x 70 cells centred on the pole. Cell (0, 0)
//! is the upper-left corner of the plane; rows grow downward as y falls.

use geo_common::{BoundsPolicy, DoubleGridAddress, GridAddress, GridBounds, LatLong};
use projection::{PolarStereographic, ProjectionError, ProjectionTransformation};
use tracing::warn;

use crate::codec::parse_prefixed;
use crate::model::NavigationModel;

/// Cell edge in projection metres.
pub const CELL_SIZE: f64 = 120_000.0;

/// Cells from the pole to each edge of the grid.
pub const CELLS_PER_SIDE: i32 = 35;

/// Distance from the pole to each edge of the grid, in metres.
pub const HALF_EXTENT: f64 = CELLS_PER_SIDE as f64 * CELL_SIZE;

const BOUNDS: GridBounds = GridBounds::new(
    0,
    2 * CELLS_PER_SIDE - 1,
    0,
    2 * CELLS_PER_SIDE - 1,
    BoundsPolicy::Clamp,
    BoundsPolicy::Clamp,
);

#[derive(Debug, Clone)]
pub struct PolarGridModel {
    name: String,
    projection: PolarStereographic,
}

impl PolarGridModel {
    /// Antarctic grid.
    pub fn south() -> Self {
        Self {
            name: "Polar (South)".to_string(),
            projection: PolarStereographic::antarctic(),
        }
    }

    /// Arctic grid.
    pub fn north() -> Self {
        Self {
            name: "Polar (North)".to_string(),
            projection: PolarStereographic::arctic(),
        }
    }

    pub fn projection(&self) -> &PolarStereographic {
        &self.projection
    }

    /// Fractional cell of a projection coordinate.
    pub fn metres_to_double_grid(&self, x: f64, y: f64) -> DoubleGridAddress {
        DoubleGridAddress::new(
            (x + HALF_EXTENT) / CELL_SIZE - 0.5,
            (HALF_EXTENT - y) / CELL_SIZE - 0.5,
        )
    }

    /// Projection coordinate of a cell centre.
    pub fn cell_center_metres(&self, address: GridAddress) -> (f64, f64) {
        (
            (address.column as f64 + 0.5) * CELL_SIZE - HALF_EXTENT,
            HALF_EXTENT - (address.row as f64 + 0.5) * CELL_SIZE,
        )
    }

    /// Position of a projection coordinate. A latitude solve that does
    /// not converge is logged here and gives no position.
    pub fn metres_to_lat_long(&self, x: f64, y: f64) -> Option<LatLong> {
        match self.projection.inverse(x, y) {
            Ok(position) => Some(position),
            Err(ProjectionError::NoConvergence { iterations }) => {
                warn!(
                    model = %self.name,
                    x,
                    y,
                    iterations,
                    "Polar latitude solve did not converge"
                );
                None
            }
            Err(_) => None,
        }
    }

    fn in_hemisphere(&self, position: LatLong) -> bool {
        if self.projection.is_south() {
            position.latitude <= 0.0
        } else {
            position.latitude >= 0.0
        }
    }
}

impl NavigationModel for PolarGridModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> GridBounds {
        BOUNDS
    }

    /// Positions in the other hemisphere have no cell.
    fn lat_long_to_double_grid(&self, position: LatLong) -> Option<DoubleGridAddress> {
        if !self.in_hemisphere(position) {
            return None;
        }
        let (x, y) = self.projection.forward(position).ok()?;
        Some(self.metres_to_double_grid(x, y))
    }

    fn grid_to_lat_long(&self, address: GridAddress) -> Option<LatLong> {
        let (x, y) = self.cell_center_metres(address);
        self.metres_to_lat_long(x, y)
    }

    fn encode_column(&self, column: i32) -> String {
        format!("x{:02}", column)
    }

    fn encode_row(&self, row: i32) -> String {
        format!("y{:02}", row)
    }

    fn decode_column(&self, text: &str) -> i32 {
        parse_prefixed(text, 'x', 2).unwrap_or_else(|| BOUNDS.below_minimum_column())
    }

    fn decode_row(&self, text: &str) -> i32 {
        parse_prefixed(text, 'y', 2).unwrap_or_else(|| BOUNDS.below_minimum_row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pole_sits_between_center_cells() {
        let model = PolarGridModel::south();
        let pole = model
            .lat_long_to_double_grid(LatLong::new(-90.0, 0.0))
            .unwrap();
        assert!((pole.column - 34.5).abs() < 1e-9);
        assert!((pole.row - 34.5).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_are_symmetric() {
        let model = PolarGridModel::north();
        let first = model.cell_center_metres(GridAddress::new(0, 0));
        let last = model.cell_center_metres(GridAddress::new(69, 69));
        assert!((first.0 + last.0).abs() < 1e-6);
        assert!((first.1 + last.1).abs() < 1e-6);
        assert_eq!(model.check_column_bounds(80), 69);
        assert_eq!(model.check_row_bounds(-3), 0);
    }

    #[test]
    fn test_cell_round_trip() {
        for model in [PolarGridModel::south(), PolarGridModel::north()] {
            for &(column, row) in &[(10, 20), (35, 35), (34, 50), (60, 5)] {
                let address = GridAddress::new(column, row);
                let center = model.grid_to_lat_long(address).unwrap();
                assert_eq!(
                    model.lat_long_to_grid(center),
                    Some(address),
                    "{} {}",
                    model.name(),
                    address
                );
            }
        }
    }

    #[test]
    fn test_unconverged_solve_has_no_position() {
        let model = PolarGridModel::south();
        assert!(matches!(
            model.projection().inverse(f64::NAN, 0.0),
            Err(ProjectionError::NoConvergence { .. })
        ));
        assert_eq!(model.metres_to_lat_long(f64::NAN, 0.0), None);

        let (x, y) = model.cell_center_metres(GridAddress::new(10, 20));
        assert_eq!(
            model.metres_to_lat_long(x, y),
            model.grid_to_lat_long(GridAddress::new(10, 20))
        );
    }

    #[test]
    fn test_wrong_hemisphere_has_no_cell() {
        let model = PolarGridModel::south();
        assert!(model.lat_long_to_grid(LatLong::new(45.0, 0.0)).is_none());
        assert!(model.lat_long_to_grid(LatLong::new(-75.0, 0.0)).is_some());
    }

    #[test]
    fn test_encoding() {
        let model = PolarGridModel::south();
        assert_eq!(model.encode_address(GridAddress::new(7, 42)), "x07y42");
        assert_eq!(model.decode_address("x07y42"), Ok(GridAddress::new(7, 42)));
        assert_eq!(model.decode_column("y07"), -1);
        assert!(model.decode_address("x07y70").is_err());
    }
}
