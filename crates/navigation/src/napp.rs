//! Aerial-photography grids: NAPP flight lines/stations and NHAP reference
//! points.
//!
//! Both are linear in latitude and longitude with a fixed number of cells
//! per degree. Addresses carry hemisphere letters and are written row first.

use geo_common::{
    BoundsPolicy, DoubleGridAddress, GeoError, GeoResult, GridAddress, GridBounds, LatLong,
};

use crate::codec::{HemisphereCodec, LetterPosition};
use crate::model::{parsed_address, NavigationModel};

/// NAPP flight lines per degree of longitude.
pub const NAPP_LINES_PER_DEGREE: i32 = 16;

/// NAPP stations per degree of latitude.
pub const NAPP_STATIONS_PER_DEGREE: i32 = 32;

/// Default NHAP reference points per degree on both axes.
pub const DEFAULT_NHAP_DENSITY: u32 = 8;

/// Largest accepted NHAP density.
pub const MAX_NHAP_DENSITY: u32 = 10_000;

/// Shared shape of the two aerial grids.
#[derive(Debug, Clone)]
struct LinearGrid {
    columns_per_degree: f64,
    rows_per_degree: f64,
    bounds: GridBounds,
    column_codec: HemisphereCodec,
    row_codec: HemisphereCodec,
}

impl LinearGrid {
    fn new(columns_per_degree: i32, rows_per_degree: i32, position: LetterPosition) -> Self {
        let half_columns = 180 * columns_per_degree;
        let half_rows = 90 * rows_per_degree;
        let digits = (half_columns.max(half_rows).to_string().len()).max(4);
        Self {
            columns_per_degree: columns_per_degree as f64,
            rows_per_degree: rows_per_degree as f64,
            bounds: GridBounds::new(
                -half_columns,
                half_columns - 1,
                -half_rows,
                half_rows,
                BoundsPolicy::Wrap,
                BoundsPolicy::Clamp,
            ),
            column_codec: HemisphereCodec {
                positive: 'E',
                negative: 'W',
                digits,
                position,
            },
            row_codec: HemisphereCodec {
                positive: 'N',
                negative: 'S',
                digits,
                position,
            },
        }
    }

    fn to_double_grid(&self, position: LatLong) -> DoubleGridAddress {
        let position = position.normalized();
        DoubleGridAddress::new(
            position.longitude * self.columns_per_degree,
            position.latitude * self.rows_per_degree,
        )
    }

    fn to_lat_long(&self, address: GridAddress) -> LatLong {
        LatLong::new(
            address.row as f64 / self.rows_per_degree,
            address.column as f64 / self.columns_per_degree,
        )
    }

    fn decode_column(&self, text: &str) -> i32 {
        self.column_codec
            .decode(text)
            .unwrap_or_else(|| self.bounds.below_minimum_column())
    }

    fn decode_row(&self, text: &str) -> i32 {
        self.row_codec
            .decode(text)
            .unwrap_or_else(|| self.bounds.below_minimum_row())
    }

    /// Split a row-first address into its row and column text.
    fn split_address<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        let width = self.row_codec.width();
        Some((text.get(..width)?, text.get(width..)?))
    }
}

/// National Aerial Photography Program flight-line/station grid.
///
/// Columns are flight lines (16 per degree of longitude, wrapping), rows
/// are stations (32 per degree of latitude, clamped). Addresses look like
/// `N1248W1520`.
#[derive(Debug, Clone)]
pub struct NappModel {
    grid: LinearGrid,
}

impl NappModel {
    pub fn new() -> Self {
        Self {
            grid: LinearGrid::new(
                NAPP_LINES_PER_DEGREE,
                NAPP_STATIONS_PER_DEGREE,
                LetterPosition::Leading,
            ),
        }
    }
}

impl Default for NappModel {
    fn default() -> Self {
        Self::new()
    }
}

/// National High Altitude Photography reference-point grid.
///
/// Same number of reference points per degree on both axes. Addresses put
/// the hemisphere letter after the digits, e.g. `0312N0760W`.
#[derive(Debug, Clone)]
pub struct NhapModel {
    grid: LinearGrid,
    density: u32,
}

impl NhapModel {
    /// Grid with `points_per_degree` reference points per degree, clamped
    /// to 1..=[`MAX_NHAP_DENSITY`].
    pub fn new(points_per_degree: u32) -> Self {
        let density = points_per_degree.clamp(1, MAX_NHAP_DENSITY);
        Self {
            grid: LinearGrid::new(density as i32, density as i32, LetterPosition::Trailing),
            density,
        }
    }

    pub fn density(&self) -> u32 {
        self.density
    }
}

impl Default for NhapModel {
    fn default() -> Self {
        Self::new(DEFAULT_NHAP_DENSITY)
    }
}

macro_rules! impl_linear_model {
    ($model:ty, $name:expr) => {
        impl NavigationModel for $model {
            fn name(&self) -> &str {
                $name
            }

            fn bounds(&self) -> GridBounds {
                self.grid.bounds
            }

            fn lat_long_to_double_grid(&self, position: LatLong) -> Option<DoubleGridAddress> {
                Some(self.grid.to_double_grid(position))
            }

            fn grid_to_lat_long(&self, address: GridAddress) -> Option<LatLong> {
                Some(self.grid.to_lat_long(address))
            }

            fn row_down_direction(&self) -> i32 {
                -1
            }

            fn encode_column(&self, column: i32) -> String {
                self.grid.column_codec.encode(column)
            }

            fn encode_row(&self, row: i32) -> String {
                self.grid.row_codec.encode(row)
            }

            fn decode_column(&self, text: &str) -> i32 {
                self.grid.decode_column(text)
            }

            fn decode_row(&self, text: &str) -> i32 {
                self.grid.decode_row(text)
            }

            fn encode_address(&self, address: GridAddress) -> String {
                format!("{}{}", self.encode_row(address.row), self.encode_column(address.column))
            }

            fn decode_address(&self, text: &str) -> GeoResult<GridAddress> {
                let (row, column) = self
                    .grid
                    .split_address(text)
                    .ok_or_else(|| GeoError::invalid_address(self.name(), text))?;
                parsed_address(self, text, self.decode_column(column), self.decode_row(row))
            }
        }
    };
}

impl_linear_model!(NappModel, "NAPP");
impl_linear_model!(NhapModel, "NHAP");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_napp_bounds() {
        let model = NappModel::new();
        let bounds = model.bounds();
        assert_eq!((bounds.min_column, bounds.max_column), (-2880, 2879));
        assert_eq!((bounds.min_row, bounds.max_row), (-2880, 2880));
        assert_eq!(model.check_column_bounds(2880), -2880);
        assert_eq!(model.check_row_bounds(3000), 2880);
    }

    #[test]
    fn test_napp_lat_long_to_grid() {
        let model = NappModel::new();
        let cell = model.lat_long_to_grid(LatLong::new(39.0, -95.0)).unwrap();
        assert_eq!(cell, GridAddress::new(-1520, 1248));
        assert_eq!(model.encode_address(cell), "N1248W1520");

        // Just short of the antimeridian rounds onto the wrapped line
        let east = model.lat_long_to_grid(LatLong::new(0.0, 179.99)).unwrap();
        assert_eq!(east.column, -2880);
    }

    #[test]
    fn test_napp_decode() {
        let model = NappModel::new();
        assert_eq!(model.decode_address("N1248W1520"), Ok(GridAddress::new(-1520, 1248)));
        assert_eq!(model.decode_address("S0016E0032"), Ok(GridAddress::new(32, -16)));
        assert_eq!(model.decode_row("Q1248"), -2881);
        assert_eq!(model.decode_column("W152"), -2881);
        assert_eq!(model.decode_column("W15x0"), -2881);
        assert!(model.decode_address("N1248W152").is_err());
        assert!(model.decode_address("N9999W1520").is_err());
    }

    #[test]
    fn test_nhap_default_density() {
        let model = NhapModel::default();
        assert_eq!(model.density(), 8);
        let bounds = model.bounds();
        assert_eq!((bounds.min_column, bounds.max_column), (-1440, 1439));
        assert_eq!((bounds.min_row, bounds.max_row), (-720, 720));

        let cell = model.lat_long_to_grid(LatLong::new(39.0, -95.0)).unwrap();
        assert_eq!(cell, GridAddress::new(-760, 312));
        assert_eq!(model.encode_address(cell), "0312N0760W");
        assert_eq!(model.decode_address("0312N0760W"), Ok(cell));
        assert_eq!(model.decode_row("N0312"), -721);
    }

    #[test]
    fn test_nhap_wide_density_widens_fields() {
        let model = NhapModel::new(100);
        assert_eq!(model.encode_row(-9000), "09000S");
        assert_eq!(model.decode_row("09000S"), -9000);
        assert_eq!(model.decode_row("9000S"), -9001);
    }

    #[test]
    fn test_cell_centres() {
        let model = NappModel::new();
        let center = model.grid_to_lat_long(GridAddress::new(-1520, 1248)).unwrap();
        assert_eq!(center.latitude, 39.0);
        assert_eq!(center.longitude, -95.0);
    }
}
