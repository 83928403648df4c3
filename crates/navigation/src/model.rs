//! The contract every grid-addressing scheme implements.

use std::fmt;

use geo_common::{
    DoubleGridAddress, GeoError, GeoResult, GridAddress, GridBounds, LatLong, ProjCoordinate,
};
use projection::ProjectionTransformation;

/// A discrete grid over the globe with its own addressing and text format.
///
/// Models are immutable once built and can be shared between threads.
/// Conversions that have no answer (a position outside the grid's
/// projection, a cell in a hole of the grid) return `None`.
pub trait NavigationModel: Send + Sync + fmt::Debug {
    /// Display name, e.g. "WRS-2".
    fn name(&self) -> &str;

    /// Valid column/row ranges and how each axis treats values outside them.
    fn bounds(&self) -> GridBounds;

    /// Fractional grid position of a point. Integral values are cell centres.
    ///
    /// Used for boundary math where the containing cell alone is not enough.
    fn lat_long_to_double_grid(&self, position: LatLong) -> Option<DoubleGridAddress>;

    /// Centre of a grid cell.
    fn grid_to_lat_long(&self, address: GridAddress) -> Option<LatLong>;

    /// Column as fixed-width text.
    fn encode_column(&self, column: i32) -> String;

    /// Row as fixed-width text.
    fn encode_row(&self, row: i32) -> String;

    /// Parse a column. Malformed text yields a value below the minimum
    /// column, which the bounds check then rejects.
    fn decode_column(&self, text: &str) -> i32;

    /// Parse a row. Malformed text yields a value below the minimum row.
    fn decode_row(&self, text: &str) -> i32;

    /// Cell containing a point, brought into bounds.
    fn lat_long_to_grid(&self, position: LatLong) -> Option<GridAddress> {
        let cell = self.lat_long_to_double_grid(position)?.round();
        Some(GridAddress::new(
            self.check_column_bounds(cell.column),
            self.check_row_bounds(cell.row),
        ))
    }

    /// Fractional grid position of a coordinate in `projection`'s plane.
    fn proj_to_double_grid(
        &self,
        projection: &dyn ProjectionTransformation,
        coord: ProjCoordinate,
    ) -> Option<DoubleGridAddress> {
        let position = projection.proj_to_lat_long(coord)?;
        self.lat_long_to_double_grid(position)
    }

    /// Centre of a cell in `projection`'s plane.
    fn grid_to_proj_coords(
        &self,
        projection: &dyn ProjectionTransformation,
        address: GridAddress,
    ) -> Option<ProjCoordinate> {
        let position = self.grid_to_lat_long(address)?;
        projection.lat_long_to_proj(position)
    }

    fn check_column_bounds(&self, column: i32) -> i32 {
        self.bounds().check_column(column)
    }

    fn check_row_bounds(&self, row: i32) -> i32 {
        self.bounds().check_row(row)
    }

    /// Whether a cell holds data. Grids with holes override this.
    fn is_valid_grid_cell(&self, _address: GridAddress) -> bool {
        true
    }

    /// +1 if column numbers grow to the right on a north-up display, -1 if
    /// they grow to the left.
    fn column_right_direction(&self) -> i32 {
        1
    }

    /// +1 if row numbers grow downward on a north-up display, -1 if they
    /// grow upward.
    fn row_down_direction(&self) -> i32 {
        1
    }

    /// Full address as text. Column first unless the model says otherwise.
    fn encode_address(&self, address: GridAddress) -> String {
        format!("{}{}", self.encode_column(address.column), self.encode_row(address.row))
    }

    /// Parse a full address written by [`Self::encode_address`].
    ///
    /// Splits after the width of an encoded column, so it only applies to
    /// column-first formats with a fixed column width.
    fn decode_address(&self, text: &str) -> GeoResult<GridAddress> {
        let width = self.encode_column(self.bounds().min_column).len();
        let (column, row) = match (text.get(..width), text.get(width..)) {
            (Some(column), Some(row)) => (column, row),
            _ => return Err(GeoError::invalid_address(self.name(), text)),
        };
        parsed_address(self, text, self.decode_column(column), self.decode_row(row))
    }

    /// Move `columns` cells right and `rows` cells down on a north-up
    /// display, applying the bounds policies.
    fn step(&self, address: GridAddress, columns: i32, rows: i32) -> GridAddress {
        GridAddress::new(
            self.check_column_bounds(address.column + columns * self.column_right_direction()),
            self.check_row_bounds(address.row + rows * self.row_down_direction()),
        )
    }
}

/// Accept a decoded address only if both parts lie within the bounds.
pub(crate) fn parsed_address<M: NavigationModel + ?Sized>(
    model: &M,
    text: &str,
    column: i32,
    row: i32,
) -> GeoResult<GridAddress> {
    let address = GridAddress::new(column, row);
    if model.bounds().contains(address) {
        Ok(address)
    } else {
        Err(GeoError::invalid_address(model.name(), text))
    }
}
