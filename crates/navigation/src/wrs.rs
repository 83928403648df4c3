//! WRS-1 and WRS-2 path/row grids.

use geo_common::{BoundsPolicy, DoubleGridAddress, GridAddress, GridBounds, LatLong};
use projection::{NodeCrossing, OrbitalParameters, OrbitalPathRowModel};

use crate::codec::parse_digits;
use crate::model::NavigationModel;

/// Digits in an encoded path or row.
const FIELD_WIDTH: usize = 3;

/// Landsat path/row grid.
///
/// Columns are paths, wrapping around the globe; rows clamp. Paths are
/// numbered westward so the column direction is reversed.
#[derive(Debug, Clone)]
pub struct WrsModel {
    name: String,
    orbit: OrbitalPathRowModel,
    bounds: GridBounds,
}

impl WrsModel {
    /// WRS-1 (Landsat 1-3) on the descending node.
    pub fn wrs1() -> Self {
        Self::with_node(OrbitalParameters::WRS1, NodeCrossing::Descending)
    }

    /// WRS-2 (Landsat 4 onward) on the descending node.
    pub fn wrs2() -> Self {
        Self::with_node(OrbitalParameters::WRS2, NodeCrossing::Descending)
    }

    /// A reference system on either node. Descending grids cover rows
    /// 1-124; ascending (night) grids cover the whole orbit.
    pub fn with_node(params: OrbitalParameters, node: NodeCrossing) -> Self {
        let max_row = match node {
            NodeCrossing::Descending => 124,
            NodeCrossing::Ascending => params.scenes_per_orbit,
        };
        let name = match node {
            NodeCrossing::Descending => params.name.to_string(),
            NodeCrossing::Ascending => format!("{} (ascending)", params.name),
        };
        let bounds = GridBounds::new(
            1,
            params.orbits_per_cycle,
            1,
            max_row,
            BoundsPolicy::Wrap,
            BoundsPolicy::Clamp,
        );
        Self {
            name,
            orbit: OrbitalPathRowModel::new(params, node),
            bounds,
        }
    }

    pub fn orbit(&self) -> &OrbitalPathRowModel {
        &self.orbit
    }
}

impl NavigationModel for WrsModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounds(&self) -> GridBounds {
        self.bounds
    }

    fn lat_long_to_double_grid(&self, position: LatLong) -> Option<DoubleGridAddress> {
        let fractional = self.orbit.lat_long_to_path_row_f64(position);
        Some(DoubleGridAddress::new(fractional.path, fractional.row))
    }

    /// Row wrap-around and path shifting belong to the orbit model, so the
    /// rounded fractional position is only used when the wrapped row falls
    /// in the part of the orbit this grid does not cover. Those positions
    /// stay on their own track and take the nearest end row.
    fn lat_long_to_grid(&self, position: LatLong) -> Option<GridAddress> {
        let path_row = self.orbit.lat_long_to_path_row(position);
        let bounds = self.bounds;
        if (bounds.min_row..=bounds.max_row).contains(&path_row.row) {
            return Some(GridAddress::new(self.check_column_bounds(path_row.path), path_row.row));
        }

        let fractional = self.orbit.lat_long_to_path_row_f64(position);
        Some(GridAddress::new(
            self.check_column_bounds(fractional.path.round() as i32),
            self.check_row_bounds(fractional.row.round() as i32),
        ))
    }

    fn grid_to_lat_long(&self, address: GridAddress) -> Option<LatLong> {
        Some(
            self.orbit
                .path_row_to_lat_long(address.column as f64, address.row as f64),
        )
    }

    fn encode_column(&self, column: i32) -> String {
        format!("{:03}", column)
    }

    fn encode_row(&self, row: i32) -> String {
        format!("{:03}", row)
    }

    fn decode_column(&self, text: &str) -> i32 {
        parse_digits(text, FIELD_WIDTH).unwrap_or_else(|| self.bounds.below_minimum_column())
    }

    fn decode_row(&self, text: &str) -> i32 {
        parse_digits(text, FIELD_WIDTH).unwrap_or_else(|| self.bounds.below_minimum_row())
    }

    fn column_right_direction(&self) -> i32 {
        -1
    }

    fn row_down_direction(&self) -> i32 {
        match self.orbit.node() {
            NodeCrossing::Descending => 1,
            NodeCrossing::Ascending => -1,
        }
    }
}
