//! UTM zone / 5° latitude band grid of the Tri-Decadal mosaics.
//!
//! Mosaics are named by hemisphere, zone and the band edge nearest the
//! equator, e.g. `N-14-35` covers zone 14 from 35°N to 40°N and `S-22-10`
//! covers zone 22 from 10°S to 15°S.

use geo_common::{
    BoundsPolicy, DoubleGridAddress, GeoError, GeoResult, GridAddress, GridBounds, LatLong,
};

use crate::codec::parse_digits;
use crate::model::{parsed_address, NavigationModel};

pub const ZONE_WIDTH_DEG: f64 = 6.0;
pub const BAND_HEIGHT_DEG: f64 = 5.0;

/// First band north of the equator.
const EQUATOR_BAND: i32 = 18;

const BOUNDS: GridBounds = GridBounds::new(1, 60, 0, 35, BoundsPolicy::Wrap, BoundsPolicy::Clamp);

#[derive(Debug, Clone, Default)]
pub struct TriDecadalModel;

impl TriDecadalModel {
    pub fn new() -> Self {
        Self
    }

    /// UTM zone of a longitude, 1-60.
    pub fn zone_for_longitude(longitude: f64) -> i32 {
        let lon = LatLong::new(0.0, longitude).normalized().longitude;
        let zone = ((-180.0 - lon).abs() / ZONE_WIDTH_DEG).floor() as i32 + 1;
        BOUNDS.check_column(zone)
    }
}

impl NavigationModel for TriDecadalModel {
    fn name(&self) -> &str {
        "Tri-Decadal"
    }

    fn bounds(&self) -> GridBounds {
        BOUNDS
    }

    fn lat_long_to_double_grid(&self, position: LatLong) -> Option<DoubleGridAddress> {
        let position = position.normalized();
        Some(DoubleGridAddress::new(
            (position.longitude + 180.0) / ZONE_WIDTH_DEG + 0.5,
            (position.latitude + 90.0) / BAND_HEIGHT_DEG - 0.5,
        ))
    }

    fn grid_to_lat_long(&self, address: GridAddress) -> Option<LatLong> {
        let zone = BOUNDS.check_column(address.column);
        let band = BOUNDS.check_row(address.row);
        Some(LatLong::new(
            band as f64 * BAND_HEIGHT_DEG - 90.0 + BAND_HEIGHT_DEG / 2.0,
            (zone - 1) as f64 * ZONE_WIDTH_DEG - 180.0 + ZONE_WIDTH_DEG / 2.0,
        ))
    }

    fn row_down_direction(&self) -> i32 {
        -1
    }

    fn encode_column(&self, column: i32) -> String {
        format!("{:02}", column)
    }

    /// Hemisphere letter and equatorward band edge, e.g. `N35`.
    fn encode_row(&self, row: i32) -> String {
        if row >= EQUATOR_BAND {
            format!("N{:02}", (row - EQUATOR_BAND) * BAND_HEIGHT_DEG as i32)
        } else {
            format!("S{:02}", (EQUATOR_BAND - 1 - row) * BAND_HEIGHT_DEG as i32)
        }
    }

    fn decode_column(&self, text: &str) -> i32 {
        parse_digits(text, 2).unwrap_or_else(|| BOUNDS.below_minimum_column())
    }

    fn decode_row(&self, text: &str) -> i32 {
        let step = BAND_HEIGHT_DEG as i32;
        let parsed = text.get(1..).and_then(|digits| parse_digits(digits, 2));
        match (text.chars().next(), parsed) {
            (Some(hemisphere), Some(edge)) if edge % step == 0 && edge <= 85 => match hemisphere {
                'N' => EQUATOR_BAND + edge / step,
                'S' => EQUATOR_BAND - 1 - edge / step,
                _ => BOUNDS.below_minimum_row(),
            },
            _ => BOUNDS.below_minimum_row(),
        }
    }

    /// `N-14-35`: hemisphere, zone, band edge.
    fn encode_address(&self, address: GridAddress) -> String {
        let row = self.encode_row(address.row);
        let (hemisphere, edge) = row.split_at(1);
        format!("{}-{}-{}", hemisphere, self.encode_column(address.column), edge)
    }

    fn decode_address(&self, text: &str) -> GeoResult<GridAddress> {
        let parts: Vec<&str> = text.split('-').collect();
        let [hemisphere, zone, edge] = parts.as_slice() else {
            return Err(GeoError::invalid_address(self.name(), text));
        };
        let column = self.decode_column(zone);
        let row = self.decode_row(&format!("{}{}", hemisphere, edge));
        parsed_address(self, text, column, row)
    }
}
