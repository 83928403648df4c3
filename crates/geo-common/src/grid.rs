//! Discrete grid addresses and the bounds that constrain them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (column, row) grid cell.
///
/// The meaning of each axis belongs to the navigation model that produced it
/// (WRS path/row, MODIS h/v, UTM zone/band, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridAddress {
    pub column: i32,
    pub row: i32,
}

impl GridAddress {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for GridAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.column, self.row)
    }
}

/// A fractional grid position.
///
/// Integral values are cell centres, so rounding yields the containing cell.
/// Used for boundary math where the rounded cell is not enough.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleGridAddress {
    pub column: f64,
    pub row: f64,
}

impl DoubleGridAddress {
    pub const fn new(column: f64, row: f64) -> Self {
        Self { column, row }
    }

    /// Nearest cell. Halves round up on both sides of zero, so a position
    /// on a cell's lower edge belongs to that cell.
    pub fn round(&self) -> GridAddress {
        GridAddress::new(
            (self.column + 0.5).floor() as i32,
            (self.row + 0.5).floor() as i32,
        )
    }
}

/// How an out-of-range coordinate on one axis is brought back into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundsPolicy {
    /// Pin to the nearest valid value.
    Clamp,
    /// Wrap around the axis (e.g. WRS paths, UTM zones circle the globe).
    Wrap,
}

/// Valid coordinate ranges of a grid, with a policy per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_column: i32,
    pub max_column: i32,
    pub min_row: i32,
    pub max_row: i32,
    pub column_policy: BoundsPolicy,
    pub row_policy: BoundsPolicy,
}

impl GridBounds {
    pub const fn new(
        min_column: i32,
        max_column: i32,
        min_row: i32,
        max_row: i32,
        column_policy: BoundsPolicy,
        row_policy: BoundsPolicy,
    ) -> Self {
        Self {
            min_column,
            max_column,
            min_row,
            max_row,
            column_policy,
            row_policy,
        }
    }

    /// Bring a column back into range according to the column policy.
    pub fn check_column(&self, column: i32) -> i32 {
        apply_policy(column, self.min_column, self.max_column, self.column_policy)
    }

    /// Bring a row back into range according to the row policy.
    pub fn check_row(&self, row: i32) -> i32 {
        apply_policy(row, self.min_row, self.max_row, self.row_policy)
    }

    pub fn contains(&self, address: GridAddress) -> bool {
        (self.min_column..=self.max_column).contains(&address.column)
            && (self.min_row..=self.max_row).contains(&address.row)
    }

    /// Value returned by column decoders for malformed text.
    pub fn below_minimum_column(&self) -> i32 {
        self.min_column - 1
    }

    /// Value returned by row decoders for malformed text.
    pub fn below_minimum_row(&self) -> i32 {
        self.min_row - 1
    }

    pub fn columns(&self) -> i32 {
        self.max_column - self.min_column + 1
    }

    pub fn rows(&self) -> i32 {
        self.max_row - self.min_row + 1
    }
}

fn apply_policy(value: i32, min: i32, max: i32, policy: BoundsPolicy) -> i32 {
    match policy {
        BoundsPolicy::Clamp => value.clamp(min, max),
        BoundsPolicy::Wrap => {
            let span = max - min + 1;
            min + (value - min).rem_euclid(span)
        }
    }
}
