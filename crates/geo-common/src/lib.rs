//! Common types shared by the projection, navigation and cache crates.

pub mod coord;
pub mod error;
pub mod grid;

pub use coord::{LatLong, ProjCoordinate};
pub use error::{GeoError, GeoResult};
pub use grid::{BoundsPolicy, DoubleGridAddress, GridAddress, GridBounds};
