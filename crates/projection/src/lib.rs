//! Coordinate transformations between latitude/longitude and planar
//! projection metres, plus the WRS orbital path/row model.
//!
//! Implements the projections from scratch (GCTP-style formulas) without
//! external geodesy dependencies.

pub mod common;
pub mod error;
pub mod geographic;
pub mod lambert;
pub mod polar;
pub mod region;
pub mod sinusoidal;
pub mod transform;
pub mod wrs;

pub use error::{ProjectionError, Result};
pub use geographic::FakeGeographic;
pub use lambert::LambertAzimuthal;
pub use polar::PolarStereographic;
pub use region::{ProjectionFactory, Region};
pub use sinusoidal::Sinusoidal;
pub use transform::ProjectionTransformation;
pub use wrs::{NodeCrossing, OrbitalParameters, OrbitalPathRowModel, PathRow, PathRowF64};
