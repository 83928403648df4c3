//! Navigation models: the discrete grid each dataset is indexed by.
//!
//! Every model answers the same questions through [`NavigationModel`]:
//! which cell holds a position, where a cell is, how the grid is bounded and
//! oriented, and how an address is written as fixed-width text.
//!
//! # Models
//!
//! | Model | Column | Row |
//! |-------|--------|-----|
//! | [`WrsModel`] | WRS-1/WRS-2 path | row |
//! | [`ModisTileModel`] | tile h | tile v |
//! | [`PolarGridModel`] | 120 km cell x | 120 km cell y |
//! | [`TriDecadalModel`] | UTM zone | 5° latitude band |
//! | [`NappModel`] | flight line | station |
//! | [`NhapModel`] | reference-point column | reference-point row |

mod codec;
pub mod model;
pub mod modis;
pub mod napp;
pub mod polar;
pub mod registry;
pub mod tri_decadal;
pub mod wrs;

pub use model::NavigationModel;
pub use modis::ModisTileModel;
pub use napp::{NappModel, NhapModel};
pub use polar::PolarGridModel;
pub use registry::ModelKind;
pub use tri_decadal::TriDecadalModel;
pub use wrs::WrsModel;
