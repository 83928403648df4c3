//! Build a navigation model from its short name.

use std::fmt;
use std::str::FromStr;

use geo_common::GeoError;
use projection::{NodeCrossing, OrbitalParameters};
use serde::{Deserialize, Serialize};

use crate::model::NavigationModel;
use crate::modis::ModisTileModel;
use crate::napp::{NappModel, NhapModel};
use crate::polar::PolarGridModel;
use crate::tri_decadal::TriDecadalModel;
use crate::wrs::WrsModel;

/// Every navigation model that can be built by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    Wrs1,
    Wrs2,
    /// WRS-2 counted along the ascending (night) node
    Wrs2Ascending,
    Modis,
    PolarSouth,
    PolarNorth,
    TriDecadal,
    Napp,
    Nhap,
}

impl ModelKind {
    pub const ALL: [ModelKind; 9] = [
        ModelKind::Wrs1,
        ModelKind::Wrs2,
        ModelKind::Wrs2Ascending,
        ModelKind::Modis,
        ModelKind::PolarSouth,
        ModelKind::PolarNorth,
        ModelKind::TriDecadal,
        ModelKind::Napp,
        ModelKind::Nhap,
    ];

    /// Short name accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Wrs1 => "wrs1",
            ModelKind::Wrs2 => "wrs2",
            ModelKind::Wrs2Ascending => "wrs2-ascending",
            ModelKind::Modis => "modis",
            ModelKind::PolarSouth => "polar-south",
            ModelKind::PolarNorth => "polar-north",
            ModelKind::TriDecadal => "tri-decadal",
            ModelKind::Napp => "napp",
            ModelKind::Nhap => "nhap",
        }
    }

    /// Construct the model. `nhap_density` only affects [`ModelKind::Nhap`].
    pub fn build(&self, nhap_density: u32) -> Box<dyn NavigationModel> {
        match self {
            ModelKind::Wrs1 => Box::new(WrsModel::wrs1()),
            ModelKind::Wrs2 => Box::new(WrsModel::wrs2()),
            ModelKind::Wrs2Ascending => Box::new(WrsModel::with_node(
                OrbitalParameters::WRS2,
                NodeCrossing::Ascending,
            )),
            ModelKind::Modis => Box::new(ModisTileModel::new()),
            ModelKind::PolarSouth => Box::new(PolarGridModel::south()),
            ModelKind::PolarNorth => Box::new(PolarGridModel::north()),
            ModelKind::TriDecadal => Box::new(TriDecadalModel::new()),
            ModelKind::Napp => Box::new(NappModel::new()),
            ModelKind::Nhap => Box::new(NhapModel::new(nhap_density)),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| GeoError::UnknownModel(s.to_string()))
    }
}
