//! Region codes, the projection configured for each, and default region
//! selection from a geographic position.
//!
//! Selection first converts the position to a WRS-2 path/row and then runs
//! an ordered list of half-open path/row rectangles. The rectangles overlap
//! outside the areas they were tuned for, so order matters: the first
//! matching rule wins and Asia catches everything else.

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use geo_common::LatLong;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lambert::LambertAzimuthal;
use crate::polar::PolarStereographic;
use crate::sinusoidal::Sinusoidal;
use crate::transform::ProjectionTransformation;
use crate::wrs::{OrbitalPathRowModel, PathRow};

/// A display region, each with its own preconfigured projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Europe,
    Africa,
    Asia,
    Australia,
    SouthPacific,
    Antarctica,
    /// Global sinusoidal used by the MODIS tile grid
    ModisSinusoidal,
    /// North polar stereographic used by the arctic polar grid
    Arctic,
    /// The path/row lies outside the WRS-2 grid
    OutOfRange,
}

impl Region {
    /// Region used when a code is unknown.
    pub const DEFAULT: Region = Region::NorthAmerica;

    /// Every region that has a projection.
    pub const ALL: [Region; 10] = [
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Europe,
        Region::Africa,
        Region::Asia,
        Region::Australia,
        Region::SouthPacific,
        Region::Antarctica,
        Region::ModisSinusoidal,
        Region::Arctic,
    ];

    /// Stable integer code.
    pub fn code(&self) -> i32 {
        match self {
            Region::NorthAmerica => 0,
            Region::SouthAmerica => 1,
            Region::Europe => 2,
            Region::Africa => 3,
            Region::Asia => 4,
            Region::Australia => 5,
            Region::SouthPacific => 6,
            Region::Antarctica => 7,
            Region::ModisSinusoidal => 8,
            Region::Arctic => 9,
            Region::OutOfRange => -1,
        }
    }

    pub fn from_code(code: i32) -> Option<Region> {
        match code {
            -1 => Some(Region::OutOfRange),
            _ => Region::ALL.iter().copied().find(|r| r.code() == code),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Europe => "Europe",
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Australia => "Australia",
            Region::SouthPacific => "South Pacific",
            Region::Antarctica => "Antarctica",
            Region::ModisSinusoidal => "MODIS Sinusoidal",
            Region::Arctic => "Arctic",
            Region::OutOfRange => "Out of range",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One rectangle of the region classifier. Ranges are half-open.
#[derive(Debug, Clone)]
pub struct RegionRule {
    pub region: Region,
    /// Path ranges; a rule matches if the path falls in any of them
    pub paths: &'static [Range<i32>],
    pub rows: Range<i32>,
}

impl RegionRule {
    pub fn matches(&self, path_row: PathRow) -> bool {
        self.rows.contains(&path_row.row) && self.paths.iter().any(|p| p.contains(&path_row.path))
    }
}

/// Ordered classifier rules. Paths number westward, so an eastern region
/// can span the path 233 -> 1 seam and needs two ranges.
pub static REGION_RULES: &[RegionRule] = &[
    RegionRule {
        region: Region::Antarctica,
        paths: &[1..234],
        rows: 102..125,
    },
    RegionRule {
        region: Region::NorthAmerica,
        paths: &[1..91, 226..234],
        rows: 1..51,
    },
    RegionRule {
        region: Region::Europe,
        paths: &[160..226],
        rows: 1..42,
    },
    RegionRule {
        region: Region::SouthAmerica,
        paths: &[1..20, 210..234],
        rows: 51..102,
    },
    RegionRule {
        region: Region::Africa,
        paths: &[150..210],
        rows: 42..102,
    },
    RegionRule {
        region: Region::Australia,
        paths: &[70..120],
        rows: 62..102,
    },
    RegionRule {
        region: Region::SouthPacific,
        paths: &[20..85],
        rows: 51..102,
    },
];

/// Lowest/highest valid WRS-2 path and the rows the classifier covers.
const MIN_PATH: i32 = 1;
const MAX_PATH: i32 = 233;
const MIN_ROW: i32 = 1;
const MAX_ROW: i32 = 124;

/// Classify a WRS-2 path/row into a region.
///
/// Pure function of its input. Out-of-grid values are rejected before any
/// rectangle is tested.
pub fn classify_path_row(path_row: PathRow) -> Region {
    if path_row.row < MIN_ROW
        || path_row.row > MAX_ROW
        || path_row.path < MIN_PATH
        || path_row.path > MAX_PATH
    {
        return Region::OutOfRange;
    }
    REGION_RULES
        .iter()
        .find(|rule| rule.matches(path_row))
        .map(|rule| rule.region)
        .unwrap_or(Region::Asia)
}

/// Builds and hands out the projection of each region.
///
/// Constructed once and passed to whoever needs it; the projections are
/// immutable and shared through `Arc`.
#[derive(Debug, Clone)]
pub struct ProjectionFactory {
    projections: HashMap<Region, Arc<dyn ProjectionTransformation>>,
    path_row_model: OrbitalPathRowModel,
}

impl ProjectionFactory {
    /// Factory using WRS-2 for default region selection.
    pub fn new() -> Self {
        Self::with_path_row_model(OrbitalPathRowModel::wrs2())
    }

    pub fn with_path_row_model(path_row_model: OrbitalPathRowModel) -> Self {
        let mut projections: HashMap<Region, Arc<dyn ProjectionTransformation>> = HashMap::new();
        for region in Region::ALL {
            projections.insert(region, build_projection(region));
        }
        Self {
            projections,
            path_row_model,
        }
    }

    /// Projection for a region. Regions without a projection of their own
    /// (only `OutOfRange`) get the default region's projection.
    pub fn projection_for_region(&self, region: Region) -> Arc<dyn ProjectionTransformation> {
        match self.projections.get(&region) {
            Some(projection) => Arc::clone(projection),
            None => {
                debug!(
                    region = %region,
                    fallback = %Region::DEFAULT,
                    "No projection for region, using default"
                );
                Arc::clone(&self.projections[&Region::DEFAULT])
            }
        }
    }

    /// Projection for an integer region code. Unknown codes fall back to
    /// the default region, so the caller always gets a usable projection.
    pub fn projection_for_code(&self, code: i32) -> Arc<dyn ProjectionTransformation> {
        match Region::from_code(code) {
            Some(region) => self.projection_for_region(region),
            None => {
                debug!(code, fallback = %Region::DEFAULT, "Unknown region code, using default");
                self.projection_for_region(Region::DEFAULT)
            }
        }
    }

    /// Region whose projection best displays a position.
    pub fn default_region(&self, position: LatLong) -> Region {
        classify_path_row(self.path_row_model.lat_long_to_path_row(position))
    }

    /// Integer code of [`Self::default_region`].
    pub fn default_region_code(&self, position: LatLong) -> i32 {
        self.default_region(position).code()
    }

    pub fn path_row_model(&self) -> &OrbitalPathRowModel {
        &self.path_row_model
    }
}

impl Default for ProjectionFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn build_projection(region: Region) -> Arc<dyn ProjectionTransformation> {
    let name = region.name();
    match region {
        Region::NorthAmerica => Arc::new(LambertAzimuthal::continental(name, -100.0, 45.0)),
        Region::SouthAmerica => Arc::new(LambertAzimuthal::continental(name, -60.0, -15.0)),
        Region::Europe => Arc::new(LambertAzimuthal::continental(name, 20.0, 55.0)),
        Region::Africa => Arc::new(LambertAzimuthal::continental(name, 20.0, 5.0)),
        Region::Asia => Arc::new(LambertAzimuthal::continental(name, 100.0, 45.0)),
        Region::Australia => Arc::new(LambertAzimuthal::continental(name, 135.0, -15.0)),
        Region::SouthPacific => Arc::new(LambertAzimuthal::continental(name, -160.0, -15.0)),
        Region::Antarctica => Arc::new(PolarStereographic::antarctic()),
        Region::ModisSinusoidal => Arc::new(Sinusoidal::modis()),
        Region::Arctic => Arc::new(PolarStereographic::arctic()),
        Region::OutOfRange => build_projection(Region::DEFAULT),
    }
}
