//! Command handling for the gridnav CLI.
//!
//! Each subcommand produces a [`Report`], printed as plain text or JSON by
//! the binary.

use std::fmt;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use geo_common::{GridAddress, LatLong};
use navigation::{ModelKind, NavigationModel};
use projection::{ProjectionFactory, Region};
use scene_cache::{CacheConfig, DateCache, MapLayerFileCache};
use serde::Serialize;
use tracing::{debug, info};

/// Grid navigation tool
#[derive(Parser, Debug)]
#[command(name = "gridnav")]
#[command(about = "Convert between lat/long, regional projections and grid addresses")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// NHAP reference points per degree
    #[arg(long, default_value_t = navigation::napp::DEFAULT_NHAP_DENSITY, env = "NHAP_DENSITY")]
    pub nhap_density: u32,

    /// Log level
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "GRIDNAV_LOG_JSON")]
    pub log_json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Grid cell containing a position
    ToGrid {
        /// Navigation model (wrs1, wrs2, wrs2-ascending, modis, polar-south,
        /// polar-north, tri-decadal, napp, nhap)
        #[arg(long)]
        model: ModelKind,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },

    /// Centre of a grid cell given as address text
    ToLatlong {
        #[arg(long)]
        model: ModelKind,
        /// Encoded address, e.g. 029030 or h08v05
        address: String,
    },

    /// Default display region and its projection for a position
    Region {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Project with this region code instead of the default region
        #[arg(long, allow_hyphen_values = true)]
        code: Option<i32>,
    },

    /// Address text of a column and row
    Encode {
        #[arg(long)]
        model: ModelKind,
        #[arg(long, allow_hyphen_values = true)]
        column: i32,
        #[arg(long, allow_hyphen_values = true)]
        row: i32,
    },

    /// Column and row of address text
    Decode {
        #[arg(long)]
        model: ModelKind,
        address: String,
    },

    /// Cache sizes taken from DATE_CACHE_CAPACITY, FILE_CACHE_RETAIN and
    /// FILE_CACHE_MAX_AGE
    CacheConfig,
}

/// Result of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Grid {
        model: String,
        latitude: f64,
        longitude: f64,
        column: i32,
        row: i32,
        fractional_column: f64,
        fractional_row: f64,
        address: String,
        valid: bool,
    },
    Position {
        model: String,
        address: String,
        column: i32,
        row: i32,
        latitude: f64,
        longitude: f64,
    },
    Region {
        latitude: f64,
        longitude: f64,
        path: i32,
        row: i32,
        region: String,
        code: i32,
        projection: String,
        x: Option<i64>,
        y: Option<i64>,
    },
    Address {
        model: String,
        column: i32,
        row: i32,
        address: String,
    },
    CacheConfig {
        date_cache_capacity: usize,
        file_cache_retain: usize,
        file_cache_max_age: u32,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Grid {
                model,
                column,
                row,
                fractional_column,
                fractional_row,
                address,
                valid,
                ..
            } => {
                write!(
                    f,
                    "{} {} (column {}, row {}; fractional {:.4}, {:.4})",
                    model, address, column, row, fractional_column, fractional_row
                )?;
                if !valid {
                    write!(f, " [no data]")?;
                }
                Ok(())
            }
            Report::Position {
                model,
                address,
                latitude,
                longitude,
                ..
            } => write!(f, "{} {} centre: {:.6}, {:.6}", model, address, latitude, longitude),
            Report::Region {
                path,
                row,
                region,
                code,
                projection,
                x,
                y,
                ..
            } => {
                write!(f, "WRS-2 {}/{}: {} (code {}), {}", path, row, region, code, projection)?;
                match (x, y) {
                    (Some(x), Some(y)) => write!(f, " at x={} y={}", x, y),
                    _ => write!(f, " (no projected image)"),
                }
            }
            Report::Address {
                model,
                column,
                row,
                address,
            } => write!(f, "{} column {} row {} = {}", model, column, row, address),
            Report::CacheConfig {
                date_cache_capacity,
                file_cache_retain,
                file_cache_max_age,
            } => write!(
                f,
                "date cache {} cells, file cache keeps {} files, ages stop at {}",
                date_cache_capacity, file_cache_retain, file_cache_max_age
            ),
        }
    }
}

/// Execute one command.
pub fn run(command: &Command, nhap_density: u32) -> anyhow::Result<Report> {
    match command {
        Command::ToGrid { model, lat, lon } => {
            let position = LatLong::try_new(*lat, *lon)?;
            to_grid(model.build(nhap_density).as_ref(), position)
        }
        Command::ToLatlong { model, address } => {
            to_lat_long(model.build(nhap_density).as_ref(), address)
        }
        Command::Region { lat, lon, code } => {
            let position = LatLong::try_new(*lat, *lon)?;
            region(&ProjectionFactory::new(), position, *code)
        }
        Command::Encode { model, column, row } => {
            encode(model.build(nhap_density).as_ref(), GridAddress::new(*column, *row))
        }
        Command::Decode { model, address } => decode(model.build(nhap_density).as_ref(), address),
        Command::CacheConfig => cache_config(&CacheConfig::from_env()),
    }
}

fn to_grid(model: &dyn NavigationModel, position: LatLong) -> anyhow::Result<Report> {
    let fractional = model
        .lat_long_to_double_grid(position)
        .ok_or_else(|| anyhow!("{} has no cell for {}", model.name(), position))?;
    let cell = model
        .lat_long_to_grid(position)
        .ok_or_else(|| anyhow!("{} has no cell for {}", model.name(), position))?;
    debug!(model = model.name(), column = cell.column, row = cell.row, "Located grid cell");

    Ok(Report::Grid {
        model: model.name().to_string(),
        latitude: position.latitude,
        longitude: position.longitude,
        column: cell.column,
        row: cell.row,
        fractional_column: fractional.column,
        fractional_row: fractional.row,
        address: model.encode_address(cell),
        valid: model.is_valid_grid_cell(cell),
    })
}

fn to_lat_long(model: &dyn NavigationModel, text: &str) -> anyhow::Result<Report> {
    let address = model.decode_address(text)?;
    let center = model
        .grid_to_lat_long(address)
        .ok_or_else(|| anyhow!("{} cell {} has no geographic centre", model.name(), text))?;

    Ok(Report::Position {
        model: model.name().to_string(),
        address: text.to_string(),
        column: address.column,
        row: address.row,
        latitude: center.latitude,
        longitude: center.longitude,
    })
}

fn region(
    factory: &ProjectionFactory,
    position: LatLong,
    code: Option<i32>,
) -> anyhow::Result<Report> {
    let path_row = factory.path_row_model().lat_long_to_path_row(position);
    let default_region = factory.default_region(position);
    let projection_region = match code {
        Some(code) => Region::from_code(code).unwrap_or(Region::DEFAULT),
        None => default_region,
    };
    let projection = factory.projection_for_region(projection_region);
    let coord = projection.lat_long_to_proj(position);
    info!(
        path = path_row.path,
        row = path_row.row,
        region = %default_region,
        projection = projection.name(),
        "Selected region"
    );

    Ok(Report::Region {
        latitude: position.latitude,
        longitude: position.longitude,
        path: path_row.path,
        row: path_row.row,
        region: default_region.name().to_string(),
        code: default_region.code(),
        projection: projection.name().to_string(),
        x: coord.map(|c| c.x),
        y: coord.map(|c| c.y),
    })
}

fn encode(model: &dyn NavigationModel, address: GridAddress) -> anyhow::Result<Report> {
    if !model.bounds().contains(address) {
        return Err(anyhow!("{} is outside the {} grid", address, model.name()));
    }
    Ok(Report::Address {
        model: model.name().to_string(),
        column: address.column,
        row: address.row,
        address: model.encode_address(address),
    })
}

fn decode(model: &dyn NavigationModel, text: &str) -> anyhow::Result<Report> {
    let address = model
        .decode_address(text)
        .with_context(|| format!("decoding with {}", model.name()))?;
    Ok(Report::Address {
        model: model.name().to_string(),
        column: address.column,
        row: address.row,
        address: text.to_string(),
    })
}

/// Check that caches can be built from `config` and report its settings.
fn cache_config(config: &CacheConfig) -> anyhow::Result<Report> {
    let date_cache = DateCache::from_config(config).context("building the date cache")?;
    MapLayerFileCache::<()>::from_config(config).context("building the map layer file cache")?;
    debug!(capacity = date_cache.capacity(), "Cache configuration accepted");

    Ok(Report::CacheConfig {
        date_cache_capacity: config.date_cache_capacity,
        file_cache_retain: config.file_cache_retain,
        file_cache_max_age: config.file_cache_max_age,
    })
}
