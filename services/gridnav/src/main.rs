//! gridnav
//!
//! Converts between latitude/longitude, regional projections and the grid
//! addresses of the navigation models.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use gridnav::{run, Args};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr);
    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    debug!(command = ?args.command, "Running gridnav");

    let report = run(&args.command, args.nhap_density)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
