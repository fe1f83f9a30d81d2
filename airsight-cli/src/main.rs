//! AirSight CLI - terminal dashboard for multi-source air quality monitoring.
//!
//! Fetches readings for a monitored location from the AirSight data
//! service, reconciles them into map markers, and renders the scene as a
//! live terminal dashboard (or a plain status loop when headless).

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use airsight::layer::MapLayer;

mod error;
mod run;
mod runner;
mod tui_app;
mod ui;

use run::RunArgs;

/// Map layer selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LayerArg {
    /// Single index marker at the monitored location
    Aqi,
    /// TEMPO satellite column estimate
    Satellite,
    /// Nearest ground station measurement
    Ground,
    /// All sources side by side
    Comparison,
    /// Pollutant concentrations per source
    Pollutants,
}

impl From<LayerArg> for MapLayer {
    fn from(layer: LayerArg) -> Self {
        match layer {
            LayerArg::Aqi => MapLayer::Aqi,
            LayerArg::Satellite => MapLayer::Satellite,
            LayerArg::Ground => MapLayer::Ground,
            LayerArg::Comparison => MapLayer::Comparison,
            LayerArg::Pollutants => MapLayer::Pollutants,
        }
    }
}

#[derive(Parser)]
#[command(name = "airsight")]
#[command(about = "Terminal dashboard for multi-source air quality monitoring")]
#[command(version = airsight::VERSION)]
struct Args {
    /// Latitude of the monitored location in decimal degrees
    #[arg(long)]
    lat: Option<f64>,

    /// Longitude of the monitored location in decimal degrees
    #[arg(long)]
    lon: Option<f64>,

    /// Map layer to start on
    #[arg(long, value_enum)]
    layer: Option<LayerArg>,

    /// Start with auxiliary station markers hidden
    #[arg(long)]
    hide_stations: bool,

    /// Base URL of the air quality data service
    #[arg(long)]
    base_url: Option<String>,

    /// Seconds between automatic refresh rounds (0 disables)
    #[arg(long)]
    refresh_secs: Option<u64>,

    /// Run without the terminal dashboard
    #[arg(long)]
    headless: bool,

    /// Path to an alternate configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // Coordinates only make sense as a pair
    if args.lat.is_some() != args.lon.is_some() {
        eprintln!("Error: --lat and --lon must be given together");
        process::exit(1);
    }

    let run_args = RunArgs {
        lat: args.lat,
        lon: args.lon,
        layer: args.layer.map(MapLayer::from),
        hide_stations: args.hide_stations,
        base_url: args.base_url,
        refresh_secs: args.refresh_secs,
        headless: args.headless,
        config: args.config,
        log_file: args.log_file,
    };

    if let Err(e) = run::run(run_args) {
        e.exit();
    }
}
