//! TUI application module for the AirSight CLI.
//!
//! Contains the interactive dashboard loop and the headless fallback,
//! separated from argument parsing and engine wiring.
//!
//! # Architecture
//!
//! - `run_tui()` - Interactive dashboard with event loop
//! - `run_headless()` - Simple status loop for non-TTY environments
//! - `TuiAppConfig` - Configuration struct for TUI initialization
//!
//! `run.rs` acts as a thin front controller that loads configuration,
//! wires the engine and fetch pipeline, and delegates here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use airsight::engine::AirQualityEngine;
use airsight::fetch::{FetchDispatcher, HttpReadingClient};

use crate::error::CliError;
use crate::ui::{self, Dashboard, DashboardConfig, DashboardEvent};

/// Configuration for starting the TUI application.
pub struct TuiAppConfig<'a> {
    /// Running engine whose snapshots drive the display.
    pub engine: &'a AirQualityEngine,
    /// Dispatcher for manual refresh rounds.
    pub dispatcher: &'a FetchDispatcher<HttpReadingClient>,
    /// Dashboard display configuration.
    pub dashboard: DashboardConfig,
    /// Shutdown signal from the Ctrl+C handler.
    pub shutdown: Arc<AtomicBool>,
}

/// Run the interactive dashboard until the user quits.
pub fn run_tui(app: TuiAppConfig<'_>) -> Result<(), CliError> {
    let TuiAppConfig {
        engine,
        dispatcher,
        dashboard: dashboard_config,
        shutdown,
    } = app;

    let client = engine.client();
    let mut dashboard = Dashboard::new(dashboard_config, shutdown).map_err(CliError::Terminal)?;

    // Draw immediately so the first tick is not a blank screen
    dashboard
        .draw(&engine.snapshot())
        .map_err(CliError::Terminal)?;

    // Main event loop
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        match dashboard.poll_event().map_err(CliError::Terminal)? {
            Some(DashboardEvent::Quit) => break,
            Some(DashboardEvent::Refresh) => {
                tracing::info!("Manual refresh requested");
                dispatcher.dispatch_all();
            }
            Some(DashboardEvent::CycleLayer) => {
                let next = engine.snapshot().layer.next();
                tracing::info!(layer = %next, "Layer selected");
                client.layer_selected(next);
            }
            Some(DashboardEvent::ToggleStations) => {
                let show = !engine.snapshot().show_auxiliary;
                tracing::info!(show, "Station visibility toggled");
                client.auxiliary_toggled(show);
            }
            None => {}
        }

        // Redraw at tick rate
        if last_tick.elapsed() >= tick_rate {
            dashboard
                .draw(&engine.snapshot())
                .map_err(CliError::Terminal)?;
            last_tick = Instant::now();
        }

        // Small sleep to prevent busy-waiting
        std::thread::sleep(Duration::from_millis(10));
    }

    Ok(())
}

/// Run in headless mode (non-TTY environments).
///
/// A plain wait loop that prints the scene status periodically until the
/// shutdown signal arrives.
pub fn run_headless(engine: &AirQualityEngine, shutdown: Arc<AtomicBool>) -> Result<(), CliError> {
    println!("Monitoring air quality. Press Ctrl+C to stop.");
    println!();

    let status_interval = Duration::from_secs(30);
    let mut last_status = Instant::now();

    while !shutdown.load(Ordering::SeqCst) {
        std::thread::sleep(Duration::from_millis(100));

        // Print status every 30 seconds
        if last_status.elapsed() >= status_interval {
            ui::dashboard::print_status(&engine.snapshot());
            last_status = Instant::now();
        }
    }

    Ok(())
}
