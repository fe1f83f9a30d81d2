//! Run the monitoring session.
//!
//! Wires the engine and fetch pipeline together, then hands control to
//! the dashboard or the headless loop.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use airsight::coord::GeoPoint;
use airsight::engine::{AirQualityEngine, ViewOptions};
use airsight::fetch::{FetchDispatcher, HttpReadingClient, RefreshDaemon};
use airsight::layer::MapLayer;
use airsight::marker::InMemorySurface;

use crate::error::CliError;
use crate::runner::CliRunner;
use crate::tui_app::{self, TuiAppConfig};
use crate::ui::DashboardConfig;

/// Arguments for the monitoring session.
#[derive(Default)]
pub struct RunArgs {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub layer: Option<MapLayer>,
    pub hide_stations: bool,
    pub base_url: Option<String>,
    pub refresh_secs: Option<u64>,
    pub headless: bool,
    pub config: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

/// Run the monitoring session.
pub fn run(args: RunArgs) -> Result<(), CliError> {
    let headless = args.headless || !std::io::stdout().is_terminal();

    let runner = CliRunner::new(args.config.as_deref(), args.log_file.as_ref(), headless)?;
    runner.log_startup(if headless { "headless" } else { "dashboard" });
    let config = runner.config();

    // Resolve settings, CLI flags overriding the config file
    let latitude = args.lat.unwrap_or(config.map.latitude);
    let longitude = args.lon.unwrap_or(config.map.longitude);
    let reference = GeoPoint::new(latitude, longitude)?;

    let layer = args.layer.unwrap_or(config.map.default_layer);
    let show_stations = if args.hide_stations {
        false
    } else {
        config.map.show_stations
    };
    let base_url = args
        .base_url
        .clone()
        .unwrap_or_else(|| config.network.base_url.clone());
    let timeout = Duration::from_secs(config.network.timeout_secs);
    let refresh_secs = args.refresh_secs.unwrap_or(config.refresh.interval_secs);

    tracing::info!(
        %reference,
        layer = %layer,
        show_stations,
        base_url = %base_url,
        refresh_secs,
        "Session configured",
    );

    // The engine daemon and fetch tasks run on this runtime; the event
    // loop itself stays on the main thread.
    let runtime = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    let _runtime_guard = runtime.enter();

    let options = ViewOptions {
        reference,
        layer,
        show_auxiliary: show_stations,
    };
    let engine = AirQualityEngine::new(runtime.handle(), InMemorySurface::new(), options);
    let engine_client = engine.client();

    let http = HttpReadingClient::new(base_url.clone(), timeout)?;
    let dispatcher = FetchDispatcher::new(http, engine_client.clone(), reference);

    // Bind the map surface, then load initial data. With periodic refresh
    // enabled the daemon's immediate first round covers the initial load.
    engine_client.map_ready();

    let cancellation = CancellationToken::new();
    let daemon_handle = if refresh_secs > 0 {
        let daemon = RefreshDaemon::new(dispatcher.clone(), Duration::from_secs(refresh_secs));
        Some(daemon.start(cancellation.clone()))
    } else {
        dispatcher.dispatch_all();
        None
    };

    // Ctrl+C sets the shutdown flag the event loops watch
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_signal = Arc::clone(&shutdown);
    runtime.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown_signal.store(true, Ordering::SeqCst);
        }
    });

    let result = if headless {
        tui_app::run_headless(&engine, Arc::clone(&shutdown))
    } else {
        tui_app::run_tui(TuiAppConfig {
            engine: &engine,
            dispatcher: &dispatcher,
            dashboard: DashboardConfig {
                reference,
                base_url,
                refresh_interval_secs: refresh_secs,
            },
            shutdown: Arc::clone(&shutdown),
        })
    };

    // Stop the refresh daemon before the engine so no round outlives it
    cancellation.cancel();
    if let Some(handle) = daemon_handle {
        let _ = runtime.block_on(async { tokio::time::timeout(Duration::from_secs(2), handle).await });
    }
    runtime.block_on(engine.shutdown());

    result?;

    println!("AirSight stopped. Goodbye!");
    Ok(())
}
