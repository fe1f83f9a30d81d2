//! Logging infrastructure for AirSight.
//!
//! Provides structured logging with file output and optional console output:
//! - Writes to the configured log file (cleared on session start)
//! - Optionally prints to stdout for headless tailing
//! - Multi-line pretty format for readability
//! - Configurable via RUST_LOG environment variable
//!
//! Interactive terminal sessions must use [`init_file_logging`]: stdout
//! belongs to the terminal UI, and log lines written there would corrupt it.

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize logging with dual output to both the log file and stdout.
///
/// Creates the log directory if needed and clears the previous log file.
///
/// # Arguments
///
/// * `log_path` - Full path to the log file (e.g., `~/.airsight/airsight.log`)
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns error if the log directory cannot be created, the log file cannot
/// be cleared, or the path has no file name component.
pub fn init_logging(log_path: &Path) -> Result<LoggingGuard, io::Error> {
    let (non_blocking_file, file_guard) = file_writer(log_path)?;

    // Create file layer with pretty multi-line format
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false) // No ANSI colors in file
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    // Create stdout layer with pretty multi-line format
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true) // ANSI colors for terminal
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    // Create env filter (defaults to INFO if RUST_LOG not set)
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Initialize global subscriber with both layers
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Initialize logging with file output only.
///
/// Same setup as [`init_logging`] but without the stdout layer. Used by the
/// interactive terminal UI, which owns stdout for the duration of the session.
///
/// # Errors
///
/// Returns error if the log directory cannot be created, the log file cannot
/// be cleared, or the path has no file name component.
pub fn init_file_logging(log_path: &Path) -> Result<LoggingGuard, io::Error> {
    let (non_blocking_file, file_guard) = file_writer(log_path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Prepare the non-blocking file writer for `log_path`.
///
/// Creates the parent directory if needed and clears any previous log file.
fn file_writer(log_path: &Path) -> Result<(NonBlocking, WorkerGuard), io::Error> {
    let log_file = log_path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path has no file name: {}", log_path.display()),
        )
    })?;

    // A bare file name has an empty parent, which create_dir_all rejects
    let log_dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    // Create the log directory if it doesn't exist
    fs::create_dir_all(log_dir)?;

    // Clear previous log file by writing empty content
    // This handles both existing and non-existing files
    fs::write(log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    Ok(tracing_appender::non_blocking(file_appender))
}
