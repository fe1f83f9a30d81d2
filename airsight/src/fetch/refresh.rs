//! Periodic refresh daemon.
//!
//! The [`RefreshDaemon`] re-runs full fetch rounds at a configurable
//! interval. On consecutive failed rounds it applies exponential backoff
//! before the next round, so a down service is not hammered.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::client::ReadingClient;
use super::dispatcher::FetchDispatcher;

/// Maximum backoff duration (5 minutes).
const MAX_BACKOFF: Duration = Duration::from_secs(300);

/// Periodic refresh daemon.
///
/// Runs fetch rounds through the shared dispatcher, which keeps its
/// sequence numbering consistent with manual refreshes.
pub struct RefreshDaemon<C: ReadingClient> {
    dispatcher: FetchDispatcher<C>,
    interval: Duration,
}

impl<C: ReadingClient + 'static> RefreshDaemon<C> {
    /// Create a new refresh daemon.
    pub fn new(dispatcher: FetchDispatcher<C>, interval: Duration) -> Self {
        Self {
            dispatcher,
            interval,
        }
    }

    /// Start the daemon as an async task.
    pub fn start(self, shutdown: CancellationToken) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run(shutdown).await;
        })
    }

    /// Run the refresh loop.
    ///
    /// The first round runs immediately; later rounds follow the
    /// configured interval, delayed by backoff while rounds keep failing.
    async fn run(self, shutdown: CancellationToken) {
        info!(
            interval_secs = self.interval.as_secs(),
            "Refresh daemon started"
        );

        let mut interval = tokio::time::interval(self.interval);
        let mut consecutive_errors: u32 = 0;

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    info!("Refresh daemon shutting down");
                    break;
                }

                _ = interval.tick() => {
                    // Apply backoff if we've had consecutive failed rounds
                    if consecutive_errors > 0 {
                        let backoff = calculate_backoff(consecutive_errors);
                        debug!(
                            backoff_secs = backoff.as_secs(),
                            consecutive_errors,
                            "Backing off after errors"
                        );
                        tokio::select! {
                            _ = shutdown.cancelled() => break,
                            _ = tokio::time::sleep(backoff) => {}
                        }
                    }

                    let failures = self.dispatcher.run_round().await;
                    if failures == 0 {
                        consecutive_errors = 0;
                    } else {
                        consecutive_errors += 1;
                        debug!(failures, consecutive_errors, "Refresh round had failures");
                    }
                }
            }
        }

        info!("Refresh daemon stopped");
    }
}

/// Calculate exponential backoff: 2^n seconds, capped at MAX_BACKOFF.
fn calculate_backoff(consecutive_errors: u32) -> Duration {
    let secs = 2u64.saturating_pow(consecutive_errors.min(20));
    Duration::from_secs(secs).min(MAX_BACKOFF)
}
