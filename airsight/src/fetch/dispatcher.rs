//! Fetch dispatch with per-source sequence numbering.
//!
//! The [`FetchDispatcher`] runs refresh rounds against a [`ReadingClient`]
//! and delivers outcomes to the engine as events. Every fetch carries a
//! per-source sequence number taken at dispatch time, which is what lets
//! the engine discard results that a newer dispatch has already overtaken.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::warn;

use super::client::ReadingClient;
use crate::coord::GeoPoint;
use crate::engine::EngineClient;
use crate::source::SourceId;

/// Monotonic dispatch counters, one per source.
#[derive(Debug, Default)]
struct SourceSequences([AtomicU64; 3]);

impl SourceSequences {
    /// Takes the next sequence number for a source. Numbers start at 1.
    fn next(&self, source: SourceId) -> u64 {
        self.0[source.index()].fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Dispatches reading fetches and reports outcomes to the engine.
///
/// Cheap to clone; clones share the sequence counters, so manual and
/// periodic refreshes stay consistently ordered per source.
pub struct FetchDispatcher<C: ReadingClient> {
    client: Arc<C>,
    engine: EngineClient,
    reference: GeoPoint,
    sequences: Arc<SourceSequences>,
}

impl<C: ReadingClient> FetchDispatcher<C> {
    /// Create a new dispatcher fetching for `reference`.
    pub fn new(client: C, engine: EngineClient, reference: GeoPoint) -> Self {
        Self {
            client: Arc::new(client),
            engine,
            reference,
            sequences: Arc::new(SourceSequences::default()),
        }
    }

    /// Runs one refresh round: announces it, fetches every source
    /// concurrently, and returns the number of failures.
    pub async fn run_round(&self) -> usize {
        self.engine.refresh_started(SourceId::ALL.len());

        let (current, satellite, ground) = tokio::join!(
            self.fetch_one(SourceId::Current),
            self.fetch_one(SourceId::Satellite),
            self.fetch_one(SourceId::Ground),
        );

        current as usize + satellite as usize + ground as usize
    }

    /// Fetches one source and reports the outcome. Returns true on failure.
    async fn fetch_one(&self, source: SourceId) -> bool {
        let seq = self.sequences.next(source);

        match self.client.fetch_reading(source, self.reference).await {
            Ok(reading) => {
                self.engine.reading_fetched(source, seq, reading);
                false
            }
            Err(e) => {
                warn!(source = %source, seq, error = %e, "Reading fetch failed");
                self.engine.fetch_failed(source, seq, e.to_string());
                true
            }
        }
    }
}

impl<C: ReadingClient + 'static> FetchDispatcher<C> {
    /// Starts a refresh round without waiting for it.
    ///
    /// Used by interactive refresh, where the caller must not block on
    /// slow endpoints.
    pub fn dispatch_all(&self) {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            dispatcher.run_round().await;
        });
    }
}

impl<C: ReadingClient> Clone for FetchDispatcher<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            engine: self.engine.clone(),
            reference: self.reference,
            sequences: Arc::clone(&self.sequences),
        }
    }
}

impl<C: ReadingClient> std::fmt::Debug for FetchDispatcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchDispatcher")
            .field("reference", &self.reference)
            .finish()
    }
}
