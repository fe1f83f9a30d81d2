//! Reconciliation engine: events in, marker sets and snapshots out.
//!
//! This module provides a 3-layer architecture for presentation state:
//!
//! 1. **Emission Layer** ([`EngineClient`]) - Fire-and-forget event sending
//! 2. **Processing Layer** ([`EngineDaemon`]) - Sequential event application
//! 3. **Presentation Layer** ([`SceneSnapshot`]) - Published state for renderers
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  EMISSION LAYER                                            │
//! │  EngineClient (cloneable, cheap, fire-and-forget)          │
//! │  - Used by: fetch tasks, refresh daemon, user interface    │
//! └──────────────────────────┬─────────────────────────────────┘
//! │ EngineEvent (mpsc channel)
//! ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  PROCESSING LAYER                                          │
//! │  EngineDaemon (independent async task)                     │
//! │  - Applies events to registry and view selection           │
//! │  - Reconciles the drawn marker set by full replacement     │
//! └──────────────────────────┬─────────────────────────────────┘
//! │ SceneSnapshot (shared handle + broadcast)
//! ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  PRESENTATION LAYER                                        │
//! │  Renderers read snapshots, never engine internals          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use airsight::engine::{AirQualityEngine, ViewOptions};
//! use airsight::marker::InMemorySurface;
//!
//! let engine = AirQualityEngine::new(
//!     &runtime.handle(),
//!     InMemorySurface::new(),
//!     ViewOptions::new(reference),
//! );
//!
//! let client = engine.client();
//! client.map_ready();
//!
//! // Render from the published snapshot
//! let snapshot = engine.snapshot();
//!
//! // Shutdown gracefully
//! engine.shutdown().await;
//! ```

mod client;
mod daemon;
mod event;
mod snapshot;

pub use client::EngineClient;
pub use daemon::{EngineDaemon, ViewOptions};
pub use event::EngineEvent;
pub use snapshot::{SceneSnapshot, SharedSceneState, SourceSummary};

use crate::marker::MarkerSurface;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

// =============================================================================
// Engine System
// =============================================================================

/// The complete reconciliation engine.
///
/// Top-level factory that wires the event channel, spawns the daemon, and
/// hands out clients and snapshot access. Dropping the engine without
/// calling [`shutdown`](Self::shutdown) leaves the daemon running until
/// every client is dropped.
pub struct AirQualityEngine {
    /// Client for sending events.
    client: EngineClient,

    /// Handle to the published snapshot.
    state_handle: SharedSceneState,

    /// Snapshot broadcast sender, kept for late subscribers.
    updates: broadcast::Sender<SceneSnapshot>,

    /// Handle to the daemon task.
    daemon_handle: Option<JoinHandle<()>>,

    /// Shutdown signal for the daemon.
    shutdown: CancellationToken,
}

impl AirQualityEngine {
    /// Creates the engine and starts its daemon.
    ///
    /// The daemon runs as an async task on the provided runtime and keeps
    /// processing events until [`shutdown`](Self::shutdown) is called.
    ///
    /// # Arguments
    ///
    /// * `runtime_handle` - Handle to the Tokio runtime for spawning the daemon
    /// * `surface` - Rendering surface, bound when the map announces readiness
    /// * `options` - Initial view configuration
    pub fn new<S>(
        runtime_handle: &tokio::runtime::Handle,
        surface: S,
        options: ViewOptions,
    ) -> Self
    where
        S: MarkerSurface + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = EngineClient::new(tx);

        let daemon = EngineDaemon::new(rx, surface, options);
        let state_handle = daemon.state_handle();
        let updates = daemon.update_sender();
        let shutdown = CancellationToken::new();

        let daemon_shutdown = shutdown.clone();
        let daemon_handle = Some(runtime_handle.spawn(async move {
            daemon.run(daemon_shutdown).await;
        }));

        Self {
            client,
            state_handle,
            updates,
            daemon_handle,
            shutdown,
        }
    }

    /// Returns a clone of the engine client.
    ///
    /// Clients are cheap and can be distributed to every producer.
    pub fn client(&self) -> EngineClient {
        self.client.clone()
    }

    /// Returns a handle to the shared snapshot.
    pub fn state_handle(&self) -> SharedSceneState {
        Arc::clone(&self.state_handle)
    }

    /// Subscribes to snapshot updates.
    pub fn subscribe(&self) -> broadcast::Receiver<SceneSnapshot> {
        self.updates.subscribe()
    }

    /// Returns a clone of the current snapshot.
    pub fn snapshot(&self) -> SceneSnapshot {
        self.state_handle
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Shuts down the engine gracefully.
    ///
    /// Signals the daemon to stop and waits for it to finish publishing.
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(handle) = self.daemon_handle.take() {
            let _ = handle.await;
        }
    }

    /// Returns true if the daemon is still running.
    pub fn is_running(&self) -> bool {
        self.daemon_handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl std::fmt::Debug for AirQualityEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirQualityEngine")
            .field("running", &self.is_running())
            .finish()
    }
}
