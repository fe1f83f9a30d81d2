//! Engine daemon: the single writer of presentation state.
//!
//! The [`EngineDaemon`] runs as an independent async task that:
//!
//! 1. Receives events from the channel (sent by `EngineClient`)
//! 2. Applies them to the source registry and view selection
//! 3. Reconciles the drawn marker set when presentation state changed
//! 4. Publishes a [`SceneSnapshot`] for renderers after every event
//!
//! # Design Notes
//!
//! The daemon owns all mutable state and is the only writer. Renderers
//! access state through a shared `RwLock` handle or the broadcast update
//! channel, so reading never blocks event processing. Because events are
//! processed strictly in arrival order, marker reconciliation cannot race
//! with itself and stale fetch results are filtered before they touch
//! the drawn set.

use std::sync::{Arc, RwLock};

use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::event::EngineEvent;
use super::snapshot::{SceneSnapshot, SharedSceneState, SourceSummary};
use crate::coord::GeoPoint;
use crate::layer::MapLayer;
use crate::marker::{desired_markers, MarkerLifecycleManager, MarkerState, MarkerSurface};
use crate::source::SourceRegistry;

/// Capacity of the snapshot update channel. Slow subscribers miss
/// intermediate snapshots rather than backpressuring the daemon.
const UPDATE_CHANNEL_CAPACITY: usize = 64;

/// Initial view configuration for the engine.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    /// Reference point markers are placed around.
    pub reference: GeoPoint,
    /// Layer active at startup.
    pub layer: MapLayer,
    /// Whether auxiliary sources start visible.
    pub show_auxiliary: bool,
}

impl ViewOptions {
    /// View options with the standard startup selection: the index layer
    /// with auxiliary sources visible.
    pub fn new(reference: GeoPoint) -> Self {
        Self {
            reference,
            layer: MapLayer::default(),
            show_auxiliary: true,
        }
    }
}

/// The engine daemon.
///
/// Processes events from the channel and keeps the drawn marker set and
/// the published snapshot consistent with the latest accepted state. Runs
/// as an independent async task until shutdown.
pub struct EngineDaemon<S: MarkerSurface> {
    /// Channel receiver for incoming events.
    rx: mpsc::UnboundedReceiver<EngineEvent>,

    /// Latest accepted reading per source.
    registry: SourceRegistry,

    /// Active layer selection.
    layer: MapLayer,

    /// Auxiliary-source visibility toggle.
    show_auxiliary: bool,

    /// Drawn marker ownership and reconciliation.
    lifecycle: MarkerLifecycleManager<S>,

    /// Surface waiting for the map-ready announcement.
    pending_surface: Option<S>,

    /// Marker set applied by the last reconcile while bound.
    drawn: Vec<MarkerState>,

    /// Fetches dispatched but not yet resolved.
    in_flight: usize,

    /// Most recent fetch failure, cleared when a refresh starts.
    last_error: Option<String>,

    /// Shared state handle for renderers.
    shared_state: SharedSceneState,

    /// Snapshot broadcast for push-style consumers.
    updates: broadcast::Sender<SceneSnapshot>,
}

impl<S: MarkerSurface> EngineDaemon<S> {
    /// Creates a new engine daemon.
    ///
    /// The surface stays pending until a map-ready event binds it; state
    /// changes before that point only update the published snapshot.
    ///
    /// # Arguments
    ///
    /// * `rx` - Channel receiver for incoming events
    /// * `surface` - Rendering surface to bind when the map is ready
    /// * `options` - Initial view configuration
    pub fn new(rx: mpsc::UnboundedReceiver<EngineEvent>, surface: S, options: ViewOptions) -> Self {
        let initial = SceneSnapshot {
            layer: options.layer,
            show_auxiliary: options.show_auxiliary,
            ..SceneSnapshot::default()
        };
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);

        Self {
            rx,
            registry: SourceRegistry::new(options.reference),
            layer: options.layer,
            show_auxiliary: options.show_auxiliary,
            lifecycle: MarkerLifecycleManager::new(),
            pending_surface: Some(surface),
            drawn: Vec::new(),
            in_flight: 0,
            last_error: None,
            shared_state: Arc::new(RwLock::new(initial)),
            updates,
        }
    }

    /// Returns a handle to the shared snapshot.
    pub fn state_handle(&self) -> SharedSceneState {
        Arc::clone(&self.shared_state)
    }

    /// Subscribes to snapshot updates.
    ///
    /// Every processed event produces one snapshot on this channel.
    pub fn subscribe(&self) -> broadcast::Receiver<SceneSnapshot> {
        self.updates.subscribe()
    }

    pub(crate) fn update_sender(&self) -> broadcast::Sender<SceneSnapshot> {
        self.updates.clone()
    }

    /// Runs the daemon until shutdown is signaled or all clients are gone.
    pub async fn run(mut self, shutdown: CancellationToken) {
        info!("Engine daemon starting");
        self.publish();

        loop {
            tokio::select! {
                biased;

                // Check shutdown first
                _ = shutdown.cancelled() => {
                    info!("Engine daemon shutting down");
                    break;
                }

                maybe_event = self.rx.recv() => {
                    match maybe_event {
                        Some(event) => {
                            trace!(event_type = event.event_type(), "Processing engine event");
                            self.process_event(event);
                        }
                        None => {
                            debug!("Engine event channel closed");
                            break;
                        }
                    }
                }
            }
        }

        // Final snapshot before shutdown
        self.publish();
        debug!("Engine daemon stopped");
    }

    /// Processes a single event and republishes the snapshot.
    fn process_event(&mut self, event: EngineEvent) {
        match event {
            // Map lifecycle
            EngineEvent::MapReady => match self.pending_surface.take() {
                Some(surface) => {
                    self.lifecycle.bind(surface);
                    debug!("Map ready, applying current state");
                    self.reconcile();
                }
                None => {
                    warn!("Ignoring duplicate map ready event");
                }
            },

            // Fetch outcomes
            EngineEvent::RefreshStarted { in_flight } => {
                self.in_flight += in_flight;
                self.last_error = None;
                debug!(in_flight = self.in_flight, "Refresh started");
            }
            EngineEvent::ReadingFetched {
                source,
                seq,
                reading,
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.registry.accept(source, seq, reading) {
                    debug!(source = %source, seq, "Reading accepted");
                    self.reconcile();
                }
            }
            EngineEvent::FetchFailed {
                source,
                seq,
                message,
            } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                warn!(source = %source, seq, error = %message, "Fetch failed");
                // Markers keep showing the last accepted readings
                self.last_error = Some(format!("{}: {}", source.display_name(), message));
            }

            // Selection changes
            EngineEvent::LayerSelected(layer) => {
                if layer != self.layer {
                    debug!(layer = %layer, "Layer selected");
                    self.layer = layer;
                    self.reconcile();
                }
            }
            EngineEvent::AuxiliaryToggled(show) => {
                if show != self.show_auxiliary {
                    debug!(show, "Auxiliary visibility toggled");
                    self.show_auxiliary = show;
                    self.reconcile();
                }
            }
        }

        self.publish();
    }

    /// Recomputes the desired marker set and applies it by full
    /// replacement. A no-op until the surface binds.
    fn reconcile(&mut self) {
        let desired = desired_markers(&self.registry, self.layer, self.show_auxiliary);
        self.lifecycle.reconcile(&desired);
        if self.lifecycle.is_bound() {
            self.drawn = desired;
        }
    }

    /// Builds the current snapshot.
    fn snapshot(&self) -> SceneSnapshot {
        let mut summaries: [Option<SourceSummary>; 3] = [None, None, None];
        for (source, reading) in self.registry.readings() {
            if let Some(reading) = reading {
                summaries[source.index()] = Some(SourceSummary::from_reading(reading));
            }
        }

        SceneSnapshot {
            markers: self.drawn.clone(),
            layer: self.layer,
            show_auxiliary: self.show_auxiliary,
            map_ready: self.lifecycle.is_bound(),
            summaries,
            in_flight: self.in_flight,
            last_error: self.last_error.clone(),
        }
    }

    /// Publishes the snapshot to the shared handle and the update channel.
    fn publish(&self) {
        let snapshot = self.snapshot();
        if let Ok(mut guard) = self.shared_state.write() {
            *guard = snapshot.clone();
        }
        // Nobody listening is fine
        let _ = self.updates.send(snapshot);
    }
}

impl<S: MarkerSurface> std::fmt::Debug for EngineDaemon<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineDaemon")
            .field("layer", &self.layer)
            .field("show_auxiliary", &self.show_auxiliary)
            .field("map_bound", &self.lifecycle.is_bound())
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
