//! Engine events for the presentation pipeline.
//!
//! This module defines all the events the engine daemon consumes. Events
//! are fire-and-forget - producers send them to the daemon without waiting
//! for acknowledgment, and the daemon processes them sequentially so marker
//! reconciliation never races with itself.

use crate::layer::MapLayer;
use crate::source::{Reading, SourceId};

/// Events consumed by the engine daemon.
///
/// Each event represents one trigger that may update view state, the
/// registry, or the drawn marker set. Sequential processing in the daemon
/// is what keeps the drawn set consistent with the latest state.
#[derive(Clone, Debug)]
pub enum EngineEvent {
    // =========================================================================
    // Map Lifecycle Events
    // =========================================================================
    /// The rendering surface is ready to accept markers.
    ///
    /// Sent once when the map finishes initializing. Later duplicates are
    /// ignored.
    MapReady,

    // =========================================================================
    // Fetch Events
    // =========================================================================
    /// A refresh round has started; `in_flight` fetches were dispatched.
    RefreshStarted {
        /// Number of fetches dispatched in this round.
        in_flight: usize,
    },

    /// A fetch completed with a decoded reading.
    ReadingFetched {
        /// Source the reading belongs to.
        source: SourceId,
        /// Dispatch sequence number, used to discard stale results.
        seq: u64,
        /// The decoded reading.
        reading: Reading,
    },

    /// A fetch failed after the request or decode step.
    FetchFailed {
        /// Source whose fetch failed.
        source: SourceId,
        /// Dispatch sequence number of the failed fetch.
        seq: u64,
        /// Human-readable failure description.
        message: String,
    },

    // =========================================================================
    // Selection Events
    // =========================================================================
    /// The active layer selection changed.
    LayerSelected(MapLayer),

    /// The auxiliary-source visibility toggle changed.
    AuxiliaryToggled(bool),
}

impl EngineEvent {
    /// Returns a short name for this event type (useful for debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::MapReady => "map_ready",
            Self::RefreshStarted { .. } => "refresh_started",
            Self::ReadingFetched { .. } => "reading_fetched",
            Self::FetchFailed { .. } => "fetch_failed",
            Self::LayerSelected(_) => "layer_selected",
            Self::AuxiliaryToggled(_) => "auxiliary_toggled",
        }
    }
}
