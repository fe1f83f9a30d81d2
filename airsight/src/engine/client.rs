//! Engine event emission layer.
//!
//! The [`EngineClient`] provides a fire-and-forget interface for sending
//! events to the engine daemon. It's designed to be:
//!
//! - **Cheap to clone**: Backed by a channel sender
//! - **Fire-and-forget**: Never blocks, silently drops after shutdown
//! - **Type-safe**: Convenience methods for each event type

use super::event::EngineEvent;
use crate::layer::MapLayer;
use crate::source::{Reading, SourceId};
use tokio::sync::mpsc;

/// Client for sending events to the engine daemon.
///
/// This is the interface fetch tasks and the user interface use to drive
/// the engine. It wraps an unbounded channel sender and provides typed
/// convenience methods for each event.
///
/// # Fire-and-Forget Semantics
///
/// All methods are fire-and-forget: they never block and silently ignore
/// failures (e.g., if the daemon has shut down). Producers never stall on
/// the presentation side.
#[derive(Clone)]
pub struct EngineClient {
    tx: mpsc::UnboundedSender<EngineEvent>,
}

impl EngineClient {
    /// Creates a new engine client with the given channel sender.
    pub fn new(tx: mpsc::UnboundedSender<EngineEvent>) -> Self {
        Self { tx }
    }

    /// Sends an event to the daemon (fire-and-forget).
    #[inline]
    fn send(&self, event: EngineEvent) {
        // Ignore send errors - daemon may have shut down
        let _ = self.tx.send(event);
    }

    // =========================================================================
    // Map Lifecycle Events
    // =========================================================================

    /// Announces that the rendering surface is ready for markers.
    #[inline]
    pub fn map_ready(&self) {
        self.send(EngineEvent::MapReady);
    }

    // =========================================================================
    // Fetch Events
    // =========================================================================

    /// Announces the start of a refresh round.
    ///
    /// # Arguments
    ///
    /// * `in_flight` - Number of fetches dispatched in this round
    #[inline]
    pub fn refresh_started(&self, in_flight: usize) {
        self.send(EngineEvent::RefreshStarted { in_flight });
    }

    /// Delivers a fetched reading for one source.
    ///
    /// # Arguments
    ///
    /// * `source` - Source the reading belongs to
    /// * `seq` - Dispatch sequence number of the fetch
    /// * `reading` - The decoded reading
    #[inline]
    pub fn reading_fetched(&self, source: SourceId, seq: u64, reading: Reading) {
        self.send(EngineEvent::ReadingFetched {
            source,
            seq,
            reading,
        });
    }

    /// Reports a failed fetch for one source.
    ///
    /// # Arguments
    ///
    /// * `source` - Source whose fetch failed
    /// * `seq` - Dispatch sequence number of the fetch
    /// * `message` - Failure description for the status surface
    #[inline]
    pub fn fetch_failed(&self, source: SourceId, seq: u64, message: impl Into<String>) {
        self.send(EngineEvent::FetchFailed {
            source,
            seq,
            message: message.into(),
        });
    }

    // =========================================================================
    // Selection Events
    // =========================================================================

    /// Selects the active layer.
    #[inline]
    pub fn layer_selected(&self, layer: MapLayer) {
        self.send(EngineEvent::LayerSelected(layer));
    }

    /// Sets the auxiliary-source visibility toggle.
    #[inline]
    pub fn auxiliary_toggled(&self, show: bool) {
        self.send(EngineEvent::AuxiliaryToggled(show));
    }
}

impl std::fmt::Debug for EngineClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineClient")
            .field("channel_closed", &self.tx.is_closed())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_client() -> (EngineClient, mpsc::UnboundedReceiver<EngineEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (EngineClient::new(tx), rx)
    }

    #[tokio::test]
    async fn test_client_map_and_selection_events() {
        let (client, mut rx) = create_client();

        client.map_ready();
        client.layer_selected(MapLayer::Comparison);
        client.auxiliary_toggled(false);

        assert!(matches!(rx.recv().await, Some(EngineEvent::MapReady)));
        assert!(matches!(
            rx.recv().await,
            Some(EngineEvent::LayerSelected(MapLayer::Comparison))
        ));
        assert!(matches!(
            rx.recv().await,
            Some(EngineEvent::AuxiliaryToggled(false))
        ));
    }

    #[tokio::test]
    async fn test_client_fetch_events() {
        let (client, mut rx) = create_client();

        client.refresh_started(3);
        client.reading_fetched(SourceId::Ground, 2, Reading::new(Some(30.0)));
        client.fetch_failed(SourceId::Satellite, 2, "timed out");

        assert!(matches!(
            rx.recv().await,
            Some(EngineEvent::RefreshStarted { in_flight: 3 })
        ));

        match rx.recv().await {
            Some(EngineEvent::ReadingFetched {
                source,
                seq,
                reading,
            }) => {
                assert_eq!(source, SourceId::Ground);
                assert_eq!(seq, 2);
                assert_eq!(reading.aqi, Some(30.0));
            }
            other => panic!("unexpected event: {:?}", other),
        }

        match rx.recv().await {
            Some(EngineEvent::FetchFailed {
                source,
                seq,
                message,
            }) => {
                assert_eq!(source, SourceId::Satellite);
                assert_eq!(seq, 2);
                assert_eq!(message, "timed out");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_survives_closed_channel() {
        let (client, rx) = create_client();
        drop(rx);

        // Sends are silently dropped once the daemon is gone
        client.map_ready();
        client.refresh_started(3);

        assert!(format!("{:?}", client).contains("channel_closed: true"));
    }
}
