//! Marker lifecycle management: binding and full-replacement reconcile.

use tracing::{debug, trace, warn};

use super::state::MarkerState;
use super::surface::{MarkerHandle, MarkerSurface};

/// Binding between the lifecycle manager and a rendering surface.
///
/// Starts unbound and transitions to bound exactly once, when the map
/// announces readiness. There is no unbind.
#[derive(Debug)]
enum MapBinding<S> {
    Unbound,
    Bound(S),
}

/// Owns the set of drawn markers and reconciles it against desired sets.
///
/// Reconciliation is full replacement: every live marker is removed, then
/// every desired marker is created. No diffing, no in-place updates. The
/// drawn set is always exactly the last desired set applied while bound.
#[derive(Debug)]
pub struct MarkerLifecycleManager<S: MarkerSurface> {
    binding: MapBinding<S>,
    live: Vec<MarkerHandle>,
}

impl<S: MarkerSurface> MarkerLifecycleManager<S> {
    pub fn new() -> Self {
        Self {
            binding: MapBinding::Unbound,
            live: Vec::new(),
        }
    }

    /// Binds the surface. Returns false and keeps the original surface if
    /// one is already bound.
    pub fn bind(&mut self, surface: S) -> bool {
        match self.binding {
            MapBinding::Unbound => {
                self.binding = MapBinding::Bound(surface);
                debug!("Map surface bound");
                true
            }
            MapBinding::Bound(_) => {
                warn!("Ignoring duplicate map surface bind");
                false
            }
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.binding, MapBinding::Bound(_))
    }

    /// Number of markers currently drawn through this manager.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Replaces the drawn set with `desired`.
    ///
    /// While unbound this is a no-op; state changes before map readiness
    /// surface later, through the reconcile that follows binding.
    pub fn reconcile(&mut self, desired: &[MarkerState]) {
        let surface = match &mut self.binding {
            MapBinding::Bound(surface) => surface,
            MapBinding::Unbound => {
                trace!("Skipping reconcile, no surface bound");
                return;
            }
        };

        for handle in self.live.drain(..) {
            surface.remove_marker(handle);
        }
        for marker in desired {
            self.live.push(surface.create_marker(marker));
        }
        debug!(markers = self.live.len(), "Reconciled marker set");
    }
}

impl<S: MarkerSurface> Default for MarkerLifecycleManager<S> {
    fn default() -> Self {
        Self::new()
    }
}
