//! Map surface abstraction and the in-memory implementation.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::state::MarkerState;

/// Opaque identifier for a drawn marker, issued by the surface at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    pub(crate) fn new(raw: u64) -> Self {
        MarkerHandle(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Rendering backend that can draw and erase markers.
///
/// Implementations only need create and remove; the lifecycle manager
/// drives everything else through full replacement and never asks a
/// surface to mutate a marker in place.
pub trait MarkerSurface: Send {
    /// Draws a marker and returns its handle. Handles are never reused
    /// within one surface.
    fn create_marker(&mut self, marker: &MarkerState) -> MarkerHandle;

    /// Erases a previously created marker. Unknown handles are ignored.
    fn remove_marker(&mut self, handle: MarkerHandle);
}

#[derive(Debug, Default)]
struct SurfaceInner {
    next_handle: u64,
    markers: BTreeMap<MarkerHandle, MarkerState>,
}

/// Shared in-memory surface.
///
/// Clones observe the same drawn set, so one clone can sit inside the
/// engine while another serves a renderer or a test assertion.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurface {
    inner: Arc<RwLock<SurfaceInner>>,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently drawn markers in creation order.
    pub fn markers(&self) -> Vec<MarkerState> {
        self.read().markers.values().cloned().collect()
    }

    /// Number of markers currently drawn.
    pub fn marker_count(&self) -> usize {
        self.read().markers.len()
    }

    /// Total markers ever created, including since-removed ones.
    pub fn created_total(&self) -> u64 {
        self.read().next_handle
    }

    fn read(&self) -> RwLockReadGuard<'_, SurfaceInner> {
        // A poisoned lock only means a holder panicked; the map itself
        // stays usable
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SurfaceInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MarkerSurface for InMemorySurface {
    fn create_marker(&mut self, marker: &MarkerState) -> MarkerHandle {
        let mut inner = self.write();
        inner.next_handle += 1;
        let handle = MarkerHandle::new(inner.next_handle);
        inner.markers.insert(handle, marker.clone());
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.write().markers.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::state::marker_for;
    use crate::coord::GeoPoint;
    use crate::source::{Reading, SourceId};

    fn sample_marker(source: SourceId) -> MarkerState {
        let reference = GeoPoint::new(40.7128, -74.0060).unwrap();
        marker_for(source, &Reading::new(Some(42.0)), reference)
    }

    #[test]
    fn test_create_returns_distinct_handles() {
        let mut surface = InMemorySurface::new();
        let a = surface.create_marker(&sample_marker(SourceId::Current));
        let b = surface.create_marker(&sample_marker(SourceId::Satellite));

        assert_ne!(a, b);
        assert_eq!(surface.marker_count(), 2);
    }

    #[test]
    fn test_remove_erases_marker() {
        let mut surface = InMemorySurface::new();
        let handle = surface.create_marker(&sample_marker(SourceId::Current));

        surface.remove_marker(handle);
        assert_eq!(surface.marker_count(), 0);
    }

    #[test]
    fn test_remove_unknown_handle_is_ignored() {
        let mut surface = InMemorySurface::new();
        surface.create_marker(&sample_marker(SourceId::Current));

        surface.remove_marker(MarkerHandle::new(99));
        assert_eq!(surface.marker_count(), 1);
    }

    #[test]
    fn test_handles_are_never_reused() {
        let mut surface = InMemorySurface::new();
        let a = surface.create_marker(&sample_marker(SourceId::Current));
        surface.remove_marker(a);
        let b = surface.create_marker(&sample_marker(SourceId::Current));

        assert_ne!(a, b);
        assert_eq!(surface.created_total(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let mut surface = InMemorySurface::new();
        let observer = surface.clone();

        surface.create_marker(&sample_marker(SourceId::Ground));

        assert_eq!(observer.marker_count(), 1);
        assert_eq!(observer.markers()[0].glyph, "O");
    }
}
