//! Latest-reading storage with fetch sequence ordering.

use tracing::debug;

use super::reading::{Reading, SourceId};
use crate::coord::GeoPoint;

/// Per-source storage slot.
#[derive(Debug, Clone, Default)]
struct SourceSlot {
    reading: Option<Reading>,
    /// Highest accepted fetch sequence. Zero means nothing accepted yet;
    /// dispatched sequences start at one.
    last_seq: u64,
}

/// Holds the latest accepted reading for each source plus the session's
/// reference location.
///
/// Concurrent fetches for one source may complete out of order. Every
/// dispatched fetch carries a per-source monotonic sequence number, and the
/// registry only accepts a result whose sequence is newer than the last one
/// accepted for that source; anything else is discarded without touching
/// state. A slow stale response can therefore never overwrite a newer
/// accepted reading.
#[derive(Debug, Clone)]
pub struct SourceRegistry {
    reference: GeoPoint,
    slots: [SourceSlot; 3],
}

impl SourceRegistry {
    /// Creates an empty registry for the given reference location.
    pub fn new(reference: GeoPoint) -> Self {
        Self {
            reference,
            slots: Default::default(),
        }
    }

    /// The session's reference location.
    #[inline]
    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    /// Stores a fetched reading if its sequence is newer than the last
    /// accepted one for that source.
    ///
    /// Returns true when the reading was accepted. The reading replaces the
    /// previous one wholesale; fields are never merged.
    pub fn accept(&mut self, source: SourceId, seq: u64, reading: Reading) -> bool {
        let slot = &mut self.slots[source.index()];
        if seq <= slot.last_seq {
            debug!(
                source = %source,
                seq,
                accepted_seq = slot.last_seq,
                "Discarding stale fetch result"
            );
            return false;
        }
        slot.last_seq = seq;
        slot.reading = Some(reading);
        true
    }

    /// The latest accepted reading for a source, if any.
    #[inline]
    pub fn reading(&self, source: SourceId) -> Option<&Reading> {
        self.slots[source.index()].reading.as_ref()
    }

    /// Iterates all sources with their latest readings in display order.
    pub fn readings(&self) -> impl Iterator<Item = (SourceId, Option<&Reading>)> {
        SourceId::ALL
            .iter()
            .map(move |source| (*source, self.reading(*source)))
    }

    /// Drops the stored reading for a source. The sequence watermark is
    /// kept so late results from before the clear stay rejected.
    pub fn clear(&mut self, source: SourceId) {
        self.slots[source.index()].reading = None;
    }

    /// Highest accepted sequence for a source (zero when none).
    #[inline]
    pub fn last_sequence(&self, source: SourceId) -> u64 {
        self.slots[source.index()].last_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SourceRegistry {
        SourceRegistry::new(GeoPoint::new(40.7128, -74.0060).unwrap())
    }

    #[test]
    fn test_empty_registry() {
        let reg = registry();
        for source in SourceId::ALL {
            assert!(reg.reading(source).is_none());
            assert_eq!(reg.last_sequence(source), 0);
        }
    }

    #[test]
    fn test_accept_in_order() {
        let mut reg = registry();

        assert!(reg.accept(SourceId::Current, 1, Reading::new(Some(42.0))));
        assert_eq!(reg.reading(SourceId::Current).unwrap().aqi, Some(42.0));

        assert!(reg.accept(SourceId::Current, 2, Reading::new(Some(55.0))));
        assert_eq!(reg.reading(SourceId::Current).unwrap().aqi, Some(55.0));
        assert_eq!(reg.last_sequence(SourceId::Current), 2);
    }

    #[test]
    fn test_stale_result_discarded() {
        let mut reg = registry();

        assert!(reg.accept(SourceId::Ground, 2, Reading::new(Some(80.0))));
        // A slower fetch from before arrives late
        assert!(!reg.accept(SourceId::Ground, 1, Reading::new(Some(10.0))));

        assert_eq!(reg.reading(SourceId::Ground).unwrap().aqi, Some(80.0));
        assert_eq!(reg.last_sequence(SourceId::Ground), 2);
    }

    #[test]
    fn test_duplicate_sequence_discarded() {
        let mut reg = registry();

        assert!(reg.accept(SourceId::Satellite, 1, Reading::new(Some(160.0))));
        assert!(!reg.accept(SourceId::Satellite, 1, Reading::new(Some(20.0))));
        assert_eq!(reg.reading(SourceId::Satellite).unwrap().aqi, Some(160.0));
    }

    #[test]
    fn test_sequences_independent_per_source() {
        let mut reg = registry();

        assert!(reg.accept(SourceId::Current, 5, Reading::new(Some(42.0))));
        // A lower sequence on a different source is unaffected
        assert!(reg.accept(SourceId::Satellite, 1, Reading::new(Some(160.0))));

        assert_eq!(reg.last_sequence(SourceId::Current), 5);
        assert_eq!(reg.last_sequence(SourceId::Satellite), 1);
    }

    #[test]
    fn test_wholesale_replacement() {
        let mut reg = registry();

        let mut pollutants = std::collections::HashMap::new();
        pollutants.insert("no2".to_string(), 18.5);
        reg.accept(
            SourceId::Current,
            1,
            Reading::new(Some(42.0)).with_pollutants(pollutants),
        );

        // The newer reading has no pollutants; nothing carries over
        reg.accept(SourceId::Current, 2, Reading::new(Some(50.0)));
        let reading = reg.reading(SourceId::Current).unwrap();
        assert_eq!(reading.aqi, Some(50.0));
        assert!(reading.pollutants.is_none());
    }

    #[test]
    fn test_clear_keeps_watermark() {
        let mut reg = registry();

        reg.accept(SourceId::Ground, 3, Reading::new(Some(90.0)));
        reg.clear(SourceId::Ground);

        assert!(reg.reading(SourceId::Ground).is_none());
        // Late result from before the clear is still stale
        assert!(!reg.accept(SourceId::Ground, 2, Reading::new(Some(10.0))));
        assert!(reg.accept(SourceId::Ground, 4, Reading::new(Some(70.0))));
    }

    #[test]
    fn test_readings_iterates_display_order() {
        let mut reg = registry();
        reg.accept(SourceId::Satellite, 1, Reading::new(Some(160.0)));

        let collected: Vec<_> = reg.readings().collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0].0, SourceId::Current);
        assert!(collected[0].1.is_none());
        assert_eq!(collected[1].0, SourceId::Satellite);
        assert_eq!(collected[1].1.unwrap().aqi, Some(160.0));
        assert_eq!(collected[2].0, SourceId::Ground);
    }
}
