//! Visit detection over a built hotspot index.
//!
//! The detector wraps the immutable [`HotspotIndex`] with the proximity
//! rule: a stream event counts as a visit when its nearest hotspot lies
//! within the configured radius (true Euclidean distance).

use std::time::Instant;

use geo::Point;

use crate::error::{NearspotError, Result};
use crate::index::HotspotIndex;
use crate::spatial::distance_between;
use crate::types::{Config, Hotspot, StreamEvent, Visit};

/// Associates stream events with their nearest hotspot and emits visits.
///
/// Construction builds the index once; everything afterwards is read-only,
/// so a shared detector can serve independent queries from multiple threads
/// without coordination.
///
/// # Examples
///
/// ```rust
/// use nearspot::{Hotspot, StreamEvent, VisitDetector};
///
/// let detector = VisitDetector::new(vec![
///     Hotspot::new("H1", "Cafe", "food", 0.0, 0.0),
///     Hotspot::new("H2", "Park", "leisure", 10.0, 10.0),
/// ]);
///
/// // (1,1) is sqrt(2) from H1, inside the default radius of 5.
/// let visit = detector.check_event(&StreamEvent::new("S1", 1.0, 1.0, "t0"));
/// assert_eq!(visit.unwrap().hotspot_id, "H1");
///
/// // (20,20) is sqrt(200) from H2, outside the radius: no visit.
/// assert!(detector.check_event(&StreamEvent::new("S2", 20.0, 20.0, "t1")).is_none());
/// ```
#[derive(Debug)]
pub struct VisitDetector {
    index: HotspotIndex,
    radius: f64,
}

impl VisitDetector {
    /// Build a detector with the default proximity radius.
    pub fn new(hotspots: Vec<Hotspot>) -> Self {
        let index = HotspotIndex::build(hotspots);
        log::info!("Initialized visit detector with {} hotspots", index.len());
        Self {
            index,
            radius: crate::spatial::DEFAULT_PROXIMITY_RADIUS,
        }
    }

    /// Build a detector from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NearspotError::Config`] if the configuration fails
    /// validation.
    pub fn with_config(hotspots: Vec<Hotspot>, config: &Config) -> Result<Self> {
        config.validate().map_err(NearspotError::Config)?;
        let mut detector = Self::new(hotspots);
        detector.radius = config.proximity_radius;
        Ok(detector)
    }

    /// The proximity radius in use.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Number of indexed hotspots.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the detector holds no hotspots.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Nearest hotspot to an arbitrary location, regardless of radius.
    ///
    /// `None` only when the detector is empty.
    pub fn nearest(&self, location: &Point) -> Option<&Hotspot> {
        self.index.find_nearest(location)
    }

    /// Check a single stream event against the proximity rule.
    ///
    /// Returns the visit when the event's nearest hotspot is within the
    /// radius; `None` when it is farther away or when the detector holds no
    /// hotspots at all (callers skip the event, not an error).
    pub fn check_event(&self, event: &StreamEvent) -> Option<Visit> {
        let hotspot = self.index.find_nearest(&event.location)?;
        let distance = distance_between(&hotspot.location, &event.location);
        if distance <= self.radius {
            Some(Visit {
                hotspot_id: hotspot.id.clone(),
                stream_id: event.stream_id.clone(),
                time_of_visit: event.timestamp.clone(),
            })
        } else {
            None
        }
    }

    /// Process a batch of stream events, returning the qualifying visits in
    /// input order.
    ///
    /// Logs the event and visit counts and the average per-event latency;
    /// the index itself carries no instrumentation.
    pub fn process<'a, I>(&self, events: I) -> Vec<Visit>
    where
        I: IntoIterator<Item = &'a StreamEvent>,
    {
        let start = Instant::now();
        let mut processed = 0usize;
        let mut visits = Vec::new();

        for event in events {
            processed += 1;
            if let Some(visit) = self.check_event(event) {
                log::debug!(
                    "Visit: stream {} at hotspot {} ({})",
                    visit.stream_id,
                    visit.hotspot_id,
                    visit.time_of_visit
                );
                visits.push(visit);
            }
        }

        let elapsed = start.elapsed();
        if processed > 0 {
            log::info!(
                "Processed {} events, found {} visits (avg {:.3} ms/event)",
                processed,
                visits.len(),
                elapsed.as_secs_f64() * 1000.0 / processed as f64
            );
        }
        visits
    }
}
