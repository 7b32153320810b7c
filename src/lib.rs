//! Nearest-hotspot visit detection for streamed location events.
//!
//! A fixed reference set of hotspots is indexed once into an immutable,
//! balanced k-d tree; each incoming location event is then matched to its
//! nearest hotspot, and events within the proximity radius are emitted as
//! visits.
//!
//! ```rust
//! use nearspot::{Hotspot, StreamEvent, VisitDetector};
//!
//! let detector = VisitDetector::new(vec![
//!     Hotspot::new("H1", "Corner Cafe", "food", 0.0, 0.0),
//!     Hotspot::new("H2", "City Park", "leisure", 10.0, 10.0),
//! ]);
//!
//! let visit = detector.check_event(&StreamEvent::new("S1", 1.0, 1.0, "2021-03-01 10:00:00"));
//! assert_eq!(visit.unwrap().hotspot_id, "H1");
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod index;
pub mod spatial;
pub mod storage;
pub mod types;

pub use builder::DetectorBuilder;
pub use engine::VisitDetector;
pub use error::{NearspotError, Result};
pub use index::HotspotIndex;

pub use geo::Point;

pub use spatial::{DEFAULT_PROXIMITY_RADIUS, distance_between, squared_distance};

pub use storage::{VisitWriter, load_hotspots, load_stream_events, write_visits};

pub use types::{Config, Hotspot, StreamEvent, Visit};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{DetectorBuilder, NearspotError, Result, VisitDetector};

    pub use geo::Point;

    pub use crate::spatial::{DEFAULT_PROXIMITY_RADIUS, distance_between, squared_distance};

    pub use crate::{Config, Hotspot, StreamEvent, Visit};

    pub use crate::{VisitWriter, load_hotspots, load_stream_events, write_visits};
}
