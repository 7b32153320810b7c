//! Record types and configuration for nearspot.
//!
//! All records are fixed-shape, serde-derived structs; nothing in the crate
//! looks fields up by string key at runtime.

use geo::Point;
use serde::{Deserialize, Serialize};

/// A static point of interest with identity, category, and a 2D location.
///
/// Hotspots are read once from the reference set and never mutated after the
/// index is built.
///
/// # Examples
///
/// ```
/// use nearspot::Hotspot;
///
/// let cafe = Hotspot::new("H1", "Corner Cafe", "food", 12.0, 7.0);
/// assert_eq!(cafe.location.x(), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    /// Unique identifier within the reference set.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category label (e.g. "food", "transport").
    pub category: String,
    /// 2D location.
    pub location: Point,
}

impl Hotspot {
    /// Create a hotspot from its fields and raw coordinates.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            location: Point::new(x, y),
        }
    }
}

/// A single location event from a user stream.
///
/// The detector only consumes `location`; `stream_id` and `timestamp` are
/// carried through opaquely into the emitted [`Visit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamEvent {
    /// Opaque stream identifier.
    pub stream_id: String,
    /// Event location.
    pub location: Point,
    /// Timestamp string, passed through verbatim.
    pub timestamp: String,
}

impl StreamEvent {
    /// Create a stream event from its fields and raw coordinates.
    pub fn new(stream_id: impl Into<String>, x: f64, y: f64, timestamp: impl Into<String>) -> Self {
        Self {
            stream_id: stream_id.into(),
            location: Point::new(x, y),
            timestamp: timestamp.into(),
        }
    }
}

/// A qualifying association between a stream event and its nearest hotspot.
///
/// Emitted when the event lies within the proximity radius of the hotspot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Identifier of the visited hotspot.
    pub hotspot_id: String,
    /// Identifier of the stream that produced the event.
    pub stream_id: String,
    /// Timestamp of the event, carried through from the stream.
    pub time_of_visit: String,
}

/// Detector configuration.
///
/// Designed to be easily loadable from JSON or TOML while keeping complexity
/// minimal.
///
/// # Example
///
/// ```rust
/// use nearspot::Config;
///
/// let config = Config::default();
/// assert_eq!(config.proximity_radius, 5.0);
///
/// let json = r#"{ "proximity_radius": 2.5 }"#;
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.proximity_radius, 2.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum Euclidean distance between an event and its nearest hotspot
    /// for the event to count as a visit.
    #[serde(default = "Config::default_proximity_radius")]
    pub proximity_radius: f64,
}

impl Config {
    const fn default_proximity_radius() -> f64 {
        crate::spatial::DEFAULT_PROXIMITY_RADIUS
    }

    /// Set the proximity radius.
    pub fn with_proximity_radius(mut self, radius: f64) -> Self {
        self.proximity_radius = radius;
        self
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::error::NearspotError::Config(e.to_string()))
    }

    /// Parse a configuration from a TOML string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(input: &str) -> crate::error::Result<Self> {
        toml::from_str(input).map_err(|e| crate::error::NearspotError::Config(e.to_string()))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !self.proximity_radius.is_finite() {
            return Err("Proximity radius must be finite (not NaN or infinity)".to_string());
        }
        if self.proximity_radius <= 0.0 {
            return Err("Proximity radius must be positive".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proximity_radius: Self::default_proximity_radius(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotspot_creation() {
        let h = Hotspot::new("H1", "Station", "transport", 3.0, -2.0);
        assert_eq!(h.id, "H1");
        assert_eq!(h.name, "Station");
        assert_eq!(h.category, "transport");
        assert_eq!(h.location, Point::new(3.0, -2.0));
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.proximity_radius, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_with_proximity_radius() {
        let config = Config::default().with_proximity_radius(10.0);
        assert_eq!(config.proximity_radius, 10.0);
    }

    #[test]
    fn test_config_validate_rejects_non_positive() {
        assert!(
            Config::default()
                .with_proximity_radius(0.0)
                .validate()
                .is_err()
        );
        assert!(
            Config::default()
                .with_proximity_radius(-1.0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_config_validate_rejects_non_finite() {
        assert!(
            Config::default()
                .with_proximity_radius(f64::NAN)
                .validate()
                .is_err()
        );
        assert!(
            Config::default()
                .with_proximity_radius(f64::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config.proximity_radius, 5.0);
    }

    #[test]
    fn test_config_from_json_invalid() {
        assert!(Config::from_json_str("not json").is_err());
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_config_from_toml() {
        let config = Config::from_toml_str("proximity_radius = 7.5").unwrap();
        assert_eq!(config.proximity_radius, 7.5);
    }

    #[test]
    fn test_hotspot_serde_roundtrip() {
        let h = Hotspot::new("H2", "Park", "leisure", 1.5, 2.5);
        let json = serde_json::to_string(&h).unwrap();
        let back: Hotspot = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}
