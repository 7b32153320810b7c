//! Detector builder for flexible configuration.
//!
//! Collects hotspots from memory and/or a CSV file, applies configuration,
//! and builds the index in one step.

use std::path::PathBuf;

use crate::engine::VisitDetector;
use crate::error::Result;
use crate::storage;
use crate::types::{Config, Hotspot};

/// Builder for a [`VisitDetector`] with custom reference data and settings.
///
/// # Examples
///
/// ```rust
/// use nearspot::{DetectorBuilder, Hotspot};
///
/// let detector = DetectorBuilder::new()
///     .hotspots(vec![Hotspot::new("H1", "Cafe", "food", 0.0, 0.0)])
///     .proximity_radius(2.0)
///     .build()?;
/// assert_eq!(detector.radius(), 2.0);
/// # Ok::<(), nearspot::NearspotError>(())
/// ```
#[derive(Debug, Default)]
pub struct DetectorBuilder {
    hotspots: Vec<Hotspot>,
    csv_path: Option<PathBuf>,
    config: Config,
}

impl DetectorBuilder {
    /// Create a builder with an empty reference set and default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide hotspots directly. Appends to any already collected.
    pub fn hotspots(mut self, hotspots: Vec<Hotspot>) -> Self {
        self.hotspots.extend(hotspots);
        self
    }

    /// Load hotspots from a CSV file when `build` runs.
    pub fn hotspots_csv<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    /// Set the proximity radius, keeping other configuration as-is.
    pub fn proximity_radius(mut self, radius: f64) -> Self {
        self.config.proximity_radius = radius;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the detector. Loads the CSV reference set if one was configured
    /// and validates the configuration before constructing the index.
    pub fn build(self) -> Result<VisitDetector> {
        let mut hotspots = self.hotspots;
        if let Some(path) = self.csv_path {
            hotspots.extend(storage::load_hotspots(&path)?);
        }
        VisitDetector::with_config(hotspots, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builder_default() {
        let detector = DetectorBuilder::new().build().unwrap();
        assert!(detector.is_empty());
        assert_eq!(detector.radius(), 5.0);
    }

    #[test]
    fn test_builder_with_hotspots() {
        let detector = DetectorBuilder::new()
            .hotspots(vec![Hotspot::new("H1", "Cafe", "food", 0.0, 0.0)])
            .hotspots(vec![Hotspot::new("H2", "Park", "leisure", 10.0, 10.0)])
            .build()
            .unwrap();
        assert_eq!(detector.len(), 2);
    }

    #[test]
    fn test_builder_with_csv() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "id,name,x,y,category").unwrap();
        writeln!(file, "H1,Corner Cafe,0,0,food").unwrap();
        file.flush().unwrap();

        let detector = DetectorBuilder::new()
            .hotspots_csv(file.path())
            .build()
            .unwrap();
        assert_eq!(detector.len(), 1);
    }

    #[test]
    fn test_builder_missing_csv_fails() {
        let result = DetectorBuilder::new()
            .hotspots_csv("/definitely/not/here.csv")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_rejects_invalid_radius() {
        let result = DetectorBuilder::new().proximity_radius(0.0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_config_replaces_radius() {
        let detector = DetectorBuilder::new()
            .proximity_radius(2.0)
            .config(Config::default().with_proximity_radius(8.0))
            .build()
            .unwrap();
        assert_eq!(detector.radius(), 8.0);
    }
}
