//! Site configuration
//!
//! A small JSON file describing where the observer stands and where catalog
//! files are cached:
//!
//! ```json
//! { "latitude": 51.4769, "longitude": -0.0005, "elevation": 46.0, "data_dir": "/var/cache/skywatch" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::observer::Observer;
use crate::{Loader, Result, SkywatchError};

/// Observer location and data directory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
    /// Elevation in metres
    #[serde(default)]
    pub elevation: f64,
    /// Cache directory for downloaded catalogs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl SiteConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(text)
            .map_err(|e| SkywatchError::ConfigError(format!("invalid site config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Write the config as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| SkywatchError::ConfigError(e.to_string()))?;
        fs::write(path, text)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SkywatchError::ConfigError(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=360.0).contains(&self.longitude) {
            return Err(SkywatchError::ConfigError(format!(
                "longitude {} outside [-180, 360]",
                self.longitude
            )));
        }
        Ok(())
    }

    pub fn observer(&self) -> Observer {
        Observer::new(self.latitude, self.longitude, self.elevation)
    }

    /// Loader using the configured data directory, if any
    pub fn loader(&self) -> Loader {
        match &self.data_dir {
            Some(dir) => Loader::new().with_data_dir(dir),
            None => Loader::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let config = SiteConfig::from_json_str(r#"{"latitude": 51.5, "longitude": -0.1}"#).unwrap();
        assert_eq!(config.elevation, 0.0);
        assert!(config.data_dir.is_none());
        assert_eq!(config.observer(), Observer::new(51.5, -0.1, 0.0));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            SiteConfig::from_json_str(r#"{"latitude": 95.0, "longitude": 0.0}"#),
            Err(SkywatchError::ConfigError(_))
        ));
        assert!(matches!(
            SiteConfig::from_json_str(r#"{"latitude": "north"}"#),
            Err(SkywatchError::ConfigError(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        let config = SiteConfig {
            latitude: -33.9,
            longitude: 18.4,
            elevation: 1086.0,
            data_dir: Some(dir.path().join("cache")),
        };

        config.save(&path).unwrap();
        let loaded = SiteConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.loader().data_dir(), dir.path().join("cache"));
    }
}
