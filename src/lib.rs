//! Skywatch: observational astronomy for a point on the Earth
//!
//! This crate computes where a star or planet appears in the sky for an
//! observer at a given time (equatorial and horizontal coordinates), the
//! physical quantities a planet presents (distance, phase, apparent size and
//! magnitude), when it rises, sets and culminates, and which constellation a
//! sky position falls in.
//!
//! Catalog parsing and downloads live in [`catalogs`] and [`data`]; the
//! computational modules only consume in-memory tables.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod almanac;
pub mod catalogs;
pub mod celestial;
pub mod config;
pub mod constants;
pub mod constellations;
pub mod coordinates;
pub mod data;
pub mod earthlib;
pub mod framelib;
pub mod observer;
pub mod planetlib;
pub mod time;
pub mod units;

// Re-export commonly used types
pub use celestial::{CelestialBody, CelestialObject, Planet, Star};
pub use coordinates::{Angle, AngleKind, Cartesian3, Equatorial};
pub use observer::{ObservedObject, Observer};
pub use planetlib::Body;
pub use time::JulianDate;
pub use units::Distance;

/// Main error type for the skywatch library
#[derive(Debug, Error)]
pub enum SkywatchError {
    #[error("Value out of range: {0}")]
    RangeViolation(String),

    #[error(transparent)]
    UnsupportedBody(#[from] planetlib::PlanetError),

    #[error("Time error: {0}")]
    TimeError(#[from] time::TimeError),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for skywatch operations
pub type Result<T> = std::result::Result<T, SkywatchError>;

/// Entry point for loading catalog data
///
/// Files are fetched into the data directory on first use and read from there
/// afterwards.
pub struct Loader {
    data_dir: Option<PathBuf>,
}

impl Loader {
    /// Create a new loader with default data directory
    pub fn new() -> Self {
        Self { data_dir: None }
    }

    /// Set a custom data directory
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Directory used for downloaded files
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(data::get_cache_dir)
    }

    /// Load the Hipparcos star catalog with a specified magnitude limit
    pub fn load_hipparcos_catalog(
        &self,
        magnitude_limit: f64,
    ) -> Result<catalogs::HipparcosCatalog> {
        let dat_path = data::download_hipparcos(&self.data_dir())?;
        catalogs::HipparcosCatalog::from_dat_file(dat_path, magnitude_limit)
    }

    /// Load the IAU constellation boundary table
    pub fn load_boundaries(&self) -> Result<constellations::BoundaryTable> {
        let path = data::download_boundaries(&self.data_dir())?;
        catalogs::boundaries::load_boundaries_file(path)
    }

    /// Load constellation figures from a Stellarium `constellationship.fab`
    pub fn load_figures<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<catalogs::stellarium::ConstellationFigure>> {
        catalogs::stellarium::load_figures_file(path)
    }

    /// Planetary ephemeris
    pub fn ephemeris(&self) -> planetlib::Ephemeris {
        planetlib::Ephemeris::new()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_data_dir_override() {
        let loader = Loader::new().with_data_dir("/tmp/skywatch-test");
        assert_eq!(loader.data_dir(), PathBuf::from("/tmp/skywatch-test"));
    }

    #[test]
    fn test_error_conversions() {
        let err: SkywatchError = planetlib::PlanetError::UnsupportedBody(Body::Saturn).into();
        assert!(matches!(err, SkywatchError::UnsupportedBody(_)));
        assert!(err.to_string().contains("Saturn"));

        let err: SkywatchError = time::TimeError::OutOfRange("JD 1e300".into()).into();
        assert!(matches!(err, SkywatchError::TimeError(_)));
    }

    #[test]
    #[ignore]
    fn test_download_hipparcos() {
        // Requires network access
        use crate::catalogs::StarCatalog;
        let catalog = Loader::new().load_hipparcos_catalog(6.0).unwrap();
        assert!(catalog.len() > 4000);
        assert!(catalog.from_hip(32349).is_ok());
    }
}
