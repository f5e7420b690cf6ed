//! Catalog file readers
//!
//! Parsers for the external tables the crate consumes: the Hipparcos star
//! catalog, the IAU constellation boundary file and Stellarium constellation
//! figures. Each produces an in-memory value; none of them are called by the
//! computational modules.

pub mod boundaries;
pub mod hipparcos;
pub mod stellarium;

pub use boundaries::{load_boundaries, load_boundaries_file};
pub use hipparcos::HipparcosCatalog;
pub use stellarium::{load_figures, load_figures_file, ConstellationFigure};

use crate::celestial::{CelestialObject, Star};
use crate::coordinates::Equatorial;

/// Generic trait for star catalogs keyed by identifier string
pub trait StarCatalog {
    /// Get a star by its identifier
    fn get_star(&self, id: &str) -> Option<&Star>;

    /// All (identifier, star) pairs, in no particular order
    fn stars(&self) -> impl Iterator<Item = (&str, &Star)>;

    /// Get the number of stars in the catalog
    fn len(&self) -> usize;

    /// Check if the catalog is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stars at or brighter than a magnitude, brightest first
    fn brighter_than(&self, magnitude: f64) -> Vec<(&str, &Star)> {
        let mut stars: Vec<_> = self
            .stars()
            .filter(|(_, star)| star.magnitude <= magnitude)
            .collect();
        stars.sort_by(|a, b| a.1.magnitude.total_cmp(&b.1.magnitude));
        stars
    }

    /// Stars within `radius_deg` of a position
    fn stars_in_field(&self, center: &Equatorial, radius_deg: f64) -> Vec<(&str, &Star)> {
        self.stars()
            .filter(|(_, star)| {
                center.angular_distance(&star.equatorial()).to_degrees() <= radius_deg
            })
            .collect()
    }
}
