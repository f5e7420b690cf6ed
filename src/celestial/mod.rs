//! Celestial body definitions
//!
//! Stars and planets share one capability: a position on the celestial
//! sphere. Everything downstream (the observer transform, constellation
//! lookup) goes through [`CelestialObject`].

pub mod planet;
pub mod star;

pub use planet::Planet;
pub use star::Star;

use crate::coordinates::{Angle, Equatorial};

/// A trait for objects that have a position in the sky
pub trait CelestialObject {
    /// Geocentric right ascension and declination
    fn equatorial(&self) -> Equatorial;

    /// Right ascension, hour-kind
    fn right_ascension(&self) -> Angle {
        self.equatorial().ra
    }

    /// Declination, degree-kind
    fn declination(&self) -> Angle {
        self.equatorial().dec
    }
}

impl CelestialObject for Equatorial {
    fn equatorial(&self) -> Equatorial {
        *self
    }
}

/// Either kind of body the crate knows how to place on the sky
#[derive(Debug, Clone, PartialEq)]
pub enum CelestialBody {
    Star(Star),
    Planet(Planet),
}

impl CelestialObject for CelestialBody {
    fn equatorial(&self) -> Equatorial {
        match self {
            CelestialBody::Star(star) => star.equatorial(),
            CelestialBody::Planet(planet) => planet.equatorial(),
        }
    }
}

impl From<Star> for CelestialBody {
    fn from(star: Star) -> Self {
        CelestialBody::Star(star)
    }
}

impl From<Planet> for CelestialBody {
    fn from(planet: Planet) -> Self {
        CelestialBody::Planet(planet)
    }
}

/// Great-circle separation between two bodies
pub fn angular_distance(a: &impl CelestialObject, b: &impl CelestialObject) -> Angle {
    a.equatorial().angular_distance(&b.equatorial())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_body_variants_share_position() {
        let star = Star::new(6.752_477, -16.716_116).unwrap();
        let body: CelestialBody = star.clone().into();
        assert_eq!(body.equatorial(), star.equatorial());
        assert_relative_eq!(body.right_ascension().to_hours(), 6.752_477, epsilon = 1e-12);
        assert_relative_eq!(body.declination().to_degrees(), -16.716_116, epsilon = 1e-12);
    }

    #[test]
    fn test_angular_distance_between_stars() {
        // Betelgeuse and Rigel are about 18.6 degrees apart
        let betelgeuse = Star::new(5.919_529, 7.407_064).unwrap();
        let rigel = Star::new(5.242_298, -8.201_638).unwrap();
        let sep = angular_distance(&betelgeuse, &rigel).to_degrees();
        assert!((sep - 18.6).abs() < 0.2, "separation {}", sep);
        assert_eq!(angular_distance(&rigel, &rigel).kind(), crate::coordinates::AngleKind::Degrees);
    }
}
