//! Planetary positions module
//!
//! The rest of the crate only sees planets through [`PositionProvider`]: a
//! pure function of time returning a heliocentric ecliptic rectangular
//! position and the heliocentric distance. [`Ephemeris`] supplies providers
//! backed by the VSOP87A series; tests and callers with their own series can
//! pass any closure instead.

pub mod magnitude;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coordinates::cartesian::Cartesian3;
use crate::time::JulianDate;
use crate::units::Distance;

pub use magnitude::apparent_magnitude;

/// Error type for planetary calculations
#[derive(Debug, Error)]
pub enum PlanetError {
    #[error("Magnitude model not implemented for {0}")]
    UnsupportedBody(Body),

    #[error("Planet not found: {0}")]
    NotFound(String),
}

/// Enum representing the solar system bodies with a position series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    /// Equatorial radius in km (JPL planetary physical parameters)
    pub fn radius_km(&self) -> f64 {
        match self {
            Body::Sun => 695_700.0,
            Body::Mercury => 2_440.53,
            Body::Venus => 6_051.8,
            Body::Earth => 6_378.1366,
            Body::Mars => 3_396.19,
            Body::Jupiter => 71_492.0,
            Body::Saturn => 60_268.0,
            Body::Uranus => 25_559.0,
            Body::Neptune => 24_764.0,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = PlanetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::ALL
            .iter()
            .copied()
            .find(|body| body.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlanetError::NotFound(s.to_string()))
    }
}

/// One sample of a body's heliocentric position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeliocentricSample {
    /// Heliocentric ecliptic rectangular position (AU)
    pub position: Cartesian3,
    /// Distance from the Sun
    pub distance: Distance,
}

impl HeliocentricSample {
    /// Sample whose distance is the length of the position vector
    pub fn from_position(position: Cartesian3) -> Self {
        HeliocentricSample {
            position,
            distance: Distance::from_au(position.magnitude()),
        }
    }
}

/// Source of heliocentric positions for one body
pub trait PositionProvider {
    /// Heliocentric position and distance at the given Julian Date
    fn heliocentric(&self, jd: JulianDate) -> HeliocentricSample;
}

impl<F> PositionProvider for F
where
    F: Fn(JulianDate) -> HeliocentricSample,
{
    fn heliocentric(&self, jd: JulianDate) -> HeliocentricSample {
        self(jd)
    }
}

/// Provider for one body from the VSOP87A series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyProvider {
    body: Body,
}

impl BodyProvider {
    pub fn body(&self) -> Body {
        self.body
    }
}

impl PositionProvider for BodyProvider {
    fn heliocentric(&self, jd: JulianDate) -> HeliocentricSample {
        let jde = jd.value();
        let coords = match self.body {
            // The Sun is the origin of the heliocentric frame
            Body::Sun => return HeliocentricSample::from_position(Cartesian3::zero()),
            Body::Mercury => vsop87::vsop87a::mercury(jde),
            Body::Venus => vsop87::vsop87a::venus(jde),
            Body::Earth => vsop87::vsop87a::earth(jde),
            Body::Mars => vsop87::vsop87a::mars(jde),
            Body::Jupiter => vsop87::vsop87a::jupiter(jde),
            Body::Saturn => vsop87::vsop87a::saturn(jde),
            Body::Uranus => vsop87::vsop87a::uranus(jde),
            Body::Neptune => vsop87::vsop87a::neptune(jde),
        };
        HeliocentricSample::from_position(Cartesian3::new(coords.x, coords.y, coords.z))
    }
}

/// Planetary ephemeris backed by VSOP87A
#[derive(Debug, Default, Clone, Copy)]
pub struct Ephemeris;

impl Ephemeris {
    pub fn new() -> Self {
        Self
    }

    /// Position provider for a body
    pub fn provider(&self, body: Body) -> BodyProvider {
        BodyProvider { body }
    }

    /// Heliocentric sample for a body at a given Julian Date
    pub fn heliocentric(&self, body: Body, jd: JulianDate) -> HeliocentricSample {
        self.provider(body).heliocentric(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;

    #[test]
    fn test_body_names_round_trip() {
        for body in Body::ALL {
            assert_eq!(body.name().parse::<Body>().unwrap(), body);
        }
        assert_eq!("  jupiter ".parse::<Body>().unwrap(), Body::Jupiter);
        assert!("Pluto".parse::<Body>().is_err());
    }

    #[test]
    fn test_closure_provider() {
        let provider = |_jd: JulianDate| HeliocentricSample::from_position(Cartesian3::new(3.0, 4.0, 0.0));
        let sample = provider.heliocentric(JulianDate(J2000));
        assert_eq!(sample.distance.au(), 5.0);
    }

    #[test]
    fn test_sun_is_origin() {
        let sample = Ephemeris::new().heliocentric(Body::Sun, JulianDate(J2000));
        assert_eq!(sample.position, Cartesian3::zero());
        assert_eq!(sample.distance.au(), 0.0);
    }

    #[test]
    fn test_earth_distance_near_one_au() {
        let ephem = Ephemeris::new();
        for i in 0..12 {
            let jd = JulianDate(J2000 + 30.0 * i as f64);
            let r = ephem.heliocentric(Body::Earth, jd).distance.au();
            assert!((0.98..1.02).contains(&r), "Earth distance {} out of range", r);
        }
    }

    #[test]
    fn test_outer_planet_distances() {
        let ephem = Ephemeris::new();
        let jd = JulianDate(J2000);
        let jupiter = ephem.heliocentric(Body::Jupiter, jd).distance.au();
        let neptune = ephem.heliocentric(Body::Neptune, jd).distance.au();
        assert!((4.9..5.5).contains(&jupiter));
        assert!((29.7..30.4).contains(&neptune));
    }
}
