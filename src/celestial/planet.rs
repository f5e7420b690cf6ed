//! Planets computed from heliocentric position samples

use log::trace;
use serde::{Deserialize, Serialize};

use crate::coordinates::{Angle, AngleKind, Cartesian3, Equatorial};
use crate::framelib::ecliptic_to_equatorial;
use crate::planetlib::{apparent_magnitude, Body, Ephemeris, PositionProvider};
use crate::time::JulianDate;
use crate::units::Distance;
use crate::{Result, SkywatchError};

use super::CelestialObject;

/// A solar system body as seen from the Earth at one instant
///
/// Every field is derived at construction; a new instant means a new `Planet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    body: Body,
    jd: JulianDate,
    position: Equatorial,
    earth_distance: Distance,
    sun_distance: Distance,
    geocentric: Cartesian3,
    angular_diameter: Angle,
    phase_angle: Angle,
    illumination: f64,
    magnitude: Option<f64>,
}

impl Planet {
    /// Compute a planet with the built-in VSOP87 ephemeris
    pub fn at(body: Body, time: impl Into<JulianDate>) -> Result<Self> {
        let ephem = Ephemeris::new();
        Self::from_providers(
            body,
            &ephem.provider(body),
            &ephem.provider(Body::Earth),
            time.into(),
        )
    }

    /// Compute a planet for the current instant
    pub fn now(body: Body) -> Result<Self> {
        Self::at(body, JulianDate::now())
    }

    /// Compute a planet from explicit target and Earth position providers
    ///
    /// Fails with [`SkywatchError::CalculationError`] when the target sits at
    /// the Earth's position (the Earth itself).
    pub fn from_providers(
        body: Body,
        target: &impl PositionProvider,
        earth: &impl PositionProvider,
        jd: JulianDate,
    ) -> Result<Self> {
        let earth_sample = earth.heliocentric(jd);
        let target_sample = target.heliocentric(jd);

        // Earth -> body, still ecliptic
        let geocentric = target_sample.position - earth_sample.position;
        let delta = geocentric.magnitude();
        if delta <= 0.0 {
            return Err(SkywatchError::CalculationError(format!(
                "{} has zero geocentric distance at {}",
                body, jd
            )));
        }

        let position = Equatorial::from_cartesian(ecliptic_to_equatorial(geocentric));

        let r = target_sample.distance.au();
        let big_r = earth_sample.distance.au();
        let alpha = phase_angle(r, delta, big_r);

        let earth_distance = Distance::from_au(delta);
        let size_ratio = (body.radius_km() / earth_distance.km()).min(1.0);
        let angular_diameter = Angle::from_radians(AngleKind::Degrees, 2.0 * size_ratio.asin());

        let phase_deg = alpha.to_degrees();
        let magnitude = apparent_magnitude(body, r, delta, phase_deg).ok();

        trace!(
            "{} at {}: delta={:.6} au, r={:.6} au, phase={:.3} deg",
            body,
            jd,
            delta,
            r,
            phase_deg
        );

        Ok(Planet {
            body,
            jd,
            position,
            earth_distance,
            sun_distance: target_sample.distance,
            geocentric,
            angular_diameter,
            phase_angle: Angle::from_radians(AngleKind::Degrees, alpha),
            illumination: (1.0 + alpha.cos()) / 2.0,
            magnitude,
        })
    }

    pub fn body(&self) -> Body {
        self.body
    }

    /// Instant this snapshot was computed for
    pub fn julian_date(&self) -> JulianDate {
        self.jd
    }

    /// Distance from the Earth
    pub fn earth_distance(&self) -> Distance {
        self.earth_distance
    }

    /// Distance from the Sun
    pub fn sun_distance(&self) -> Distance {
        self.sun_distance
    }

    /// Earth-to-body vector in ecliptic coordinates (AU)
    pub fn geocentric(&self) -> Cartesian3 {
        self.geocentric
    }

    pub fn angular_diameter(&self) -> Angle {
        self.angular_diameter
    }

    /// Sun-body-Earth angle
    pub fn phase_angle(&self) -> Angle {
        self.phase_angle
    }

    /// Illuminated fraction of the disk, 0 to 1
    pub fn illumination(&self) -> f64 {
        self.illumination
    }

    /// Apparent visual magnitude; `None` for bodies without a magnitude model
    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }
}

impl CelestialObject for Planet {
    fn equatorial(&self) -> Equatorial {
        self.position
    }
}

/// Phase angle in radians from the Sun-Earth-body triangle
///
/// `r` is the body's distance from the Sun, `delta` its distance from the
/// Earth, `big_r` the Earth's distance from the Sun. A body at the Sun's
/// position has phase angle zero.
pub(crate) fn phase_angle(r: f64, delta: f64, big_r: f64) -> f64 {
    if r <= 0.0 || delta <= 0.0 {
        return 0.0;
    }
    let cos_alpha = (r * r + delta * delta - big_r * big_r) / (2.0 * r * delta);
    cos_alpha.clamp(-1.0, 1.0).acos()
}
