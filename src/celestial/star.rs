//! Fixed stars from catalog values

use serde::{Deserialize, Serialize};

use crate::constants::PARALLAX_AU_FACTOR;
use crate::coordinates::{Angle, AngleKind, Equatorial};
use crate::units::Distance;
use crate::{Result, SkywatchError};

use super::CelestialObject;

/// A catalog star
///
/// Parallax and distance are always set together; see [`Star::with_parallax`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    position: Equatorial,
    /// Apparent visual magnitude
    pub magnitude: f64,
    parallax_mas: f64,
    distance: Option<Distance>,
    /// Proper motion in right ascension (mas/yr)
    pub ra_mas_per_year: f64,
    /// Proper motion in declination (mas/yr)
    pub dec_mas_per_year: f64,
}

impl Star {
    /// Create a star from right ascension in hours and declination in degrees
    ///
    /// Fails with [`SkywatchError::RangeViolation`] unless `0 <= ra < 24` and
    /// `-90 <= dec <= 90`.
    pub fn new(ra_hours: f64, dec_degrees: f64) -> Result<Self> {
        check_ranges(ra_hours, dec_degrees)?;
        Ok(Self::unchecked(Equatorial::from_hours_degrees(
            ra_hours,
            dec_degrees,
        )))
    }

    /// Create a star from already-built angles
    ///
    /// The range check reads the angles through their cycle conversions, so
    /// the kind label does not matter.
    pub fn from_angles(ra: Angle, dec: Angle) -> Result<Self> {
        check_ranges(ra.to_hours(), dec.to_degrees())?;
        Ok(Self::unchecked(Equatorial::new(
            ra.with_kind(AngleKind::Hours),
            dec.with_kind(AngleKind::Degrees),
        )))
    }

    fn unchecked(position: Equatorial) -> Self {
        Star {
            position,
            magnitude: 0.0,
            parallax_mas: 0.0,
            distance: None,
            ra_mas_per_year: 0.0,
            dec_mas_per_year: 0.0,
        }
    }

    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Set the parallax in milliarcseconds and derive the distance from it
    ///
    /// D = 206000 / tan(p), with p the parallax in arcseconds, taken as AU.
    /// Non-positive parallaxes leave the distance unknown.
    pub fn with_parallax(mut self, parallax_mas: f64) -> Self {
        self.parallax_mas = parallax_mas;
        self.distance = if parallax_mas > 0.0 {
            let d = PARALLAX_AU_FACTOR / (parallax_mas / 1000.0).tan();
            Some(Distance::from_au(d))
        } else {
            None
        };
        self
    }

    pub fn with_proper_motion(mut self, ra_mas_per_year: f64, dec_mas_per_year: f64) -> Self {
        self.ra_mas_per_year = ra_mas_per_year;
        self.dec_mas_per_year = dec_mas_per_year;
        self
    }

    pub fn parallax_mas(&self) -> f64 {
        self.parallax_mas
    }

    /// Distance derived from the parallax, if one was given
    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }
}

impl CelestialObject for Star {
    fn equatorial(&self) -> Equatorial {
        self.position
    }
}

fn check_ranges(ra_hours: f64, dec_degrees: f64) -> Result<()> {
    if !(0.0..24.0).contains(&ra_hours) {
        return Err(SkywatchError::RangeViolation(format!(
            "right ascension must be in hours, 0 <= RA < 24 (got {})",
            ra_hours
        )));
    }
    if !(-90.0..=90.0).contains(&dec_degrees) {
        return Err(SkywatchError::RangeViolation(format!(
            "declination must be in degrees, -90 <= Dec <= 90 (got {})",
            dec_degrees
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(-0.1, 0.0)]
    #[case(24.0, 0.0)]
    #[case(25.0, 10.0)]
    #[case(12.0, 90.5)]
    #[case(12.0, -91.0)]
    #[case(f64::NAN, 0.0)]
    fn test_out_of_range_rejected(#[case] ra: f64, #[case] dec: f64) {
        assert!(matches!(
            Star::new(ra, dec),
            Err(SkywatchError::RangeViolation(_))
        ));
    }

    #[rstest]
    #[case(0.0, -90.0)]
    #[case(23.999_999, 90.0)]
    #[case(12.0, 0.0)]
    fn test_edges_accepted(#[case] ra: f64, #[case] dec: f64) {
        assert!(Star::new(ra, dec).is_ok());
    }

    #[test]
    fn test_from_angles_checks_by_cycle() {
        let ra = Angle::from_dms(AngleKind::Hours, 18, 36, 56.3);
        let dec = Angle::from_dms(AngleKind::Degrees, 38, 47, 1.0);
        let vega = Star::from_angles(ra, dec).unwrap();
        assert_relative_eq!(vega.right_ascension().to_hours(), ra.to_hours(), epsilon = 1e-12);

        let bad_ra = Angle::hours(24.5);
        assert!(Star::from_angles(bad_ra, dec).is_err());
    }

    #[test]
    fn test_parallax_distance() {
        // Sirius: 379.21 mas
        let sirius = Star::new(6.752_477, -16.716_116)
            .unwrap()
            .with_magnitude(-1.44)
            .with_parallax(379.21);
        let expected = 206000.0 / (0.379_21_f64).tan();
        let distance = sirius.distance().unwrap();
        assert_relative_eq!(distance.au(), expected, epsilon = 1e-6);
        assert_eq!(sirius.parallax_mas(), 379.21);
    }

    #[test]
    fn test_no_parallax_no_distance() {
        let star = Star::new(1.0, 1.0).unwrap().with_parallax(0.0);
        assert!(star.distance().is_none());
        let star = star.with_parallax(-2.5);
        assert!(star.distance().is_none());
    }

    #[test]
    fn test_proper_motion() {
        let star = Star::new(1.0, 1.0)
            .unwrap()
            .with_proper_motion(-546.01, -1223.07);
        assert_eq!(star.ra_mas_per_year, -546.01);
        assert_eq!(star.dec_mas_per_year, -1223.07);
    }
}
