use lazy_static::lazy_static;
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::constants::{OBLIQUITY_DEG, TAU};
use crate::coordinates::angle::{Angle, AngleKind};
use crate::coordinates::cartesian::Cartesian3;

// Rotation FROM ecliptic TO equatorial about the shared X axis. The obliquity
// is the J2000 mean value and does not vary with time.
lazy_static! {
    static ref EC_TO_EQ: Rotation3<f64> =
        Rotation3::from_axis_angle(&Vector3::x_axis(), OBLIQUITY_DEG.to_radians());
}

/// Rotate an ecliptic rectangular vector into the equatorial frame
pub fn ecliptic_to_equatorial(ecliptic: Cartesian3) -> Cartesian3 {
    Cartesian3::from_vector3(*EC_TO_EQ * ecliptic.to_vector3())
}

// Equatorial coordinates (RA/Dec)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    pub ra: Angle,  // Right ascension, hour-cycle
    pub dec: Angle, // Declination, degree-cycle
}

impl Equatorial {
    pub fn new(ra: Angle, dec: Angle) -> Self {
        Equatorial { ra, dec }
    }

    /// Create from right ascension and declination in radians
    pub fn from_radians(ra: f64, dec: f64) -> Self {
        Equatorial {
            ra: Angle::from_radians(AngleKind::Hours, ra),
            dec: Angle::from_radians(AngleKind::Degrees, dec),
        }
    }

    /// Create from right ascension in hours and declination in degrees
    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> Self {
        Equatorial {
            ra: Angle::hours(ra_hours),
            dec: Angle::degrees(dec_deg),
        }
    }

    /// Direction of an equatorial rectangular vector; RA lands in `[0, 2π)`
    pub fn from_cartesian(cart: Cartesian3) -> Self {
        let (ra, dec, _) = cart.to_spherical();
        Self::from_radians(ra.rem_euclid(TAU), dec)
    }

    /// Unit vector pointing at this position
    pub fn to_cartesian(&self) -> Cartesian3 {
        let (ra, dec) = (self.ra.radians(), self.dec.radians());
        let cos_dec = dec.cos();
        Cartesian3::new(cos_dec * ra.cos(), cos_dec * ra.sin(), dec.sin())
    }

    /// Right ascension in hours
    pub fn ra_hours(&self) -> f64 {
        self.ra.to_hours()
    }

    /// Declination in degrees
    pub fn dec_degrees(&self) -> f64 {
        self.dec.to_degrees()
    }

    /// Great-circle separation from another position
    pub fn angular_distance(&self, other: &Equatorial) -> Angle {
        let (ra1, dec1) = (self.ra.radians(), self.dec.radians());
        let (ra2, dec2) = (other.ra.radians(), other.dec.radians());

        let cos_theta = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();

        // Handle numerical precision issues
        Angle::from_radians(AngleKind::Degrees, cos_theta.clamp(-1.0, 1.0).acos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ecliptic_pole_maps_to_obliquity() {
        // The north ecliptic pole sits at RA 18h, Dec 90° - ε
        let pole = ecliptic_to_equatorial(Cartesian3::new(0.0, 0.0, 1.0));
        let eq = Equatorial::from_cartesian(pole);
        assert_relative_eq!(eq.ra_hours(), 18.0, epsilon = 1e-9);
        assert_relative_eq!(eq.dec_degrees(), 90.0 - OBLIQUITY_DEG, epsilon = 1e-9);
    }

    #[test]
    fn test_equinox_is_fixed() {
        let x = ecliptic_to_equatorial(Cartesian3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(x.x, 2.0, epsilon = 1e-15);
        assert_relative_eq!(x.y, 0.0, epsilon = 1e-15);
        assert_relative_eq!(x.z, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_rotation_matches_explicit_formula() {
        let eps = OBLIQUITY_DEG.to_radians();
        let (x, y, z) = (0.3, -0.8, 0.2);
        let r = ecliptic_to_equatorial(Cartesian3::new(x, y, z));
        assert_relative_eq!(r.y, y * eps.cos() - z * eps.sin(), epsilon = 1e-15);
        assert_relative_eq!(r.z, y * eps.sin() + z * eps.cos(), epsilon = 1e-15);
    }

    #[test]
    fn test_cartesian_round_trip() {
        let eq = Equatorial::from_hours_degrees(20.5, -33.25);
        let back = Equatorial::from_cartesian(eq.to_cartesian());
        assert_relative_eq!(back.ra_hours(), 20.5, epsilon = 1e-10);
        assert_relative_eq!(back.dec_degrees(), -33.25, epsilon = 1e-10);
    }
}
