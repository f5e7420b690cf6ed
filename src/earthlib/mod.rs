//! Earth rotation: Earth Rotation Angle and Greenwich Mean Sidereal Time
//!
//! Both functions return radians in `[0, 2π)`.

use crate::constants::{ASEC2RAD, ERA_AT_J2000, ERA_RATE_EXCESS, TAU};
use crate::time::JulianDate;

/// Earth Rotation Angle (IERS Technical Note 32, eq. 14)
///
/// The whole-turn part of the elapsed days is dropped by working from the
/// day fraction of the Julian Date.
pub fn earth_rotation_angle(jd: JulianDate) -> f64 {
    let t = jd.days_since_j2000();
    let f = jd.value().rem_euclid(1.0);

    let theta = TAU * (f + ERA_AT_J2000 + ERA_RATE_EXCESS * t);
    theta.rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time
///
/// The Earth Rotation Angle plus the IAU 2006 accumulated-precession
/// polynomial (Capitaine, Wallace & Chapront 2003, eq. 42) in centuries since
/// J2000.0.
pub fn greenwich_mean_sidereal_time(jd: JulianDate) -> f64 {
    let t = jd.centuries_since_j2000();

    let poly_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 + t * -0.0000000368))));

    (earth_rotation_angle(jd) + poly_arcsec * ASEC2RAD).rem_euclid(TAU)
}

/// Local sidereal time for an east-positive longitude in radians
pub fn local_sidereal_time(jd: JulianDate, longitude: f64) -> f64 {
    (greenwich_mean_sidereal_time(jd) + longitude).rem_euclid(TAU)
}
