//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in kilometers (per IAU 2012 Resolution B2)
pub const AU_KM: f64 = 149_597_870.700;
/// Light year in kilometers
pub const LIGHT_YEAR_KM: f64 = 9_460_730_472_580.8;
/// Astronomical units per parsec, rounded as used by the parallax approximation
pub const PARALLAX_AU_FACTOR: f64 = 206_000.0;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Minutes in a day
pub const DAY_MIN: f64 = 1_440.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// Julian date of the Unix epoch (1970-01-01T00:00:00 UTC)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

// Angles
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = 4.848_136_811_095_36e-6;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

/// Mean obliquity of the ecliptic, held fixed at its J2000 value (degrees)
pub const OBLIQUITY_DEG: f64 = 23.43928;

// Physics
/// Speed of light in km/s
pub const C_KM_S: f64 = 299_792.458;

// Earth rotation (IERS Technical Note 32, eq. 14)
/// Earth Rotation Angle at J2000.0 in turns
pub const ERA_AT_J2000: f64 = 0.779_057_273_264_0;
/// Excess of Earth's rotation rate over one turn per UT1 day, in turns per day
pub const ERA_RATE_EXCESS: f64 = 0.002_737_811_911_354_48;
