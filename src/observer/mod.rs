//! Topocentric observation: equatorial to horizontal coordinates
//!
//! Meeus (Astronomical Algorithms, 13.5 and 13.6), with longitudes positive
//! east / negative west and azimuth measured from North through East.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::celestial::CelestialObject;
use crate::constants::TAU;
use crate::coordinates::{Angle, AngleKind};
use crate::earthlib::local_sidereal_time;
use crate::time::JulianDate;

/// Horizontal position of a body at one instant for one observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedObject {
    /// Altitude above the horizon, degree-kind in `[-90°, 90°]`
    pub altitude: Angle,
    /// Azimuth from North through East, degree-kind in `[0°, 360°)`
    pub azimuth: Angle,
    /// Local hour angle, hour-kind in `(-12h, 12h]`
    pub hour_angle: Angle,
}

impl ObservedObject {
    /// Whether the body is strictly above the geometric horizon
    pub fn is_above_horizon(&self) -> bool {
        self.altitude.to_degrees() > 0.0
    }
}

/// A location on the Earth's surface
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
    /// Height above sea level in metres; not used by the transform
    pub elevation: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Self {
        Observer {
            latitude,
            longitude,
            elevation,
        }
    }

    /// Local sidereal time in radians, `[0, 2π)`
    pub fn local_sidereal_time(&self, jd: JulianDate) -> f64 {
        local_sidereal_time(jd, self.longitude.to_radians())
    }

    /// Altitude, azimuth and hour angle of a body at the given time
    pub fn observe(
        &self,
        body: &impl CelestialObject,
        time: impl Into<JulianDate>,
    ) -> ObservedObject {
        let jd = time.into();
        let position = body.equatorial();
        let (alt, az, h) = horizontal(
            position.ra.radians(),
            position.dec.radians(),
            self.latitude.to_radians(),
            self.local_sidereal_time(jd),
        );

        ObservedObject {
            altitude: Angle::from_radians(AngleKind::Degrees, alt),
            azimuth: Angle::from_radians(AngleKind::Degrees, az),
            hour_angle: Angle::from_radians(AngleKind::Hours, h),
        }
    }

    /// Observe a body at the current instant
    pub fn observe_now(&self, body: &impl CelestialObject) -> ObservedObject {
        self.observe(body, JulianDate::now())
    }
}

/// (altitude, azimuth, hour angle) in radians
fn horizontal(ra: f64, dec: f64, lat: f64, lst: f64) -> (f64, f64, f64) {
    let mut h = (lst - ra).rem_euclid(TAU);
    if h > PI {
        h -= TAU;
    }

    let az = h.sin().atan2(h.cos() * lat.sin() - dec.tan() * lat.cos()) - PI;
    let az = az.rem_euclid(TAU);

    let sin_alt = lat.sin() * dec.sin() + lat.cos() * dec.cos() * h.cos();
    let alt = sin_alt.clamp(-1.0, 1.0).asin();

    (alt, az, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celestial::Star;
    use crate::coordinates::Equatorial;
    use crate::earthlib::greenwich_mean_sidereal_time;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_observe_is_deterministic() {
        let observer = Observer::new(51.5, -0.1, 20.0);
        let vega = Star::new(18.615_649, 38.783_69).unwrap();
        let t = Utc.with_ymd_and_hms(2024, 7, 1, 22, 0, 0).unwrap();

        let a = observer.observe(&vega, t);
        let b = observer.observe(&vega, t);
        assert_eq!(a.altitude.radians().to_bits(), b.altitude.radians().to_bits());
        assert_eq!(a.azimuth.radians().to_bits(), b.azimuth.radians().to_bits());
        assert_eq!(a.hour_angle.radians().to_bits(), b.hour_angle.radians().to_bits());
    }

    #[test]
    fn test_datetime_and_julian_inputs_agree() {
        let observer = Observer::new(-33.9, 18.4, 0.0);
        let star = Star::new(6.752_477, -16.716_116).unwrap();
        let t = Utc.with_ymd_and_hms(2023, 1, 15, 21, 30, 0).unwrap();
        assert_eq!(observer.observe(&star, t), observer.observe(&star, JulianDate::from(t)));
    }

    #[test]
    fn test_meridian_transit_altitude() {
        // With RA equal to the local sidereal time the body is on the meridian
        let jd = JulianDate(2_460_000.3);
        let observer = Observer::new(40.0, 15.0, 0.0);
        let lst = observer.local_sidereal_time(jd);
        let body = Equatorial::from_radians(lst, 10.0_f64.to_radians());

        let obs = observer.observe(&body, jd);
        assert!(obs.hour_angle.radians().abs() < 1e-12);
        assert_relative_eq!(obs.altitude.to_degrees(), 60.0, epsilon = 1e-9);
        // South of the zenith the body sits due South
        assert_relative_eq!(obs.azimuth.to_degrees(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pole_altitude_equals_latitude() {
        let observer = Observer::new(47.3, 8.5, 400.0);
        let pole = Equatorial::from_hours_degrees(3.0, 90.0);
        for i in 0..24 {
            let jd = JulianDate(2_459_000.0 + i as f64 / 24.0);
            let obs = observer.observe(&pole, jd);
            assert_relative_eq!(obs.altitude.to_degrees(), 47.3, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rising_body_in_east() {
        // Six hours before transit a Dec 0 body sits on the horizon due East
        let jd = JulianDate(2_459_500.5);
        let observer = Observer::new(30.0, 0.0, 0.0);
        let ra = (greenwich_mean_sidereal_time(jd) + PI / 2.0).rem_euclid(TAU);
        let body = Equatorial::from_radians(ra, 0.0);

        let obs = observer.observe(&body, jd);
        assert_relative_eq!(obs.hour_angle.to_hours(), -6.0, epsilon = 1e-9);
        assert!(obs.altitude.to_degrees().abs() < 1e-9);
        assert_relative_eq!(obs.azimuth.to_degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_output_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let observer = Observer::new(rng.gen_range(-89.0..89.0), rng.gen_range(-180.0..180.0), 0.0);
            let body = Equatorial::from_hours_degrees(rng.gen_range(0.0..24.0), rng.gen_range(-89.0..89.0));
            let jd = JulianDate(rng.gen_range(2_415_020.0..2_488_070.0));

            let obs = observer.observe(&body, jd);
            let h = obs.hour_angle.radians();
            assert!(h > -PI && h <= PI, "hour angle {}", h);
            assert!((0.0..=TAU).contains(&obs.azimuth.radians()));
            assert!(obs.altitude.to_degrees().abs() <= 90.0);
            assert_eq!(obs.hour_angle.kind(), AngleKind::Hours);
            assert_eq!(obs.azimuth.kind(), AngleKind::Degrees);
        }
    }
}
