pub mod angle;
pub mod cartesian;

pub use angle::{Angle, AngleKind};
pub use cartesian::Cartesian3;

// Re-export the Equatorial coordinate system from framelib
pub use crate::framelib::inertial::Equatorial;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equatorial_conversions() {
        let coord = Equatorial::from_hours_degrees(5.5, 22.0);

        assert_eq!(coord.ra.kind(), AngleKind::Hours);
        assert_eq!(coord.dec.kind(), AngleKind::Degrees);
        assert_relative_eq!(coord.ra.to_degrees(), 82.5, epsilon = 1e-10);
        assert_relative_eq!(coord.dec.radians(), 22.0_f64.to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn test_angular_distance() {
        // Same point should have zero distance
        let p1 = Equatorial::from_hours_degrees(4.0, 30.0);
        assert!(p1.angular_distance(&p1).radians().abs() < 1e-7);

        // Antipodal points are 180 degrees apart
        let p2 = Equatorial::from_hours_degrees(16.0, -30.0);
        assert_relative_eq!(p1.angular_distance(&p2).to_degrees(), 180.0, epsilon = 1e-6);

        // Polaris to Vega is about 51 degrees
        let polaris = Equatorial::from_hours_degrees(2.53, 89.26);
        let vega = Equatorial::from_hours_degrees(18.6156, 38.78);
        let dist_deg = polaris.angular_distance(&vega).to_degrees();
        assert!((dist_deg - 51.0).abs() < 1.0);
    }
}
