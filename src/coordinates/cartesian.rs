//! # Cartesian Coordinate Module
//!
//! Rectangular positions used between the planetary series and the sky.
//!
//! ## Coordinate System Convention
//!
//! The frame of a `Cartesian3` is whatever the producer says it is. The
//! planetary providers emit heliocentric ecliptic J2000 vectors in AU:
//! - **X-axis**: toward the vernal equinox
//! - **Y-axis**: 90° along the ecliptic
//! - **Z-axis**: toward the north ecliptic pole
//!
//! After [`crate::framelib::inertial::ecliptic_to_equatorial`] the same axes
//! point at RA = 0h, RA = 6h and the north celestial pole.
//!
//! ## Examples
//!
//! ```rust
//! use skywatch::coordinates::cartesian::Cartesian3;
//!
//! let earth = Cartesian3::new(1.0, 0.0, 0.0);
//! let mars = Cartesian3::new(1.0, 1.0, 0.0);
//! let geocentric = mars - earth;
//! assert_eq!(geocentric.magnitude(), 1.0);
//! ```

use std::f64::consts::PI;
use std::ops::{Add, Neg, Sub};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Three-dimensional rectangular coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// The origin
    pub fn zero() -> Self {
        Self::default()
    }

    /// Calculates the magnitude (Euclidean length) of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skywatch::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(3.0, 4.0, 0.0);
    /// assert_eq!(coord.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Dot product with another coordinate
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Converts to spherical coordinates
    ///
    /// Returns `(longitude, latitude, distance)` in radians, with the
    /// longitude normalized to `[0, 2π)`. The zero vector maps to all zeros.
    pub fn to_spherical(&self) -> (f64, f64, f64) {
        let distance = self.magnitude();

        if distance == 0.0 {
            return (0.0, 0.0, 0.0);
        }

        let lat = (self.z / distance).clamp(-1.0, 1.0).asin();
        let mut lon = self.y.atan2(self.x);
        if lon < 0.0 {
            lon += 2.0 * PI;
        }

        (lon, lat, distance)
    }

    /// Converts to nalgebra Vector3
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(v: Vector3<f64>) -> Self {
        Cartesian3::new(v.x, v.y, v.z)
    }
}

impl Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3::new(-self.x, -self.y, -self.z)
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from(v: Vector3<f64>) -> Self {
        Self::from_vector3(v)
    }
}
