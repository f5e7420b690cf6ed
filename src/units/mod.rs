//! Distance units
//!
//! A [`Distance`] keeps astronomical units and kilometres side by side so that
//! neither has to be recomputed at every use.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{AU_KM, C_KM_S, LIGHT_YEAR_KM};

/// A distance held in both AU and kilometres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Distance {
    au: f64,
    km: f64,
}

impl Distance {
    /// Build from whichever of `au` / `km` is positive
    ///
    /// AU is applied first, then a positive `km` overrides it and AU is
    /// re-derived. When neither is positive the distance is zero.
    ///
    /// ```rust
    /// use skywatch::units::Distance;
    ///
    /// let d = Distance::new(5.0, 149_597_870.7);
    /// assert_eq!(d.au(), 1.0);
    /// ```
    pub fn new(au: f64, km: f64) -> Self {
        let mut distance = Distance::default();
        if au > 0.0 {
            distance.au = au;
            distance.km = au * AU_KM;
        }
        if km > 0.0 {
            distance.km = km;
            distance.au = km / AU_KM;
        }
        distance
    }

    pub fn from_au(au: f64) -> Self {
        Self::new(au, 0.0)
    }

    pub fn from_km(km: f64) -> Self {
        Self::new(0.0, km)
    }

    /// Distance in astronomical units
    pub fn au(&self) -> f64 {
        self.au
    }

    /// Distance in kilometres
    pub fn km(&self) -> f64 {
        self.km
    }

    /// Light travel time in seconds
    pub fn light_seconds(&self) -> f64 {
        self.km / C_KM_S
    }

    pub fn light_years(&self) -> f64 {
        self.km / LIGHT_YEAR_KM
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} au", self.au)
    }
}
