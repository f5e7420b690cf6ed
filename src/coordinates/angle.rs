//! # Angle Representation Module
//!
//! This module provides an angle type that carries both its canonical radian
//! value and a sexagesimal decomposition (degrees or hours, minutes, seconds).
//!
//! ## Design Philosophy
//!
//! Astronomical catalogs quote positions in two cycles: declinations and
//! altitudes in a 360° cycle, right ascensions and hour angles in a 24-hour
//! cycle. The `Angle` type records which cycle it belongs to through
//! [`AngleKind`] so that the decomposition reads naturally (`12h 30m 0s`
//! versus `187° 30' 0"`), while every computation goes through the radian
//! value.
//!
//! ## Sign Convention
//!
//! The sign lives on the coarsest non-zero component. `-0° 30'` is stored as
//! whole `0`, minutes `-30`, seconds `0.0`; finer components are magnitudes.
//! This keeps the decomposition lossless for angles smaller than one unit.
//!
//! No normalization to `[0, cycle)` happens on construction. Call
//! [`Angle::normalized`] where a reduced value is required.
//!
//! ## Examples
//!
//! ```rust
//! use skywatch::coordinates::angle::{Angle, AngleKind};
//!
//! let ra = Angle::from_dms(AngleKind::Hours, 6, 45, 9.0);
//! assert!((ra.to_hours() - 6.7525).abs() < 1e-12);
//!
//! let dec = Angle::from_radians(AngleKind::Degrees, -(45.5_f64).to_radians());
//! assert_eq!(dec.whole(), -45);
//! ```

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::TAU;

/// Which cycle an angle is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AngleKind {
    /// 360 degrees per turn
    Degrees,
    /// 24 hours per turn
    Hours,
}

impl AngleKind {
    /// Number of units in a full turn
    pub fn cycle(&self) -> f64 {
        match self {
            AngleKind::Degrees => 360.0,
            AngleKind::Hours => 24.0,
        }
    }
}

/// An angular measurement with its sexagesimal decomposition
///
/// The radian value is canonical. The whole/minutes/seconds triple is derived
/// from it (or it from them) at construction and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    whole: i32,
    minutes: i32,
    seconds: f64,
    radians: f64,
    kind: AngleKind,
}

impl Angle {
    /// Creates an angle from whole units, minutes and seconds
    ///
    /// The magnitude is `|whole| + |minutes|/60 + |seconds|/3600`; the sign is
    /// taken from the first non-zero of (`whole`, `minutes`, `seconds`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skywatch::coordinates::angle::{Angle, AngleKind};
    ///
    /// let a = Angle::from_dms(AngleKind::Degrees, 0, -30, 0.0);
    /// assert!((a.to_degrees() + 0.5).abs() < 1e-12);
    /// ```
    pub fn from_dms(kind: AngleKind, whole: i32, minutes: i32, seconds: f64) -> Self {
        let sign = if whole != 0 {
            whole.signum() as f64
        } else if minutes != 0 {
            minutes.signum() as f64
        } else if seconds < 0.0 {
            -1.0
        } else {
            1.0
        };

        let total = sign
            * (whole.unsigned_abs() as f64
                + minutes.unsigned_abs() as f64 / 60.0
                + seconds.abs() / 3600.0);

        Angle {
            whole,
            minutes,
            seconds,
            radians: total / kind.cycle() * TAU,
            kind,
        }
    }

    /// Creates an angle from radians, decomposing it into whole/minutes/seconds
    pub fn from_radians(kind: AngleKind, radians: f64) -> Self {
        let total = radians * kind.cycle() / TAU;
        let (whole, minutes, seconds) = decompose(total);
        Angle {
            whole,
            minutes,
            seconds,
            radians,
            kind,
        }
    }

    /// Creates a degree-cycle angle from decimal degrees
    pub fn degrees(value: f64) -> Self {
        Self::from_decimal(AngleKind::Degrees, value)
    }

    /// Creates an hour-cycle angle from decimal hours
    pub fn hours(value: f64) -> Self {
        Self::from_decimal(AngleKind::Hours, value)
    }

    /// Creates an angle from a decimal value in the units of `kind`
    pub fn from_decimal(kind: AngleKind, value: f64) -> Self {
        let (whole, minutes, seconds) = decompose(value);
        Self::from_dms(kind, whole, minutes, seconds)
    }

    /// Canonical value in radians
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// The cycle this angle is expressed in
    pub fn kind(&self) -> AngleKind {
        self.kind
    }

    /// Signed whole degrees or hours
    pub fn whole(&self) -> i32 {
        self.whole
    }

    /// Arcminutes or minutes of time
    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    /// Arcseconds or seconds of time
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Value in degrees, regardless of kind
    pub fn to_degrees(&self) -> f64 {
        self.radians * 360.0 / TAU
    }

    /// Value in hours, regardless of kind
    pub fn to_hours(&self) -> f64 {
        self.radians * 24.0 / TAU
    }

    /// Value in the units of this angle's own kind
    pub fn value(&self) -> f64 {
        match self.kind {
            AngleKind::Degrees => self.to_degrees(),
            AngleKind::Hours => self.to_hours(),
        }
    }

    /// Value in arcminutes (or minutes of time for hour angles)
    pub fn to_arcminutes(&self) -> f64 {
        self.value() * 60.0
    }

    /// Value in arcseconds (or seconds of time for hour angles)
    pub fn to_arcseconds(&self) -> f64 {
        self.value() * 3600.0
    }

    /// Value in milliarcseconds
    pub fn to_mas(&self) -> f64 {
        self.value() * 3_600_000.0
    }

    /// Same angle re-expressed in another cycle
    pub fn with_kind(&self, kind: AngleKind) -> Self {
        Self::from_radians(kind, self.radians)
    }

    /// Copy reduced to `[0, 2π)`
    pub fn normalized(&self) -> Self {
        Self::from_radians(self.kind, self.radians.rem_euclid(TAU))
    }

    /// Copy reduced to `(-π, π]`
    pub fn normalized_signed(&self) -> Self {
        let mut r = self.radians.rem_euclid(TAU);
        if r > PI {
            r -= TAU;
        }
        Self::from_radians(self.kind, r)
    }

    /// Sexagesimal text, e.g. `12° 30' 15.5"` or `5h 30m 0s`
    pub fn to_display_string(&self) -> String {
        match self.kind {
            AngleKind::Degrees => {
                format!("{}° {}' {}\"", self.whole, self.minutes, self.seconds)
            }
            AngleKind::Hours => format!("{}h {}m {}s", self.whole, self.minutes, self.seconds),
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

/// Split a signed decimal value into (whole, minutes, seconds) with the sign on
/// the first non-zero component
fn decompose(total: f64) -> (i32, i32, f64) {
    let negative = total < 0.0;
    let magnitude = total.abs();

    let whole = magnitude.trunc();
    let minutes_f = (magnitude - whole) * 60.0;
    let minutes = minutes_f.trunc();
    let seconds = (minutes_f - minutes) * 60.0;

    let (mut whole, mut minutes, mut seconds) = (whole as i32, minutes as i32, seconds);
    if negative {
        if whole != 0 {
            whole = -whole;
        } else if minutes != 0 {
            minutes = -minutes;
        } else {
            seconds = -seconds;
        }
    }
    (whole, minutes, seconds)
}

/// Parse a sexagesimal field such as `"06 45 08.92"` or `"-00 30 12.5"`
///
/// A leading minus applies to the whole angle even when the first component
/// is zero. Returns `None` for anything that is not three numeric components.
pub fn parse_sexagesimal(kind: AngleKind, text: &str) -> Option<Angle> {
    let text = text.trim();
    let negative = text.starts_with('-');
    let mut parts = text.split_whitespace();

    let whole = parts.next()?.trim_start_matches(['+', '-']).parse::<u32>().ok()?;
    let minutes = parts.next()?.parse::<u32>().ok()?;
    let seconds = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() || seconds < 0.0 {
        return None;
    }

    let (mut whole, mut minutes, mut seconds) = (whole as i32, minutes as i32, seconds);
    if negative {
        if whole != 0 {
            whole = -whole;
        } else if minutes != 0 {
            minutes = -minutes;
        } else {
            seconds = -seconds;
        }
    }
    Some(Angle::from_dms(kind, whole, minutes, seconds))
}
