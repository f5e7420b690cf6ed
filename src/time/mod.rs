//! Time module for astronomical time calculations
//!
//! Every formula in the crate runs on a Julian Date. Callers may pass either a
//! UTC calendar timestamp (`chrono::DateTime<Utc>`) or a precomputed
//! [`JulianDate`]; both convert through `Into<JulianDate>`.
//!
//! No distinction is made between UT1, UTC and TT: the sidereal-time and
//! planetary formulas consume the same day count.

use crate::constants::{DAYS_PER_CENTURY, DAY_S, J2000, UNIX_EPOCH_JD};
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Time out of range: {0}")]
    OutOfRange(String),

    #[error("Parsing error: {0}")]
    ParseError(String),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Continuous day count since the Julian epoch (noon, 1 January 4713 BC)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDate(pub f64);

impl JulianDate {
    pub fn new(jd: f64) -> Self {
        JulianDate(jd)
    }

    /// The current instant
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Convert a UTC timestamp with the Meeus algorithm (Astronomical
    /// Algorithms, ch. 7), folding the time of day into the day number
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use skywatch::time::JulianDate;
    ///
    /// let jd = JulianDate::from_datetime(&Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
    /// assert_eq!(jd.value(), 2_451_545.0);
    /// ```
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        let mut year = dt.year();
        let mut month = dt.month() as i32;
        let day = dt.day() as f64
            + dt.hour() as f64 / 24.0
            + dt.minute() as f64 / 1440.0
            + dt.second() as f64 / DAY_S
            + (dt.nanosecond() / 1_000_000) as f64 / 86_400_000.0;

        if month <= 2 {
            year -= 1;
            month += 12;
        }

        // Gregorian correction for skipped century leap days
        let a = year / 100;
        let b = 2 - a + a / 4;

        let jd = (365.25 * (year + 4716) as f64).floor()
            + (30.6001 * (month + 1) as f64).floor()
            + day
            + b as f64
            - 1524.5;

        JulianDate(jd)
    }

    /// Convert back to a UTC timestamp, rounded to the millisecond
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        let millis = ((self.0 - UNIX_EPOCH_JD) * DAY_S * 1000.0).round();
        if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
            return Err(TimeError::OutOfRange(format!("JD {}", self.0)));
        }
        Utc.timestamp_millis_opt(millis as i64)
            .single()
            .ok_or_else(|| TimeError::OutOfRange(format!("JD {}", self.0)))
    }

    /// Raw day count
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Days elapsed since J2000.0
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000
    }

    /// Julian centuries elapsed since J2000.0
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        JulianDate(jd)
    }
}

impl From<DateTime<Utc>> for JulianDate {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(&dt)
    }
}

impl From<&DateTime<Utc>> for JulianDate {
    fn from(dt: &DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

impl Add<f64> for JulianDate {
    type Output = JulianDate;

    fn add(self, days: f64) -> Self::Output {
        JulianDate(self.0 + days)
    }
}

impl Sub<f64> for JulianDate {
    type Output = JulianDate;

    fn sub(self, days: f64) -> Self::Output {
        JulianDate(self.0 - days)
    }
}

impl Sub<JulianDate> for JulianDate {
    type Output = f64;

    fn sub(self, other: JulianDate) -> Self::Output {
        // Return the difference in days
        self.0 - other.0
    }
}

/// A point in time that can be stepped through by the event searches
///
/// Implemented for both accepted time inputs so that a search started with
/// calendar timestamps reports calendar timestamps, and one started with
/// Julian Dates reports Julian Dates.
pub trait SampleTime: Copy + PartialOrd {
    /// Julian Date of this instant
    fn julian_date(&self) -> JulianDate;

    /// The instant `n` steps of `step` after this one
    fn add_steps(&self, step: Duration, n: i32) -> Self;
}

impl SampleTime for DateTime<Utc> {
    fn julian_date(&self) -> JulianDate {
        JulianDate::from_datetime(self)
    }

    fn add_steps(&self, step: Duration, n: i32) -> Self {
        *self + step * n
    }
}

impl SampleTime for JulianDate {
    fn julian_date(&self) -> JulianDate {
        *self
    }

    fn add_steps(&self, step: Duration, n: i32) -> Self {
        let step_days = step.num_milliseconds() as f64 / (DAY_S * 1000.0);
        JulianDate(self.0 + step_days * n as f64)
    }
}
