//! Time module for solar calculations
//!
//! All instants are Julian day numbers: a continuous day count whose
//! fractional part encodes the time of day. There is no time-zone or
//! time-scale handling; a day number is taken to be UTC-like, and each day
//! begins at noon (fraction 0.0).
//!
//! Conversions to and from the outside world go through a millisecond
//! timestamp relative to the Unix epoch, or through `chrono::DateTime<Utc>`.

use crate::constants::{DAY_MS, J2000, UNIX_EPOCH_JD};
use crate::{Result, SunError};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A point in time expressed as a Julian day number
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDate {
    day_number: f64,
}

impl JulianDate {
    /// Day zero of the Julian period
    pub const Y0: JulianDate = JulianDate { day_number: 0.0 };
    /// The Unix epoch, 1970-01-01T00:00:00Z
    pub const Y1970: JulianDate = JulianDate {
        day_number: UNIX_EPOCH_JD,
    };
    /// The J2000.0 epoch, 2000-01-01T12:00:00Z
    pub const Y2000: JulianDate = JulianDate { day_number: J2000 };

    /// Create a Julian date from a day number; any value is accepted
    pub fn new(day_number: f64) -> Self {
        JulianDate { day_number }
    }

    /// Create a Julian date from milliseconds since the Unix epoch
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self::Y1970 + millis as f64 / DAY_MS
    }

    /// Milliseconds since the Unix epoch, rounded to the nearest millisecond
    pub fn to_epoch_millis(&self) -> i64 {
        ((*self - Self::Y1970) * DAY_MS).round() as i64
    }

    /// Create a Julian date from a UTC datetime
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_epoch_millis(dt.timestamp_millis())
    }

    /// Convert to a UTC datetime with millisecond resolution
    ///
    /// # Errors
    ///
    /// Returns [`SunError::TimeError`] when the instant is outside the range
    /// chrono can represent.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.to_epoch_millis())
            .single()
            .ok_or_else(|| {
                SunError::TimeError(format!("{} is outside the representable range", self))
            })
    }

    /// The raw day number
    pub fn day_number(&self) -> f64 {
        self.day_number
    }

    /// Fractional part of the day number, in `[0, 1)`
    ///
    /// Since Julian days start at noon, 0.0 is noon and 0.5 is midnight.
    pub fn hour_part(&self) -> f64 {
        self.day_number - self.day_number.floor()
    }

    /// Days elapsed since J2000.0, the time argument of the solar model
    pub fn j2000(&self) -> f64 {
        self.day_number - J2000
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.day_number)
    }
}

impl From<DateTime<Utc>> for JulianDate {
    fn from(dt: DateTime<Utc>) -> Self {
        JulianDate::from_datetime(dt)
    }
}

impl Add<f64> for JulianDate {
    type Output = JulianDate;

    fn add(self, days: f64) -> Self::Output {
        JulianDate::new(self.day_number + days)
    }
}

impl AddAssign<f64> for JulianDate {
    fn add_assign(&mut self, days: f64) {
        self.day_number += days;
    }
}

impl Sub<f64> for JulianDate {
    type Output = JulianDate;

    fn sub(self, days: f64) -> Self::Output {
        JulianDate::new(self.day_number - days)
    }
}

impl SubAssign<f64> for JulianDate {
    fn sub_assign(&mut self, days: f64) {
        self.day_number -= days;
    }
}

impl Sub<JulianDate> for JulianDate {
    type Output = f64;

    /// Difference in days
    fn sub(self, other: JulianDate) -> Self::Output {
        self.day_number - other.day_number
    }
}
