//! # Angle Representation Module
//!
//! This module provides a canonical angle representation used by every
//! solar calculation in the crate.
//!
//! ## Canonical Range
//!
//! An `Angle` always holds its value in radians, normalized to the half-open
//! interval `(-π, π]`. The only way to obtain an `Angle` is through a
//! normalizing factory (`from_radians`, `from_degrees`, or the inverse
//! trigonometric constructors), so two angles that differ by whole turns
//! compare equal.
//!
//! ## Arithmetic
//!
//! Addition, subtraction, negation and scaling by an `f64` all re-normalize
//! their result, so the canonical range is preserved through any chain of
//! operations.
//!
//! ## Trigonometry
//!
//! `sin`, `cos` and `tan` are computed on demand from the stored radian
//! value. The type carries no cache and is freely `Copy`.
//!
//! ## Examples
//!
//! ```rust
//! use sunpass::coordinates::angle::Angle;
//!
//! let right = Angle::from_degrees(90.0);
//! assert_eq!(right, Angle::from_radians(std::f64::consts::PI / 2.0));
//!
//! // Three quarter turns wrap around to a negative quarter turn
//! let wrapped = right + right + right;
//! assert!((wrapped.degrees() + 90.0).abs() < 1e-12);
//! ```

use crate::constants::{DEG_MAX, TAU};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Normalizes a radian value into `(-π, π]`
fn normalize(radians: f64) -> f64 {
    // rem_euclid may round a tiny negative up to TAU
    let r = PI - (PI - radians).rem_euclid(TAU);
    if r <= -PI {
        PI
    } else {
        r
    }
}

/// An angular measurement in canonical form
///
/// The value is stored in radians within `(-π, π]`. Equality and ordering
/// compare the radian value directly.
///
/// # Serialization
///
/// Serializes as its radian value. Deserialization passes the value through
/// [`Angle::from_radians`], so out-of-range input is normalized rather than
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle
    pub const ZERO: Angle = Angle { radians: 0.0 };

    /// Creates an angle from a value in radians
    ///
    /// Any finite input is accepted and normalized into `(-π, π]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sunpass::coordinates::angle::Angle;
    /// use std::f64::consts::PI;
    ///
    /// assert_eq!(Angle::from_radians(PI).radians(), PI);
    /// assert_eq!(Angle::from_radians(-PI).radians(), PI);
    /// assert!((Angle::from_radians(4.0).radians() - (4.0 - 2.0 * PI)).abs() < 1e-15);
    /// ```
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            radians: normalize(radians),
        }
    }

    /// Creates an angle from a value in degrees
    ///
    /// The value is converted to radians and normalized, so the result lies
    /// in `(-180°, 180°]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sunpass::coordinates::angle::Angle;
    ///
    /// assert!((Angle::from_degrees(270.0).degrees() + 90.0).abs() < 1e-12);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees / DEG_MAX * TAU)
    }

    /// Arcsine of `value` as a canonical angle
    pub fn asin(value: f64) -> Self {
        Self::from_radians(value.asin())
    }

    /// Arccosine of `value` as a canonical angle
    pub fn acos(value: f64) -> Self {
        Self::from_radians(value.acos())
    }

    /// Arctangent of `value` as a canonical angle
    pub fn atan(value: f64) -> Self {
        Self::from_radians(value.atan())
    }

    /// Four-quadrant arctangent of `y / x` as a canonical angle
    pub fn atan2(y: f64, x: f64) -> Self {
        Self::from_radians(y.atan2(x))
    }

    /// Returns the angle value in radians, within `(-π, π]`
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns the angle value in degrees, within `(-180°, 180°]`
    pub fn degrees(&self) -> f64 {
        self.radians * DEG_MAX / TAU
    }

    /// Sine of the angle
    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    /// Cosine of the angle
    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    /// Tangent of the angle
    ///
    /// Where the cosine is exactly zero the result is an infinity carrying
    /// the sign of the sine.
    pub fn tan(&self) -> f64 {
        let (sin, cos) = self.radians.sin_cos();
        if cos == 0.0 {
            if sin < 0.0 {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else {
            sin / cos
        }
    }

    /// True for angles in `[0, π]`
    pub fn is_positive(&self) -> bool {
        self.radians >= 0.0
    }

    /// Reflects negative angles to their positive counterpart
    ///
    /// `-π` cannot occur, so the result always lies in `[0, π]`.
    pub fn abs(&self) -> Self {
        if self.is_positive() {
            *self
        } else {
            -*self
        }
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::ZERO
    }
}

impl From<f64> for Angle {
    /// Interprets the value as radians
    fn from(radians: f64) -> Self {
        Angle::from_radians(radians)
    }
}

impl From<Angle> for f64 {
    fn from(angle: Angle) -> Self {
        angle.radians
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Angle::from_radians(-self.radians)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Self::Output {
        Angle::from_radians(self.radians + other.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Self::Output {
        Angle::from_radians(self.radians - other.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, factor: f64) -> Self::Output {
        Angle::from_radians(self.radians * factor)
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    fn div(self, divisor: f64) -> Self::Output {
        Angle::from_radians(self.radians / divisor)
    }
}
