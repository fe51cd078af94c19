//! # Cartesian Vector Module
//!
//! This module provides the three-component vector used to carry the
//! observer's zenith direction through the chain of frame rotations that
//! yields the sun's altitude proxy.
//!
//! ## Rotation Convention
//!
//! `rot(axis, angle)` performs an active, right-handed rotation about one of
//! the principal axes. For axis `k` with `a = (k + 1) % 3` and
//! `b = (k + 2) % 3`:
//!
//! - `v'[a] = cos·v[a] − sin·v[b]`
//! - `v'[b] = sin·v[a] + cos·v[b]`
//! - `v'[k] = v[k]`
//!
//! ## Examples
//!
//! ```rust
//! use sunpass::coordinates::angle::Angle;
//! use sunpass::coordinates::cartesian::{Axis, Vector3};
//!
//! // A quarter turn about z takes x onto y
//! let v = Vector3::unit_x().rot(Axis::Z, Angle::from_degrees(90.0));
//! assert!(v.x().abs() < 1e-15);
//! assert!((v.y() - 1.0).abs() < 1e-15);
//! ```

use crate::coordinates::angle::Angle;
use crate::{Result, SunError};
use nalgebra::Vector3 as NVector3;
use std::convert::TryFrom;
use std::ops::Index;

/// A principal axis of a Cartesian frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of the axis (0, 1 or 2)
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = SunError;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            other => Err(SunError::InvalidAxis(other)),
        }
    }
}

/// Three-dimensional Cartesian vector
///
/// Immutable; every operation returns a new vector. Backed by an
/// `nalgebra::Vector3<f64>` so it converts cheaply into the linear algebra
/// types of that crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    v: NVector3<f64>,
}

impl Vector3 {
    /// Creates a vector from its three components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 {
            v: NVector3::new(x, y, z),
        }
    }

    /// The zero vector
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Unit vector along the x-axis
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Creates a vector from a slice, which must hold exactly three values
    ///
    /// # Errors
    ///
    /// Returns [`SunError::InvalidDimension`] with the offending length
    /// when the slice does not have three elements.
    pub fn from_slice(components: &[f64]) -> Result<Self> {
        match components {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(SunError::InvalidDimension(components.len())),
        }
    }

    /// Creates a vector from an nalgebra Vector3
    pub fn from_vector3(v: NVector3<f64>) -> Self {
        Vector3 { v }
    }

    /// Converts to an nalgebra Vector3
    pub fn to_vector3(&self) -> NVector3<f64> {
        self.v
    }

    pub fn x(&self) -> f64 {
        self.v.x
    }

    pub fn y(&self) -> f64 {
        self.v.y
    }

    pub fn z(&self) -> f64 {
        self.v.z
    }

    /// Dot product, the sum of pairwise component products
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.v.dot(&other.v)
    }

    /// Rotates the vector about a principal axis
    ///
    /// The component along `axis` is kept; the other two are rotated by
    /// `angle` using the angle's sine and cosine.
    pub fn rot(&self, axis: Axis, angle: Angle) -> Vector3 {
        let k = axis.index();
        let a = (k + 1) % 3;
        let b = (k + 2) % 3;
        let (sin, cos) = (angle.sin(), angle.cos());

        let mut rotated = self.v;
        rotated[a] = cos * self.v[a] - sin * self.v[b];
        rotated[b] = sin * self.v[a] + cos * self.v[b];
        Vector3 { v: rotated }
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.v[index]
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = SunError;

    fn try_from(components: &[f64]) -> Result<Self> {
        Self::from_slice(components)
    }
}

impl TryFrom<Vec<f64>> for Vector3 {
    type Error = SunError;

    fn try_from(components: Vec<f64>) -> Result<Self> {
        Self::from_slice(&components)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(components: [f64; 3]) -> Self {
        Self::new(components[0], components[1], components[2])
    }
}
