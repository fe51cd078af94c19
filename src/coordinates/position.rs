//! Observer position on the Earth

use crate::coordinates::angle::Angle;
use serde::{Deserialize, Serialize};

/// Geographic position of an observer
///
/// Latitude is positive north, longitude positive east. Both are stored as
/// canonical [`Angle`]s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: Angle,
    pub lng: Angle,
}

impl Position {
    pub fn new(lat: Angle, lng: Angle) -> Self {
        Position { lat, lng }
    }

    /// Create a position from latitude and longitude in degrees
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self::new(Angle::from_degrees(lat), Angle::from_degrees(lng))
    }

    /// Create a position from latitude and longitude in radians
    pub fn from_radians(lat: f64, lng: f64) -> Self {
        Self::new(Angle::from_radians(lat), Angle::from_radians(lng))
    }

    /// Angular distance from the north pole (90° - latitude)
    pub fn colatitude(&self) -> Angle {
        Angle::from_degrees(90.0) - self.lat
    }
}
