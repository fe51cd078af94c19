//! Sunpass: sun altitude and horizon-passing times for a fixed observer
//!
//! This crate models the apparent position of the sun with a low-order
//! ephemeris and answers three questions for an observer at a given
//! latitude and longitude:
//!
//! - how high is the sun at a given instant ([`Sun::sin_theta`]),
//! - when will it next pass a given altitude while rising or setting
//!   ([`Sun::next_passing`]),
//! - does an instant lie in the window between two such passings
//!   ([`Sun::is_between`]).
//!
//! ```rust
//! use sunpass::{Angle, JulianDate, Passing, Sun};
//!
//! let sun = Sun::from_degrees(0.0, 0.0);
//! let start = JulianDate::from_epoch_millis(953_686_260_000); // 2000-03-22 00:51 UTC
//! match sun.next_passing(Angle::from_degrees(0.0), true, start) {
//!     Passing::Passes(jd) => assert!((jd - start - 0.22).abs() < 0.01),
//!     other => panic!("expected a sunrise, got {:?}", other),
//! }
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod solver;
pub mod sun;
pub mod time;

// Re-export commonly used types
pub use coordinates::{Angle, Axis, Position, Vector3};
pub use sun::{AngleAndDirection, Culmination, Passing, SearchLimits, Sun};
pub use time::JulianDate;

/// Main error type for the sunpass library
#[derive(Debug, Error)]
pub enum SunError {
    #[error("Expected 3 vector components, got {0}")]
    InvalidDimension(usize),

    #[error("Axis index out of range: {0}")]
    InvalidAxis(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("Search did not converge within {limit} iterations")]
    NoConvergence { limit: u32 },

    #[error("Time error: {0}")]
    TimeError(String),
}

/// Result type for sunpass operations
pub type Result<T> = std::result::Result<T, SunError>;
