//! Constants module for solar position calculations

use std::f64::consts::PI;

// Time constants
/// Julian day number of the Unix epoch (1970-01-01T00:00:00Z)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Milliseconds in a day
pub const DAY_MS: f64 = 86_400_000.0;
/// Minutes in a day
pub const DAY_MIN: f64 = 1_440.0;

// Angles
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
/// Degrees in a full circle
pub const DEG_MAX: f64 = 360.0;
/// Right angle in radians
pub const HALF_PI: f64 = PI / 2.0;

// Search steps
/// Coarse marching step in days (about 14.4 minutes)
pub const JD_STEP: f64 = 0.01;
/// Differentiation step in days (about 8.6 seconds)
pub const JD_D: f64 = 0.0001;
/// Two passings closer than this (in days) count as the same event
pub const PASSING_CLOSE_DAYS: f64 = 0.1;
/// Lower edge of the bracket acceptance band, as a fraction of the reachable range
pub const BAND_LOW: f64 = 0.4;
/// Upper edge of the bracket acceptance band, as a fraction of the reachable range
pub const BAND_HIGH: f64 = 0.6;

// Solar model coefficients
/// Mean longitude of the sun at J2000.0, in revolutions
pub const MEAN_LONGITUDE_REV: f64 = 0.029_057_273_264_0;
/// Daily motion of the mean longitude, in revolutions per day
pub const MEAN_LONGITUDE_RATE_REV: f64 = 0.002_737_811_911_354_48;
/// Mean anomaly of the sun at J2000.0, in degrees
pub const MEAN_ANOMALY_DEG: f64 = 357.528;
/// Daily motion of the mean anomaly, in degrees per day
pub const MEAN_ANOMALY_RATE_DEG: f64 = 0.985_600_3;
/// First equation-of-center coefficient, in degrees
pub const CENTER_1_DEG: f64 = 1.915;
/// Second equation-of-center coefficient, in degrees
pub const CENTER_2_DEG: f64 = 0.020;
/// Obliquity of the ecliptic at J2000.0, in degrees
pub const OBLIQUITY_DEG: f64 = 23.439;
/// Daily decrease of the obliquity, in degrees per day
pub const OBLIQUITY_RATE_DEG: f64 = 0.000_000_4;
