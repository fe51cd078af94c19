//! Outcomes of an angle-passing search

use crate::constants::PASSING_CLOSE_DAYS;
use crate::coordinates::Angle;
use crate::time::JulianDate;
use serde::{Deserialize, Serialize};

/// Result of searching for the next time the sun passes an angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Passing {
    /// The sun stays above the angle for the whole day
    Above,
    /// The sun stays below the angle for the whole day
    Below,
    /// The sun passes the angle at the given instant
    Passes(JulianDate),
}

impl Passing {
    /// Whether two results describe the same event
    ///
    /// `Above` and `Below` match themselves; two passings match when they
    /// are less than 0.1 day apart.
    pub fn is_close(&self, other: &Passing) -> bool {
        match (self, other) {
            (Passing::Above, Passing::Above) => true,
            (Passing::Below, Passing::Below) => true,
            (Passing::Passes(a), Passing::Passes(b)) => (*a - *b).abs() < PASSING_CLOSE_DAYS,
            _ => false,
        }
    }

    /// True when an actual passing instant was found
    pub fn is_set(&self) -> bool {
        matches!(self, Passing::Passes(_))
    }

    /// Instant of the passing, if there is one
    pub fn julian_date(&self) -> Option<JulianDate> {
        match self {
            Passing::Passes(jd) => Some(*jd),
            _ => None,
        }
    }
}

/// Drops every element that is close to the element right before it
///
/// The comparison is against the previous input element whether or not that
/// element was kept, so a run of mutually close results collapses to its
/// first member.
pub fn collapse_close<I>(passings: I) -> Vec<Passing>
where
    I: IntoIterator<Item = Passing>,
{
    let mut kept = Vec::new();
    let mut last: Option<Passing> = None;
    for passing in passings {
        if !last.is_some_and(|prev| passing.is_close(&prev)) {
            kept.push(passing);
        }
        last = Some(passing);
    }
    kept
}

/// The sun's altitude proxy and whether it is currently rising
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleAndDirection {
    pub angle: Angle,
    pub rising: bool,
}
