//! The sun as seen by one observer
//!
//! [`Sun`] turns a [`JulianDate`] into an altitude proxy (`sin_theta`), finds
//! the next instant that proxy passes a given angle in a given direction
//! (`next_passing`), and decides whether a moment lies between two such
//! events (`is_between`).
//!
//! # Searches
//!
//! `next_passing` and `culmination` march through time in fixed steps of
//! [`JD_STEP`] until they bracket the event, then refine with Newton's
//! method. The plain queries are unbounded: an angle/position combination
//! whose bracket condition is never met keeps them running. The `try_*`
//! queries apply the [`SearchLimits`] of the `Sun`, and the `*_within`
//! queries accept any [`Budget`].

pub mod astronomy;
pub mod limits;
pub mod passing;

pub use astronomy::{axial_tilt, declination, ecliptic_longitude, right_ascension};
pub use limits::SearchLimits;
pub use passing::{collapse_close, AngleAndDirection, Passing};

use crate::constants::{BAND_HIGH, BAND_LOW, DAY_MIN, HALF_PI, JD_D, JD_STEP, TAU};
use crate::coordinates::{Angle, Axis, Position, Vector3};
use crate::solver::{
    solve_diff_with_newton_within, solve_with_newton_within, Budget, Unbounded,
};
use crate::time::JulianDate;
use crate::Result;
use log::{debug, trace, warn};

/// Which extremum of the daily altitude curve to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Culmination {
    /// Highest point of the day
    Noon,
    /// Lowest point of the day
    Midnight,
}

/// The sun for an observer at a fixed position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sun {
    position: Position,
    /// Observer zenith in the sun-centred equatorial frame at hour angle zero
    v0: Vector3,
    limits: SearchLimits,
}

impl Sun {
    pub fn new(position: Position) -> Self {
        let v0 = Vector3::unit_x()
            .rot(Axis::Y, -position.lat)
            .rot(Axis::Z, position.lng);
        Sun {
            position,
            v0,
            limits: SearchLimits::default(),
        }
    }

    /// Create a sun for latitude and longitude in degrees
    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self::new(Position::from_degrees(lat, lng))
    }

    /// Create a sun for latitude and longitude in radians
    pub fn from_radians(lat: f64, lng: f64) -> Self {
        Self::new(Position::from_radians(lat, lng))
    }

    /// Use `limits` for the `try_*` queries
    pub fn with_limits(mut self, limits: SearchLimits) -> Result<Self> {
        limits.validate()?;
        self.limits = limits;
        Ok(self)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// Ecliptic longitude of the sun at `date`
    pub fn ecliptic_longitude(date: JulianDate) -> Angle {
        astronomy::ecliptic_longitude(date)
    }

    /// Mean anomaly of the sun at `date`
    pub fn mean_anomaly_of_the_sun(date: JulianDate) -> Angle {
        astronomy::mean_anomaly_of_the_sun(date)
    }

    /// Declination of the sun at `date`
    pub fn declination(date: JulianDate) -> Angle {
        astronomy::solar_declination(date)
    }

    /// Sine of the sun's altitude above the observer's horizon
    ///
    /// Compare the result against `angle.sin()` for a threshold angle, or
    /// take [`Angle::asin`] of it to get the altitude itself.
    pub fn sin_theta(&self, date: JulianDate) -> f64 {
        let l = astronomy::ecliptic_longitude(date);
        let hour_angle = Angle::from_radians(date.hour_part() * TAU);
        let v = self
            .v0
            .rot(Axis::Z, hour_angle + l)
            .rot(Axis::Y, -astronomy::axial_tilt(date))
            .rot(Axis::Z, -l);
        Vector3::unit_x().dot(&v)
    }

    fn sin_theta_at(&self, day_number: f64) -> f64 {
        self.sin_theta(JulianDate::new(day_number))
    }

    /// Lowest and highest altitude the sun reaches on the day of `date`
    ///
    /// Derived from the sun's angle to the celestial pole six hours after
    /// `date` and the observer's colatitude.
    pub fn altitude_range(&self, date: JulianDate) -> (Angle, Angle) {
        let pole_angle = astronomy::sun_pole_angle(date + 0.25);
        let colatitude = self.position.colatitude();
        let right = Angle::from_radians(HALF_PI);
        let min = right - (pole_angle + colatitude).abs();
        let max = right - (pole_angle - colatitude).abs();
        (min, max)
    }

    /// The next time after `date` the sun passes `angle`
    ///
    /// `rising` selects passings where the altitude increases; otherwise the
    /// altitude must be decreasing. Returns [`Passing::Below`] when the sun
    /// never gets up to `angle` that day and [`Passing::Above`] when it never
    /// gets down to it.
    ///
    /// There is no bound on the search; see [`Sun::try_next_passing`].
    pub fn next_passing(&self, angle: Angle, rising: bool, date: JulianDate) -> Passing {
        match self.next_passing_within(angle, rising, date, &mut Unbounded) {
            Ok(passing) => passing,
            Err(never) => match never {},
        }
    }

    /// [`Sun::next_passing`] bounded by the limits of this `Sun`
    pub fn try_next_passing(
        &self,
        angle: Angle,
        rising: bool,
        date: JulianDate,
    ) -> Result<Passing> {
        let mut budget = self.limits.budget();
        self.next_passing_within(angle, rising, date, &mut budget)
            .map_err(|err| {
                warn!("Passing search for {} from {} gave up: {}", angle, date, err);
                err
            })
    }

    /// [`Sun::next_passing`] charging `budget` for every step of the search
    pub fn next_passing_within<B: Budget>(
        &self,
        angle: Angle,
        rising: bool,
        date: JulianDate,
        budget: &mut B,
    ) -> std::result::Result<Passing, B::Error> {
        let (sun_min, sun_max) = self.altitude_range(date);
        debug!(
            "Searching {} passing of {} from {}, reachable {}..{}",
            if rising { "rising" } else { "setting" },
            angle,
            date,
            sun_min,
            sun_max
        );
        if sun_max < angle {
            return Ok(Passing::Below);
        }
        if sun_min > angle {
            return Ok(Passing::Above);
        }

        let target = angle.sin();
        let mut jd = date;
        let mut p = self.sin_theta(jd);

        if onward(rising, target, p) {
            // Already past the angle: wait for the turning point
            while onward(rising, p, self.sin_theta(jd + JD_D)) {
                budget.spend()?;
                jd += JD_STEP;
                p = self.sin_theta(jd);
            }
            while onward(rising, self.sin_theta(jd - JD_STEP), p) {
                budget.spend()?;
                jd += JD_STEP;
            }
        }

        let (min_sin, max_sin) = (sun_min.sin(), sun_max.sin());
        let band = if rising {
            min_sin + BAND_LOW * (max_sin - min_sin)
        } else {
            min_sin + BAND_HIGH * (max_sin - min_sin)
        };
        let mut prev = self.sin_theta(jd - JD_STEP);
        while !(onward(rising, prev, p) && onward(rising, band, p)) {
            budget.spend()?;
            jd += JD_STEP;
            prev = p;
            p = self.sin_theta(jd);
        }

        trace!("Bracket for {} found at {}", angle, jd);
        let day_number =
            solve_with_newton_within(|x| self.sin_theta_at(x), target, jd.day_number(), JD_D, budget)?;
        Ok(Passing::Passes(JulianDate::new(day_number)))
    }

    /// The next (`forward`) or previous solar noon or midnight around `date`
    ///
    /// There is no bound on the search; see [`Sun::try_culmination`].
    pub fn culmination(&self, kind: Culmination, forward: bool, date: JulianDate) -> JulianDate {
        match self.culmination_within(kind, forward, date, &mut Unbounded) {
            Ok(jd) => jd,
            Err(never) => match never {},
        }
    }

    /// [`Sun::culmination`] bounded by the limits of this `Sun`
    pub fn try_culmination(
        &self,
        kind: Culmination,
        forward: bool,
        date: JulianDate,
    ) -> Result<JulianDate> {
        let mut budget = self.limits.budget();
        self.culmination_within(kind, forward, date, &mut budget)
            .map_err(|err| {
                warn!("{:?} search from {} gave up: {}", kind, date, err);
                err
            })
    }

    /// [`Sun::culmination`] charging `budget` for every step of the search
    pub fn culmination_within<B: Budget>(
        &self,
        kind: Culmination,
        forward: bool,
        date: JulianDate,
        budget: &mut B,
    ) -> std::result::Result<JulianDate, B::Error> {
        let step = if forward { JD_STEP } else { -JD_STEP };
        // Slope sign seen while walking towards the extremum
        let toward = if forward == (kind == Culmination::Noon) {
            1.0
        } else {
            -1.0
        };
        let slope = |jd: JulianDate| toward * (self.sin_theta(jd + JD_D) - self.sin_theta(jd)) / JD_D;

        let mut jd = date;
        let mut dp = slope(jd);
        while dp <= 0.0 {
            budget.spend()?;
            jd += step;
            dp = slope(jd);
        }
        while dp > 0.0 {
            budget.spend()?;
            jd += step;
            dp = slope(jd);
        }

        trace!("{:?} bracket found at {}", kind, jd);
        let day_number =
            solve_diff_with_newton_within(|x| self.sin_theta_at(x), 0.0, jd.day_number(), JD_D, budget)?;
        Ok(JulianDate::new(day_number))
    }

    /// Rising and setting passings of `angle` for `days` consecutive days
    ///
    /// For each day offset `k` the next rising and then the next setting
    /// passing after `start + k` are listed, in that order, and repeats of
    /// the same event are collapsed with [`collapse_close`].
    pub fn passings(&self, angle: Angle, start: JulianDate, days: u32) -> Vec<Passing> {
        let all = self.collect_passings(start, days, |rising, date| {
            self.next_passing_within(angle, rising, date, &mut Unbounded)
        });
        match all {
            Ok(passings) => passings,
            Err(never) => match never {},
        }
    }

    /// [`Sun::passings`] with every search bounded by the limits of this `Sun`
    pub fn try_passings(&self, angle: Angle, start: JulianDate, days: u32) -> Result<Vec<Passing>> {
        self.collect_passings(start, days, |rising, date| {
            self.try_next_passing(angle, rising, date)
        })
    }

    fn collect_passings<E, F>(
        &self,
        start: JulianDate,
        days: u32,
        mut query: F,
    ) -> std::result::Result<Vec<Passing>, E>
    where
        F: FnMut(bool, JulianDate) -> std::result::Result<Passing, E>,
    {
        let mut all = Vec::with_capacity(2 * days as usize);
        for k in 0..days {
            let date = start + f64::from(k);
            all.push(query(true, date)?);
            all.push(query(false, date)?);
        }
        Ok(collapse_close(all))
    }

    /// Current altitude of the sun and whether it is rising
    pub fn angle_and_direction(&self, date: JulianDate) -> AngleAndDirection {
        let sin_t = self.sin_theta(date);
        AngleAndDirection {
            angle: Angle::asin(sin_t),
            rising: sin_t < self.sin_theta(date + JD_D),
        }
    }

    /// Whether `date` lies inside the window opened by one passing and
    /// closed by another
    ///
    /// The window opens `from_minutes` after the sun passes `from_angle` in
    /// the `from_rising` direction and closes `to_minutes` after it passes
    /// `to_angle` in the `to_rising` direction.
    #[allow(clippy::too_many_arguments)]
    pub fn is_between(
        &self,
        from_angle: Angle,
        from_rising: bool,
        from_minutes: i32,
        to_angle: Angle,
        to_rising: bool,
        to_minutes: i32,
        date: JulianDate,
    ) -> bool {
        let from = self.angle_and_direction(date - minutes_to_days(from_minutes));
        let to = self.angle_and_direction(date - minutes_to_days(to_minutes));

        match (from_rising, to_rising) {
            (true, true) => {
                if from_angle <= to_angle {
                    from.rising && from.angle >= from_angle && to.rising && to.angle <= to_angle
                } else {
                    !(from.rising && from.angle <= from_angle && to.rising && to.angle >= to_angle)
                }
            }
            (true, false) => {
                (from.rising && from.angle >= from_angle) || (!to.rising && to.angle >= to_angle)
            }
            (false, true) => {
                (!from.rising && from.angle <= from_angle) || (to.rising && to.angle <= to_angle)
            }
            (false, false) => {
                if from_angle >= to_angle {
                    !from.rising && from.angle <= from_angle && !to.rising && to.angle >= to_angle
                } else {
                    !(!from.rising
                        && from.angle >= from_angle
                        && !to.rising
                        && to.angle <= to_angle)
                }
            }
        }
    }
}

/// True when `b` lies beyond `a` in the search direction
fn onward(rising: bool, a: f64, b: f64) -> bool {
    if rising {
        a < b
    } else {
        a > b
    }
}

fn minutes_to_days(minutes: i32) -> f64 {
    f64::from(minutes) / DAY_MIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SunError;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDateTime;

    fn date(s: &str) -> JulianDate {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
            .unwrap()
            .and_utc()
            .into()
    }

    fn altitude(sun: &Sun, s: &str) -> f64 {
        Angle::asin(sun.sin_theta(date(s))).degrees()
    }

    #[test]
    fn test_reference_vector() {
        let sun = Sun::from_degrees(0.0, 0.0);
        assert_eq!(sun.v0, Vector3::unit_x());
        assert_eq!(sun.position(), Position::from_degrees(0.0, 0.0));
    }

    #[test]
    fn test_altitude_over_the_equator() {
        let sun = Sun::from_degrees(0.0, 0.0);
        assert_abs_diff_eq!(altitude(&sun, "2000-03-22 12:00"), 90.0, epsilon = 1.0);
        assert_abs_diff_eq!(altitude(&sun, "2017-12-21 12:00"), 90.0 - 23.4, epsilon = 0.1);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-21 00:00"), -90.0 + 23.4, epsilon = 0.1);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-21 06:00"), 0.0, epsilon = 0.1);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-21 12:00"), 90.0 - 23.4, epsilon = 0.1);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-21 18:00"), 0.0, epsilon = 0.1);
    }

    #[test]
    fn test_altitude_shifts_with_longitude() {
        let sun = Sun::from_degrees(0.0, 90.0);
        assert_abs_diff_eq!(altitude(&sun, "2000-03-22 06:00"), 90.0, epsilon = 1.0);
        assert_abs_diff_eq!(altitude(&sun, "2017-12-21 06:00"), 90.0 - 23.4, epsilon = 0.1);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-20 18:00"), -90.0 + 23.4, epsilon = 0.1);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-21 00:00"), 0.0, epsilon = 0.1);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-21 06:00"), 90.0 - 23.4, epsilon = 0.1);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-21 12:00"), 0.0, epsilon = 0.1);
    }

    #[test]
    fn test_altitude_over_the_north_pole() {
        let sun = Sun::from_degrees(90.0, 0.0);
        assert_abs_diff_eq!(altitude(&sun, "2000-03-22 04:53"), 0.0, epsilon = 1.0);
        assert_abs_diff_eq!(altitude(&sun, "2017-12-21 16:28"), -23.4, epsilon = 0.1);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-21 04:24"), 23.4, epsilon = 0.1);
    }

    #[test]
    fn test_altitude_over_nurnberg() {
        let sun = Sun::from_degrees(49.495, 11.073);
        assert_abs_diff_eq!(altitude(&sun, "2017-05-23 18:58"), 0.0, epsilon = 1.0);
        assert_abs_diff_eq!(altitude(&sun, "2017-05-01 12:00"), 54.0, epsilon = 1.0);
        assert_abs_diff_eq!(altitude(&sun, "2017-06-13 17:26"), 15.97, epsilon = 1.0);
    }

    #[test]
    fn test_sin_theta_stays_in_range() {
        let sun = Sun::from_degrees(-33.9, 151.2);
        let start = date("2021-01-01 00:00");
        for i in 0..500 {
            let s = sun.sin_theta(start + i as f64 * 0.37);
            assert!(s.abs() <= 1.0 + 1e-12, "sin_theta out of range: {}", s);
        }
    }

    #[test]
    fn test_altitude_range() {
        let (min, max) = Sun::from_degrees(0.0, 0.0).altitude_range(date("2000-03-22 00:51"));
        assert_abs_diff_eq!(max.degrees(), 89.2, epsilon = 0.2);
        assert_abs_diff_eq!(min.degrees(), -89.2, epsilon = 0.2);

        // Midsummer at the pole: the sun circles at a constant height
        let (min, max) = Sun::from_degrees(90.0, 0.0).altitude_range(date("2017-06-21 04:24"));
        assert_abs_diff_eq!(min.degrees(), max.degrees(), epsilon = 1e-9);
        assert_abs_diff_eq!(max.degrees(), 23.44, epsilon = 0.05);
    }

    #[test]
    fn test_declination_matches_pole_altitude() {
        let pole = Sun::from_degrees(90.0, 0.0);
        let jd = date("2017-06-21 04:24");
        assert_abs_diff_eq!(
            Sun::declination(jd).degrees(),
            Angle::asin(pole.sin_theta(jd)).degrees(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_static_helpers() {
        let jd = date("2017-12-21 16:28");
        assert_eq!(Sun::ecliptic_longitude(jd), ecliptic_longitude(jd));
        assert_eq!(
            Sun::mean_anomaly_of_the_sun(jd),
            astronomy::mean_anomaly_of_the_sun(jd)
        );
        assert_eq!(Sun::declination(jd), astronomy::solar_declination(jd));
    }

    #[test]
    fn test_angle_and_direction() {
        let sun = Sun::from_degrees(0.0, 0.0);
        let morning = sun.angle_and_direction(date("2017-03-22 09:00"));
        assert!(morning.rising);
        assert_abs_diff_eq!(morning.angle.degrees(), 45.0, epsilon = 0.5);

        let evening = sun.angle_and_direction(date("2017-03-22 20:00"));
        assert!(!evening.rising);
        assert!(evening.angle.degrees() < 0.0);
    }

    #[test]
    fn test_culminations_at_the_equator() {
        let sun = Sun::from_degrees(0.0, 0.0);
        let from = date("2017-03-22 08:00");
        let minute = 1.0 / DAY_MIN;

        let noon = sun.culmination(Culmination::Noon, true, from);
        assert_abs_diff_eq!(noon.day_number(), date("2017-03-22 12:00").day_number(), epsilon = 2.0 * minute);
        let midnight = sun.culmination(Culmination::Midnight, true, from);
        assert_abs_diff_eq!(midnight.day_number(), date("2017-03-23 00:00").day_number(), epsilon = 2.0 * minute);

        let previous_noon = sun.culmination(Culmination::Noon, false, from);
        assert_abs_diff_eq!(previous_noon.day_number(), date("2017-03-21 12:00").day_number(), epsilon = 2.0 * minute);
        let previous_midnight = sun.culmination(Culmination::Midnight, false, from);
        assert_abs_diff_eq!(previous_midnight.day_number(), date("2017-03-22 00:00").day_number(), epsilon = 2.0 * minute);

        // The noon found is a maximum of the altitude curve
        let top = sun.sin_theta(noon);
        assert!(top >= sun.sin_theta(noon + 0.01));
        assert!(top >= sun.sin_theta(noon - 0.01));
    }

    #[test]
    fn test_culmination_in_nurnberg() {
        // About 44 minutes before 12:00 UTC at 11° east
        let sun = Sun::from_degrees(49.495, 11.073);
        let noon = sun.culmination(Culmination::Noon, true, date("2017-06-13 00:00"));
        assert_abs_diff_eq!(noon.day_number(), date("2017-06-13 11:13").day_number(), epsilon = 3.0 / DAY_MIN);
    }

    #[test]
    fn test_limits_are_validated() {
        let sun = Sun::from_degrees(0.0, 0.0);
        assert!(matches!(
            sun.with_limits(SearchLimits::bounded(0)),
            Err(SunError::InvalidConfig(_))
        ));
        let bounded = sun.with_limits(SearchLimits::bounded(100)).unwrap();
        assert_eq!(bounded.limits(), SearchLimits::bounded(100));
    }

    #[test]
    fn test_bounded_culmination_gives_up() {
        let sun = Sun::from_degrees(0.0, 0.0)
            .with_limits(SearchLimits::bounded(2))
            .unwrap();
        let result = sun.try_culmination(Culmination::Noon, true, date("2017-03-22 00:00"));
        assert!(matches!(result, Err(SunError::NoConvergence { limit: 2 })));
    }

    #[test]
    fn test_minutes_to_days() {
        assert_abs_diff_eq!(minutes_to_days(1440), 1.0);
        assert_abs_diff_eq!(minutes_to_days(-360), -0.25);
    }
}
