//! Low-order solar ephemeris
//!
//! Pure functions of a [`JulianDate`]: mean longitude and mean anomaly grow
//! linearly with days since J2000.0, the ecliptic longitude adds a two-term
//! equation of center, and the obliquity decreases linearly.
//!
//! The ecliptic longitude here is measured from the December solstice
//! direction rather than the vernal equinox: it is close to 0° at the
//! December solstice, 90° at the March equinox and 180° at the June
//! solstice. The rotations in [`Sun::sin_theta`](super::Sun::sin_theta)
//! are built around this origin.
//!
//! No bounds are checked; any day number is accepted.

use crate::constants::{
    CENTER_1_DEG, CENTER_2_DEG, MEAN_ANOMALY_DEG, MEAN_ANOMALY_RATE_DEG, MEAN_LONGITUDE_RATE_REV,
    MEAN_LONGITUDE_REV, OBLIQUITY_DEG, OBLIQUITY_RATE_DEG, TAU,
};
use crate::coordinates::Angle;
use crate::time::JulianDate;

/// Mean longitude of the sun
pub fn mean_longitude_of_the_sun(jd: JulianDate) -> Angle {
    Angle::from_radians(TAU * (MEAN_LONGITUDE_REV + MEAN_LONGITUDE_RATE_REV * jd.j2000()))
}

/// Mean anomaly of the sun
pub fn mean_anomaly_of_the_sun(jd: JulianDate) -> Angle {
    Angle::from_degrees(MEAN_ANOMALY_DEG) + Angle::from_degrees(MEAN_ANOMALY_RATE_DEG) * jd.j2000()
}

/// Ecliptic longitude of the sun, mean longitude plus equation of center
pub fn ecliptic_longitude(jd: JulianDate) -> Angle {
    let l = mean_longitude_of_the_sun(jd);
    let g = mean_anomaly_of_the_sun(jd);
    l + Angle::from_degrees(CENTER_1_DEG) * g.sin()
        + Angle::from_degrees(CENTER_2_DEG) * (g * 2.0).sin()
}

/// Obliquity of the ecliptic
pub fn axial_tilt(jd: JulianDate) -> Angle {
    Angle::from_degrees(OBLIQUITY_DEG) - Angle::from_degrees(OBLIQUITY_RATE_DEG) * jd.j2000()
}

/// Right ascension for an ecliptic longitude and obliquity
pub fn right_ascension(ecliptic_longitude: Angle, tilt: Angle) -> Angle {
    Angle::atan2(
        tilt.cos() * ecliptic_longitude.sin(),
        ecliptic_longitude.cos(),
    )
}

/// Declination for an ecliptic longitude and obliquity
pub fn declination(ecliptic_longitude: Angle, tilt: Angle) -> Angle {
    Angle::asin(tilt.sin() * ecliptic_longitude.sin())
}

/// Angle between the sun and the celestial north pole
pub(crate) fn sun_pole_angle(jd: JulianDate) -> Angle {
    Angle::acos(axial_tilt(jd).sin() * -ecliptic_longitude(jd).cos())
}

/// Declination of the sun at `jd`
///
/// Equivalent to 90° minus the sun's angle from the celestial north pole.
pub fn solar_declination(jd: JulianDate) -> Angle {
    Angle::asin(axial_tilt(jd).sin() * -ecliptic_longitude(jd).cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDateTime;

    fn date(s: &str) -> JulianDate {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
            .unwrap()
            .and_utc()
            .into()
    }

    #[test]
    fn test_ecliptic_longitude_at_solstices_and_equinox() {
        assert_abs_diff_eq!(ecliptic_longitude(date("2000-03-22 04:51")).degrees(), 90.0, epsilon = 2.0);
        assert_abs_diff_eq!(ecliptic_longitude(date("2017-12-21 16:28")).degrees(), 0.0, epsilon = 0.5);
        assert_abs_diff_eq!(ecliptic_longitude(date("2017-06-21 04:24")).degrees(), 180.0, epsilon = 0.5);
    }

    #[test]
    fn test_values_at_j2000() {
        let epoch = JulianDate::Y2000;
        assert_abs_diff_eq!(axial_tilt(epoch).degrees(), 23.439, epsilon = 1e-12);
        assert_abs_diff_eq!(mean_anomaly_of_the_sun(epoch).degrees(), 357.528 - 360.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            mean_longitude_of_the_sun(epoch).degrees(),
            0.029_057_273_264 * 360.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_mean_anomaly_rate() {
        let a = mean_anomaly_of_the_sun(JulianDate::Y2000 + 10.0);
        let b = mean_anomaly_of_the_sun(JulianDate::Y2000 + 11.0);
        assert_abs_diff_eq!((b - a).degrees(), 0.9856003, epsilon = 1e-9);
    }

    #[test]
    fn test_axial_tilt_decreases() {
        let century = JulianDate::Y2000 + 36525.0;
        assert_abs_diff_eq!(axial_tilt(century).degrees(), 23.439 - 0.01461, epsilon = 1e-9);
        // No bounds checks on far-off dates
        assert!(axial_tilt(JulianDate::Y0).degrees().is_finite());
    }

    #[test]
    fn test_equatorial_coordinates() {
        let tilt = Angle::from_degrees(23.439);
        let quarter = Angle::from_degrees(90.0);
        assert_abs_diff_eq!(right_ascension(quarter, tilt).degrees(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(declination(quarter, tilt).degrees(), 23.439, epsilon = 1e-12);
        assert_abs_diff_eq!(right_ascension(Angle::ZERO, tilt).degrees(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(declination(Angle::ZERO, tilt).degrees(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_solar_declination() {
        assert_abs_diff_eq!(solar_declination(date("2017-12-21 16:28")).degrees(), -23.44, epsilon = 0.05);
        assert_abs_diff_eq!(solar_declination(date("2017-06-21 04:24")).degrees(), 23.44, epsilon = 0.05);
        assert_abs_diff_eq!(solar_declination(date("2017-03-20 10:29")).degrees(), 0.0, epsilon = 0.5);

        let jd = date("2017-08-01 00:00");
        assert_abs_diff_eq!(
            solar_declination(jd).degrees(),
            90.0 - sun_pole_angle(jd).degrees(),
            epsilon = 1e-9
        );
    }
}
