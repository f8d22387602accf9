//! Almanac helpers built on the position pipeline
//!
//! The Moon's phase as an elongation in whole degrees, the separation of two
//! longitudes, sunrise and sunset from the sunrise equation, and the
//! obliquity and local sidereal time an observer needs for parallax.

use std::f64::consts::TAU;

use crate::coordinates::angle::Angle;
use crate::earthlib::apparent_sidereal_time;
use crate::moonlib;
use crate::nutationlib::true_obliquity;
use crate::solarlib;
use crate::time::julian_centuries;
use crate::toposlib::ObserverLocation;
use crate::{EphemerisError, Result};

/// Human-readable moon phase names indexed by quarter 0..3
pub const MOON_PHASE_NAMES: &[&str] = &["New Moon", "First Quarter", "Full Moon", "Last Quarter"];

/// Elongation of the Moon from the Sun in whole degrees, `0..360`
///
/// 0 is new moon, 90 first quarter, 180 full moon. Uses the geometric lunar
/// longitude and the Sun's apparent longitude.
///
/// # Example
///
/// ```rust
/// use meeus_ephem::almanac::moon_phase;
///
/// // 2022-02-16, two days before full moon
/// assert_eq!(moon_phase(2459627.340277778), 182);
/// ```
pub fn moon_phase(jd: f64) -> u32 {
    let t = julian_centuries(jd);
    let moon = moonlib::position(jd).lon.degrees();
    let sun = solarlib::apparent_longitude(t).degrees();
    let phase = (moon - sun).round() as i64;
    phase.rem_euclid(360) as u32
}

/// Index into [`MOON_PHASE_NAMES`] of the quarter nearest a phase angle
pub fn moon_quarter(phase_degrees: u32) -> usize {
    (((phase_degrees + 45) % 360) / 90) as usize
}

/// Separation of two longitudes
///
/// A pair straddling 0°, one in `[0°, 90°)` and the other in
/// `[270°, 360°)`, is measured across the wrap; any other pair is
/// measured directly.
pub fn longitude_difference(a: Angle, b: Angle) -> Angle {
    let (a, b) = (a.normalize().degrees(), b.normalize().degrees());
    let first = |x: f64| x < 90.0;
    let fourth = |x: f64| x >= 270.0;
    let degrees = if first(a) && fourth(b) {
        (360.0 - b) + a
    } else if fourth(a) && first(b) {
        (360.0 - a) + b
    } else {
        (a - b).abs()
    };
    Angle::from_degrees(degrees)
}

/// Sunrise and sunset for the day containing `jd`, from the sunrise equation
///
/// # Arguments
/// * `jd` - any Julian day on the wanted date
/// * `latitude` - observer latitude, positive north
/// * `longitude` - observer longitude, positive east
///
/// # Returns
/// `(rise_jd, set_jd)` in UT, good to a few minutes
///
/// # Errors
///
/// [`EphemerisError::DomainError`] during polar day or polar night, when the
/// Sun does not cross the horizon.
pub fn sunrise_sunset(jd: f64, latitude: Angle, longitude: Angle) -> Result<(f64, f64)> {
    // Mean solar noon, in days since J2000.0
    let n = (jd - 2_451_545.0 + 0.0008).ceil();
    let noon = n - longitude.radians() / TAU;

    let m = (0.01720196999454 * noon + 6.2400599667).rem_euclid(TAU);
    let m2 = (2.0 * m).rem_euclid(TAU);
    let m3 = (3.0 * m).rem_euclid(TAU);
    // Equation of the centre in degrees
    let c = 1.9148 * m.sin() + 0.02 * m2.sin() + 0.0003 * m3.sin();
    let lambda = Angle::from_degrees(m.to_degrees() + c + 180.0 + 102.9372).normalize();
    let l2 = (lambda * 2.0).normalize();

    let transit = 2_451_545.0 + noon + 0.0053 * m.sin() - 0.0069 * l2.sin();
    // sin(23.44°)
    let dec = (lambda.sin() * 0.39778850739795).asin();

    // cos(90°50′) for refraction and the solar semi-diameter
    let (sp, cp) = latitude.sin_cos();
    let cos_ha = (-0.014485726138606 - sp * dec.sin()) / (cp * dec.cos());
    if !(-1.0..=1.0).contains(&cos_ha) {
        return Err(EphemerisError::DomainError(format!(
            "the Sun does not rise or set at latitude {} on JD {}",
            latitude, jd
        )));
    }
    let half_day = cos_ha.acos() / TAU;
    log::debug!("solar transit {} half-day {}", transit, half_day);
    Ok((transit - half_day, transit + half_day))
}

/// Obliquity and local sidereal time for one instant and place
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyFrame {
    /// True obliquity of the ecliptic ε₀ + Δε
    pub obliquity: Angle,
    /// Apparent local sidereal time, in `[0, 2π)`
    pub local_sidereal_time: Angle,
}

impl SkyFrame {
    /// # Arguments
    /// * `jd` - Julian day
    /// * `observer` - site whose sidereal time is wanted
    /// * `d_psi`, `d_eps` - nutation, both zero to use mean values
    pub fn new(jd: f64, observer: &ObserverLocation, d_psi: Angle, d_eps: Angle) -> Self {
        let greenwich = apparent_sidereal_time(jd, d_psi, d_eps);
        SkyFrame {
            obliquity: true_obliquity(d_eps, jd),
            local_sidereal_time: observer.local_sidereal_time(greenwich),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutationlib::{mean_obliquity, nutation};
    use crate::time::{calendar_gregorian_to_jd, fractional_day};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case(2459627.340277778, 182)]
    #[case(2459620.340277778, 104)]
    #[case(2459613.340277778, 21)]
    fn test_moon_phase(#[case] jd: f64, #[case] expected: u32) {
        assert_eq!(moon_phase(jd), expected);
    }

    #[test]
    fn test_moon_quarter() {
        assert_eq!(MOON_PHASE_NAMES[moon_quarter(182)], "Full Moon");
        assert_eq!(MOON_PHASE_NAMES[moon_quarter(104)], "First Quarter");
        assert_eq!(MOON_PHASE_NAMES[moon_quarter(21)], "New Moon");
        assert_eq!(MOON_PHASE_NAMES[moon_quarter(350)], "New Moon");
        assert_eq!(MOON_PHASE_NAMES[moon_quarter(275)], "Last Quarter");
    }

    #[rstest]
    #[case(10.0, 350.0, 20.0)]
    #[case(350.0, 10.0, 20.0)]
    #[case(100.0, 40.0, 60.0)]
    #[case(0.0, 270.0, 90.0)]
    #[case(200.0, 200.0, 0.0)]
    #[case(-10.0, 10.0, 20.0)]
    fn test_longitude_difference(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        let d = longitude_difference(Angle::from_degrees(a), Angle::from_degrees(b));
        assert_abs_diff_eq!(d.degrees(), expected, epsilon = 1e-9);
    }

    #[rstest]
    #[case(42.0028761, -71.5147839, (6, 45, 22.0, -5.0), (17, 15, 8.0, -5.0))]
    #[case(-42.00287, -71.514784, (7, 4, 0.0, -3.0), (20, 56, 0.0, -3.0))]
    #[case(-42.00287, 71.514784, (5, 31, 0.0, 5.0), (19, 24, 0.0, 5.0))]
    fn test_sunrise_sunset_within_minutes(
        #[case] lat: f64,
        #[case] lon: f64,
        #[case] rise: (u32, u32, f64, f64),
        #[case] set: (u32, u32, f64, f64),
    ) {
        let jd = calendar_gregorian_to_jd(2022, 2, 11.0);
        let (r, s) = sunrise_sunset(jd, Angle::from_degrees(lat), Angle::from_degrees(lon)).unwrap();

        let expected_rise = calendar_gregorian_to_jd(2022, 2, fractional_day(11, rise.0, rise.1, rise.2, rise.3));
        let expected_set = calendar_gregorian_to_jd(2022, 2, fractional_day(11, set.0, set.1, set.2, set.3));
        let three_minutes = 3.0 / 1440.0;
        assert_abs_diff_eq!(r, expected_rise, epsilon = three_minutes);
        assert_abs_diff_eq!(s, expected_set, epsilon = three_minutes);
    }

    #[test]
    fn test_polar_night_is_domain_error() {
        let jd = calendar_gregorian_to_jd(2022, 12, 21.0);
        let err = sunrise_sunset(jd, Angle::from_degrees(80.0), Angle::ZERO).unwrap_err();
        assert!(matches!(err, EphemerisError::DomainError(_)));
    }

    #[test]
    fn test_sky_frame() {
        let jd = calendar_gregorian_to_jd(1987, 4, 10.0);
        let greenwich = ObserverLocation::new(Angle::ZERO, Angle::ZERO, 0.0);

        let mean = SkyFrame::new(jd, &greenwich, Angle::ZERO, Angle::ZERO);
        assert_eq!(mean.obliquity, mean_obliquity(jd));
        assert_abs_diff_eq!(
            mean.local_sidereal_time.time_seconds(),
            Angle::from_hms(13, 10, 46.3668).time_seconds(),
            epsilon = 1e-3
        );

        let (d_psi, d_eps) = nutation(jd);
        let apparent = SkyFrame::new(jd, &greenwich, d_psi, d_eps);
        assert_abs_diff_eq!(
            apparent.obliquity.degrees(),
            Angle::from_sexagesimal(true, 23, 26, 36.850).degrees(),
            epsilon = 1e-5
        );

        // An observer 15° west sees sidereal time one hour earlier
        let west = ObserverLocation::new(Angle::ZERO, Angle::from_degrees(15.0), 0.0);
        let shifted = SkyFrame::new(jd, &west, d_psi, d_eps);
        let diff = (apparent.local_sidereal_time - shifted.local_sidereal_time).normalize();
        assert_abs_diff_eq!(diff.hours(), 1.0, epsilon = 1e-9);
    }
}
