//! Low-precision solar coordinates, Meeus chapter 25
//!
//! Geometric and apparent longitude of the Sun to about 0.01°, referred to
//! the mean equinox of date. Used for the Sun's topocentric longitude,
//! aberration (which needs the Sun's true longitude) and the Moon's phase.

use crate::coordinates::angle::Angle;
use crate::numeric::horner;

/// Mean anomaly of the Sun, Meeus (25.3), not reduced to one turn
pub fn mean_anomaly(t: f64) -> Angle {
    Angle::from_degrees(horner(t, &[357.52911, 35999.05029, -0.0001537]))
}

/// Eccentricity of the Earth's orbit, Meeus (25.4)
pub fn eccentricity(t: f64) -> f64 {
    horner(t, &[0.016708634, -0.000042037, -0.0000001267])
}

/// True geometric longitude ☉ and true anomaly ν of the Sun
///
/// # Arguments
/// * `t` - Julian centuries since J2000.0
///
/// # Returns
/// * `(☉, ν)`, both normalized to `[0, 2π)`
pub fn true_longitude(t: f64) -> (Angle, Angle) {
    let l0 = Angle::from_degrees(horner(t, &[280.46646, 36000.76983, 0.0003032]));
    let m = mean_anomaly(t);
    let c = Angle::from_degrees(
        horner(t, &[1.914602, -0.004817, -0.000014]) * m.sin()
            + (0.019993 - 0.000101 * t) * (m * 2.0).sin()
            + 0.000289 * (m * 3.0).sin(),
    );
    ((l0 + c).normalize(), (m + c).normalize())
}

/// Sun-Earth distance in AU, Meeus (25.5)
pub fn radius(t: f64) -> f64 {
    let (_, nu) = true_longitude(t);
    let e = eccentricity(t);
    1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos())
}

/// Apparent longitude of the Sun, corrected for nutation and aberration
///
/// Not normalized; the correction is a few thousandths of a degree.
pub fn apparent_longitude(t: f64) -> Angle {
    let omega = Angle::from_degrees(125.04 - 1934.136 * t);
    let (s, _) = true_longitude(t);
    s - Angle::from_degrees(0.00569) - Angle::from_degrees(0.00478) * omega.sin()
}
