//! Nutation and the obliquity of the ecliptic
//!
//! Implements the 1980 IAU theory as tabulated by Meeus (chapter 22): 63
//! luni-solar terms giving nutation in longitude (Δψ) and in obliquity
//! (Δε), terms below 0.0003″ neglected. Mean obliquity ε₀ is the IAU
//! polynomial (22.2), accurate to 1″ between the years 1000 and 3000.

use crate::coordinates::angle::Angle;
use crate::numeric::horner;
use crate::time::julian_centuries;

/// Table coefficients are in units of 0.0001″
const TABLE_UNIT_ASEC: f64 = 1e-4;

/// Fundamental arguments in degrees as polynomials of T
///
/// Each row: [constant, T, T², T³]
#[rustfmt::skip]
const FUNDAMENTAL_ARGS: [[f64; 4]; 5] = [
    // Mean elongation of the Moon from the Sun (D)
    [297.85036, 445267.11148, -0.0019142, 1.0 / 189474.0],
    // Mean anomaly of the Sun (M)
    [357.52772, 35999.050340, -0.0001603, -1.0 / 300000.0],
    // Mean anomaly of the Moon (M′)
    [134.96298, 477198.867398, 0.0086972, 1.0 / 5620.0],
    // Moon's argument of latitude (F)
    [93.27191, 483202.017538, -0.0036825, 1.0 / 327270.0],
    // Longitude of the ascending node of the Moon's mean orbit (Ω)
    [125.04452, -1934.136261, 0.0020708, 1.0 / 450000.0],
];

/// Nutation in longitude and obliquity for a Julian ephemeris day
///
/// Terms are accumulated from the last (smallest) row to the first.
///
/// # Returns
/// * `(Δψ, Δε)`
pub fn nutation(jde: f64) -> (Angle, Angle) {
    let t = julian_centuries(jde);
    let mut args = [0.0f64; 5];
    for (arg, coeffs) in args.iter_mut().zip(FUNDAMENTAL_ARGS.iter()) {
        *arg = horner(t, coeffs).to_radians();
    }

    let mut d_psi = 0.0;
    let mut d_eps = 0.0;
    for (multipliers, coeffs) in NUTATION_TABLE.iter().rev() {
        let arg: f64 = multipliers
            .iter()
            .zip(args.iter())
            .map(|(&k, &a)| f64::from(k) * a)
            .sum();
        let (s, c) = arg.sin_cos();
        d_psi += s * (coeffs[0] + coeffs[1] * t);
        d_eps += c * (coeffs[2] + coeffs[3] * t);
    }
    log::trace!("nutation at JDE {}: Δψ={}″ Δε={}″", jde, d_psi * TABLE_UNIT_ASEC, d_eps * TABLE_UNIT_ASEC);

    (
        Angle::from_arcseconds(d_psi * TABLE_UNIT_ASEC),
        Angle::from_arcseconds(d_eps * TABLE_UNIT_ASEC),
    )
}

/// Mean obliquity of the ecliptic ε₀, Meeus (22.2)
pub fn mean_obliquity(jde: f64) -> Angle {
    let eps0_asec = 23.0 * 3600.0 + 26.0 * 60.0 + 21.448;
    Angle::from_arcseconds(horner(
        julian_centuries(jde),
        &[eps0_asec, -46.815, -0.00059, 0.001813],
    ))
}

/// True obliquity ε = ε₀ + Δε
pub fn true_obliquity(d_eps: Angle, jde: f64) -> Angle {
    mean_obliquity(jde) + d_eps
}

/// Nutation in right ascension, the equation of the equinoxes
pub fn nutation_in_ra(d_psi: Angle, d_eps: Angle, jde: f64) -> Angle {
    d_psi * true_obliquity(d_eps, jde).cos()
}

/// Table 22.A: multipliers of (D, M, M′, F, Ω), then
/// [Δψ constant, Δψ·T, Δε constant, Δε·T] in 0.0001″
#[rustfmt::skip]
const NUTATION_TABLE: [([i8; 5], [f64; 4]); 63] = [
    ([  0,   0,   0,   0,   1], [-171996.0, -174.2, 92025.0, 8.9]),
    ([ -2,   0,   0,   2,   2], [-13187.0, -1.6, 5736.0, -3.1]),
    ([  0,   0,   0,   2,   2], [-2274.0, -0.2, 977.0, -0.5]),
    ([  0,   0,   0,   0,   2], [2062.0, 0.2, -895.0, 0.5]),
    ([  0,   1,   0,   0,   0], [1426.0, -3.4, 54.0, -0.1]),
    ([  0,   0,   1,   0,   0], [712.0, 0.1, -7.0, 0.0]),
    ([ -2,   1,   0,   2,   2], [-517.0, 1.2, 224.0, -0.6]),
    ([  0,   0,   0,   2,   1], [-386.0, -0.4, 200.0, 0.0]),
    ([  0,   0,   1,   2,   2], [-301.0, 0.0, 129.0, -0.1]),
    ([ -2,  -1,   0,   2,   2], [217.0, -0.5, -95.0, 0.3]),
    ([ -2,   0,   1,   0,   0], [-158.0, 0.0, 0.0, 0.0]),
    ([ -2,   0,   0,   2,   1], [129.0, 0.1, -70.0, 0.0]),
    ([  0,   0,  -1,   2,   2], [123.0, 0.0, -53.0, 0.0]),
    ([  2,   0,   0,   0,   0], [63.0, 0.0, 0.0, 0.0]),
    ([  0,   0,   1,   0,   1], [63.0, 0.1, -33.0, 0.0]),
    ([  2,   0,  -1,   2,   2], [-59.0, 0.0, 26.0, 0.0]),
    ([  0,   0,  -1,   0,   1], [-58.0, -0.1, 32.0, 0.0]),
    ([  0,   0,   1,   2,   1], [-51.0, 0.0, 27.0, 0.0]),
    ([ -2,   0,   2,   0,   0], [48.0, 0.0, 0.0, 0.0]),
    ([  0,   0,  -2,   2,   1], [46.0, 0.0, -24.0, 0.0]),
    ([  2,   0,   0,   2,   2], [-38.0, 0.0, 16.0, 0.0]),
    ([  0,   0,   2,   2,   2], [-31.0, 0.0, 13.0, 0.0]),
    ([  0,   0,   2,   0,   0], [29.0, 0.0, 0.0, 0.0]),
    ([ -2,   0,   1,   2,   2], [29.0, 0.0, -12.0, 0.0]),
    ([  0,   0,   0,   2,   0], [26.0, 0.0, 0.0, 0.0]),
    ([ -2,   0,   0,   2,   0], [-22.0, 0.0, 0.0, 0.0]),
    ([  0,   0,  -1,   2,   1], [21.0, 0.0, -10.0, 0.0]),
    ([  0,   2,   0,   0,   0], [17.0, -0.1, 0.0, 0.0]),
    ([  2,   0,  -1,   0,   1], [16.0, 0.0, -8.0, 0.0]),
    ([ -2,   2,   0,   2,   2], [-16.0, 0.1, 7.0, 0.0]),
    ([  0,   1,   0,   0,   1], [-15.0, 0.0, 9.0, 0.0]),
    ([ -2,   0,   1,   0,   1], [-13.0, 0.0, 7.0, 0.0]),
    ([  0,  -1,   0,   0,   1], [-12.0, 0.0, 6.0, 0.0]),
    ([  0,   0,   2,  -2,   0], [11.0, 0.0, 0.0, 0.0]),
    ([  2,   0,  -1,   2,   1], [-10.0, 0.0, 5.0, 0.0]),
    ([  2,   0,   1,   2,   2], [-8.0, 0.0, 3.0, 0.0]),
    ([  0,   1,   0,   2,   2], [7.0, 0.0, -3.0, 0.0]),
    ([ -2,   1,   1,   0,   0], [-7.0, 0.0, 0.0, 0.0]),
    ([  0,  -1,   0,   2,   2], [-7.0, 0.0, 3.0, 0.0]),
    ([  2,   0,   0,   2,   1], [-7.0, 0.0, 3.0, 0.0]),
    ([  2,   0,   1,   0,   0], [6.0, 0.0, 0.0, 0.0]),
    ([ -2,   0,   2,   2,   2], [6.0, 0.0, -3.0, 0.0]),
    ([ -2,   0,   1,   2,   1], [6.0, 0.0, -3.0, 0.0]),
    ([  2,   0,  -2,   0,   1], [-6.0, 0.0, 3.0, 0.0]),
    ([  2,   0,   0,   0,   1], [-6.0, 0.0, 3.0, 0.0]),
    ([  0,  -1,   1,   0,   0], [5.0, 0.0, 0.0, 0.0]),
    ([ -2,  -1,   0,   2,   1], [-5.0, 0.0, 3.0, 0.0]),
    ([ -2,   0,   0,   0,   1], [-5.0, 0.0, 3.0, 0.0]),
    ([  0,   0,   2,   2,   1], [-5.0, 0.0, 3.0, 0.0]),
    ([ -2,   0,   2,   0,   1], [4.0, 0.0, 0.0, 0.0]),
    ([ -2,   1,   0,   2,   1], [4.0, 0.0, 0.0, 0.0]),
    ([  0,   0,   1,  -2,   0], [4.0, 0.0, 0.0, 0.0]),
    ([ -1,   0,   1,   0,   0], [-4.0, 0.0, 0.0, 0.0]),
    ([ -2,   1,   0,   0,   0], [-4.0, 0.0, 0.0, 0.0]),
    ([  1,   0,   0,   0,   0], [-4.0, 0.0, 0.0, 0.0]),
    ([  0,   0,   1,   2,   0], [3.0, 0.0, 0.0, 0.0]),
    ([  0,   0,  -2,   2,   2], [-3.0, 0.0, 0.0, 0.0]),
    ([ -1,  -1,   1,   0,   0], [-3.0, 0.0, 0.0, 0.0]),
    ([  0,   1,   1,   0,   0], [-3.0, 0.0, 0.0, 0.0]),
    ([  0,  -1,   1,   2,   2], [-3.0, 0.0, 0.0, 0.0]),
    ([  2,  -1,  -1,   2,   2], [-3.0, 0.0, 0.0, 0.0]),
    ([  0,   0,   3,   2,   2], [-3.0, 0.0, 0.0, 0.0]),
    ([  2,  -1,   0,   2,   2], [-3.0, 0.0, 0.0, 0.0]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar_gregorian_to_jd;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nutation_1987_april_10() {
        // Meeus example 22.a
        let jd = calendar_gregorian_to_jd(1987, 4, 10.0);
        assert_eq!(jd, 2446895.5);

        let (d_psi, d_eps) = nutation(jd);
        assert_abs_diff_eq!(d_psi.arcseconds(), -3.788, epsilon = 0.001);
        assert_abs_diff_eq!(d_eps.arcseconds(), 9.443, epsilon = 0.001);

        let eps0 = mean_obliquity(jd);
        let expected = Angle::from_sexagesimal(true, 23, 26, 27.407);
        assert_abs_diff_eq!(eps0.arcseconds(), expected.arcseconds(), epsilon = 0.001);

        let eps = true_obliquity(d_eps, jd);
        let expected = Angle::from_sexagesimal(true, 23, 26, 36.850);
        assert_abs_diff_eq!(eps.arcseconds(), expected.arcseconds(), epsilon = 0.001);
    }

    #[test]
    fn test_mean_obliquity_at_j2000() {
        let eps0 = mean_obliquity(crate::constants::J2000);
        assert_abs_diff_eq!(eps0.arcseconds(), 84381.448, epsilon = 1e-9);
    }

    #[test]
    fn test_nutation_magnitude_bounds() {
        // Principal term amplitudes bound the sums
        for offset in 0..200 {
            let jd = 2451545.0 + offset as f64 * 97.3;
            let (d_psi, d_eps) = nutation(jd);
            assert!(d_psi.arcseconds().abs() < 20.0);
            assert!(d_eps.arcseconds().abs() < 11.0);
        }
    }

    #[test]
    fn test_nutation_in_ra() {
        let jd = 2446895.5;
        let (d_psi, d_eps) = nutation(jd);
        let eq = nutation_in_ra(d_psi, d_eps, jd);
        // Meeus example 12.a: −0.2317 s of time
        assert_abs_diff_eq!(eq.time_seconds(), -0.2317, epsilon = 0.0001);
    }
}
