//! Annual aberration, Meeus chapter 23
//!
//! Closed-form corrections from the Earth's orbital eccentricity, the
//! longitude of its perihelion and the constant of aberration κ. Terms in
//! the eccentricity (the E-terms) are included.

use super::checked_cos;
use crate::constants::ABERRATION_ASEC;
use crate::coordinates::angle::Angle;
use crate::coordinates::{Ecliptic, Equatorial};
use crate::numeric::horner;
use crate::nutationlib::mean_obliquity;
use crate::solarlib;
use crate::time::julian_centuries;
use crate::Result;

fn kappa() -> Angle {
    Angle::from_arcseconds(ABERRATION_ASEC)
}

/// Longitude of the perihelion of the Earth's orbit
fn perihelion(t: f64) -> Angle {
    Angle::from_degrees(horner(t, &[102.93735, 1.71946, 0.00046]))
}

/// Aberration corrections (Δλ, Δβ) for ecliptic coordinates, Meeus (23.2)
///
/// # Errors
/// Domain error at an ecliptic pole, where Δλ divides by cos β.
pub fn ecliptic_aberration(ecl: &Ecliptic, jde: f64) -> Result<(Angle, Angle)> {
    let t = julian_centuries(jde);
    let (s, _) = solarlib::true_longitude(t);
    let e = solarlib::eccentricity(t);
    let pi = perihelion(t);

    let cb = checked_cos(ecl.lat, "ecliptic aberration")?;
    let sb = ecl.lat.sin();
    let (ssl, csl) = (s - ecl.lon).sin_cos();
    let (spl, cpl) = (pi - ecl.lon).sin_cos();

    let d_lon = kappa() * ((e * cpl - csl) / cb);
    let d_lat = -(kappa() * (sb * (ssl - e * spl)));
    Ok((d_lon, d_lat))
}

/// Aberration corrections (Δα, Δδ) for equatorial coordinates, Meeus (23.3)
///
/// Uses the mean obliquity of date.
pub fn equatorial_aberration(eq: &Equatorial, jde: f64) -> Result<(Angle, Angle)> {
    let eps = mean_obliquity(jde);
    let t = julian_centuries(jde);
    let (s, _) = solarlib::true_longitude(t);
    let e = solarlib::eccentricity(t);
    let pi = perihelion(t);

    let cd = checked_cos(eq.dec, "equatorial aberration")?;
    let (sa, ca) = eq.ra.sin_cos();
    let sd = eq.dec.sin();
    let (ss, cs) = s.sin_cos();
    let (sp, cp) = pi.sin_cos();
    let ce = eps.cos();
    let te = eps.tan();

    let q1 = ca * ce;
    let d_ra = kappa() * ((e * (q1 * cp + sa * sp) - (q1 * cs + sa * ss)) / cd);
    let q2 = ce * (te * cd - sa * sd);
    let q3 = ca * sd;
    let d_dec = kappa() * (e * (cp * q2 + sp * q3) - (cs * q2 + ss * q3));
    Ok((d_ra, d_dec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar_gregorian_to_jd;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_theta_persei_aberration() {
        // Meeus example 23.a
        let jd = calendar_gregorian_to_jd(2028, 11, 13.19);
        let eq = Equatorial::new(
            Angle::from_hms(2, 46, 11.331),
            Angle::from_sexagesimal(true, 49, 20, 54.54),
        );
        let (d_ra, d_dec) = equatorial_aberration(&eq, jd).unwrap();
        assert_abs_diff_eq!(d_ra.arcseconds(), 30.045, epsilon = 0.001);
        assert_abs_diff_eq!(d_dec.arcseconds(), 6.697, epsilon = 0.001);
    }

    #[test]
    fn test_ecliptic_aberration_magnitude() {
        // On the ecliptic the correction never exceeds κ(1 + e)
        let jd = 2448976.5;
        for k in 0..36 {
            let ecl = Ecliptic::new(Angle::from_degrees(k as f64 * 10.0), Angle::ZERO);
            let (d_lon, d_lat) = ecliptic_aberration(&ecl, jd).unwrap();
            assert!(d_lon.arcseconds().abs() <= 20.49552 * 1.02);
            assert_abs_diff_eq!(d_lat.arcseconds(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ecliptic_aberration_rejects_pole() {
        let ecl = Ecliptic::new(Angle::ZERO, Angle::from_degrees(90.0));
        assert!(ecliptic_aberration(&ecl, 2448976.5).is_err());
    }
}
