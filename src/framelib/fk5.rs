//! VSOP dynamical frame to FK5, Meeus (32.3)

use super::checked_cos;
use crate::coordinates::angle::Angle;
use crate::coordinates::Ecliptic;
use crate::time::julian_centuries;
use crate::Result;

/// Converts ecliptic coordinates from the dynamical frame to FK5
///
/// The correction is below one arcsecond away from the poles.
pub fn to_fk5(ecl: &Ecliptic, jde: f64) -> Result<Ecliptic> {
    let t = julian_centuries(jde);
    let lp = ecl.lon - Angle::from_degrees(1.397 * t + 0.00031 * t * t);
    let (slp, clp) = lp.sin_cos();
    let tan_b = ecl.lat.sin() / checked_cos(ecl.lat, "FK5")?;
    let d_lon = Angle::from_arcseconds(-0.09033 + 0.03916 * (clp + slp) * tan_b);
    let d_lat = Angle::from_arcseconds(0.03916 * (clp - slp));
    Ok(Ecliptic::new(ecl.lon + d_lon, ecl.lat + d_lat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_venus_fk5_correction() {
        // Heliocentric Venus of Meeus example 32.a
        let ecl = Ecliptic::new(Angle::from_degrees(26.11428), Angle::from_degrees(-2.62070));
        let fk5 = to_fk5(&ecl, 2448976.5).unwrap();
        assert_abs_diff_eq!((fk5.lon - ecl.lon).arcseconds(), -0.09273, epsilon = 0.00005);
        assert_abs_diff_eq!((fk5.lat - ecl.lat).arcseconds(), 0.01784, epsilon = 0.00005);
    }

    #[test]
    fn test_correction_is_sub_arcsecond() {
        for k in 0..24 {
            let ecl = Ecliptic::new(Angle::from_degrees(k as f64 * 15.0), Angle::from_degrees(5.0));
            let fk5 = to_fk5(&ecl, 2459599.349056).unwrap();
            assert!((fk5.lon - ecl.lon).arcseconds().abs() < 0.2);
            assert!((fk5.lat - ecl.lat).arcseconds().abs() < 0.06);
        }
    }
}
