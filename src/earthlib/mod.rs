//! Earth figure and rotation
//!
//! The reference ellipsoid with its parallax constants ρ·sin φ′ and
//! ρ·cos φ′ (Meeus chapter 11), and Greenwich mean, apparent and local
//! sidereal time (Meeus chapter 12). Sidereal time takes the Julian day
//! directly; UT and dynamical time are not distinguished.

use crate::constants::{DEG2RAD, EARTH_INVERSE_FLATTENING, EARTH_RADIUS_KM, J2000};
use crate::coordinates::angle::Angle;
use crate::numeric::horner;
use crate::nutationlib::nutation_in_ra;
use crate::time::julian_centuries;

/// An Earth ellipsoid model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Name of the model
    pub name: &'static str,
    /// Equatorial radius in kilometres
    pub equatorial_radius_km: f64,
    /// Inverse flattening a / (a − b)
    pub inverse_flattening: f64,
}

impl Ellipsoid {
    pub const fn new(name: &'static str, equatorial_radius_km: f64, inverse_flattening: f64) -> Self {
        Ellipsoid {
            name,
            equatorial_radius_km,
            inverse_flattening,
        }
    }

    pub fn flattening(&self) -> f64 {
        1.0 / self.inverse_flattening
    }

    /// Ratio of polar to equatorial radius, b/a
    pub fn axis_ratio(&self) -> f64 {
        1.0 - self.flattening()
    }

    /// Parallax constants `(ρ·sin φ′, ρ·cos φ′)` in equatorial radii
    ///
    /// # Arguments
    /// * `latitude` - geodetic latitude φ
    /// * `height_m` - height above the ellipsoid in metres
    pub fn parallax_constants(&self, latitude: Angle, height_m: f64) -> (f64, f64) {
        let boa = self.axis_ratio();
        let u = (boa * latitude.tan()).atan();
        let (su, cu) = u.sin_cos();
        let (sp, cp) = latitude.sin_cos();
        let h = height_m * 1e-3 / self.equatorial_radius_km;
        let constants = (su * boa + h * sp, cu + h * cp);
        log::trace!("parallax constants at {}: {:?}", latitude, constants);
        constants
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        IAU1976
    }
}

/// IAU 1976 ellipsoid, the one Meeus uses throughout
pub const IAU1976: Ellipsoid = Ellipsoid::new("IAU1976", EARTH_RADIUS_KM, EARTH_INVERSE_FLATTENING);

/// Greenwich mean sidereal time, Meeus (12.4), normalized to `[0, 2π)`
pub fn mean_sidereal_time(jd: f64) -> Angle {
    let t = julian_centuries(jd);
    let degrees = 280.46061837
        + 360.98564736629 * (jd - J2000)
        + horner(t, &[0.0, 0.0, 0.000387933, -1.0 / 38_710_000.0]);
    Angle::from_radians((degrees % 360.0) * DEG2RAD).normalize()
}

/// Greenwich apparent sidereal time: mean time plus the equation of the
/// equinoxes Δψ·cos ε
pub fn apparent_sidereal_time(jd: f64, d_psi: Angle, d_eps: Angle) -> Angle {
    (mean_sidereal_time(jd) + nutation_in_ra(d_psi, d_eps, jd)).normalize()
}

/// Local sidereal time for a longitude measured positively west
pub fn local_sidereal_time(greenwich: Angle, longitude_west: Angle) -> Angle {
    (greenwich - longitude_west).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutationlib::nutation;
    use crate::time::calendar_gregorian_to_jd;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parallax_constants_palomar() {
        // Meeus example 11.a
        let lat = Angle::from_sexagesimal(true, 33, 21, 22.0);
        let (rho_sin, rho_cos) = IAU1976.parallax_constants(lat, 1706.0);
        assert_abs_diff_eq!(rho_sin, 0.546861, epsilon = 1e-6);
        assert_abs_diff_eq!(rho_cos, 0.836339, epsilon = 1e-6);
    }

    #[test]
    fn test_parallax_constants_equator_and_pole() {
        let (s, c) = IAU1976.parallax_constants(Angle::ZERO, 0.0);
        assert_abs_diff_eq!(s, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(c, 1.0, epsilon = 1e-15);

        let (s, c) = IAU1976.parallax_constants(Angle::from_degrees(90.0), 0.0);
        assert_abs_diff_eq!(s, IAU1976.axis_ratio(), epsilon = 1e-12);
        assert_abs_diff_eq!(c, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sidereal_time_1987_april_10() {
        // Meeus example 12.a
        let jd = calendar_gregorian_to_jd(1987, 4, 10.0);
        let mean = mean_sidereal_time(jd);
        let expected = Angle::from_hms(13, 10, 46.3668);
        assert_abs_diff_eq!(mean.time_seconds(), expected.time_seconds(), epsilon = 1e-3);

        let (d_psi, d_eps) = nutation(jd);
        let apparent = apparent_sidereal_time(jd, d_psi, d_eps);
        let expected = Angle::from_hms(13, 10, 46.1351);
        assert_abs_diff_eq!(apparent.time_seconds(), expected.time_seconds(), epsilon = 1e-3);
    }

    #[test]
    fn test_sidereal_time_with_fraction() {
        // Meeus example 12.b
        let jd = calendar_gregorian_to_jd(1987, 4, 10.0) + (19.0 + 21.0 / 60.0) / 24.0;
        assert_abs_diff_eq!(mean_sidereal_time(jd).degrees(), 128.7378734, epsilon = 1e-6);
    }

    #[test]
    fn test_local_sidereal_time_wraps() {
        let lst = local_sidereal_time(Angle::from_degrees(10.0), Angle::from_degrees(71.5));
        assert_abs_diff_eq!(lst.degrees(), 298.5, epsilon = 1e-9);
        let lst = local_sidereal_time(Angle::from_degrees(10.0), Angle::from_degrees(-71.5));
        assert_abs_diff_eq!(lst.degrees(), 81.5, epsilon = 1e-9);
    }
}
