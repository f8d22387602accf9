//! Precession of equatorial and ecliptic coordinates
//!
//! Rigorous precession between two Julian epochs, Meeus chapter 21.
//! Equatorial coordinates rotate through ζ, z and θ (21.2-21.4); ecliptic
//! coordinates through η, π and p (21.5-21.7). When the starting epoch is
//! not J2000.0 the coefficients are re-derived from the shifted
//! polynomials in T = (epoch_from − 2000)/100.
//!
//! Close to the pole of the target frame the latitude (or declination) is
//! taken from `acos(hypot(A, B))` instead of `asin(C)`: the branch is used
//! when `|C| ≥ cos(10′)`, where arcsine loses precision.

use crate::constants::{ASEC2RAD, DEG2RAD};
use crate::coordinates::angle::Angle;
use crate::coordinates::{Ecliptic, Equatorial};
use crate::numeric::horner;
use crate::nutationlib::mean_obliquity;
use crate::time::julian_year_to_jde;
use crate::{EphemerisError, Result};

/// Cosine of the 10′ threshold for the near-pole branch
fn cos_small_angle() -> f64 {
    (10.0 / 60.0 * DEG2RAD).cos()
}

// (21.2) in arcseconds, polynomials of T
const ZETA_T: [f64; 3] = [2306.2181, 1.39656, -0.000139];
const THETA_T: [f64; 3] = [2004.3109, -0.8533, -0.000217];

// (21.3) in arcseconds, polynomials of t for epoch_from = 2000
const ZETA_J2000: [f64; 3] = [2306.2181, 0.30188, 0.017998];
const Z_J2000: [f64; 3] = [2306.2181, 1.09468, 0.018203];
const THETA_J2000: [f64; 3] = [2004.3109, -0.42665, -0.041833];

// (21.5) in arcseconds, except the constant of π which is in degrees
const ETA_T: [f64; 3] = [47.0029, -0.06603, 0.000598];
const PI_T: [f64; 3] = [174.876384 * 3600.0, 3289.4789, 0.60622];
const P_T: [f64; 3] = [5029.0966, 2.22226, -0.000042];

// (21.6) for epoch_from = 2000
const ETA_J2000: [f64; 3] = [47.0029, -0.03302, 0.000060];
const PI_J2000: [f64; 3] = [174.876384 * 3600.0, -869.8089, 0.03536];
const P_J2000: [f64; 3] = [5029.0966, 1.11113, -0.000006];

/// Annual proper motion of a star in right ascension and declination
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProperMotion {
    /// Change in right ascension per Julian year
    pub ra: Angle,
    /// Change in declination per Julian year
    pub dec: Angle,
}

impl ProperMotion {
    pub const ZERO: ProperMotion = ProperMotion {
        ra: Angle::ZERO,
        dec: Angle::ZERO,
    };

    /// Proper motion from catalogue units
    ///
    /// # Arguments
    /// * `ra_time_seconds` - seconds of time per year in right ascension
    /// * `dec_arcseconds` - arcseconds per year in declination
    pub fn new(ra_time_seconds: f64, dec_arcseconds: f64) -> Self {
        ProperMotion {
            ra: Angle::from_time_seconds(ra_time_seconds),
            dec: Angle::from_arcseconds(dec_arcseconds),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.ra == Angle::ZERO && self.dec == Angle::ZERO
    }
}

/// Precession of equatorial coordinates between two fixed epochs
///
/// Construct once, then call [`EquatorialPrecessor::precess`] for any number
/// of positions sharing the same epochs.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialPrecessor {
    zeta: f64,
    z: f64,
    sin_theta: f64,
    cos_theta: f64,
}

impl EquatorialPrecessor {
    /// # Arguments
    /// * `epoch_from`, `epoch_to` - Julian epochs, e.g. 2000.0
    pub fn new(epoch_from: f64, epoch_to: f64) -> Self {
        let (zeta_c, z_c, theta_c) = if epoch_from == 2000.0 {
            (ZETA_J2000, Z_J2000, THETA_J2000)
        } else {
            let big_t = (epoch_from - 2000.0) * 0.01;
            (
                [horner(big_t, &ZETA_T), 0.30188 - 0.000344 * big_t, 0.017998],
                [horner(big_t, &ZETA_T), 1.09468 + 0.000066 * big_t, 0.018203],
                [horner(big_t, &THETA_T), -0.42665 - 0.000217 * big_t, -0.041833],
            )
        };
        let t = (epoch_to - epoch_from) * 0.01;
        let theta = horner(t, &theta_c) * t * ASEC2RAD;
        let (sin_theta, cos_theta) = theta.sin_cos();
        EquatorialPrecessor {
            zeta: horner(t, &zeta_c) * t * ASEC2RAD,
            z: horner(t, &z_c) * t * ASEC2RAD,
            sin_theta,
            cos_theta,
        }
    }

    /// Meeus (21.4)
    pub fn precess(&self, eq: &Equatorial) -> Equatorial {
        let (sd, cd) = eq.dec.sin_cos();
        let (saz, caz) = (eq.ra.radians() + self.zeta).sin_cos();
        let a = cd * saz;
        let b = self.cos_theta * cd * caz - self.sin_theta * sd;
        let c = self.sin_theta * cd * caz + self.cos_theta * sd;
        let ra = Angle::from_radians(a.atan2(b) + self.z);
        Equatorial::new(ra, latitude_from_components(a, b, c))
    }
}

/// Precession of ecliptic coordinates between two fixed epochs
#[derive(Debug, Clone, Copy)]
pub struct EclipticPrecessor {
    sin_eta: f64,
    cos_eta: f64,
    pi: f64,
    p: f64,
}

impl EclipticPrecessor {
    pub fn new(epoch_from: f64, epoch_to: f64) -> Self {
        let (eta_c, pi_c, p_c) = if epoch_from == 2000.0 {
            (ETA_J2000, PI_J2000, P_J2000)
        } else {
            let big_t = (epoch_from - 2000.0) * 0.01;
            (
                [horner(big_t, &ETA_T), -0.03302 + 0.000598 * big_t, 0.000060],
                [horner(big_t, &PI_T), -869.8089 - 0.50491 * big_t, 0.03536],
                [horner(big_t, &P_T), 1.11113 - 0.000042 * big_t, -0.000006],
            )
        };
        let t = (epoch_to - epoch_from) * 0.01;
        let eta = horner(t, &eta_c) * t * ASEC2RAD;
        let (sin_eta, cos_eta) = eta.sin_cos();
        EclipticPrecessor {
            sin_eta,
            cos_eta,
            // π is not scaled by t
            pi: horner(t, &pi_c) * ASEC2RAD,
            p: horner(t, &p_c) * t * ASEC2RAD,
        }
    }

    /// Meeus (21.7); the returned longitude is normalized
    pub fn precess(&self, ecl: &Ecliptic) -> Ecliptic {
        let (sb, cb) = ecl.lat.sin_cos();
        let (sd, cd) = (self.pi - ecl.lon.radians()).sin_cos();
        let a = self.cos_eta * cb * sd - self.sin_eta * sb;
        let b = cb * cd;
        let c = self.cos_eta * sb + self.sin_eta * cb * sd;
        let lon = Angle::from_radians(self.p + self.pi - a.atan2(b));
        Ecliptic::new(lon.normalize(), latitude_from_components(a, b, c))
    }
}

fn latitude_from_components(a: f64, b: f64, c: f64) -> Angle {
    if c.abs() < cos_small_angle() {
        Angle::from_radians(c.asin())
    } else {
        // near the pole
        let lat = a.hypot(b).acos();
        Angle::from_radians(if c < 0.0 { -lat } else { lat })
    }
}

/// Precesses equatorial coordinates, applying proper motion first
pub fn precess_equatorial(
    eq: &Equatorial,
    epoch_from: f64,
    epoch_to: f64,
    motion: ProperMotion,
) -> Equatorial {
    let years = epoch_to - epoch_from;
    let moved = Equatorial::new(eq.ra + motion.ra * years, eq.dec + motion.dec * years);
    EquatorialPrecessor::new(epoch_from, epoch_to).precess(&moved)
}

/// Precesses ecliptic coordinates, applying proper motion first
///
/// Proper motion is given in equatorial terms and converted to the
/// ecliptic with the mean obliquity of `epoch_from`.
///
/// # Errors
///
/// [`EphemerisError::DomainError`] when a non-zero proper motion is applied
/// at an ecliptic pole.
pub fn precess_ecliptic(
    ecl: &Ecliptic,
    epoch_from: f64,
    epoch_to: f64,
    motion: ProperMotion,
) -> Result<Ecliptic> {
    let precessor = EclipticPrecessor::new(epoch_from, epoch_to);
    if motion.is_zero() {
        return Ok(precessor.precess(ecl));
    }
    let (m_lon, m_lat) = equatorial_motion_to_ecliptic(motion, epoch_from, ecl)?;
    let years = epoch_to - epoch_from;
    let moved = Ecliptic::new(ecl.lon + m_lon * years, ecl.lat + m_lat * years);
    Ok(precessor.precess(&moved))
}

fn equatorial_motion_to_ecliptic(
    motion: ProperMotion,
    epoch: f64,
    ecl: &Ecliptic,
) -> Result<(Angle, Angle)> {
    let cb = ecl.lat.cos();
    if cb.abs() < f64::EPSILON {
        return Err(EphemerisError::DomainError(
            "proper motion is undefined at an ecliptic pole".to_string(),
        ));
    }
    let obliquity = crate::coordinates::Obliquity::new(mean_obliquity(julian_year_to_jde(epoch)));
    let (se, ce) = (obliquity.sin, obliquity.cos);
    let eq = ecl.to_equatorial(&obliquity);
    let (sa, ca) = eq.ra.sin_cos();
    let (sd, cd) = eq.dec.sin_cos();
    let m_lon = (motion.dec * (se * ca) + motion.ra * (cd * (ce * cd + se * sd * sa))) / (cb * cb);
    let m_lat = (motion.dec * (ce * cd + se * sd * sa) - motion.ra * (se * ca * cd)) / cb;
    Ok((m_lon, m_lat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::jde_to_julian_year;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_theta_persei_with_proper_motion() {
        // Meeus example 21.a
        let eq = Equatorial::new(
            Angle::from_hms(2, 44, 11.986),
            Angle::from_sexagesimal(true, 49, 13, 42.48),
        );
        let epoch_to = jde_to_julian_year(2462088.69);
        let result = precess_equatorial(&eq, 2000.0, epoch_to, ProperMotion::new(0.03425, -0.0895));

        let expected_ra = Angle::from_hms(2, 46, 11.331);
        let expected_dec = Angle::from_sexagesimal(true, 49, 20, 54.54);
        assert_abs_diff_eq!(result.ra.time_seconds(), expected_ra.time_seconds(), epsilon = 0.001);
        assert_abs_diff_eq!(result.dec.arcseconds(), expected_dec.arcseconds(), epsilon = 0.01);
    }

    #[test]
    fn test_venus_ecliptic_to_antiquity() {
        // Meeus example 21.b: J2000.0 to −214 June 30
        let ecl = Ecliptic::new(Angle::from_degrees(149.48194), Angle::from_degrees(1.76549));
        let epoch_to = jde_to_julian_year(1643074.5);
        let result = precess_ecliptic(&ecl, 2000.0, epoch_to, ProperMotion::ZERO).unwrap();
        assert_abs_diff_eq!(result.lon.degrees(), 118.704, epsilon = 0.001);
        assert_abs_diff_eq!(result.lat.degrees(), 1.615, epsilon = 0.001);

        // and back again, exercising the shifted-epoch coefficients
        let back = precess_ecliptic(&result, epoch_to, 2000.0, ProperMotion::ZERO).unwrap();
        assert_abs_diff_eq!(back.lon.degrees(), 149.48194, epsilon = 1e-5);
        assert_abs_diff_eq!(back.lat.degrees(), 1.76549, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_interval_is_identity() {
        let eq = Equatorial::new(Angle::from_degrees(41.05), Angle::from_degrees(49.23));
        let same = EquatorialPrecessor::new(2000.0, 2000.0).precess(&eq);
        assert_abs_diff_eq!(same.ra.radians(), eq.ra.radians(), epsilon = 1e-14);
        assert_abs_diff_eq!(same.dec.radians(), eq.dec.radians(), epsilon = 1e-14);
    }

    #[test]
    fn test_near_pole_branch_is_continuous() {
        // Polaris-like declinations on either side of the 10′ threshold
        let precessor = EquatorialPrecessor::new(2000.0, 2050.0);
        for dec in [89.80, 89.83, 89.84, 89.86, 89.9, -89.9] {
            let eq = Equatorial::new(Angle::from_degrees(37.95), Angle::from_degrees(dec));
            let out = precessor.precess(&eq);
            assert!(out.dec.degrees().abs() <= 90.0);
            assert!((out.dec.degrees() - dec).abs() < 0.5, "dec {} -> {}", dec, out.dec.degrees());
        }
    }

    #[test]
    fn test_ecliptic_proper_motion_pole_is_domain_error() {
        let ecl = Ecliptic::new(Angle::ZERO, Angle::from_degrees(90.0));
        let result = precess_ecliptic(&ecl, 2000.0, 2010.0, ProperMotion::new(0.01, 0.1));
        assert!(matches!(result, Err(EphemerisError::DomainError(_))));
    }
}
