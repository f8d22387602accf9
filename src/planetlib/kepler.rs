//! Keplerian fallback for Mercury and Venus
//!
//! Mean orbital elements that drift linearly with the day number
//! `d = jde − 2451543.5` (P. Schlyter, "How to compute planetary
//! positions"). Accuracy is a few arcminutes, enough for a body with no
//! series table.

use crate::constants::{KEPLER_EPOCH, TAU};
use crate::coordinates::cartesian::Cartesian3;

use super::{Body, HeliocentricPosition};

/// A linear function of the day number: `at_epoch + rate·d`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub at_epoch: f64,
    pub rate: f64,
}

impl Drift {
    pub const fn new(at_epoch: f64, rate: f64) -> Self {
        Self { at_epoch, rate }
    }

    pub fn at(&self, d: f64) -> f64 {
        self.at_epoch + self.rate * d
    }
}

/// Mean orbital elements; angles in radians, rates per day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Longitude of the ascending node N
    pub node: Drift,
    /// Inclination i
    pub inclination: Drift,
    /// Argument of perihelion w
    pub perihelion: Drift,
    /// Semi-major axis a in AU
    pub semi_major_axis: f64,
    /// Eccentricity e
    pub eccentricity: Drift,
    /// Mean anomaly M
    pub mean_anomaly: Drift,
}

pub const MERCURY: OrbitalElements = OrbitalElements {
    node: Drift::new(0.8435403168, 5.66511185916e-7),
    inclination: Drift::new(0.122255078, 8.7266e-10),
    perihelion: Drift::new(0.5083114367, 1.77053181e-7),
    semi_major_axis: 0.387098,
    eccentricity: Drift::new(0.205635, 5.59e-10),
    mean_anomaly: Drift::new(2.9436059939, 0.0714247100147306),
};

pub const VENUS: OrbitalElements = OrbitalElements {
    node: Drift::new(1.338316725, 4.30380740248e-7),
    inclination: Drift::new(0.0592469468, 4.79965544e-10),
    perihelion: Drift::new(0.95802868, 2.41508189915e-7),
    semi_major_axis: 0.723330,
    eccentricity: Drift::new(0.006773, -1.302e-9),
    mean_anomaly: Drift::new(0.8378487981, 0.0279624474614262),
};

impl OrbitalElements {
    /// Elements for a body, if there are any
    pub fn for_body(body: Body) -> Option<OrbitalElements> {
        match body {
            Body::Mercury => Some(MERCURY),
            Body::Venus => Some(VENUS),
            _ => None,
        }
    }

    /// Heliocentric ecliptic position at a Julian ephemeris day
    pub fn position(&self, jde: f64) -> HeliocentricPosition {
        let d = jde - KEPLER_EPOCH;
        let n = self.node.at(d);
        let i = self.inclination.at(d);
        let w = self.perihelion.at(d);
        let a = self.semi_major_axis;
        let e = self.eccentricity.at(d);
        let m = self.mean_anomaly.at(d).rem_euclid(TAU);

        let ecc_anomaly = eccentric_anomaly(m, e);

        // Position in the orbital plane
        let xv = a * (ecc_anomaly.cos() - e);
        let yv = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();
        let v = yv.atan2(xv).rem_euclid(TAU);
        let r = xv.hypot(yv);

        let (sin_n, cos_n) = n.sin_cos();
        let (sin_vw, cos_vw) = (v + w).sin_cos();
        let (sin_i, cos_i) = i.sin_cos();
        let helio = Cartesian3::new(
            r * (cos_n * cos_vw - sin_n * sin_vw * cos_i),
            r * (sin_n * cos_vw + cos_n * sin_vw * cos_i),
            r * sin_vw * sin_i,
        );

        let (lon, lat, dist) = helio.to_spherical();
        HeliocentricPosition::new(lon.normalize(), lat, dist)
    }
}

/// Eccentric anomaly from a second-order start and one Newton step
///
/// Good to well under an arcsecond for e < 0.21.
fn eccentric_anomaly(m: f64, e: f64) -> f64 {
    let e0 = m + e * m.sin() * (1.0 + e * m.cos());
    e0 - (e0 - e * e0.sin() - m) / (1.0 - e * e0.cos())
}
