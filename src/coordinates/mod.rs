//! Ecliptic and equatorial sky coordinates
//!
//! The two forms are mutually derivable through an [`Obliquity`]; neither
//! type stores the other. Conversions follow Meeus (13.1)-(13.4).

pub mod angle;
pub mod cartesian;

use serde::{Deserialize, Serialize};

use angle::Angle;

/// Sine and cosine of the obliquity of the ecliptic, precomputed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obliquity {
    pub angle: Angle,
    pub sin: f64,
    pub cos: f64,
}

impl Obliquity {
    pub fn new(angle: Angle) -> Self {
        let (sin, cos) = angle.sin_cos();
        Obliquity { angle, sin, cos }
    }
}

/// Ecliptic longitude and latitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ecliptic {
    pub lon: Angle,
    pub lat: Angle,
}

impl Ecliptic {
    pub fn new(lon: Angle, lat: Angle) -> Self {
        Ecliptic { lon, lat }
    }

    /// Converts to equatorial coordinates; right ascension lands in `[0, 2π)`
    pub fn to_equatorial(&self, obliquity: &Obliquity) -> Equatorial {
        let (sl, cl) = self.lon.sin_cos();
        let (sb, cb) = self.lat.sin_cos();
        let tb = sb / cb;
        let ra = (sl * obliquity.cos - tb * obliquity.sin).atan2(cl);
        let dec = (sb * obliquity.cos + cb * obliquity.sin * sl).asin();
        Equatorial::new(Angle::from_radians(ra), Angle::from_radians(dec))
    }
}

/// Right ascension and declination
///
/// Right ascension is an hour-based angle; construct it with
/// [`Angle::from_hms`] when starting from catalogue values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    pub ra: Angle,
    pub dec: Angle,
}

impl Equatorial {
    pub fn new(ra: Angle, dec: Angle) -> Self {
        Equatorial {
            ra: ra.normalize(),
            dec,
        }
    }

    /// Converts to ecliptic coordinates; longitude lands in `[0, 2π)`
    pub fn to_ecliptic(&self, obliquity: &Obliquity) -> Ecliptic {
        let (sa, ca) = self.ra.sin_cos();
        let (sd, cd) = self.dec.sin_cos();
        let lon = (sa * obliquity.cos + (sd / cd) * obliquity.sin).atan2(ca);
        let lat = (sd * obliquity.cos - cd * obliquity.sin * sa).asin();
        Ecliptic::new(Angle::from_radians(lon).normalize(), Angle::from_radians(lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn j2000_obliquity() -> Obliquity {
        Obliquity::new(Angle::from_degrees(23.4392911))
    }

    #[test]
    fn test_pollux_equatorial_to_ecliptic() {
        // Meeus example 13.a
        let eq = Equatorial::new(
            Angle::from_hms(7, 45, 18.946),
            Angle::from_sexagesimal(true, 28, 1, 34.26),
        );
        let ecl = eq.to_ecliptic(&j2000_obliquity());
        assert_relative_eq!(ecl.lon.degrees(), 113.215630, epsilon = 1e-6);
        assert_relative_eq!(ecl.lat.degrees(), 6.684170, epsilon = 1e-6);
    }

    #[test]
    fn test_round_trip() {
        let obl = j2000_obliquity();
        let ecl = Ecliptic::new(Angle::from_degrees(204.15), Angle::from_degrees(-2.05));
        let back = ecl.to_equatorial(&obl).to_ecliptic(&obl);
        assert_relative_eq!(back.lon.degrees(), 204.15, epsilon = 1e-10);
        assert_relative_eq!(back.lat.degrees(), -2.05, epsilon = 1e-10);
    }

    #[test]
    fn test_equatorial_normalizes_ra() {
        let eq = Equatorial::new(Angle::from_degrees(-15.0), Angle::ZERO);
        assert_relative_eq!(eq.ra.degrees(), 345.0, epsilon = 1e-12);
    }
}
