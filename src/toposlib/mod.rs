//! Observers on the Earth and the parallax in ecliptic longitude
//!
//! A geocentric ecliptic position becomes topocentric through the parallax
//! constants of the observer's site, the obliquity of the ecliptic and the
//! local sidereal time (Meeus chapter 40, "Parallax in ecliptical
//! coordinates"):
//!
//! ```text
//! N  = cos λ cos β − ρcosφ′ sin π cos θ
//! λ′ = atan2(sin λ cos β − sin π (ρsinφ′ sin ε + ρcosφ′ cos ε sin θ), N)
//! ```
//!
//! # Example
//!
//! ```rust
//! use meeus_ephem::coordinates::angle::Angle;
//! use meeus_ephem::toposlib::ObserverLocation;
//!
//! // Woonsocket, RI: 71.5° west of Greenwich
//! let site = ObserverLocation::from_east_longitude(
//!     Angle::from_degrees(42.0),
//!     Angle::from_degrees(-71.516667),
//!     56.0832,
//! );
//! assert!((site.longitude.degrees() - 71.516667).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::HORIZONTAL_PARALLAX_ASEC;
use crate::coordinates::angle::Angle;
use crate::coordinates::Ecliptic;
use crate::earthlib::{local_sidereal_time, Ellipsoid};
use crate::{EphemerisError, Result};

/// A geographic observer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverLocation {
    /// Geodetic latitude, positive north
    pub latitude: Angle,
    /// Longitude, positive west of Greenwich
    pub longitude: Angle,
    /// Height above the ellipsoid in metres
    pub height_m: f64,
}

impl ObserverLocation {
    /// Observer from a west-positive longitude
    pub fn new(latitude: Angle, longitude_west: Angle, height_m: f64) -> Self {
        ObserverLocation {
            latitude,
            longitude: longitude_west,
            height_m,
        }
    }

    /// Observer from an east-positive longitude, as most atlases give it
    pub fn from_east_longitude(latitude: Angle, longitude_east: Angle, height_m: f64) -> Self {
        Self::new(latitude, -longitude_east, height_m)
    }

    pub fn east_longitude(&self) -> Angle {
        -self.longitude
    }

    /// Local sidereal time from Greenwich sidereal time
    pub fn local_sidereal_time(&self, greenwich: Angle) -> Angle {
        local_sidereal_time(greenwich, self.longitude)
    }

    /// `(ρ·sin φ′, ρ·cos φ′)` for this site
    pub fn parallax_constants(&self, ellipsoid: &Ellipsoid) -> (f64, f64) {
        ellipsoid.parallax_constants(self.latitude, self.height_m)
    }

    /// Topocentric ecliptic longitude of a geocentric position
    ///
    /// # Arguments
    /// * `geocentric` - apparent geocentric λ, β
    /// * `obliquity` - obliquity of the ecliptic ε
    /// * `lst` - local sidereal time θ
    /// * `parallax` - equatorial horizontal parallax π of the body
    ///
    /// # Returns
    /// λ′ normalized to `[0, 2π)`
    pub fn topocentric_longitude(
        &self,
        ellipsoid: &Ellipsoid,
        geocentric: &Ecliptic,
        obliquity: Angle,
        lst: Angle,
        parallax: Angle,
    ) -> Angle {
        let (rho_sin, rho_cos) = self.parallax_constants(ellipsoid);
        let (sl, cl) = geocentric.lon.sin_cos();
        let cb = geocentric.lat.cos();
        let (se, ce) = obliquity.sin_cos();
        let (st, ct) = lst.sin_cos();
        let sp = parallax.sin();

        let n = cl * cb - rho_cos * sp * ct;
        let lon = (sl * cb - sp * (rho_sin * se + rho_cos * ce * st)).atan2(n);
        Angle::from_radians(lon).normalize()
    }
}

/// Equatorial horizontal parallax of a body `distance_au` from the Earth,
/// π = 8.794″ / Δ
///
/// # Errors
///
/// [`EphemerisError::DomainError`] for a distance that is not positive.
pub fn horizontal_parallax(distance_au: f64) -> Result<Angle> {
    if distance_au.is_nan() || distance_au <= 0.0 {
        return Err(EphemerisError::DomainError(format!(
            "horizontal parallax needs a positive distance, got {} AU",
            distance_au
        )));
    }
    Ok(Angle::from_arcseconds(HORIZONTAL_PARALLAX_ASEC / distance_au))
}
