//! Catalogue stars and their apparent ecliptic longitude
//!
//! A [`CatalogStar`] holds a J2000.0 mean place and its annual proper
//! motion. Its apparent place for a date goes through
//! [`crate::framelib::apparent::apparent_position`] and is rotated to the
//! ecliptic with the true obliquity of the date.

use serde::{Deserialize, Serialize};

use crate::coordinates::angle::Angle;
use crate::coordinates::{Ecliptic, Equatorial, Obliquity};
use crate::framelib::apparent::apparent_position;
use crate::nutationlib::{nutation, true_obliquity};
use crate::precessionlib::ProperMotion;
use crate::time::jde_to_julian_year;
use crate::Result;

/// Catalogue epoch of every [`CatalogStar`]
pub const CATALOG_EPOCH: f64 = 2000.0;

/// A star with a J2000.0 position and proper motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStar {
    pub name: String,
    /// Mean place at J2000.0
    pub position: Equatorial,
    /// Annual proper motion in right ascension
    pub pm_ra: Angle,
    /// Annual proper motion in declination
    pub pm_dec: Angle,
}

impl CatalogStar {
    /// A star from catalogue units
    ///
    /// # Arguments
    /// * `ra` - right ascension as (hours, minutes, seconds)
    /// * `dec` - declination as (positive, degrees, minutes, arcseconds)
    /// * `pm_ra_s` - proper motion in RA, seconds of time per year
    /// * `pm_dec_asec` - proper motion in Dec, arcseconds per year
    pub fn new(
        name: &str,
        ra: (u32, u32, f64),
        dec: (bool, u32, u32, f64),
        pm_ra_s: f64,
        pm_dec_asec: f64,
    ) -> Self {
        let motion = ProperMotion::new(pm_ra_s, pm_dec_asec);
        CatalogStar {
            name: name.to_string(),
            position: Equatorial::new(
                Angle::from_hms(ra.0, ra.1, ra.2),
                Angle::from_sexagesimal(dec.0, dec.1, dec.2, dec.3),
            ),
            pm_ra: motion.ra,
            pm_dec: motion.dec,
        }
    }

    pub fn proper_motion(&self) -> ProperMotion {
        ProperMotion {
            ra: self.pm_ra,
            dec: self.pm_dec,
        }
    }

    /// Apparent equatorial place at a Julian day
    pub fn apparent_equatorial(&self, jd: f64) -> Result<Equatorial> {
        apparent_position(
            &self.position,
            CATALOG_EPOCH,
            jde_to_julian_year(jd),
            self.proper_motion(),
        )
    }

    /// Apparent geocentric ecliptic place at a Julian day
    pub fn apparent_ecliptic(&self, jd: f64) -> Result<Ecliptic> {
        let eq = self.apparent_equatorial(jd)?;
        let (_, d_eps) = nutation(jd);
        let obliquity = Obliquity::new(true_obliquity(d_eps, jd));
        Ok(eq.to_ecliptic(&obliquity))
    }

    /// Apparent ecliptic longitude in `[0, 2π)`
    pub fn ecliptic_longitude(&self, jd: f64) -> Result<Angle> {
        Ok(self.apparent_ecliptic(jd)?.lon)
    }
}
