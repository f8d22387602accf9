//! The topocentric longitude pipeline
//!
//! [`Ephemeris`] ties the pieces together: a calendar date becomes a Julian
//! day (used as JDE, no ΔT), nutation fixes the obliquity and sidereal time,
//! the body's apparent geocentric position comes from the solar, lunar or
//! planetary model, and the observer's parallax turns it topocentric.
//!
//! An `Ephemeris` is immutable once built. Share it between threads behind
//! an `Arc` or by reference; no call takes a lock.

use std::collections::BTreeMap;

use crate::almanac::SkyFrame;
use crate::config::{EphemerisConfig, SourceKind};
use crate::constants::HORIZONTAL_PARALLAX_ASEC;
use crate::coordinates::angle::Angle;
use crate::earthlib::Ellipsoid;
use crate::moonlib;
use crate::nutationlib::nutation;
use crate::planetlib::{Body, EmbeddedSeries, OrbitalElements, SeriesProvider};
use crate::positions::{GeocentricAssembler, GeocentricPosition, HeliocentricSource};
use crate::solarlib;
use crate::time::{calendar_gregorian_to_jd, julian_centuries};
use crate::toposlib::{horizontal_parallax, ObserverLocation};
use crate::{EphemerisError, Result};

/// Positions of the Sun, Moon and planets as seen from the Earth
#[derive(Debug, Clone)]
pub struct Ephemeris {
    config: EphemerisConfig,
    ellipsoid: Ellipsoid,
    assembler: GeocentricAssembler,
    sources: BTreeMap<Body, HeliocentricSource>,
    unavailable: BTreeMap<Body, String>,
}

impl Ephemeris {
    /// An ephemeris with the default configuration and embedded tables
    pub fn new() -> Result<Self> {
        Self::with_config(EphemerisConfig::default())
    }

    /// An ephemeris backed by the embedded tables
    pub fn with_config(config: EphemerisConfig) -> Result<Self> {
        Self::with_provider(config, &EmbeddedSeries)
    }

    /// Build the body registry from a configuration and a series provider
    ///
    /// The Earth's series is required. A configured planet whose series the
    /// provider lacks is recorded as unavailable; asking for it later fails
    /// with [`EphemerisError::DataUnavailable`].
    pub fn with_provider(config: EphemerisConfig, provider: &dyn SeriesProvider) -> Result<Self> {
        config.validate()?;
        let earth = HeliocentricSource::Series(provider.series(Body::Earth)?);

        let mut sources = BTreeMap::new();
        let mut unavailable = BTreeMap::new();
        for (&body, &kind) in &config.sources {
            let source = match kind {
                SourceKind::Series => provider.series(body).map(HeliocentricSource::Series),
                SourceKind::Keplerian => OrbitalElements::for_body(body)
                    .map(HeliocentricSource::Keplerian)
                    .ok_or_else(|| EphemerisError::Config(format!("no orbital elements for {}", body))),
            };
            match source {
                Ok(source) => {
                    log::debug!("{}: {} source", body, source.kind());
                    sources.insert(body, source);
                }
                Err(EphemerisError::DataUnavailable { reason, .. }) => {
                    log::debug!("{}: unavailable, {}", body, reason);
                    unavailable.insert(body, reason);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(Ephemeris {
            ellipsoid: config.ellipsoid.to_ellipsoid(),
            config,
            assembler: GeocentricAssembler::new(earth),
            sources,
            unavailable,
        })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Heliocentric source registered for a planet
    pub fn source(&self, body: Body) -> Option<&HeliocentricSource> {
        self.sources.get(&body)
    }

    /// `(Δψ, Δε)`, or zeros when nutation is switched off
    pub fn nutation(&self, jde: f64) -> (Angle, Angle) {
        if self.config.apply_nutation {
            nutation(jde)
        } else {
            (Angle::ZERO, Angle::ZERO)
        }
    }

    /// Apparent geocentric position of a body
    ///
    /// Distances are in AU except for the Moon, whose distance is in km.
    ///
    /// # Errors
    ///
    /// * [`EphemerisError::InvalidBodyIdentifier`] for the Earth
    /// * [`EphemerisError::DataUnavailable`] for a planet with no source
    pub fn geocentric_position(&self, body: Body, jde: f64) -> Result<GeocentricPosition> {
        let (d_psi, _) = self.nutation(jde);
        self.geocentric_with_nutation(body, jde, d_psi)
    }

    fn geocentric_with_nutation(&self, body: Body, jde: f64, d_psi: Angle) -> Result<GeocentricPosition> {
        match body {
            Body::Earth => Err(EphemerisError::InvalidBodyIdentifier(
                "the Earth has no geocentric position".to_string(),
            )),
            Body::Sun => {
                let lon = solarlib::apparent_longitude(julian_centuries(jde));
                Ok(GeocentricPosition::new(lon.normalize(), Angle::ZERO, 1.0))
            }
            Body::Moon => moonlib::apparent_position(jde, d_psi),
            planet => {
                let source = self.sources.get(&planet).ok_or_else(|| {
                    let reason = self
                        .unavailable
                        .get(&planet)
                        .cloned()
                        .unwrap_or_else(|| "no heliocentric source configured".to_string());
                    EphemerisError::DataUnavailable {
                        body: planet.name().to_string(),
                        reason,
                    }
                })?;
                self.assembler.apparent_position(source, jde, d_psi)
            }
        }
    }

    /// Equatorial horizontal parallax of a body at a geocentric position
    pub fn parallax(&self, body: Body, position: &GeocentricPosition) -> Result<Angle> {
        match body {
            Body::Moon => moonlib::parallax(position.distance),
            Body::Sun => Ok(Angle::from_arcseconds(HORIZONTAL_PARALLAX_ASEC)),
            _ => horizontal_parallax(position.distance),
        }
    }

    /// Topocentric apparent ecliptic longitude of a named body
    ///
    /// # Arguments
    /// * `year`, `month`, `fractional_day` - Gregorian calendar date, UT
    /// * `latitude` - geodetic latitude, positive north
    /// * `longitude` - longitude, positive east
    /// * `height_m` - height above the ellipsoid in metres
    /// * `body` - name, case-insensitive: sun, moon, mercury, venus, mars,
    ///   jupiter, saturn (or their two-letter abbreviations)
    ///
    /// # Returns
    /// λ′ in `[0, 2π)`
    ///
    /// # Errors
    ///
    /// * [`EphemerisError::InvalidBodyIdentifier`] for an unknown name or
    ///   for the Earth
    /// * [`EphemerisError::DataUnavailable`] for a planet without a source
    /// * [`EphemerisError::DomainError`] for an impossible date
    #[allow(clippy::too_many_arguments)]
    pub fn topocentric_longitude(
        &self,
        year: i32,
        month: u32,
        fractional_day: f64,
        latitude: Angle,
        longitude: Angle,
        height_m: f64,
        body: &str,
    ) -> Result<Angle> {
        let body: Body = body.parse()?;
        self.topocentric_longitude_of(year, month, fractional_day, latitude, longitude, height_m, body)
    }

    /// [`Ephemeris::topocentric_longitude`] for an already parsed body
    #[allow(clippy::too_many_arguments)]
    pub fn topocentric_longitude_of(
        &self,
        year: i32,
        month: u32,
        fractional_day: f64,
        latitude: Angle,
        longitude: Angle,
        height_m: f64,
        body: Body,
    ) -> Result<Angle> {
        if !(1..=12).contains(&month) || !fractional_day.is_finite() {
            return Err(EphemerisError::DomainError(format!(
                "invalid calendar date {}-{}-{}",
                year, month, fractional_day
            )));
        }
        let jd = calendar_gregorian_to_jd(year, month, fractional_day);
        if jd < 0.0 {
            return Err(EphemerisError::DomainError(format!(
                "date {}-{}-{} is before JD 0",
                year, month, fractional_day
            )));
        }
        let observer = ObserverLocation::from_east_longitude(latitude, longitude, height_m);
        self.topocentric_longitude_at(jd, &observer, body)
    }

    /// Topocentric apparent ecliptic longitude for a Julian day and observer
    pub fn topocentric_longitude_at(
        &self,
        jd: f64,
        observer: &ObserverLocation,
        body: Body,
    ) -> Result<Angle> {
        if body == Body::Earth {
            return Err(EphemerisError::InvalidBodyIdentifier(body.name().to_lowercase()));
        }
        let (d_psi, d_eps) = self.nutation(jd);
        let frame = SkyFrame::new(jd, observer, d_psi, d_eps);
        let geocentric = self.geocentric_with_nutation(body, jd, d_psi)?;
        let parallax = self.parallax(body, &geocentric)?;
        log::debug!("{} geocentric at JD {}: {}", body, jd, geocentric);

        let lon = observer.topocentric_longitude(
            &self.ellipsoid,
            &geocentric.ecliptic(),
            frame.obliquity,
            frame.local_sidereal_time,
            parallax,
        );
        log::debug!("{} topocentric longitude {}", body, lon);
        Ok(lon)
    }
}
