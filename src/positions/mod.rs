//! Geocentric apparent positions of planets
//!
//! Heliocentric positions of the Earth and a planet are differenced in
//! rectangular ecliptic coordinates, corrected once for light-time, and
//! then carried through aberration, the FK5 correction and nutation in
//! longitude (Meeus chapter 32, "Ecliptic position").

use std::fmt;
use std::sync::Arc;

use crate::constants::LIGHT_TIME_DAYS_PER_AU;
use crate::coordinates::angle::Angle;
use crate::coordinates::cartesian::Cartesian3;
use crate::coordinates::Ecliptic;
use crate::framelib::aberration::ecliptic_aberration;
use crate::framelib::fk5::to_fk5;
use crate::planetlib::{HeliocentricPosition, OrbitalElements, SeriesTable};
use crate::Result;

/// Where a body's heliocentric position comes from
#[derive(Debug, Clone)]
pub enum HeliocentricSource {
    /// Periodic series, shared read-only
    Series(Arc<SeriesTable>),
    /// Mean orbital elements
    Keplerian(OrbitalElements),
}

impl HeliocentricSource {
    /// Heliocentric position referred to the ecliptic and equinox of date
    pub fn position(&self, jde: f64) -> HeliocentricPosition {
        match self {
            HeliocentricSource::Series(table) => table.position(jde),
            HeliocentricSource::Keplerian(elements) => elements.position(jde),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            HeliocentricSource::Series(_) => "series",
            HeliocentricSource::Keplerian(_) => "keplerian",
        }
    }
}

/// A geocentric ecliptic position with its distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPosition {
    /// Longitude, normalized to `[0, 2π)`
    pub lon: Angle,
    pub lat: Angle,
    /// Distance from the Earth's centre; AU for planets, km for the Moon
    pub distance: f64,
}

impl GeocentricPosition {
    pub fn new(lon: Angle, lat: Angle, distance: f64) -> Self {
        Self { lon, lat, distance }
    }

    pub fn ecliptic(&self) -> Ecliptic {
        Ecliptic::new(self.lon, self.lat)
    }
}

impl fmt::Display for GeocentricPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "λ {} β {} Δ {:.6}", self.lon, self.lat, self.distance)
    }
}

/// Builds apparent geocentric positions against a fixed Earth source
#[derive(Debug, Clone)]
pub struct GeocentricAssembler {
    earth: HeliocentricSource,
}

impl GeocentricAssembler {
    pub fn new(earth: HeliocentricSource) -> Self {
        Self { earth }
    }

    pub fn earth(&self) -> &HeliocentricSource {
        &self.earth
    }

    /// Apparent geocentric position of a planet
    ///
    /// The Earth is evaluated once at `jde`; the planet is evaluated again at
    /// `jde − τ` for the light-time τ of the first distance. The returned
    /// distance is the light-time corrected one.
    ///
    /// # Arguments
    /// * `body` - heliocentric source of the planet
    /// * `jde` - Julian ephemeris day
    /// * `d_psi` - nutation in longitude, zero to skip nutation
    ///
    /// # Errors
    ///
    /// [`crate::EphemerisError::DomainError`] if the planet sits at an
    /// ecliptic pole, where aberration is undefined.
    pub fn apparent_position(
        &self,
        body: &HeliocentricSource,
        jde: f64,
        d_psi: Angle,
    ) -> Result<GeocentricPosition> {
        let earth = self.earth.position(jde).to_cartesian();

        let first = body.position(jde).to_cartesian() - earth;
        let tau = first.magnitude() * LIGHT_TIME_DAYS_PER_AU;
        log::trace!("light-time {} d at distance {} AU", tau, first.magnitude());

        let geocentric: Cartesian3 = body.position(jde - tau).to_cartesian() - earth;
        let (lon, lat, distance) = geocentric.to_spherical();
        let geometric = Ecliptic::new(lon, lat);

        let (d_lon, d_lat) = ecliptic_aberration(&geometric, jde)?;
        let aberrated = Ecliptic::new(geometric.lon + d_lon, geometric.lat + d_lat);
        let fk5 = to_fk5(&aberrated, jde)?;

        Ok(GeocentricPosition::new(
            (fk5.lon + d_psi).normalize(),
            fk5.lat,
            distance,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutationlib::nutation;
    use crate::planetlib::kepler;
    use crate::planetlib::{Body, EmbeddedSeries, SeriesProvider};
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn assembler() -> GeocentricAssembler {
        let earth = EmbeddedSeries.series(Body::Earth).unwrap();
        GeocentricAssembler::new(HeliocentricSource::Series(earth))
    }

    #[test]
    fn test_venus_1992_december_20() {
        // Meeus example 32.a
        let jde = 2448976.5;
        let venus = HeliocentricSource::Series(EmbeddedSeries.series(Body::Venus).unwrap());
        let (d_psi, _) = nutation(jde);
        let pos = assembler().apparent_position(&venus, jde, d_psi).unwrap();

        let lon = Angle::from_sexagesimal(true, 313, 4, 52.838);
        let lat = Angle::from_sexagesimal(false, 2, 5, 5.36);
        assert_abs_diff_eq!(pos.lon.degrees(), lon.degrees(), epsilon = 0.001);
        assert_abs_diff_eq!(pos.lat.degrees(), lat.degrees(), epsilon = 0.001);
        assert_abs_diff_eq!(pos.distance, 0.910948, epsilon = 0.001);
    }

    #[test]
    fn test_nutation_is_added_last() {
        let jde = 2448976.5;
        let venus = HeliocentricSource::Series(EmbeddedSeries.series(Body::Venus).unwrap());
        let plain = assembler().apparent_position(&venus, jde, Angle::ZERO).unwrap();
        let shifted = assembler()
            .apparent_position(&venus, jde, Angle::from_arcseconds(10.0))
            .unwrap();
        assert_abs_diff_eq!((shifted.lon - plain.lon).arcseconds(), 10.0, epsilon = 1e-6);
        assert_eq!(shifted.lat, plain.lat);
        assert_eq!(shifted.distance, plain.distance);
    }

    #[test]
    fn test_keplerian_source_uses_same_pipeline() {
        let jde = 2448976.5;
        let series = HeliocentricSource::Series(EmbeddedSeries.series(Body::Venus).unwrap());
        let elements = HeliocentricSource::Keplerian(kepler::VENUS);
        assert_eq!(elements.kind(), "keplerian");

        let a = assembler().apparent_position(&series, jde, Angle::ZERO).unwrap();
        let b = assembler().apparent_position(&elements, jde, Angle::ZERO).unwrap();
        assert!((a.lon - b.lon).normalize_signed().degrees().abs() < 0.1);
        assert!((a.distance - b.distance).abs() < 1e-3);
    }

    #[test]
    fn test_outer_planet_longitude_in_range() {
        let assembler = assembler();
        let saturn = HeliocentricSource::Series(EmbeddedSeries.series(Body::Saturn).unwrap());
        for k in 0..12 {
            let jde = 2459599.349056 + 30.0 * k as f64;
            let pos = assembler.apparent_position(&saturn, jde, Angle::ZERO).unwrap();
            assert!((0.0..std::f64::consts::TAU).contains(&pos.lon.radians()));

            // Earth-Sun-Saturn triangle, with slack for the light-time shift
            let r = saturn.position(jde).r;
            let earth_r = assembler.earth().position(jde).r;
            assert!(pos.distance > r - earth_r - 1e-3, "{} at {}", pos.distance, jde);
            assert!(pos.distance < r + earth_r + 1e-3, "{} at {}", pos.distance, jde);
        }
    }

    #[test]
    fn test_saturn_near_opposition_2022() {
        // Opposition on 2022 August 14 brings Saturn inside 8.9 AU
        let saturn = HeliocentricSource::Series(EmbeddedSeries.series(Body::Saturn).unwrap());
        let pos = assembler().apparent_position(&saturn, 2459809.349056, Angle::ZERO).unwrap();
        assert_abs_diff_eq!(pos.distance, 8.861, epsilon = 0.005);
    }

    #[rstest]
    #[case(Body::Saturn, -0.8335)]
    #[case(Body::Jupiter, -0.9785)]
    #[case(Body::Mars, -0.3432)]
    fn test_geocentric_latitude_2022_january_19(#[case] body: Body, #[case] expected: f64) {
        // Reference latitudes from the JPL mean elements of the planet and the
        // Earth-Moon barycentre, good to a few hundredths of a degree
        let jde = 2459599.349056;
        let planet = HeliocentricSource::Series(EmbeddedSeries.series(body).unwrap());
        let pos = assembler().apparent_position(&planet, jde, Angle::ZERO).unwrap();
        assert_abs_diff_eq!(pos.lat.degrees(), expected, epsilon = 0.01);
    }
}
