//! Ephemeris configuration
//!
//! Everything an [`crate::Ephemeris`] can be told to do differently lives
//! here, loadable from JSON. Missing fields take their defaults, so `{}` is
//! a valid configuration.
//!
//! ```json
//! {
//!   "apply_nutation": true,
//!   "sources": { "mercury": "keplerian", "venus": "series" },
//!   "ellipsoid": { "equatorial_radius_km": 6378.14, "inverse_flattening": 298.257 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::constants::{EARTH_INVERSE_FLATTENING, EARTH_RADIUS_KM};
use crate::earthlib::{Ellipsoid, IAU1976};
use crate::planetlib::{Body, OrbitalElements};
use crate::{EphemerisError, Result};

/// Which heliocentric model to use for a planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Periodic series from the data provider
    Series,
    /// Mean orbital elements
    Keplerian,
}

/// Reference ellipsoid for the observer's parallax constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipsoidConfig {
    pub equatorial_radius_km: f64,
    pub inverse_flattening: f64,
}

impl Default for EllipsoidConfig {
    fn default() -> Self {
        EllipsoidConfig {
            equatorial_radius_km: EARTH_RADIUS_KM,
            inverse_flattening: EARTH_INVERSE_FLATTENING,
        }
    }
}

impl EllipsoidConfig {
    pub fn to_ellipsoid(&self) -> Ellipsoid {
        if *self == EllipsoidConfig::default() {
            IAU1976
        } else {
            Ellipsoid::new("custom", self.equatorial_radius_km, self.inverse_flattening)
        }
    }
}

/// Configuration for an [`crate::Ephemeris`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisConfig {
    /// Apply nutation in longitude and obliquity; off trades a few
    /// arcseconds for speed
    pub apply_nutation: bool,
    /// Heliocentric model per planet
    pub sources: BTreeMap<Body, SourceKind>,
    pub ellipsoid: EllipsoidConfig,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        let mut sources = BTreeMap::new();
        sources.insert(Body::Mercury, SourceKind::Keplerian);
        sources.insert(Body::Venus, SourceKind::Series);
        sources.insert(Body::Mars, SourceKind::Series);
        sources.insert(Body::Jupiter, SourceKind::Series);
        sources.insert(Body::Saturn, SourceKind::Series);
        EphemerisConfig {
            apply_nutation: true,
            sources,
            ellipsoid: EllipsoidConfig::default(),
        }
    }
}

impl EphemerisConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EphemerisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("reading ephemeris configuration from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Use `kind` for `body`
    pub fn with_source(mut self, body: Body, kind: SourceKind) -> Self {
        self.sources.insert(body, kind);
        self
    }

    /// Heliocentric model configured for a body, if any
    pub fn source(&self, body: Body) -> Option<SourceKind> {
        self.sources.get(&body).copied()
    }

    /// Check the configuration for values no computation can use
    ///
    /// # Errors
    ///
    /// [`EphemerisError::Config`] for a non-positive ellipsoid parameter, a
    /// source entry for the Sun, Moon or Earth, or a Keplerian source for a
    /// planet without orbital elements.
    pub fn validate(&self) -> Result<()> {
        let e = &self.ellipsoid;
        if !(e.equatorial_radius_km.is_finite() && e.equatorial_radius_km > 0.0) {
            return Err(EphemerisError::Config(format!(
                "equatorial radius must be positive, got {}",
                e.equatorial_radius_km
            )));
        }
        if !(e.inverse_flattening.is_finite() && e.inverse_flattening > 1.0) {
            return Err(EphemerisError::Config(format!(
                "inverse flattening must be greater than 1, got {}",
                e.inverse_flattening
            )));
        }
        for (&body, &kind) in &self.sources {
            if !body.is_planet() || body == Body::Earth {
                return Err(EphemerisError::Config(format!(
                    "{} cannot have a heliocentric source",
                    body
                )));
            }
            if kind == SourceKind::Keplerian && OrbitalElements::for_body(body).is_none() {
                return Err(EphemerisError::Config(format!(
                    "no orbital elements for {}",
                    body
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EphemerisConfig::default();
        assert!(config.apply_nutation);
        assert_eq!(config.source(Body::Mercury), Some(SourceKind::Keplerian));
        assert_eq!(config.source(Body::Venus), Some(SourceKind::Series));
        assert_eq!(config.source(Body::Saturn), Some(SourceKind::Series));
        assert_eq!(config.source(Body::Uranus), None);
        assert_eq!(config.ellipsoid.to_ellipsoid(), IAU1976);
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(EphemerisConfig::from_json_str("{}").unwrap(), EphemerisConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = EphemerisConfig::from_json_str(
            r#"{ "apply_nutation": false, "sources": { "venus": "keplerian" } }"#,
        )
        .unwrap();
        assert!(!config.apply_nutation);
        assert_eq!(config.source(Body::Venus), Some(SourceKind::Keplerian));
        // A sources map replaces the default one entirely
        assert_eq!(config.source(Body::Saturn), None);
    }

    #[test]
    fn test_json_round_trip() {
        let config = EphemerisConfig::default().with_source(Body::Venus, SourceKind::Keplerian);
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"venus\": \"keplerian\""));
        assert_eq!(EphemerisConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values() {
        let bad = [
            r#"{ "ellipsoid": { "equatorial_radius_km": 0.0 } }"#,
            r#"{ "ellipsoid": { "inverse_flattening": -3.0 } }"#,
            r#"{ "sources": { "mars": "keplerian" } }"#,
            r#"{ "sources": { "earth": "series" } }"#,
            r#"{ "sources": { "moon": "series" } }"#,
        ];
        for json in bad {
            let err = EphemerisConfig::from_json_str(json).unwrap_err();
            assert!(matches!(err, EphemerisError::Config(_)), "{}: {:?}", json, err);
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = EphemerisConfig::from_json_str("{ apply_nutation: ").unwrap_err();
        assert!(matches!(err, EphemerisError::Json(_)));
        let err = EphemerisConfig::from_json_str(r#"{ "sources": { "pluto": "series" } }"#).unwrap_err();
        assert!(matches!(err, EphemerisError::Json(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ellipsoid": {{ "equatorial_radius_km": 6378.137, "inverse_flattening": 298.257223563 }} }}"#).unwrap();
        let config = EphemerisConfig::from_file(file.path()).unwrap();
        let ellipsoid = config.ellipsoid.to_ellipsoid();
        assert_eq!(ellipsoid.name, "custom");
        assert_eq!(ellipsoid.equatorial_radius_km, 6378.137);
    }
}
