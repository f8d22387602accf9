//! Meeus-ephem: classical positional astronomy in Rust
//!
//! This crate computes positions of the Sun, Moon, planets and stars with
//! the closed-form series and corrections of Jean Meeus' *Astronomical
//! Algorithms*. Its central operation is the topocentric ecliptic longitude
//! of a body for a calendar date and an observer on the Earth:
//!
//! ```rust
//! use meeus_ephem::{Angle, Ephemeris};
//!
//! let ephemeris = Ephemeris::new().unwrap();
//! let saturn = ephemeris
//!     .topocentric_longitude(
//!         2022,
//!         1,
//!         19.849056,
//!         Angle::from_degrees(42.0),
//!         Angle::from_degrees(-71.516667),
//!         56.0832,
//!         "saturn",
//!     )
//!     .unwrap();
//! assert!((saturn.degrees() - 314.0401).abs() < 1.0 / 60.0);
//! ```
//!
//! The pipeline is: calendar date to Julian day, nutation and obliquity,
//! heliocentric positions (VSOP-style series or Keplerian elements), a
//! single light-time pass, aberration, FK5 correction, nutation in
//! longitude, and finally the parallax correction for the observer.

use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod almanac;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod earthlib;
pub mod ephemeris;
pub mod framelib;
pub mod moonlib;
pub mod numeric;
pub mod nutationlib;
pub mod planetlib;
pub mod positions;
pub mod precessionlib;
pub mod solarlib;
pub mod starlib;
pub mod time;
pub mod toposlib;

// Re-export commonly used types
pub use config::EphemerisConfig;
pub use coordinates::angle::Angle;
pub use coordinates::{Ecliptic, Equatorial};
pub use ephemeris::Ephemeris;
pub use planetlib::Body;
pub use time::CalendarTuple;
pub use toposlib::ObserverLocation;

/// Main error type for the ephemeris library
#[derive(Debug, Error)]
pub enum EphemerisError {
    /// An unknown body, or a body the requested operation cannot target
    #[error("Invalid body identifier: {0}")]
    InvalidBodyIdentifier(String),

    /// The data provider holds no series for the body
    #[error("Data unavailable for {body}: {reason}")]
    DataUnavailable {
        /// Name of the body whose data was requested
        body: String,
        /// Why the provider could not serve it
        reason: String,
    },

    /// Degenerate numeric input, such as a zero divisor or a pole singularity
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ephemeris operations
pub type Result<T> = std::result::Result<T, EphemerisError>;

/// Entry point for building an [`Ephemeris`] from configuration
pub struct Loader {
    config_path: Option<PathBuf>,
}

impl Loader {
    /// Create a new loader using the default configuration
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Read configuration from a JSON file instead of the defaults
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load the configuration this loader points at
    pub fn config(&self) -> Result<EphemerisConfig> {
        match &self.config_path {
            Some(path) => EphemerisConfig::from_file(path),
            None => Ok(EphemerisConfig::default()),
        }
    }

    /// Build an ephemeris backed by the embedded series tables
    pub fn load_ephemeris(&self) -> Result<Ephemeris> {
        let config = self.config()?;
        log::debug!("loading ephemeris from {:?}", self.config_path);
        Ephemeris::with_config(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_loader() {
        let ephemeris = Loader::new().load_ephemeris().unwrap();
        assert!(ephemeris.config().apply_nutation);
    }

    #[test]
    fn test_loader_reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "apply_nutation": false }}"#).unwrap();

        let ephemeris = Loader::new()
            .with_config_file(file.path())
            .load_ephemeris()
            .unwrap();
        assert!(!ephemeris.config().apply_nutation);
    }

    #[test]
    fn test_loader_missing_file_is_io_error() {
        let err = Loader::new()
            .with_config_file("/nonexistent/ephemeris.json")
            .load_ephemeris()
            .unwrap_err();
        assert!(matches!(err, EphemerisError::Io(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = EphemerisError::DataUnavailable {
            body: "Uranus".to_string(),
            reason: "no embedded series".to_string(),
        };
        assert_eq!(err.to_string(), "Data unavailable for Uranus: no embedded series");
        assert_eq!(
            EphemerisError::InvalidBodyIdentifier("pluto".into()).to_string(),
            "Invalid body identifier: pluto"
        );
    }
}
